//! Commit data model

/// Message shown while no real data has arrived yet
pub const LOADING_MESSAGE: &str = "Loading...";

/// Message shown when a refresh cycle failed to fetch the commit
pub const FAILED_MESSAGE: &str = "Failed to load commits";

/// The latest commit on the watched branch
///
/// `date` is the ISO 8601 author date exactly as the API returned it.
/// It is displayed verbatim and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commit {
    /// Full commit message
    pub message: String,

    /// Author name
    pub author: String,

    /// Author date (ISO 8601 text)
    pub date: String,
}

impl Commit {
    /// Create a new commit
    pub fn new(
        message: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            author: author.into(),
            date: date.into(),
        }
    }

    /// Sentinel shown before the first refresh completes
    pub fn loading() -> Self {
        Self::new(LOADING_MESSAGE, "", "")
    }

    /// Sentinel shown when a refresh fails
    pub fn failed() -> Self {
        Self::new(FAILED_MESSAGE, "", "")
    }

    /// Fixed example used for previews
    pub fn sample() -> Self {
        Self::new("- First Commit", "moon-john", "2020-12-10")
    }

    /// True for loading/failure sentinels (no author and no date)
    pub fn is_sentinel(&self) -> bool {
        self.author.is_empty() && self.date.is_empty()
    }

    /// First line of the message, for compact layouts
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// "by {author} at {date}" byline, empty for sentinels
    pub fn byline(&self) -> String {
        if self.is_sentinel() {
            String::new()
        } else {
            format!("by {} at {}", self.author, self.date)
        }
    }
}
