//! Fixed values for talking to the GitHub REST API

/// Public GitHub API root
pub const API_BASE: &str = "https://api.github.com";

/// Repository watched when nothing else is configured
pub mod defaults {
    pub const OWNER: &str = "juanagustin0504";
    pub const REPO: &str = "CustomWidget";
    pub const BRANCH: &str = "main";
}

/// Request headers
pub mod headers {
    /// GitHub rejects API requests that carry no User-Agent
    pub const USER_AGENT: &str = concat!("commit-widget/", env!("CARGO_PKG_VERSION"));
    pub const ACCEPT: &str = "application/vnd.github+json";
}

/// Build the branch-info endpoint for `owner/repo` at `branch`
pub fn branch_url(api_base: &str, owner: &str, repo: &str, branch: &str) -> String {
    format!(
        "{}/repos/{}/{}/branches/{}",
        api_base.trim_end_matches('/'),
        owner,
        repo,
        branch
    )
}
