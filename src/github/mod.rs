//! GitHub REST access layer
//!
//! Fetches branch info from the GitHub API and parses the latest commit out of it.

mod client;
pub mod constants;
/// Parser module (public for integration testing)
pub mod parser;

pub use client::{CommitFetcher, GithubClient};
pub use parser::parse_commit;

use thiserror::Error;

/// Errors that can occur while fetching the latest commit
///
/// None of these are fatal: the timeline provider turns every one of them
/// into a failure entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("GitHub returned HTTP {status}")]
    Status { status: u16 },

    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}

/// Coarse classification of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Status,
    MalformedResponse,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Transport(_) => FetchErrorKind::Transport,
            Self::Status { .. } => FetchErrorKind::Status,
            Self::MalformedResponse(_) => FetchErrorKind::MalformedResponse,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Self::Status {
                status: status.as_u16(),
            };
        }
        if e.is_decode() {
            return Self::MalformedResponse(e.to_string());
        }
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse(e.to_string())
    }
}
