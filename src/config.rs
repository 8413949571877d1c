//! Widget configuration
//!
//! Which branch to watch and how often to refresh. Built from CLI arguments
//! in the binary, or directly in tests to point at a mock server.

use chrono::Duration;

use crate::github::constants::{self, defaults};
use crate::model::default_refresh_interval;

/// Configuration for one widget instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// API root, e.g. `https://api.github.com`
    pub api_base: String,
    /// Delay between refresh cycles
    pub refresh_interval: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::new(defaults::OWNER, defaults::REPO, defaults::BRANCH)
    }
}

impl WidgetConfig {
    /// Watch `owner/repo` at `branch` on the public GitHub API
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
            api_base: constants::API_BASE.to_string(),
            refresh_interval: default_refresh_interval(),
        }
    }

    /// Use a different API root (GitHub Enterprise, mock servers)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// `owner/repo`, used as the widget title
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Full branch-info endpoint
    pub fn branch_url(&self) -> String {
        constants::branch_url(&self.api_base, &self.owner, &self.repo, &self.branch)
    }
}
