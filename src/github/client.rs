//! HTTP client for the branch-info endpoint

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use super::constants::headers;
use super::{FetchError, parse_commit};
use crate::config::WidgetConfig;
use crate::model::Commit;

/// Source of the latest commit
///
/// One call is one attempt: implementations must not retry or cache.
#[async_trait]
pub trait CommitFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Commit, FetchError>;
}

#[async_trait]
impl<T: CommitFetcher + ?Sized> CommitFetcher for Box<T> {
    async fn fetch(&self) -> Result<Commit, FetchError> {
        (**self).fetch().await
    }
}

/// Fetches the latest commit of one branch from the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    url: String,
}

impl GithubClient {
    /// Create a client for the branch described by `config`
    pub fn new(config: &WidgetConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(headers::USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            url: config.branch_url(),
        })
    }

    /// The endpoint this client requests
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CommitFetcher for GithubClient {
    async fn fetch(&self) -> Result<Commit, FetchError> {
        debug!(url = %self.url, "fetching latest commit");

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, headers::ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "branch request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_commit(&body)
    }
}
