//! Branch response parser
//!
//! Only `commit.commit.message`, `commit.commit.author.name` and
//! `commit.commit.author.date` are read; everything else in the body is ignored.

use serde::Deserialize;

use super::FetchError;
use crate::model::Commit;

#[derive(Deserialize)]
struct BranchResponse {
    commit: BranchCommit,
}

#[derive(Deserialize)]
struct BranchCommit {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: String,
    author: CommitAuthor,
}

#[derive(Deserialize)]
struct CommitAuthor {
    name: String,
    date: String,
}

/// Parse a `GET /repos/{owner}/{repo}/branches/{branch}` body into a [`Commit`]
///
/// Any missing field or wrong type is reported as
/// [`FetchError::MalformedResponse`].
pub fn parse_commit(body: &str) -> Result<Commit, FetchError> {
    let response: BranchResponse = serde_json::from_str(body)?;
    let detail = response.commit.commit;
    Ok(Commit {
        message: detail.message,
        author: detail.author.name,
        date: detail.author.date,
    })
}
