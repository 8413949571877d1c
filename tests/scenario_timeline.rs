//! End-to-end timeline scenarios: provider + real HTTP client + mock server.

#[path = "common/mod.rs"]
mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{GithubMock, branch_body};
use commit_widget::{Commit, GithubClient, RefreshPolicy, TimelineProvider, WidgetConfig};
use serde_json::json;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 8, 30, 0).unwrap()
}

#[tokio::test]
async fn test_timeline_happy_path() {
    let mock = GithubMock::start().await;
    mock.respond_json(200, branch_body("Fix bug", "alice", "2024-01-01T00:00:00Z"), 1)
        .await;
    let provider = TimelineProvider::new(mock.client());

    let timeline = provider.timeline(now()).await;

    assert_eq!(timeline.entries.len(), 1);
    let entry = &timeline.entries[0];
    assert_eq!(entry.commit, Commit::new("Fix bug", "alice", "2024-01-01T00:00:00Z"));
    assert_eq!(entry.observed_at, now());
    assert_eq!(entry.relevance.score(), 10);
    assert_eq!(timeline.policy, RefreshPolicy::After(now() + Duration::minutes(5)));
}

#[tokio::test]
async fn test_timeline_transport_error() {
    let config = WidgetConfig::new("octo", "hello", "main").with_api_base("http://127.0.0.1:1");
    let provider = TimelineProvider::new(GithubClient::new(&config).unwrap());

    let timeline = provider.timeline(now()).await;

    assert_eq!(timeline.entries.len(), 1);
    let entry = &timeline.entries[0];
    assert_eq!(entry.commit.message, "Failed to load commits");
    assert_eq!(entry.commit.author, "");
    assert_eq!(entry.commit.date, "");
    assert_eq!(timeline.policy, RefreshPolicy::After(now() + Duration::minutes(5)));
}

#[tokio::test]
async fn test_timeline_schema_drift_does_not_crash() {
    let mock = GithubMock::start().await;
    mock.respond_json(200, json!({"commit": {"sha": "abc"}}), 1).await;
    let provider = TimelineProvider::new(mock.client());

    let timeline = provider.timeline(now()).await;

    assert_eq!(timeline.entries.len(), 1);
    assert_eq!(timeline.entries[0].commit, Commit::failed());
    assert!(timeline.entries[0].is_failure());
}

#[tokio::test]
async fn test_placeholder_and_snapshot_skip_network() {
    let mock = GithubMock::start().await;
    // Any request would violate this expectation when the server drops
    mock.respond_json(200, branch_body("x", "y", "z"), 0).await;
    let provider = TimelineProvider::new(mock.client());

    let placeholder = provider.placeholder(now());
    let snapshot = provider.snapshot(now());

    assert_eq!(placeholder.commit.message, "Loading...");
    assert_eq!(snapshot.commit, Commit::sample());
}
