//! Mock GitHub API built on wiremock.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use commit_widget::{GithubClient, WidgetConfig};

pub const OWNER: &str = "octo";
pub const REPO: &str = "hello";
pub const BRANCH: &str = "main";

/// Path of the branch endpoint for the test repository
pub const BRANCH_PATH: &str = "/repos/octo/hello/branches/main";

/// A branch-info body shaped like GitHub's, with extra fields the parser ignores
pub fn branch_body(message: &str, author: &str, date: &str) -> Value {
    json!({
        "name": BRANCH,
        "protected": false,
        "commit": {
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "commit": {
                "message": message,
                "author": {"name": author, "email": "dev@example.com", "date": date},
                "committer": {"name": author, "email": "dev@example.com", "date": date}
            },
            "parents": []
        }
    })
}

/// A running mock server plus config pointing at it.
pub struct GithubMock {
    pub server: MockServer,
}

impl GithubMock {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> WidgetConfig {
        WidgetConfig::new(OWNER, REPO, BRANCH).with_api_base(self.server.uri())
    }

    pub fn client(&self) -> GithubClient {
        GithubClient::new(&self.config()).expect("client should build")
    }

    /// Respond to the branch endpoint with `status` and a JSON body, exactly `times` times
    pub async fn respond_json(&self, status: u16, body: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(BRANCH_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Respond to the branch endpoint with a raw string body
    pub async fn respond_raw(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(BRANCH_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}
