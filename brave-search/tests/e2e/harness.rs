//! Shared helpers for E2E tests

use serde_json::Value;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/res/v1/web/search";

/// Captured result of one binary run
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Command for the brave-search binary with a clean environment
///
/// Config lookup is pointed at a missing file so a developer's own
/// config never leaks into the tests.
pub fn command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_brave-search"));
    cmd.env_remove("BRAVE_SEARCH_API_KEY")
        .env_remove("BRAVE_SEARCH_ENDPOINT")
        .env_remove("RUST_LOG")
        .env("BRAVE_SEARCH_CONFIG_PATH", "/nonexistent/brave-search/config.toml");
    cmd
}

/// Run the binary against `endpoint` with a valid-looking API key
pub async fn run_against(endpoint: &str, args: &[&str]) -> RunOutput {
    let mut cmd = command();
    cmd.env("BRAVE_SEARCH_API_KEY", "test-key")
        .env("BRAVE_SEARCH_ENDPOINT", endpoint)
        .args(args);
    run(cmd).await
}

pub async fn run(mut cmd: Command) -> RunOutput {
    let output = cmd.output().await.expect("Failed to run brave-search");

    let captured = RunOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };
    if !captured.stderr.is_empty() {
        println!("stderr:\n{}", captured.stderr);
    }
    captured
}

/// Full endpoint URL on a mock server
pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), SEARCH_PATH)
}

/// Mock API answering every search with `status` and a JSON body
pub async fn mock_api(status: u16, body: &Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

/// Mock API that fails the test if it is ever called
pub async fn untouched_api() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .named("no request expected")
        .mount(&server)
        .await;
    server
}
