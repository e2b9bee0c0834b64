//! E2E test: HTTP and transport failures map to exit codes

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::harness::{endpoint, mock_api, run_against};

#[tokio::test]
async fn test_unauthorized_exits_2() {
    let server = mock_api(401, &json!({"error": "invalid subscription token"})).await;
    let out = run_against(&endpoint(&server), &["--q", "test", "--table"]).await;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("HTTP error: 401 Unauthorized"));
    assert!(out.stderr.contains("invalid subscription token"));
    assert!(out.stdout.is_empty());
}

#[tokio::test]
async fn test_connection_refused_exits_3() {
    // Reserve a free port, then close it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{port}/res/v1/web/search");

    let out = run_against(&url, &["--q", "test"]).await;

    assert_eq!(out.code, Some(3));
    assert!(out.stderr.contains("Request failed:"));
}

#[tokio::test]
async fn test_timeout_exits_3() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let out = run_against(&endpoint(&server), &["--q", "test", "--timeout", "0.2"]).await;

    assert_eq!(out.code, Some(3));
    assert!(out.stderr.contains("Request failed"));
}

#[tokio::test]
async fn test_invalid_endpoint_config_exits_1() {
    let out = run_against("ftp://example.com/search", &["--q", "test"]).await;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("invalid configuration"));
}
