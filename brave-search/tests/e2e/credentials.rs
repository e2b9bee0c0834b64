//! E2E test: the API key is checked first

use super::harness::{command, endpoint, run, untouched_api};

#[tokio::test]
async fn test_missing_api_key_exits_1() {
    let server = untouched_api().await;

    let mut cmd = command();
    cmd.env("BRAVE_SEARCH_ENDPOINT", endpoint(&server))
        .args(["--q", "test", "--table"]);
    let out = run(cmd).await;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("BRAVE_SEARCH_API_KEY is not set"));
    assert!(out.stdout.is_empty());
}

#[tokio::test]
async fn test_empty_api_key_exits_1() {
    let mut cmd = command();
    cmd.env("BRAVE_SEARCH_API_KEY", "").args(["--q", "test"]);
    let out = run(cmd).await;

    assert_eq!(out.code, Some(1));
}

#[tokio::test]
async fn test_api_key_checked_before_arguments() {
    // --q is missing and --safesearch is invalid, but the key wins
    let mut cmd = command();
    cmd.args(["--safesearch", "9"]);
    let out = run(cmd).await;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("BRAVE_SEARCH_API_KEY"));
}
