//! E2E test: malformed arguments never reach the API

use super::harness::{endpoint, run_against, untouched_api};

#[tokio::test]
async fn test_missing_query_is_usage_error() {
    let server = untouched_api().await;
    let out = run_against(&endpoint(&server), &["--count", "5"]).await;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("--q"));
}

#[tokio::test]
async fn test_invalid_enumerations_are_usage_errors() {
    let server = untouched_api().await;
    let url = endpoint(&server);

    for args in [
        ["--q", "x", "--safesearch", "3"],
        ["--q", "x", "--freshness", "pz"],
        ["--q", "x", "--spellcheck", "2"],
        ["--q", "x", "--extra_snippets", "5"],
        ["--q", "x", "--summary", "true"],
        ["--q", "x", "--timeout", "fast"],
    ] {
        let out = run_against(&url, &args).await;
        assert_eq!(out.code, Some(2), "args {:?} should be rejected", args);
        assert!(out.stdout.is_empty());
    }
}
