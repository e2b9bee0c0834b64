//! Single-invocation pipeline
//!
//! options -> request parameters -> one GET -> optional save -> render.

use std::io::Write;

use crate::client::BraveClient;
use crate::config::Config;
use crate::error::{SearchError, SearchResult, API_KEY_ENV};
use crate::params::build_params;
use crate::render::{render, save_response};
use crate::types::SearchOptions;

/// Read the subscription token from the environment
///
/// An empty value is treated the same as an unset one.
pub fn api_key_from_env() -> SearchResult<String> {
    api_key_from(std::env::var(API_KEY_ENV).ok())
}

fn api_key_from(value: Option<String>) -> SearchResult<String> {
    value
        .filter(|key| !key.is_empty())
        .ok_or(SearchError::MissingApiKey)
}

/// Run one search and write the rendered response to `out`
///
/// The raw response is saved before anything is rendered, so a failed
/// save leaves stdout untouched.
pub async fn run<W: Write>(
    opts: &SearchOptions,
    api_key: &str,
    config: &Config,
    out: &mut W,
) -> SearchResult<()> {
    let client = BraveClient::new(&config.api)?;
    let params = build_params(opts);

    tracing::info!(query = %opts.query, endpoint = client.endpoint(), "Searching");
    let response = client.search(api_key, &params, opts.timeout).await?;

    if let Some(path) = &opts.save {
        save_response(path, &response)?;
    }

    render(&response, opts.output, out)?;
    out.flush()?;
    Ok(())
}
