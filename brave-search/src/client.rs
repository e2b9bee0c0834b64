//! Brave Web Search HTTP client
//!
//! Issues exactly one GET per search. No retries: any failure is reported
//! to the caller as a [`SearchError`].
//! See: https://api-dashboard.search.brave.com/app/documentation/web-search

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::config::ApiConfig;
use crate::error::{SearchError, SearchResult};
use crate::params::RequestParameters;

/// Authentication header carrying the subscription token
pub const TOKEN_HEADER: &str = "X-Subscription-Token";

/// Web search API client
#[derive(Clone)]
pub struct BraveClient {
    client: Client,
    endpoint: String,
}

impl BraveClient {
    pub fn new(config: &ApiConfig) -> SearchResult<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| SearchError::Request(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one search and return the decoded JSON body
    ///
    /// A non-2xx status becomes [`SearchError::Http`] carrying the status
    /// line and body text. Connection, timeout and decode failures become
    /// [`SearchError::Request`].
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn search(
        &self,
        api_key: &str,
        params: &RequestParameters,
        timeout: Duration,
    ) -> SearchResult<Value> {
        let headers = auth_headers(api_key)?;
        debug!(params = ?params.names(), timeout_ms = timeout.as_millis() as u64, "sending search request");

        let started = Instant::now();
        let response = self
            .client
            .get(&self.endpoint)
            .headers(headers)
            .query(params.as_slice())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, elapsed_ms = started.elapsed().as_millis() as u64, "search request failed");
                SearchError::from(e)
            })?;

        let status = response.status();
        info!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search response received"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Http {
                status: status.to_string(),
                body,
            });
        }

        let value: Value = response.json().await?;
        Ok(value)
    }
}

fn auth_headers(api_key: &str) -> SearchResult<HeaderMap> {
    let mut token = HeaderValue::from_str(api_key).map_err(|_| {
        SearchError::Request(format!("{TOKEN_HEADER} value contains invalid characters"))
    })?;
    token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("x-subscription-token"), token);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}
