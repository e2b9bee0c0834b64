//! Error types for a search invocation
//!
//! Every failure is terminal. Each variant maps to the process exit code
//! reported by the binary.

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the subscription token
pub const API_KEY_ENV: &str = "BRAVE_SEARCH_API_KEY";

/// Errors that can end a search invocation
#[derive(Error, Debug)]
pub enum SearchError {
    /// The subscription token is not set (or empty)
    #[error("BRAVE_SEARCH_API_KEY is not set")]
    MissingApiKey,

    /// Configuration file or override could not be used
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The API answered with an error status
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// Status line, e.g. `401 Unauthorized`
        status: String,
        /// Response body text (best effort)
        body: String,
    },

    /// Transport, timeout or decoding failure
    #[error("Request failed: {0}")]
    Request(String),

    /// Writing the `--save` file failed
    #[error("failed to save response to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl SearchError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SearchError::MissingApiKey
            | SearchError::Config(_)
            | SearchError::Save { .. }
            | SearchError::Output(_) => 1,
            SearchError::Http { .. } => 2,
            SearchError::Request(_) => 3,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Request(e.to_string())
    }
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;
