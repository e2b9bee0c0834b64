//! Brave Search CLI Library
//!
//! Command-line client for the Brave Web Search API: resolves flags into
//! [`SearchOptions`], builds the query parameters, performs one GET and
//! renders the JSON response verbatim or as a compact table.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use brave_search::{app, config::Config, types::SearchOptions};
//!
//! let opts = SearchOptions::new("greek restaurants in san francisco");
//! app::run(&opts, &api_key, &Config::default(), &mut std::io::stdout()).await?;
//! ```
//!
//! # Configuration
//! Set `BRAVE_SEARCH_API_KEY`. Optional overrides live in
//! `~/.config/brave-search/config.toml` or `BRAVE_SEARCH_ENDPOINT`.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod render;
pub mod types;

pub use client::BraveClient;
pub use error::{SearchError, SearchResult};
pub use params::{build_params, RequestParameters};
pub use render::{extract_web_results, render};
pub use types::{Freshness, OutputMode, SafeSearch, SearchOptions};
