//! Core option types for a single search invocation
//!
//! [`SearchOptions`] is built once by the argument resolver and flows
//! unchanged through request building, transport and rendering.

use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// Default number of results per page
pub const DEFAULT_COUNT: i64 = 10;
/// Default country code
pub const DEFAULT_COUNTRY: &str = "us";
/// Default search language
pub const DEFAULT_LANG: &str = "en";
/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 15.0;

/// API-side content filtering level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeSearch {
    #[default]
    Off,
    Moderate,
    Strict,
}

impl SafeSearch {
    /// Token sent to the API for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            SafeSearch::Off => "off",
            SafeSearch::Moderate => "moderate",
            SafeSearch::Strict => "strict",
        }
    }
}

impl TryFrom<u8> for SafeSearch {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(SafeSearch::Off),
            1 => Ok(SafeSearch::Moderate),
            2 => Ok(SafeSearch::Strict),
            other => Err(format!("invalid safesearch level {other} (expected 0, 1 or 2)")),
        }
    }
}

/// API-side recency filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Freshness {
    /// Past day
    #[value(name = "pd")]
    PastDay,
    /// Past week
    #[value(name = "pw")]
    PastWeek,
    /// Past month
    #[value(name = "pm")]
    PastMonth,
    /// Past year
    #[value(name = "py")]
    PastYear,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::PastDay => "pd",
            Freshness::PastWeek => "pw",
            Freshness::PastMonth => "pm",
            Freshness::PastYear => "py",
        }
    }
}

/// Requested output shape
///
/// The two switches are independent. JSON is printed unless the table was
/// asked for on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputMode {
    pub json: bool,
    pub table: bool,
}

impl OutputMode {
    pub fn prints_json(&self) -> bool {
        self.json || !self.table
    }

    pub fn prints_table(&self) -> bool {
        self.table
    }

    /// Separator between the JSON block and the table
    pub fn prints_separator(&self) -> bool {
        self.prints_json() && self.prints_table()
    }
}

/// Fully resolved options for one search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Search query text (non-empty)
    pub query: String,
    /// Number of results per page
    pub count: i64,
    /// Page offset
    pub offset: i64,
    /// Country code
    pub country: String,
    /// Search language
    pub lang: String,
    pub safesearch: SafeSearch,
    pub freshness: Option<Freshness>,
    pub spellcheck: bool,
    pub extra_snippets: bool,
    /// Ask the API for a summarizer key when available
    pub summary: bool,
    pub output: OutputMode,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Where to persist the raw response, if anywhere
    pub save: Option<PathBuf>,
}

impl SearchOptions {
    /// Options for `query` with every other field at its default
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: DEFAULT_COUNT,
            offset: 0,
            country: DEFAULT_COUNTRY.to_string(),
            lang: DEFAULT_LANG.to_string(),
            safesearch: SafeSearch::default(),
            freshness: None,
            spellcheck: true,
            extra_snippets: false,
            summary: false,
            output: OutputMode::default(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            save: None,
        }
    }
}
