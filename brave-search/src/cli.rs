//! CLI argument definitions
//!
//! Flag spellings match the public interface literally (`--q`,
//! `--extra_snippets`), so every long name is spelled out.

use clap::builder::NonEmptyStringValueParser;
use clap::{value_parser, ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::types::{
    Freshness, OutputMode, SafeSearch, SearchOptions, DEFAULT_COUNT, DEFAULT_COUNTRY,
    DEFAULT_LANG, DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser, Debug)]
#[command(name = "brave-search", version)]
#[command(about = "CLI for Brave Web Search API")]
#[command(after_help = "Env:\n  BRAVE_SEARCH_API_KEY must be set")]
pub struct Cli {
    /// Search query
    #[arg(long = "q", value_name = "QUERY", value_parser = NonEmptyStringValueParser::new())]
    pub query: String,

    /// Number of results per page
    #[arg(long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    pub count: i64,

    /// Page offset
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Country code
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Search language
    #[arg(long, default_value = DEFAULT_LANG)]
    pub lang: String,

    /// SafeSearch level: 0 off, 1 moderate, 2 strict
    #[arg(long, default_value_t = 0, value_parser = value_parser!(u8).range(0..=2))]
    pub safesearch: u8,

    /// Limit results to past day, week, month or year
    #[arg(long, value_enum)]
    pub freshness: Option<Freshness>,

    /// Enable spellcheck: 1 yes, 0 no
    #[arg(long, default_value_t = 1, value_parser = value_parser!(u8).range(0..=1))]
    pub spellcheck: u8,

    /// Return extra snippets: 1 yes, 0 no
    #[arg(long = "extra_snippets", default_value_t = 0, value_parser = value_parser!(u8).range(0..=1))]
    pub extra_snippets: u8,

    /// Ask the API to return a summarizer key when available
    #[arg(long, default_value_t = 0, value_parser = value_parser!(u8).range(0..=1))]
    pub summary: u8,

    /// Print the full JSON response
    #[arg(long)]
    pub json: bool,

    /// Print a compact table of results
    #[arg(long)]
    pub table: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = parse_timeout)]
    pub timeout: f64,

    /// Optional path to save the raw JSON response
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_timeout(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got {raw}"));
    }
    Ok(secs)
}

impl Cli {
    /// Resolve parsed flags into [`SearchOptions`]
    pub fn into_options(self) -> Result<SearchOptions, String> {
        Ok(SearchOptions {
            query: self.query,
            count: self.count,
            offset: self.offset,
            country: self.country,
            lang: self.lang,
            safesearch: SafeSearch::try_from(self.safesearch)?,
            freshness: self.freshness,
            spellcheck: self.spellcheck == 1,
            extra_snippets: self.extra_snippets == 1,
            summary: self.summary == 1,
            output: OutputMode {
                json: self.json,
                table: self.table,
            },
            timeout: Duration::from_secs_f64(self.timeout),
            save: self.save,
        })
    }
}
