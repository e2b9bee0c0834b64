//! Brave Search CLI
//!
//! Usage:
//!   brave-search --q "greek restaurants in san francisco" --count 10 --country us --lang en --table
//!   brave-search --q "latest LLM papers" --count 5 --json
//!
//! Exit codes: 0 success, 1 missing credential or local failure,
//! 2 HTTP error response (or usage error), 3 any other request failure.

use clap::Parser;
use std::process::ExitCode;

use brave_search::app;
use brave_search::cli::Cli;
use brave_search::config::Config;
use brave_search::error::SearchError;

fn report(err: &SearchError) -> ExitCode {
    match err {
        SearchError::Http { .. } | SearchError::Request(_) => eprintln!("{err}"),
        _ => eprintln!("Error: {err}"),
    }
    ExitCode::from(err.exit_code() as u8)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // The credential is checked before any argument validation.
    let api_key = match app::api_key_from_env() {
        Ok(key) => key,
        Err(e) => return report(&e),
    };

    let cli = Cli::parse();
    if let Err(e) = cli_common::init_tracing("brave_search", cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let opts = match cli.into_options() {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::from(2);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => return report(&SearchError::Config(format!("{e:#}"))),
    };

    let mut stdout = std::io::stdout().lock();
    match app::run(&opts, &api_key, &config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "search failed");
            report(&e)
        }
    }
}
