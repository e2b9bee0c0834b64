//! Logging initialization
//!
//! Provides standardized tracing setup for the workspace binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map a `-v` count to a log level for the calling crate.
///
/// Zero keeps the tool quiet (`warn`), so normal stdout output is never
/// interleaved with diagnostics.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing/logging for a CLI binary
///
/// Sets up logging to stderr (stdout is reserved for command output) with:
/// - Formatted output without ANSI colors
/// - Environment-based filtering via RUST_LOG
/// - A crate level derived from the `-v` count
///
/// Set `LOG_FORMAT=json` for structured JSON output.
///
/// # Arguments
///
/// * `crate_name` - The name of the calling crate (e.g., "brave_search")
/// * `verbose` - Number of `-v` flags passed on the command line
pub fn init_tracing(crate_name: &str, verbose: u8) -> anyhow::Result<()> {
    let directive = format!("{}={}", crate_name, level_for_verbosity(verbose));
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
