//! CLI Common - Shared utilities for command-line tools
//!
//! This crate provides functionality shared by the workspace binaries:
//!
//! - **Initialization**: [`init_tracing`] for stderr logging with verbosity control
//!
//! # Example
//!
//! ```rust,ignore
//! // In main.rs, before any other output
//! cli_common::init_tracing("brave_search", cli.verbose)?;
//! ```

pub mod init;

// Re-export commonly used items at crate root
pub use init::{init_tracing, level_for_verbosity};
