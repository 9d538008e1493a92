//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load the store and start the HTTP server
//! - query: One-shot query read from stdin
//! - filtered: One-shot filtered-subscriptions listing

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{boot, filtered, query, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_request_from, write_error, write_response};
