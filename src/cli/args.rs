//! CLI argument definitions using clap
//!
//! Commands:
//! - subscriptions-api serve [--config <path>] [--port <port>]
//! - subscriptions-api query [--config <path>]
//! - subscriptions-api filtered [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// subscriptions-api - HTTP JSON API over in-memory subscription records
#[derive(Parser, Debug)]
#[command(name = "subscriptions-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Read one query description from stdin, evaluate it and exit
    Query {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the filtered subscriptions and exit
    Filtered {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
