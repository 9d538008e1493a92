//! subscriptions-api CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and prints errors to
//! stderr. Exits non-zero on failure. All logic lives in `cli`.

use subscriptions_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
