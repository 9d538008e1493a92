//! CLI command implementations
//!
//! Every command boots the same way: load configuration, then load the record
//! store. Failures during boot are fatal.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::query::{evaluate, QueryDescription};
use crate::store::{RecordStore, StoreLoader};
use crate::subscriptions::filtered_subscriptions;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Query { config } => query(config.as_deref()),
        Command::Filtered { config } => filtered(config.as_deref()),
    }
}

/// Load configuration and the record store.
///
/// Logs `STARTUP_BEGIN`, `CONFIG_LOADED`, `STARTUP_COMPLETE`, or
/// `STARTUP_FAILED` when either step fails.
pub fn boot(config_path: Option<&Path>) -> CliResult<(Config, RecordStore)> {
    log_event(Event::StartupBegin);

    let result = Config::load_optional(config_path).and_then(|config| {
        let port = config.http.port.to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("port", port.as_str())]);

        let store = StoreLoader::load(&config.store_source())?;
        Ok((config, store))
    });

    match &result {
        Ok(_) => log_event(Event::StartupComplete),
        Err(e) => log_event_with_fields(Event::StartupFailed, &[("reason", e.message())]),
    }

    result
}

/// Start the HTTP server
///
/// `port` overrides the configured port.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let (config, store) = boot(config_path)?;

    let mut http_config = config.http;
    if let Some(port) = port {
        http_config.port = port;
    }

    let server = HttpServer::with_config(http_config, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Evaluate one query description read from stdin
///
/// A malformed description is reported as an error response on stdout, not
/// as a process failure.
pub fn query(config_path: Option<&Path>) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;
    let request = read_request()?;

    match run_query(&store, &request) {
        Ok(data) => write_response(data),
        Err((code, message)) => write_error(code, &message),
    }
}

/// Evaluate an untyped query description against the store
fn run_query(store: &RecordStore, request: &Value) -> Result<Value, (&'static str, String)> {
    log_event(Event::QueryReceived);

    let description = QueryDescription::from_value(request).map_err(|e| {
        log_event_with_fields(Event::QueryRejected, &[("reason", e.to_string().as_str())]);
        (e.code(), e.to_string())
    })?;

    let rows = evaluate(store.records(), &description);
    let count = rows.len().to_string();
    log_event_with_fields(Event::QueryExecuted, &[("rows", count.as_str())]);

    serde_json::to_value(&rows).map_err(|e| ("SUBS_CLI_IO_ERROR", e.to_string()))
}

/// Print the filtered subscriptions
pub fn filtered(config_path: Option<&Path>) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;
    let rows = filtered_subscriptions(store.records());
    write_response(serde_json::to_value(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> RecordStore {
        RecordStore::from_value(json!([
            {"contract_reference": 1, "current_status": "processing", "duration": 12},
            {"contract_reference": 2, "current_status": "done", "duration": 24},
            {"contract_reference": 3, "current_status": "processing"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_run_query_ok() {
        let data = run_query(
            &store(),
            &json!({"where": {"current_status": "processing"}, "select": "contract_reference duration"}),
        )
        .unwrap();

        assert_eq!(
            data,
            json!([{"contract_reference": 1, "duration": 12}, {"contract_reference": 3}])
        );
    }

    #[test]
    fn test_run_query_rejects_bad_shape() {
        let (code, message) = run_query(&store(), &json!({"select": 5})).unwrap_err();
        assert_eq!(code, "SUBS_QUERY_INVALID_ARGUMENT");
        assert!(message.contains("select must be a string"));
    }

    #[test]
    fn test_boot_with_defaults_uses_embedded_store() {
        let (config, store) = boot(None).unwrap();
        assert_eq!(config.http.port, 5000);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_boot_fails_on_missing_config() {
        let err = boot(Some(Path::new("/nonexistent/api.json"))).unwrap_err();
        assert_eq!(err.code_str(), "SUBS_CLI_CONFIG_ERROR");
    }
}
