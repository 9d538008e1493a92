//! Observable events
//!
//! Events are explicit and typed; each maps to one stable log name.

use std::fmt;

/// Observable events in the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    StartupBegin,
    /// Configuration loaded
    ConfigLoaded,
    /// Record store loaded
    StoreLoaded,
    /// Startup complete
    StartupComplete,
    /// Startup failed (FATAL)
    StartupFailed,
    /// HTTP server accepting connections
    Serving,

    // Query
    /// Query description received
    QueryReceived,
    /// Query evaluated
    QueryExecuted,
    /// Query description rejected
    QueryRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StartupBegin => "STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StartupComplete => "STARTUP_COMPLETE",
            Event::StartupFailed => "STARTUP_FAILED",
            Event::Serving => "SERVING",

            Event::QueryReceived => "QUERY_BEGIN",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::StartupFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
