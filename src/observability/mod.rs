//! Observability for the subscriptions service
//!
//! - Structured logging (one JSON object per line)
//! - Typed lifecycle and query events
//! - Begin/complete scopes with elapsed time
//!
//! Observability is read-only: it never changes what a query returns and a
//! failed log write is ignored.
//!
//! ```ignore
//! use subscriptions_api::observability::{Logger, ObservationScope};
//!
//! Logger::info("QUERY_COMPLETE", &[("rows", "42")]);
//!
//! let scope = ObservationScope::new("FILTERED_SUBSCRIPTIONS");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

fn event_severity(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event_severity(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severity() {
        assert_eq!(event_severity(Event::StartupFailed), Severity::Fatal);
        assert_eq!(event_severity(Event::StoreLoaded), Severity::Info);
    }

    #[test]
    fn test_log_event() {
        log_event(Event::StartupBegin);
        log_event(Event::StartupComplete);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("port", "5000")]);
    }
}
