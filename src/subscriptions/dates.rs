//! `start_date` parsing
//!
//! Accepted forms, all resolved to an instant in UTC:
//! - `YYYY-MM-DD` (midnight UTC)
//! - RFC 3339 date-time with offset
//! - `YYYY-MM-DDTHH:MM:SS[.fff]` without offset (read as UTC)

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Parse a `start_date` value. Non-strings and unparseable strings are `None`.
pub fn parse_start_date(value: &Value) -> Option<DateTime<Utc>> {
    let s = value.as_str()?.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Records must start strictly after this instant: 2018-12-30T00:00:00Z
pub fn start_date_cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 12, 30, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
