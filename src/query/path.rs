//! Dotted-path resolution
//!
//! `SubscriptionType.name` walks into the `SubscriptionType` mapping and reads
//! `name`. Each segment indexes the current value as a mapping; the walk stops
//! at the first segment that cannot be resolved.

use serde_json::Value;

use super::Record;

/// Outcome of resolving a dotted path against a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Every segment resolved
    Found(&'a Value),
    /// A segment named a key that does not exist
    Absent,
    /// A segment tried to index into a scalar, array or null
    NotAMapping,
}

impl<'a> Resolved<'a> {
    /// The resolved value, if the walk succeeded
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Resolved::Found(v) => Some(v),
            Resolved::Absent | Resolved::NotAMapping => None,
        }
    }
}

/// Resolve `path` against `record`, one `.`-separated segment at a time.
pub fn resolve<'a>(record: &'a Record, path: &str) -> Resolved<'a> {
    let mut segments = path.split('.');

    // split always yields at least one segment
    let first = segments.next().unwrap_or(path);
    let mut current = match record.get(first) {
        Some(v) => v,
        None => return Resolved::Absent,
    };

    for segment in segments {
        let map = match current {
            Value::Object(map) => map,
            _ => return Resolved::NotAMapping,
        };
        current = match map.get(segment) {
            Some(v) => v,
            None => return Resolved::Absent,
        };
    }

    Resolved::Found(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_top_level_key() {
        let r = record(json!({"current_status": "processing"}));
        assert_eq!(
            resolve(&r, "current_status"),
            Resolved::Found(&json!("processing"))
        );
    }

    #[test]
    fn test_nested_key() {
        let r = record(json!({"SubscriptionType": {"name": "MAJ", "id": 4}}));
        assert_eq!(
            resolve(&r, "SubscriptionType.name").value(),
            Some(&json!("MAJ"))
        );
    }

    #[test]
    fn test_missing_top_level_key() {
        let r = record(json!({"other": 1}));
        assert_eq!(resolve(&r, "SubscriptionType.name"), Resolved::Absent);
    }

    #[test]
    fn test_missing_nested_key() {
        let r = record(json!({"SubscriptionType": {"id": 4}}));
        assert_eq!(resolve(&r, "SubscriptionType.name"), Resolved::Absent);
    }

    #[test]
    fn test_absent_short_circuits_before_later_segments() {
        let r = record(json!({"a": {"c": {"d": 1}}}));
        assert_eq!(resolve(&r, "a.b.d"), Resolved::Absent);
    }

    #[test]
    fn test_scalar_intermediate_is_not_a_mapping() {
        let r = record(json!({"SubscriptionType": "MAJ"}));
        assert_eq!(resolve(&r, "SubscriptionType.name"), Resolved::NotAMapping);
    }

    #[test]
    fn test_null_and_array_intermediates() {
        let r = record(json!({"a": null, "b": [{"c": 1}]}));
        assert_eq!(resolve(&r, "a.c"), Resolved::NotAMapping);
        assert_eq!(resolve(&r, "b.0"), Resolved::NotAMapping);
    }

    #[test]
    fn test_null_leaf_is_found() {
        let r = record(json!({"ended_on": null}));
        assert_eq!(resolve(&r, "ended_on"), Resolved::Found(&Value::Null));
    }
}
