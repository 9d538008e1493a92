//! # Record Store
//!
//! Immutable, ordered sequence of subscription records. Loaded once at
//! startup and shared read-only for the lifetime of the process.

mod errors;
mod loader;

pub use errors::{StoreError, StoreResult};
pub use loader::{StoreLoader, StoreSource};

use serde_json::Value;

use crate::query::Record;

/// Read-only record store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Wrap an already-built list of records
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build from a JSON array of objects, keeping order
    pub fn from_value(value: Value) -> StoreResult<Self> {
        let items = match value {
            Value::Array(items) => items,
            _ => return Err(StoreError::NotAnArray),
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(map),
                _ => Err(StoreError::NotAMapping(index)),
            })
            .collect::<StoreResult<Vec<Record>>>()?;

        Ok(Self { records })
    }

    /// Parse from JSON text
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// All records in store order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_keeps_order() {
        let store = RecordStore::from_value(json!([
            {"contract_reference": 3},
            {"contract_reference": 1}
        ]))
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0]["contract_reference"], json!(3));
    }

    #[test]
    fn test_rejects_non_array() {
        let err = RecordStore::from_value(json!({"a": 1})).unwrap_err();
        assert_eq!(err, StoreError::NotAnArray);
    }

    #[test]
    fn test_rejects_non_object_record() {
        let err = RecordStore::from_value(json!([{"a": 1}, 2])).unwrap_err();
        assert_eq!(err, StoreError::NotAMapping(1));
    }

    #[test]
    fn test_invalid_json() {
        let err = RecordStore::from_json_str("[{").unwrap_err();
        assert_eq!(err.code(), "SUBS_STORE_INVALID_JSON");
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::from_json_str("[]").unwrap();
        assert!(store.is_empty());
    }
}
