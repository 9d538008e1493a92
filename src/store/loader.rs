//! Record store loader
//!
//! Records come either from the dataset embedded in the binary or from a JSON
//! file on disk. Either way the file must be a JSON array of objects; any
//! problem is fatal at startup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::observability::{log_event_with_fields, Event};

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

/// Dataset shipped with the binary
const EMBEDDED_DATA: &str = include_str!("../../data/subscriptions.json");

/// Where the records are loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    /// The dataset compiled into the binary
    Embedded,
    /// A JSON file on disk
    File(PathBuf),
}

impl StoreSource {
    /// `File` when a path is given, `Embedded` otherwise
    pub fn from_optional_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) => StoreSource::File(p.to_path_buf()),
            None => StoreSource::Embedded,
        }
    }

    /// Human-readable description for logs
    pub fn describe(&self) -> String {
        match self {
            StoreSource::Embedded => "embedded".to_string(),
            StoreSource::File(path) => path.display().to_string(),
        }
    }
}

/// Loads a [`RecordStore`] from a [`StoreSource`]
pub struct StoreLoader;

impl StoreLoader {
    /// Load and validate the records, logging `STORE_LOADED` on success
    pub fn load(source: &StoreSource) -> StoreResult<RecordStore> {
        let store = match source {
            StoreSource::Embedded => RecordStore::from_json_str(EMBEDDED_DATA)?,
            StoreSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|e| StoreError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                RecordStore::from_json_str(&content)?
            }
        };

        let count = store.len().to_string();
        let described = source.describe();
        log_event_with_fields(
            Event::StoreLoaded,
            &[("records", count.as_str()), ("source", described.as_str())],
        );

        Ok(store)
    }

    /// The embedded dataset
    pub fn embedded() -> StoreResult<RecordStore> {
        Self::load(&StoreSource::Embedded)
    }
}
