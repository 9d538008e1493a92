//! # Record Store Errors
//!
//! All store errors happen while loading at startup and are fatal.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Data file could not be read
    #[error("Failed to read data file {path}: {message}")]
    Io { path: String, message: String },

    /// Data is not valid JSON
    #[error("Invalid data JSON: {0}")]
    InvalidJson(String),

    /// Top-level JSON value is not an array
    #[error("Data must be a JSON array of records")]
    NotAnArray,

    /// An element of the array is not an object
    #[error("Record at index {0} is not a JSON object")]
    NotAMapping(usize),
}

impl StoreError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "SUBS_STORE_IO",
            StoreError::InvalidJson(_) => "SUBS_STORE_INVALID_JSON",
            StoreError::NotAnArray => "SUBS_STORE_NOT_AN_ARRAY",
            StoreError::NotAMapping(_) => "SUBS_STORE_NOT_A_MAPPING",
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::InvalidJson(e.to_string())
    }
}
