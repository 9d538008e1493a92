//! # Query Errors
//!
//! The engine itself never fails. These errors only come from turning an
//! untyped JSON value into a [`QueryDescription`](super::QueryDescription).

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query description errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The description, or one of its options, has the wrong shape
    #[error("Invalid query description: {0}")]
    InvalidArgument(String),
}

impl QueryError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidArgument(_) => "SUBS_QUERY_INVALID_ARGUMENT",
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        QueryError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_reason() {
        let err = QueryError::invalid("where must be an object");
        assert_eq!(
            err.to_string(),
            "Invalid query description: where must be an object"
        );
        assert_eq!(err.code(), "SUBS_QUERY_INVALID_ARGUMENT");
    }
}
