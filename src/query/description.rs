//! # Query Description
//!
//! The `{where, select, limit}` value handed to the engine. Built either with
//! the typed builder methods or from untyped JSON via
//! [`QueryDescription::from_value`].

use serde_json::{Map, Value};

use super::errors::{QueryError, QueryResult};

/// Declarative query: conditions, projection and limit, all optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDescription {
    /// Dotted path to expected value, in insertion order
    conditions: Option<Map<String, Value>>,

    /// Space-separated top-level field names
    select: Option<String>,

    /// Maximum number of rows; `0` is unbounded
    limit: Option<usize>,
}

impl QueryDescription {
    /// Create an empty description (returns every record unchanged)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-match condition on a dotted path
    pub fn with_condition(mut self, path: impl Into<String>, expected: Value) -> Self {
        self.conditions
            .get_or_insert_with(Map::new)
            .insert(path.into(), expected);
        self
    }

    /// Set the projection field list
    pub fn with_select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    /// Set the row limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The `where` conditions, if present
    pub fn conditions(&self) -> Option<&Map<String, Value>> {
        self.conditions.as_ref()
    }

    /// The raw `select` string, if present
    pub fn select(&self) -> Option<&str> {
        self.select.as_deref()
    }

    /// The raw `limit`, if present
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Limit that actually bounds the result (`Some` only when > 0)
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|limit| *limit > 0)
    }

    /// Parsed projection field names, split on single spaces.
    ///
    /// An empty `select` string is the same as no projection. Otherwise empty
    /// names (from leading, trailing or repeated spaces) are dropped, so a
    /// blank-only `select` projects onto no fields.
    pub fn fields(&self) -> Option<Vec<&str>> {
        self.select
            .as_deref()
            .filter(|select| !select.is_empty())
            .map(|select| select.split(' ').filter(|name| !name.is_empty()).collect())
    }

    /// Build a description from an untyped JSON value.
    ///
    /// `null` for any option is the same as leaving it out. Unknown keys are
    /// ignored.
    pub fn from_value(value: &Value) -> QueryResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| QueryError::invalid("query description must be an object"))?;

        let conditions = match obj.get("where") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map.clone()),
            Some(other) => {
                return Err(QueryError::invalid(format!(
                    "where must be an object, got {}",
                    type_name(other)
                )))
            }
        };

        let select = match obj.get("select") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(QueryError::invalid(format!(
                    "select must be a string, got {}",
                    type_name(other)
                )))
            }
        };

        let limit = match obj.get("limit") {
            None | Some(Value::Null) => None,
            Some(v) => {
                let n = v
                    .as_u64()
                    .ok_or_else(|| QueryError::invalid("limit must be a non-negative integer"))?;
                Some(usize::try_from(n).unwrap_or(usize::MAX))
            }
        };

        Ok(Self {
            conditions,
            select,
            limit,
        })
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
