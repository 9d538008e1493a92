//! Query evaluation: filter, then select, then limit.

use serde_json::{Map, Value};

use super::description::QueryDescription;
use super::errors::QueryResult;
use super::path::resolve;
use super::projection::{Projection, Row};
use super::Record;

/// Evaluate `query` against `records`.
///
/// Filtering is stable, so rows keep store order. Projection never reorders
/// rows and the limit always takes a prefix.
pub fn evaluate<'a>(records: &'a [Record], query: &QueryDescription) -> Vec<Row<'a>> {
    let filtered = records.iter().filter(|record| match query.conditions() {
        Some(conditions) => matches_conditions(record, conditions),
        None => true,
    });

    let mut rows: Vec<Row<'a>> = match query.fields() {
        Some(fields) => filtered
            .map(|record| Row::Projected(Projection::project(record, &fields)))
            .collect(),
        None => filtered.map(Row::Stored).collect(),
    };

    if let Some(limit) = query.effective_limit() {
        rows.truncate(limit);
    }

    rows
}

/// Parse an untyped description and evaluate it.
pub fn evaluate_value<'a>(records: &'a [Record], query: &Value) -> QueryResult<Vec<Row<'a>>> {
    let query = QueryDescription::from_value(query)?;
    Ok(evaluate(records, &query))
}

/// True if `record` satisfies every `(path, expected)` condition.
pub fn matches_conditions(record: &Record, conditions: &Map<String, Value>) -> bool {
    conditions.iter().all(|(path, expected)| {
        resolve(record, path)
            .value()
            .is_some_and(|actual| strict_eq(actual, expected))
    })
}

/// Strict equality: same type and same value, no coercion.
///
/// Numbers compare by numeric value, so `1` equals `1.0`. Composite expected
/// values (objects, arrays) never match.
pub fn strict_eq(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (_, Value::Object(_)) | (_, Value::Array(_)) => false,
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
                return ai == bi;
            }
            if let (Some(au), Some(bu)) = (a.as_u64(), b.as_u64()) {
                return au == bu;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(af), Some(bf)) => af == bf,
                _ => false,
            }
        }
        (a, b) => a == b,
    }
}
