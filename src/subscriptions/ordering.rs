//! Ordering by `contract_reference`
//!
//! References are compared as numbers. A JSON number is used as is; a string
//! is used if it parses as a finite number (`"1042"`). Anything else is
//! non-numeric and sorts after every numeric reference.

use std::cmp::Ordering;

use serde_json::Value;

use crate::query::Row;

/// Numeric sort key for a `contract_reference` value
pub fn contract_reference_key(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Descending by numeric `contract_reference`, non-numeric last.
///
/// Use with a stable sort so ties and non-numeric rows keep their order.
pub fn compare_contract_reference_desc(a: &Row<'_>, b: &Row<'_>) -> Ordering {
    let ka = contract_reference_key(a.get("contract_reference"));
    let kb = contract_reference_key(b.get("contract_reference"));

    match (ka, kb) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Record;
    use serde_json::json;

    fn record(reference: Value) -> Record {
        let mut r = Record::new();
        r.insert("contract_reference".to_string(), reference);
        r
    }

    #[test]
    fn test_key_from_number_and_numeric_string() {
        assert_eq!(contract_reference_key(Some(&json!(1042))), Some(1042.0));
        assert_eq!(contract_reference_key(Some(&json!(" 17 "))), Some(17.0));
        assert_eq!(contract_reference_key(Some(&json!("REF-1"))), None);
        assert_eq!(contract_reference_key(Some(&json!("NaN"))), None);
        assert_eq!(contract_reference_key(Some(&json!(true))), None);
        assert_eq!(contract_reference_key(None), None);
    }

    #[test]
    fn test_descending_with_non_numeric_last() {
        let records = [
            record(json!("REF-A")),
            record(json!(2)),
            record(json!("10")),
            record(json!("REF-B")),
            record(json!(7)),
        ];
        let mut rows: Vec<Row<'_>> = records.iter().map(Row::Stored).collect();
        rows.sort_by(compare_contract_reference_desc);

        let order: Vec<Value> = rows
            .iter()
            .map(|r| r.get("contract_reference").cloned().unwrap())
            .collect();
        assert_eq!(
            order,
            vec![json!("10"), json!(7), json!(2), json!("REF-A"), json!("REF-B")]
        );
    }
}
