//! Filtered subscriptions
//!
//! Processing subscriptions of type "MAJ", projected to the public field set,
//! restricted to those started after the cutoff and sorted by contract
//! reference, highest first.

use serde_json::json;

use crate::query::{evaluate, QueryDescription, Record, Row};

use super::dates::{parse_start_date, start_date_cutoff};
use super::ordering::compare_contract_reference_desc;

/// Fields returned for each filtered subscription
pub const FILTERED_SELECT: &str = "contract_reference start_date SubscriptionType duration active payment_method canceled current_status ended_on";

/// The fixed query handed to the engine (no limit)
pub fn filtered_query() -> QueryDescription {
    QueryDescription::new()
        .with_condition("current_status", json!("processing"))
        .with_condition("SubscriptionType.name", json!("MAJ"))
        .with_select(FILTERED_SELECT)
        .with_limit(0)
}

/// Run the fixed query, then keep rows started after the cutoff and sort
/// them by descending contract reference.
pub fn filtered_subscriptions(records: &[Record]) -> Vec<Row<'_>> {
    let cutoff = start_date_cutoff();

    let mut rows: Vec<Row<'_>> = evaluate(records, &filtered_query())
        .into_iter()
        .filter(|row| {
            row.get("start_date")
                .and_then(parse_start_date)
                .is_some_and(|start| start > cutoff)
        })
        .collect();

    rows.sort_by(compare_contract_reference_desc);
    rows
}
