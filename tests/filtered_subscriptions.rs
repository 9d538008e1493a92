//! Filtered Subscriptions Tests
//!
//! Fixed business query plus start-date cutoff and descending contract order.

use serde_json::{json, Value};
use subscriptions_api::store::{RecordStore, StoreLoader};
use subscriptions_api::subscriptions::filtered_subscriptions;

fn references(value: &Value) -> Vec<Value> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["contract_reference"].clone())
        .collect()
}

/// Processing MAJ records after the cutoff, highest reference first.
#[test]
fn test_reference_scenario() {
    let store = RecordStore::from_value(json!([
        {"contract_reference": 2, "current_status": "processing",
         "SubscriptionType": {"name": "MAJ"}, "start_date": "2019-01-01"},
        {"contract_reference": 1, "current_status": "processing",
         "SubscriptionType": {"name": "MAJ"}, "start_date": "2019-05-01"},
        {"contract_reference": 3, "current_status": "done",
         "SubscriptionType": {"name": "MAJ"}, "start_date": "2020-01-01"}
    ]))
    .unwrap();

    let out = serde_json::to_value(filtered_subscriptions(store.records())).unwrap();
    assert_eq!(references(&out), vec![json!(2), json!(1)]);
    assert_eq!(
        out[0],
        json!({
            "contract_reference": 2,
            "start_date": "2019-01-01",
            "SubscriptionType": {"name": "MAJ"},
            "current_status": "processing"
        })
    );
}

/// Sorting is numeric, not lexicographic.
#[test]
fn test_sort_is_numeric() {
    let store = RecordStore::from_value(json!([
        {"contract_reference": 9, "current_status": "processing",
         "SubscriptionType": {"name": "MAJ"}, "start_date": "2019-01-01"},
        {"contract_reference": 100, "current_status": "processing",
         "SubscriptionType": {"name": "MAJ"}, "start_date": "2019-01-01"},
        {"contract_reference": "25", "current_status": "processing",
         "SubscriptionType": {"name": "MAJ"}, "start_date": "2019-01-01"}
    ]))
    .unwrap();

    let out = serde_json::to_value(filtered_subscriptions(store.records())).unwrap();
    assert_eq!(references(&out), vec![json!(100), json!("25"), json!(9)]);
}

/// Output field set is the fixed public projection.
#[test]
fn test_output_fields_are_projected() {
    let store = StoreLoader::embedded().unwrap();
    let out = serde_json::to_value(filtered_subscriptions(store.records())).unwrap();

    let allowed = [
        "contract_reference",
        "start_date",
        "SubscriptionType",
        "duration",
        "active",
        "payment_method",
        "canceled",
        "current_status",
        "ended_on",
    ];
    for row in out.as_array().unwrap() {
        for key in row.as_object().unwrap().keys() {
            assert!(allowed.contains(&key.as_str()), "unexpected key {}", key);
        }
        assert_eq!(row["current_status"], "processing");
        assert_eq!(row["SubscriptionType"]["name"], "MAJ");
    }
}

/// The embedded dataset yields its known filtered listing.
#[test]
fn test_embedded_dataset_listing() {
    let store = StoreLoader::embedded().unwrap();
    let out = serde_json::to_value(filtered_subscriptions(store.records())).unwrap();
    assert_eq!(
        references(&out),
        vec![json!(1137), json!(1102), json!(1089), json!(1073), json!(1034)]
    );
}

/// The store itself is untouched by the query.
#[test]
fn test_store_is_not_mutated() {
    let store = StoreLoader::embedded().unwrap();
    let before = store.clone();
    let _ = filtered_subscriptions(store.records());
    assert_eq!(store, before);
}
