//! Subscription HTTP Routes
//!
//! - `GET  /subscriptions`          - full record store, untouched
//! - `GET  /filtered-subscriptions` - processing "MAJ" subscriptions, newest contract first
//! - `POST /subscriptions/query`    - evaluate a `{where, select, limit}` body

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::query::{evaluate, QueryDescription};
use crate::store::RecordStore;
use crate::subscriptions::filtered_subscriptions;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Subscription state shared across handlers
pub struct SubscriptionsState {
    pub store: Arc<RecordStore>,
}

impl SubscriptionsState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

// ==================
// Routes
// ==================

/// Create subscription routes
pub fn subscription_routes(state: Arc<SubscriptionsState>) -> Router {
    Router::new()
        .route("/subscriptions", get(list_subscriptions))
        .route("/subscriptions/query", post(query_subscriptions))
        .route("/filtered-subscriptions", get(list_filtered_subscriptions))
        .with_state(state)
}

/// Serialize `body` as a JSON response
fn json_response<T: Serialize + ?Sized>(body: &T) -> ApiResult<Response> {
    let bytes = serde_json::to_vec(body)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

// ==================
// Handlers
// ==================

async fn list_subscriptions(State(state): State<Arc<SubscriptionsState>>) -> ApiResult<Response> {
    json_response(state.store.records())
}

async fn list_filtered_subscriptions(
    State(state): State<Arc<SubscriptionsState>>,
) -> ApiResult<Response> {
    let scope = ObservationScope::with_fields(
        "FILTERED_SUBSCRIPTIONS",
        &[("route", "/filtered-subscriptions")],
    );

    let rows = filtered_subscriptions(state.store.records());
    match json_response(&rows) {
        Ok(response) => {
            let count = rows.len().to_string();
            scope.complete_with_fields(&[("rows", count.as_str())]);
            Ok(response)
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(e)
        }
    }
}

async fn query_subscriptions(
    State(state): State<Arc<SubscriptionsState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    log_event_with_fields(Event::QueryReceived, &[("route", "/subscriptions/query")]);

    let Json(body) = payload.map_err(|rejection| {
        log_event_with_fields(
            Event::QueryRejected,
            &[("reason", rejection.body_text().as_str())],
        );
        ApiError::from(rejection)
    })?;

    let query = QueryDescription::from_value(&body).map_err(|e| {
        log_event_with_fields(Event::QueryRejected, &[("reason", e.to_string().as_str())]);
        e
    })?;

    let rows = evaluate(state.store.records(), &query);
    let count = rows.len().to_string();
    log_event_with_fields(Event::QueryExecuted, &[("rows", count.as_str())]);

    json_response(&rows)
}
