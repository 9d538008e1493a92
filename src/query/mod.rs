//! # Query Engine
//!
//! Evaluates a declarative [`QueryDescription`] against an in-memory slice of
//! records. Three optional steps, always applied in this order:
//!
//! 1. `where`  - exact-match conditions over dotted paths (logical AND)
//! 2. `select` - projection onto a space-separated list of top-level fields
//! 3. `limit`  - keep the first N rows (`0` means unbounded)
//!
//! The engine is pure. It never mutates its input, performs no I/O and
//! never fails; only building a description from untyped JSON can be rejected.
//!
//! ```ignore
//! use serde_json::json;
//! use subscriptions_api::query::{evaluate, QueryDescription};
//!
//! let query = QueryDescription::new()
//!     .with_condition("SubscriptionType.name", json!("MAJ"))
//!     .with_select("contract_reference start_date")
//!     .with_limit(10);
//! let rows = evaluate(store.records(), &query);
//! ```

mod description;
mod engine;
mod errors;
mod path;
mod projection;

pub use description::QueryDescription;
pub use engine::{evaluate, evaluate_value, matches_conditions, strict_eq};
pub use errors::{QueryError, QueryResult};
pub use path::{resolve, Resolved};
pub use projection::{Projection, Row};

/// A single stored record: field name to JSON value, in insertion order.
pub type Record = serde_json::Map<String, serde_json::Value>;
