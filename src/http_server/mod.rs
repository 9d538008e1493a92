//! # HTTP Server Module
//!
//! Thin axum layer over the query engine and the record store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/subscriptions` - All records
//! - `/subscriptions/query` - Generic `{where, select, limit}` query
//! - `/filtered-subscriptions` - Processing "MAJ" subscriptions

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod subscription_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
