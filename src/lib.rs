//! subscriptions-api - A small HTTP JSON API over in-memory subscription records
//!
//! The core is the query engine in [`query`]: equality filtering over dotted
//! paths, field projection and head limiting. Everything else is plumbing
//! around it.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod store;
pub mod subscriptions;
