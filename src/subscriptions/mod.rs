//! # Subscriptions
//!
//! Business queries over the record store. Currently one: processing "MAJ"
//! subscriptions started after 2018-12-30, newest contract first.

mod dates;
mod filtered;
mod ordering;

pub use dates::{parse_start_date, start_date_cutoff};
pub use filtered::{filtered_query, filtered_subscriptions, FILTERED_SELECT};
pub use ordering::{compare_contract_reference_desc, contract_reference_key};
