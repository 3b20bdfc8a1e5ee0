//! Content query model
//!
//! Provides the filter a listing query is built from, the fluent
//! `QueryFilterBuilder`, and the result types the host collaborator returns.

pub mod filter;
pub mod result;

pub use filter::{HourRange, QueryFilter, QueryFilterBuilder, StatusFilter};
pub use result::{QueryHandle, QueryMatch, QueryResponse};
