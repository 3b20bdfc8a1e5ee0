//! Content host collaborators
//!
//! The block never talks to a concrete platform; everything it needs from
//! the host (the public content-type catalog, status-bucket counts, and the
//! filtered listing query) goes through [`ContentHost`]. The `memory`
//! backend implements the trait over an in-memory content set and backs the
//! preview CLI and the tests.

pub mod memory;
mod types;

use anyhow::Result;

pub use memory::{MemoryHost, Post, Site};
pub use types::{ContentType, PostId, PostStatus};

use crate::query::{QueryFilter, QueryHandle};

/// The host-side collaborators one render call consumes
pub trait ContentHost {
    /// Enumerate the public content types, catalog order
    fn list_public_types(&self) -> Result<Vec<ContentType>>;

    /// Number of `slug` items sitting in the `status` bucket
    ///
    /// `Ok(None)` means the host has no such bucket (unknown type); callers
    /// render that as a zero count. `Err` is a host failure and aborts the
    /// render.
    fn count_by_status(&self, slug: &str, status: PostStatus) -> Result<Option<u64>>;

    /// Execute one filtered listing query
    ///
    /// The returned handle owns the result set and restores the host's prior
    /// current-query state when dropped.
    fn run_query(&self, filter: &QueryFilter) -> Result<QueryHandle<'_>>;
}
