//! Query result types and the scoped result handle
//!
//! The host platform keeps an ambient "current query" cursor that a listing
//! query overwrites. [`QueryHandle`] makes that side effect a scoped
//! resource: the host hands one out per query and the prior cursor state is
//! restored when the handle drops, on every exit path.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::host::PostId;

/// One item matched by a filtered query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryMatch {
    pub id: PostId,
    pub title: String,
}

/// Result set of one filtered query, in collaborator order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct QueryResponse {
    /// Matches up to the filter's limit, in the order the host returned them
    pub matches: Vec<QueryMatch>,
    /// Matches across the whole content set, ignoring the limit
    pub total_matches: u64,
}

impl QueryResponse {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Scoped wrapper around a [`QueryResponse`]
///
/// Holds the host's reset action and runs it exactly once on drop. Hosts
/// without ambient query state hand out [`QueryHandle::unmanaged`] handles.
pub struct QueryHandle<'h> {
    response: QueryResponse,
    reset: Option<Box<dyn FnOnce() + 'h>>,
}

impl<'h> QueryHandle<'h> {
    /// Wrap a response together with the action restoring the host's prior
    /// current-query state
    pub fn new(response: QueryResponse, reset: impl FnOnce() + 'h) -> Self {
        Self {
            response,
            reset: Some(Box::new(reset)),
        }
    }

    /// Wrap a response that has no host state to restore
    pub fn unmanaged(response: QueryResponse) -> QueryHandle<'static> {
        QueryHandle {
            response,
            reset: None,
        }
    }
}

impl Deref for QueryHandle<'_> {
    type Target = QueryResponse;

    fn deref(&self) -> &QueryResponse {
        &self.response
    }
}

impl Drop for QueryHandle<'_> {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset();
        }
    }
}

impl std::fmt::Debug for QueryHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryHandle")
            .field("response", &self.response)
            .field("managed", &self.reset.is_some())
            .finish()
    }
}
