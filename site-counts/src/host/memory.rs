//! In-memory content host backend
//!
//! Implements [`ContentHost`] over a site held in memory, loadable from a
//! JSON site file. Backs the preview CLI and serves as the test double; the
//! filter evaluation covers every `QueryFilter` axis the block builds.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{ContentHost, ContentType, PostId, PostStatus};
use crate::query::{QueryFilter, QueryHandle, QueryMatch, QueryResponse, StatusFilter};

/// One content item in the in-memory site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub post_type: String,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Custom fields, key to value
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, String>,
    pub published_at: NaiveDateTime,
}

/// A whole site: the public type catalog plus its content items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Site {
    pub types: Vec<ContentType>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// [`ContentHost`] over an in-memory [`Site`]
///
/// Mimics the platform's ambient current-query cursor with an interior cell:
/// `run_query` swaps the new result set in and the returned handle swaps the
/// prior value back on drop.
pub struct MemoryHost {
    site: Site,
    current_query: RefCell<Option<QueryResponse>>,
}

impl MemoryHost {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            current_query: RefCell::new(None),
        }
    }

    /// Load a site from a JSON site file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read site file: {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("failed to parse site file: {}", path.display()))
    }

    /// Parse a site from a JSON string
    pub fn from_json(raw: &str) -> Result<Self> {
        let site: Site = serde_json::from_str(raw).context("invalid site JSON")?;
        Ok(Self::new(site))
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Snapshot of the ambient current-query cursor, for callers that need
    /// to observe the cleanup contract
    pub fn current_query(&self) -> Option<QueryResponse> {
        self.current_query.borrow().clone()
    }

    fn post_matches(post: &Post, filter: &QueryFilter) -> bool {
        if !filter.post_types.iter().any(|t| t == &post.post_type) {
            return false;
        }
        if let StatusFilter::Only(status) = filter.status {
            if post.status != status {
                return false;
            }
        }
        if let Some(tag) = &filter.tag {
            if !post.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(category) = &filter.category {
            if !post.categories.iter().any(|c| c == category) {
                return false;
            }
        }
        if let Some(value) = &filter.meta_value {
            // Value match against any field key
            if !post.meta.values().any(|v| v == value) {
                return false;
            }
        }
        if let Some(range) = &filter.hour_range {
            if !range.contains(post.published_at.hour()) {
                return false;
            }
        }
        if filter.exclude_ids.contains(&post.id) {
            return false;
        }
        true
    }
}

impl ContentHost for MemoryHost {
    fn list_public_types(&self) -> Result<Vec<ContentType>> {
        Ok(self.site.types.clone())
    }

    fn count_by_status(&self, slug: &str, status: PostStatus) -> Result<Option<u64>> {
        if !self.site.types.iter().any(|t| t.slug == slug) {
            return Ok(None);
        }
        let count = self
            .site
            .posts
            .iter()
            .filter(|p| p.post_type == slug && p.status == status)
            .count() as u64;
        Ok(Some(count))
    }

    fn run_query(&self, filter: &QueryFilter) -> Result<QueryHandle<'_>> {
        // Scan order is insertion order; the caller sees matches exactly as
        // scanned, never re-sorted.
        let all: Vec<QueryMatch> = self
            .site
            .posts
            .iter()
            .filter(|p| Self::post_matches(p, filter))
            .map(|p| QueryMatch {
                id: p.id,
                title: p.title.clone(),
            })
            .collect();
        let total_matches = all.len() as u64;
        let mut matches = all;
        matches.truncate(filter.limit);
        log::debug!(
            "query matched {} of {} posts (limit {})",
            total_matches,
            self.site.posts.len(),
            filter.limit
        );

        let response = QueryResponse {
            matches,
            total_matches,
        };
        let prior = self.current_query.replace(Some(response.clone()));
        let cell = &self.current_query;
        Ok(QueryHandle::new(response, move || {
            cell.replace(prior);
        }))
    }
}
