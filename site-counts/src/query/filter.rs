//! Filter model for the host's content query collaborator
//!
//! `QueryFilter` is the full set of constraints one filtered listing query
//! can carry; `QueryFilterBuilder` provides the fluent construction path.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::host::{PostId, PostStatus};

/// Inclusive hour-of-day window, both bounds in 0..=23
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    /// Whether `hour` falls inside the window (bounds included)
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour <= self.end
    }
}

/// Status constraint on a query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusFilter {
    /// Match items in every status bucket
    Any,
    /// Match only items in the named bucket
    Only(PostStatus),
}

/// Constraints for one filtered content query
///
/// Every axis is combined with AND. Optional axes that are `None` (or empty,
/// for `exclude_ids`) do not constrain the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Content-type slugs the query spans
    pub post_types: Vec<String>,
    /// Maximum number of matches returned; the total match count is not
    /// affected by this cap
    pub limit: usize,
    pub status: StatusFilter,
    /// Publish-time window, hour of day, inclusive on both bounds
    pub hour_range: Option<HourRange>,
    /// Single tag slug the item must carry
    pub tag: Option<String>,
    /// Single category slug the item must carry
    pub category: Option<String>,
    /// Item ids never returned, regardless of other axes
    pub exclude_ids: Vec<PostId>,
    /// Custom-field value the item must carry under at least one key
    pub meta_value: Option<String>,
}

impl QueryFilter {
    pub fn builder() -> QueryFilterBuilder {
        QueryFilterBuilder::new()
    }
}

/// Fluent builder for [`QueryFilter`]
///
/// Defaults mirror the host platform: type `post`, limit 10, published items
/// only, no tag/category/meta/hour/exclusion constraints.
#[derive(Debug, Clone)]
pub struct QueryFilterBuilder {
    post_types: Vec<String>,
    limit: usize,
    status: StatusFilter,
    hour_range: Option<HourRange>,
    tag: Option<String>,
    category: Option<String>,
    exclude_ids: Vec<PostId>,
    meta_value: Option<String>,
}

impl QueryFilterBuilder {
    pub fn new() -> Self {
        Self {
            post_types: Vec::new(),
            limit: 10,
            status: StatusFilter::Only(PostStatus::Publish),
            hour_range: None,
            tag: None,
            category: None,
            exclude_ids: Vec::new(),
            meta_value: None,
        }
    }

    /// Add a content-type slug to the query span
    pub fn post_type(mut self, slug: &str) -> Self {
        self.post_types.push(slug.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Constrain matches to items published between `start` and `end` hours
    /// of the day, inclusive on both bounds
    pub fn hour_range(mut self, start: u32, end: u32) -> Self {
        self.hour_range = Some(HourRange { start, end });
        self
    }

    pub fn tag(mut self, slug: &str) -> Self {
        self.tag = Some(slug.to_string());
        self
    }

    pub fn category(mut self, slug: &str) -> Self {
        self.category = Some(slug.to_string());
        self
    }

    /// Exclude an item id from the results
    pub fn exclude(mut self, id: PostId) -> Self {
        self.exclude_ids.push(id);
        self
    }

    /// Require a custom-field value, matched against any field key
    pub fn meta_value(mut self, value: &str) -> Self {
        self.meta_value = Some(value.to_string());
        self
    }

    /// Validate and produce the filter
    ///
    /// Fails when an hour window is out of the 0..=23 range or inverted.
    pub fn build(self) -> Result<QueryFilter> {
        if let Some(range) = &self.hour_range {
            if range.start > 23 || range.end > 23 {
                bail!("hour range {}..={} is outside 0..=23", range.start, range.end);
            }
            if range.start > range.end {
                bail!("hour range start {} is after end {}", range.start, range.end);
            }
        }
        let post_types = if self.post_types.is_empty() {
            vec!["post".to_string()]
        } else {
            self.post_types
        };
        Ok(QueryFilter {
            post_types,
            limit: self.limit,
            status: self.status,
            hour_range: self.hour_range,
            tag: self.tag,
            category: self.category,
            exclude_ids: self.exclude_ids,
            meta_value: self.meta_value,
        })
    }
}

impl Default for QueryFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
