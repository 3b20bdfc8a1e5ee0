//! Content host vocabulary shared by the catalog and query collaborators

use serde::{Deserialize, Serialize};

/// Identifier of a single content item
pub type PostId = u64;

/// Lifecycle status a content item is bucketed under
///
/// Attachment-like types use `Inherit` as their visible status; every other
/// public type uses `Publish`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
    Inherit,
    Draft,
    Pending,
    Private,
    Future,
    Trash,
}

/// A public content type as enumerated from the host catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentType {
    pub slug: String,
    /// Human-readable plural label (e.g., "Posts")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the type's visible items live under the `inherit` status
    /// bucket rather than `publish`
    #[serde(default)]
    pub is_attachment_like: bool,
}

impl ContentType {
    /// The status bucket holding this type's visible item count
    pub fn visible_status(&self) -> PostStatus {
        if self.is_attachment_like {
            PostStatus::Inherit
        } else {
            PostStatus::Publish
        }
    }
}
