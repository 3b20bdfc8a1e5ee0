//! Per-placement display attributes supplied by the host

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Attribute bag the host passes for one block placement
///
/// The host serializes attributes with camelCase keys; the only attribute
/// this block reads is the optional CSS class for its container element.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl BlockAttributes {
    /// Deserialize from the host's raw attribute value
    ///
    /// Unknown attributes are ignored; an absent `className` stays `None`.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).context("invalid block attributes")
    }
}
