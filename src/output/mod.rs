//! Catalog rendering.
//!
//! The merged block list can be rendered as a gettext POT template (`po`)
//! or as JSON for downstream tooling.

pub mod po;

use anyhow::{Context, Result};

use crate::extraction::MessageBlock;

/// Render the merged block list as pretty-printed JSON.
pub fn to_json_string(blocks: &[MessageBlock]) -> Result<String> {
    serde_json::to_string_pretty(blocks).context("Failed to serialize message blocks as JSON")
}
