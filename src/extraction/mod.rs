//! Message block extraction.
//!
//! This module is the extraction engine behind potx:
//!
//! ## Module Structure
//!
//! - `block`: The catalog entry type (`MessageBlock`)
//! - `classify`: Predicates for recognized calls/components, static strings
//! - `builder`: Builds one block from a matched node
//! - `visitor`: Single-pass AST traversal with an explicit accumulator
//! - `merge`: Deduplication into one entry per (id, context)
//!
//! ## Extraction Pipeline
//!
//! 1. Resolve the effective options for the pass (override > config)
//! 2. Parse the source into an AST
//! 3. Walk the tree once, building a raw block per recognized node
//! 4. Merge the raw list into the pass result
//!
//! Passes are synchronous and independent; multi-file extraction runs them
//! strictly sequentially and performs one global merge at the end.

pub mod block;
pub mod builder;
pub mod classify;
pub mod merge;
pub mod visitor;

pub use block::{BlockComments, MessageBlock};
pub use merge::merge_blocks;

use std::fs;

use anyhow::{Context, Result};

use crate::config::{Config, ExtractOptions, NO_REFERENCE, resolve_options};
use crate::parsers::jsx::parse_source;
use visitor::BlockExtractor;

/// Extract the merged message blocks from one source string.
pub fn extract_source(
    code: String,
    config: &Config,
    options: &ExtractOptions,
) -> Result<Vec<MessageBlock>> {
    let resolved = resolve_options(config, options);
    // The filename picks the parser syntax only when it names a real file;
    // without one, fall back to TSX as the widest grammar.
    let file_path = match options.filename.as_deref() {
        Some(name) if name != NO_REFERENCE => name,
        _ => "<source>.tsx",
    };
    let parsed = parse_source(code, file_path)?;
    let raw = BlockExtractor::new(&resolved, &parsed.source_map).extract(&parsed.module);
    Ok(merge_blocks(raw))
}

/// Extract from a file on disk.
///
/// The file's path becomes the reference filename unless the caller
/// overrides it.
pub fn extract_file(
    path: &str,
    config: &Config,
    options: &ExtractOptions,
) -> Result<Vec<MessageBlock>> {
    let code = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let mut options = options.clone();
    if options.filename.is_none() {
        options.filename = Some(path.to_string());
    }
    let resolved = resolve_options(config, &options);
    // The on-disk path decides the parser syntax; the filename option only
    // shapes reference comments.
    let parsed = parse_source(code, path)?;
    let raw = BlockExtractor::new(&resolved, &parsed.source_map).extract(&parsed.module);
    Ok(merge_blocks(raw))
}

/// Merge per-file results into one cross-file catalog.
///
/// Duplicate blocks across files collapse into a single entry whose
/// reference list spans all contributing files.
pub fn merge_files<I>(per_file: I) -> Vec<MessageBlock>
where
    I: IntoIterator<Item = Vec<MessageBlock>>,
{
    merge_blocks(per_file.into_iter().flatten().collect())
}
