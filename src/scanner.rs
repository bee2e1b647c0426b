//! Source file discovery.
//!
//! Expands CLI inputs (files, directories, glob patterns) into a sorted,
//! deduplicated list of source files, so catalogs come out deterministic
//! regardless of filesystem iteration order.

use std::{
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Normalize a path lexically so equivalent spellings (`./a.js`, `a.js`,
/// `src/./a.js`) collapse to one set entry.
fn normalized(path: &Path) -> String {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    cleaned.to_string_lossy().into_owned()
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Expand inputs into the sorted list of source files to extract from.
///
/// Directories are walked recursively for source extensions; glob patterns
/// are expanded; explicit file paths are kept whatever the extension. All
/// paths are normalized before deduplication. Ignore globs from the config
/// and the test-file patterns filter the final set.
pub fn scan_inputs(
    inputs: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> Vec<String> {
    let mut ignore_globs: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => ignore_globs.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }
    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                ignore_globs.push(pattern);
            }
        }
    }

    let mut files: BTreeSet<String> = BTreeSet::new();
    for input in inputs {
        if is_glob_pattern(input) {
            match glob(input) {
                Ok(entries) => {
                    for path in entries.flatten() {
                        if path.is_file() && is_source_file(&path) {
                            files.insert(normalized(&path));
                        }
                    }
                }
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid input pattern '{}': {}",
                            "warning:".bold().yellow(),
                            input,
                            e
                        );
                    }
                }
            }
            continue;
        }

        let path = Path::new(input);
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().flatten() {
                let entry_path = entry.path();
                if entry_path.is_file() && is_source_file(entry_path) {
                    files.insert(normalized(entry_path));
                }
            }
        } else if path.is_file() {
            // Explicit file inputs are accepted whatever the extension.
            files.insert(normalized(path));
        } else if verbose {
            eprintln!(
                "{} No such file or directory: {}",
                "warning:".bold().yellow(),
                input
            );
        }
    }

    files
        .into_iter()
        .filter(|file| !ignore_globs.iter().any(|pattern| pattern.matches(file)))
        .collect()
}
