//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Extract gettext message templates from JS/TS/JSX sources.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Files, directories, or glob patterns to extract from
    #[arg(required_unless_present = "init")]
    pub inputs: Vec<String>,

    /// Write a default .potxrc.json to the working directory and exit
    #[arg(long)]
    pub init: bool,

    /// Write the catalog to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pot)]
    pub format: OutputFormat,

    /// Omit `#:` source reference comments from the catalog
    #[arg(long)]
    pub no_references: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Gettext POT template
    Pot,
    /// JSON block list
    Json,
}
