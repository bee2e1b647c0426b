//! Main entry point for the potx CLI.
//!
//! Discovers source files, extracts each one sequentially, performs one
//! global merge, and renders the catalog.

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::{Arguments, OutputFormat};
use super::exit_status::ExitStatus;
use crate::config::{self, ExtractOptions, NO_REFERENCE};
use crate::extraction::{self, MessageBlock};
use crate::output;
use crate::scanner;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to resolve working directory")?;

    if args.init {
        init(&cwd)?;
        eprintln!(
            "{} created {}",
            "info:".bold().blue(),
            config::CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Success);
    }

    let load = config::load_config(&cwd)?;
    if args.verbose && load.from_file {
        eprintln!(
            "{} using {}",
            "info:".bold().blue(),
            config::CONFIG_FILE_NAME
        );
    }
    let config = load.config;

    let files = scanner::scan_inputs(
        &args.inputs,
        &config.ignores,
        config.ignore_test_files,
        args.verbose,
    );
    if files.is_empty() {
        eprintln!(
            "{} no source files matched the given inputs",
            "warning:".bold().yellow()
        );
    }

    let mut per_file: Vec<Vec<MessageBlock>> = Vec::new();
    for file in &files {
        if args.verbose {
            eprintln!("{} extracting {}", "info:".bold().blue(), file);
        }
        let options = ExtractOptions {
            filename: Some(reference_filename(file, &cwd, args.no_references)),
            ..Default::default()
        };
        per_file.push(extraction::extract_file(file, &config, &options)?);
    }

    let catalog = extraction::merge_files(per_file);

    let rendered = match args.format {
        OutputFormat::Pot => output::po::to_pot_string(&catalog),
        OutputFormat::Json => output::to_json_string(&catalog)?,
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    if args.verbose {
        eprintln!(
            "{} extracted {} message(s) from {} file(s)",
            "info:".bold().blue(),
            catalog.len(),
            files.len()
        );
    }

    Ok(ExitStatus::Success)
}

fn init(cwd: &Path) -> Result<()> {
    let config_path = cwd.join(config::CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config::CONFIG_FILE_NAME);
    }
    fs::write(&config_path, config::default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

/// The filename handed to the options resolver: the sentinel when
/// references are disabled, otherwise an absolute path so the resolver can
/// strip the working-directory prefix.
fn reference_filename(file: &str, cwd: &Path, no_references: bool) -> String {
    if no_references {
        return NO_REFERENCE.to_string();
    }
    let path = Path::new(file);
    if path.is_absolute() {
        file.to_string()
    } else {
        cwd.join(path).to_string_lossy().into_owned()
    }
}
