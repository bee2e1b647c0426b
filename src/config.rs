use std::{
    collections::HashMap,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".potxrc.json";

/// Sentinel filename that suppresses reference comments for a pass.
pub const NO_REFERENCE: &str = "none";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// Role a call argument or component prop plays when building a message block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgRole {
    /// The primary translatable text.
    Id,
    /// The plural-form source string.
    PluralId,
    /// Disambiguating context tag for otherwise-identical ids.
    Context,
    /// Translator-facing extracted comment.
    Comment,
    /// Positional placeholder for arguments the extractor does not use.
    Ignore,
}

/// Recognized call name -> ordered argument roles, one per position.
pub type FuncArgsMap = HashMap<String, Vec<ArgRole>>;

/// Recognized JSX tag name -> attribute name -> role.
pub type ComponentPropsMap = HashMap<String, HashMap<String, ArgRole>>;

pub fn default_func_arguments() -> FuncArgsMap {
    use ArgRole::*;
    [
        ("gettext", vec![Id]),
        ("dgettext", vec![Ignore, Id]),
        ("ngettext", vec![Id, PluralId]),
        ("dngettext", vec![Ignore, Id, PluralId]),
        ("pgettext", vec![Context, Id]),
        ("dpgettext", vec![Ignore, Context, Id]),
        ("npgettext", vec![Context, Id, PluralId]),
        ("dnpgettext", vec![Ignore, Context, Id, PluralId]),
        ("t", vec![Id]),
        ("tn", vec![Id, PluralId]),
        ("tp", vec![Context, Id]),
        ("tnp", vec![Context, Id, PluralId]),
    ]
    .into_iter()
    .map(|(name, roles)| (name.to_string(), roles))
    .collect()
}

pub fn default_component_props() -> ComponentPropsMap {
    use ArgRole::*;
    let props: HashMap<String, ArgRole> = [
        ("message", Id),
        ("plural", PluralId),
        ("context", Context),
        ("comment", Comment),
    ]
    .into_iter()
    .map(|(name, role)| (name.to_string(), role))
    .collect();

    [("T".to_string(), props.clone()), ("Trans".to_string(), props)]
        .into_iter()
        .collect()
}

fn default_ignore_test_files() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Recognized translation calls and the role of each positional argument.
    #[serde(default = "default_func_arguments")]
    pub func_arguments: FuncArgsMap,
    /// Recognized translation components and the role of each attribute.
    #[serde(default = "default_component_props")]
    pub component_props: ComponentPropsMap,
    /// Glob patterns for files to skip during discovery.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            func_arguments: default_func_arguments(),
            component_props: default_component_props(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Per-pass extraction options supplied by callers.
///
/// Any field left `None` falls back to the ambient config when the pass
/// resolves its options.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Path recorded in `path:line` references. An absolute path has the
    /// current working directory stripped; [`NO_REFERENCE`] or `None`
    /// suppresses references for the pass.
    pub filename: Option<String>,
    pub func_arguments: Option<FuncArgsMap>,
    pub component_props: Option<ComponentPropsMap>,
}

/// Options after overlaying caller overrides on the ambient config.
///
/// Resolved exactly once per traversal pass and immutable afterwards, so a
/// pass never consults a fallback chain mid-walk.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    /// Path used in reference comments; `None` suppresses references.
    pub reference_path: Option<String>,
    pub func_arguments: FuncArgsMap,
    pub component_props: ComponentPropsMap,
}

/// Overlay caller overrides on the config: override > config > default.
pub fn resolve_options(config: &Config, overrides: &ExtractOptions) -> ResolvedOptions {
    ResolvedOptions {
        reference_path: resolve_reference_path(overrides.filename.as_deref()),
        func_arguments: overrides
            .func_arguments
            .clone()
            .unwrap_or_else(|| config.func_arguments.clone()),
        component_props: overrides
            .component_props
            .clone()
            .unwrap_or_else(|| config.component_props.clone()),
    }
}

/// An absent filename and the `"none"` sentinel both suppress references.
/// Absolute paths under the current working directory are made relative so
/// references stay portable across checkouts.
fn resolve_reference_path(filename: Option<&str>) -> Option<String> {
    let filename = filename?;
    if filename == NO_REFERENCE {
        return None;
    }
    let path = Path::new(filename);
    if path.is_absolute()
        && let Ok(cwd) = env::current_dir()
        && let Ok(relative) = path.strip_prefix(&cwd)
    {
        return Some(relative.to_string_lossy().into_owned());
    }
    Some(filename.to_string())
}
