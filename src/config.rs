use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_INPUT_FILE: &str = "license.json";
pub const DEFAULT_OUTPUT_FILE: &str = "LICENSE.txt";
pub const DEFAULT_REQUIRE_FILE: &str = "requirements.txt";
pub const DEFAULT_SPECIAL_FILE: &str = "license.meta.json";

/// Optional defaults read from the `[tool.py-license-report]` section of
/// pyproject.toml. Every field can be overridden on the command line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub require: Option<PathBuf>,
    pub special: Option<PathBuf>,
    pub targets: Option<Vec<String>>,
    pub override_input_file: Option<bool>,
}

/// Fully resolved configuration for one run. All paths are explicit so
/// no component depends on process-global state.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub require: PathBuf,
    pub special: PathBuf,
    /// Empty means no license filtering.
    pub targets: Vec<String>,
    pub override_input_file: bool,
    pub repository: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            require: PathBuf::from(DEFAULT_REQUIRE_FILE),
            special: PathBuf::from(DEFAULT_SPECIAL_FILE),
            targets: Vec::new(),
            override_input_file: false,
            repository: None,
        }
    }
}

impl ReportConfig {
    /// CLI arguments take precedence over pyproject.toml values, which
    /// take precedence over the built-in defaults.
    pub fn resolve(cli: Cli, file: FileConfig) -> Self {
        let defaults = ReportConfig::default();
        Self {
            input: cli.input.or(file.input).unwrap_or(defaults.input),
            output: cli.output.or(file.output).unwrap_or(defaults.output),
            require: cli.require.or(file.require).unwrap_or(defaults.require),
            special: cli.special.or(file.special).unwrap_or(defaults.special),
            targets: cli.targets.or(file.targets).unwrap_or(defaults.targets),
            override_input_file: cli.override_input_file
                || file.override_input_file.unwrap_or(false),
            repository: cli.repository,
        }
    }
}

/// Load file-level defaults from pyproject.toml in the current directory.
pub fn load_config() -> Result<FileConfig> {
    let current = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_at(&current)
}

/// Load file-level defaults from a pyproject.toml in `dir`. A missing
/// file or missing tool section yields the empty config.
pub fn load_config_at(dir: &Path) -> Result<FileConfig> {
    let pyproject_path = dir.join("pyproject.toml");
    if !pyproject_path.exists() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&pyproject_path)
        .with_context(|| format!("Failed to read pyproject.toml: {}", pyproject_path.display()))?;
    let pyproject: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse pyproject.toml: {}", pyproject_path.display()))?;

    if let Some(section) = pyproject
        .get("tool")
        .and_then(|tool| tool.get("py-license-report"))
    {
        let config: FileConfig = section
            .clone()
            .try_into()
            .context("Failed to parse [tool.py-license-report] section")?;
        return Ok(config);
    }

    Ok(FileConfig::default())
}
