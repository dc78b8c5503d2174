//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/rf/config.toml.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use repo_filter_rs::{FilterResult, FilterSet, Operator, PatternFilter};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# rf - repository filter configuration

# Config schema version (do not modify)
version = 1

# Operator combining --pattern and --preset filters: "and", "or" or "xor"
# default_operator = "and"

# Output preferences
[output]
# color = true              # Enable colors (respects NO_COLOR env)

# Named pattern sets, used with --preset NAME
# [presets.services]
# operator = "or"           # How the patterns combine (default "or")
# patterns = ["/-service$/", "/-api$/"]
"#;

/// Configuration file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Operator used when `--operator` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_operator: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Named presets.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub presets: BTreeMap<String, PresetConfig>,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            default_operator: None,
            output: OutputConfig::default(),
            presets: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Returns the configured default operator, or AND.
    pub fn default_operator(&self) -> FilterResult<Operator> {
        self.default_operator
            .as_deref()
            .map_or(Ok(Operator::default()), str::parse)
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// A named set of patterns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetConfig {
    /// How the patterns combine. Defaults to OR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    /// Delimited patterns, one leaf filter each.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl PresetConfig {
    /// Returns the preset's operator, or OR.
    pub fn operator(&self) -> FilterResult<Operator> {
        self.operator
            .as_deref()
            .map_or(Ok(Operator::Or), str::parse)
    }

    /// Builds the preset as a filter set with one pattern filter per pattern.
    pub fn build(&self) -> FilterResult<FilterSet<str>> {
        let mut set = FilterSet::new(self.operator()?);
        for pattern in &self.patterns {
            set.add_filter(PatternFilter::new([pattern.as_str()])?)?;
        }
        Ok(set)
    }
}

/// Gets the config file path.
///
/// Resolution order: explicit override, `$XDG_CONFIG_HOME/rf/config.toml`,
/// then `~/.config/rf/config.toml` on all platforms.
pub fn get_config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        if !xdg_config.is_empty() {
            return Ok(PathBuf::from(xdg_config).join("rf").join("config.toml"));
        }
    }

    BaseDirs::new()
        .map(|dirs| {
            dirs.home_dir()
                .join(".config")
                .join("rf")
                .join("config.toml")
        })
        .ok_or_else(|| {
            CommandError::Config("Could not determine config directory".to_string())
        })
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let path = get_config_path(override_path)?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    debug!(path = %path.display(), presets = config.presets.len(), "loaded config");

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }

    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Executes `rf config show`.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config(ctx.config_path.as_deref())?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let content = toml::to_string_pretty(&config)
            .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;
        print!("{content}");
    }

    Ok(())
}

/// Executes `rf config path`.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path(ctx.config_path.as_deref())?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Executes `rf config init`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn execute_init(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = get_config_path(ctx.config_path.as_deref())?;
    write_default_config(&path, force)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "created",
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Created {}", path.display());
    }

    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CommandError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}
