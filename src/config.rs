//! Configuration file management for dialogset
//!
//! Values are read from ~/.dialogset/config.toml and can be overridden by
//! environment variables, then by command-line flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env::convert as env_convert;
use crate::error::DialogSetError;

pub const DEFAULT_INPUT_FILE: &str = "dialogueCollection.txt";
pub const DEFAULT_INDENT: usize = 2;
const MAX_INDENT: usize = 16;

/// Configuration structure matching config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub cli: CliConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub default_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_path: default_input_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ParserConfig {
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_true")]
    pub pause_on_exit: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pause_on_exit: true,
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Get the config file path (~/.dialogset/config.toml)
    pub fn get_config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Could not find home directory")?;
        Ok(home_dir.join(".dialogset").join("config.toml"))
    }

    /// Load configuration from the default location, then apply environment overrides.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific file without environment overrides
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), DialogSetError> {
        if self.output.indent > MAX_INDENT {
            return Err(DialogSetError::invalid_config(format!(
                "output.indent must be at most {MAX_INDENT}, got {}",
                self.output.indent
            )));
        }
        if self.input.default_path.as_os_str().is_empty() {
            return Err(DialogSetError::invalid_config(
                "input.default_path must not be empty",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides on top of file values
    pub fn apply_env(&mut self) {
        if let Ok(input) = env::var(env_convert::INPUT) {
            if !input.trim().is_empty() {
                self.input.default_path = PathBuf::from(input);
            }
        }

        if let Ok(strict) = env::var(env_convert::STRICT) {
            self.parser.strict = is_truthy(&strict);
        }

        if let Ok(no_pause) = env::var(env_convert::NO_PAUSE) {
            if is_truthy(&no_pause) {
                self.cli.pause_on_exit = false;
            }
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
