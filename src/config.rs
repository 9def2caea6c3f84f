//! Server configuration.
//!
//! Configuration is read from a TOML file.  The file is looked up, in order:
//!
//!   1. an explicit path (the `--config` flag),
//!   2. `.skitscript-lsp.toml` in the working directory,
//!   3. `skitscript-lsp/config.toml` in the platform config directory.
//!
//! If none exists the built-in defaults apply.  Loading does not validate;
//! command-line overrides are applied first and [`Config::validate`] runs once
//! on the result.
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".skitscript-lsp.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Documents opened with a different language id are ignored.
    pub language_id: String,
    pub parser: ParserConfig,
}

/// How to run the external parser executable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub command: String,
    pub args: Vec<String>,
    /// A parser run taking longer than this is killed.
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_id: "skitscript".to_string(),
            parser: ParserConfig::default(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            command: "skitscript-parser".to_string(),
            args: Vec::new(),
            timeout_ms: 5000,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language_id.trim().is_empty() {
            return Err(ConfigError::Invalid("language_id must not be empty".into()));
        }
        if self.parser.command.trim().is_empty() {
            return Err(ConfigError::Invalid("parser.command must not be empty".into()));
        }
        if self.parser.timeout_ms == 0 {
            return Err(ConfigError::Invalid("parser.timeout_ms must be positive".into()));
        }
        Ok(())
    }

    /// Replace configured values with those given on the command line.
    pub fn apply_overrides(&mut self, parser: Option<String>, language_id: Option<String>) {
        if let Some(command) = parser {
            self.parser.command = command;
        }
        if let Some(language_id) = language_id {
            self.language_id = language_id;
        }
    }

    /// Find the first existing config file for the given working directory.
    pub fn find_config_file(working_dir: &Path) -> Option<PathBuf> {
        let local = working_dir.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        let user = etcetera::choose_base_strategy()
            .ok()?
            .config_dir()
            .join("skitscript-lsp")
            .join("config.toml");
        user.is_file().then_some(user)
    }

    /// Load configuration from `explicit` if given, otherwise from the first
    /// config file found, otherwise the defaults.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::find_config_file(working_dir) {
            Some(path) => {
                tracing::info!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
