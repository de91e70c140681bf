// Copyright 2026 kube-ident Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI configuration: defaults, then an optional TOML file, then environment.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of a TOML config file.
pub const ENV_CONFIG_PATH: &str = "KUBE_IDENT_CONFIG";
/// `human` or `json`.
pub const ENV_OUTPUT: &str = "KUBE_IDENT_OUTPUT";
/// `text` or `json`.
pub const ENV_LOG_FORMAT: &str = "KUBE_IDENT_LOG_FORMAT";
/// Default tracing filter when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "KUBE_IDENT_LOG_LEVEL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

/// How validation results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Settings for the `kube-ident-cli` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputFormat,
    pub log_format: LogFormat,
    /// Tracing filter directive, e.g. `warn` or `kube_ident=debug`.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Human,
            log_format: LogFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_OUTPUT) {
            self.output = value.parse().map_err(|()| ConfigError::InvalidEnv {
                var: ENV_OUTPUT,
                value,
            })?;
        }

        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            self.log_format = value.parse().map_err(|()| ConfigError::InvalidEnv {
                var: ENV_LOG_FORMAT,
                value,
            })?;
        }

        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidEnv {
                    var: ENV_LOG_LEVEL,
                    value,
                });
            }
            self.log_level = value;
        }

        Ok(())
    }
}

/// Load configuration from `explicit_path` (or `KUBE_IDENT_CONFIG`) and the
/// process environment.
pub fn load(explicit_path: Option<&Path>) -> Result<CliConfig, ConfigError> {
    let env_path = std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from);
    let path = explicit_path.map(Path::to_path_buf).or(env_path);

    let mut config = match path {
        Some(path) => CliConfig::from_file(&path)?,
        None => CliConfig::default(),
    };
    config.apply_env(|key| std::env::var(key).ok())?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
