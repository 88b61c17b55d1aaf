//! Top-level configuration with layered resolution.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{ObservabilityConfig, OutputConfig, OutputStyle, PredictorConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment (`QUERYTYPE_LOG`)
/// 3. Config file passed with `--config`
/// 4. Compiled defaults
///
/// No file is read unless one is named explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerytypeConfig {
    pub predictor: PredictorConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_style: Option<OutputStyle>,
    pub log_level: Option<String>,
}

impl QuerytypeConfig {
    /// Resolve the effective configuration for one invocation.
    pub fn resolve(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::read_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load and validate a single TOML file, without env or CLI layers.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides through `lookup`, so tests need not touch
    /// the process environment.
    ///
    /// Blank or unparseable filters are ignored; the environment never fails a run.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(constants::LOG_ENV_VAR) {
            if !filter.trim().is_empty() && EnvFilter::try_new(&filter).is_ok() {
                self.observability.log_level = filter;
            }
        }
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(style) = cli.output_style {
            self.output.style = style;
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !constants::KNOWN_PREDICTORS.contains(&self.predictor.kind.as_str()) {
            return Err(ConfigError::UnknownPredictor {
                kind: self.predictor.kind.clone(),
            });
        }
        if let Some(ref model_path) = self.predictor.model_path {
            if model_path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "predictor.model_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Err(e) = EnvFilter::try_new(&self.observability.log_level) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("invalid filter directives: {e}"),
            });
        }
        Ok(())
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
