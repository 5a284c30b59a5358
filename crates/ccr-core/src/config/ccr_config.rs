//! Top-level CCR configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{DataConfig, ObservabilityConfig, RankingConfig};
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CCR_*`)
/// 2. Config file (`ccr.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CcrConfig {
    pub ranking: RankingConfig,
    pub data: DataConfig,
    pub observability: ObservabilityConfig,
}

impl CcrConfig {
    /// Load configuration from `path` (if it exists), apply `CCR_*`
    /// environment overrides, renormalize factor weights, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.finalize()?;
        Ok(config)
    }

    /// Parse a config file without env overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string, then renormalize and validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.finalize()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (`std::env::var` in production).
    ///
    /// Recognized keys: `CCR_MASTER_WEIGHT`, `CCR_SCHOOLS_PATH`, `CCR_LOG_LEVEL`.
    /// Unparseable values are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("CCR_MASTER_WEIGHT") {
            match raw.trim().parse::<f64>() {
                Ok(value) => self.ranking.master_weight = value,
                Err(_) => warn!(value = %raw, "ignoring unparseable CCR_MASTER_WEIGHT"),
            }
        }
        if let Some(path) = lookup("CCR_SCHOOLS_PATH") {
            self.data.schools_path = path;
        }
        if let Some(level) = lookup("CCR_LOG_LEVEL") {
            self.observability.log_level = level.trim().to_ascii_lowercase();
        }
    }

    /// Renormalize factor weights so they sum to 1, then validate.
    pub fn finalize(&mut self) -> Result<(), ConfigError> {
        self.ranking.factor_weights = self.ranking.factor_weights.normalized();
        Self::validate(self)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CcrConfig) -> Result<(), ConfigError> {
        let master = config.ranking.master_weight;
        if !master.is_finite() || !(0.0..=1.0).contains(&master) {
            return Err(ConfigError::ValidationFailed {
                field: "ranking.master_weight".to_string(),
                message: format!("must be between 0.0 and 1.0, got {master}"),
            });
        }
        config
            .ranking
            .factor_weights
            .validate()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "ranking.factor_weights".to_string(),
                message: e.to_string(),
            })?;
        if config.data.schools_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "data.schools_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}, got `{}`",
                    LOG_LEVELS.join(", "),
                    config.observability.log_level
                ),
            });
        }
        Ok(())
    }
}
