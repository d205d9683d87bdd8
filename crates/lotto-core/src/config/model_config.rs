//! Top-level model configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{GenerationConfig, LearningConfig, UniquenessConfig};
use crate::constants::POOL_SIZE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LOTTO_*`)
/// 2. Config file passed to [`ModelConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    pub learning: LearningConfig,
    pub generation: GenerationConfig,
    pub uniqueness: UniquenessConfig,
}

impl ModelConfig {
    /// Load configuration from an optional TOML file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `LOTTO_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LOTTO_LEARNING_RATE").and_then(|s| s.parse().ok()) {
            self.learning.learning_rate = v;
        }
        if let Some(v) = lookup("LOTTO_CRITICAL_MIN_EVENTS").and_then(|s| s.parse().ok()) {
            self.learning.critical_min_events = v;
        }
        if let Some(v) = lookup("LOTTO_MAX_GENERATION_ATTEMPTS").and_then(|s| s.parse().ok()) {
            self.generation.max_attempts = v;
        }
        if let Some(v) = lookup("LOTTO_CANDIDATE_POOL_SIZE").and_then(|s| s.parse().ok()) {
            self.generation.pool_size = v;
        }
        if let Some(v) = lookup("LOTTO_SEED").and_then(|s| s.parse().ok()) {
            self.generation.seed = Some(v);
        }
        if let Some(v) = lookup("LOTTO_LOOKBACK_WINDOW").and_then(|s| s.parse().ok()) {
            self.uniqueness.lookback_window = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let learning = &self.learning;
        if !(learning.learning_rate.is_finite() && learning.learning_rate > 0.0) {
            return Err(invalid("learning.learning_rate", "must be a positive number"));
        }
        if !(learning.weight_floor > 0.0 && learning.weight_floor <= 1.0) {
            return Err(invalid("learning.weight_floor", "must be in (0.0, 1.0]"));
        }
        if !(learning.weight_ceiling.is_finite() && learning.weight_ceiling >= 1.0) {
            return Err(invalid("learning.weight_ceiling", "must be a finite value >= 1.0"));
        }
        if learning.critical_min_events == 0 {
            return Err(invalid("learning.critical_min_events", "must be greater than 0"));
        }
        if learning.hybrid_set_size * 2 > POOL_SIZE {
            return Err(invalid(
                "learning.hybrid_set_size",
                "cold and hot sets must fit in the pool without overlapping",
            ));
        }

        let generation = &self.generation;
        if generation.max_attempts == 0 {
            return Err(invalid("generation.max_attempts", "must be greater than 0"));
        }
        if generation.pool_size == 0 {
            return Err(invalid("generation.pool_size", "must be greater than 0"));
        }
        let boost_ok = |b: f64| b.is_finite() && b > 0.0;
        if !(boost_ok(generation.hybrid_boost) && boost_ok(generation.critical_boost)) {
            return Err(invalid("generation", "boost multipliers must be positive and finite"));
        }

        if self.uniqueness.lookback_window == 0 {
            return Err(invalid("uniqueness.lookback_window", "must be greater than 0"));
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
