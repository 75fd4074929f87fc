//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Category, FactorWeights, KeeperRules, ScoreThresholds, Slate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main engine configuration.
///
/// The slate defaults to the 10-category rotisserie baseball set; swap it
/// out per sport via the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Ordered category slate used for overall scoring
    #[serde(default = "default_slate")]
    pub slate: Slate,

    /// Power-ranking factor weights
    #[serde(default)]
    pub power_weights: FactorWeights,

    /// Boom/bust score cutoffs for power factor derivation
    #[serde(default)]
    pub thresholds: ScoreThresholds,

    /// Keeper rules applied when none are supplied per invocation
    #[serde(default)]
    pub keeper: KeeperRules,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_slate() -> Slate {
    vec![
        Category::new("runs", true),
        Category::new("hr", true),
        Category::new("rbi", true),
        Category::new("sb", true),
        Category::new("obp", true),
        Category::new("k", true),
        Category::new("w", true),
        Category::new("era", false),
        Category::new("whip", false),
        Category::new("svhd", true),
    ]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            slate: default_slate(),
            power_weights: FactorWeights::default(),
            thresholds: ScoreThresholds::default(),
            keeper: KeeperRules::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slate.is_empty() {
            return Err(ConfigError::ValidationError(
                "Category slate must not be empty".to_string(),
            ));
        }

        for (i, category) in self.slate.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Category ids must not be blank".to_string(),
                ));
            }
            if self.slate[..i].iter().any(|c| c.id == category.id) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate category id: {}",
                    category.id
                )));
            }
        }

        let w = &self.power_weights;
        for (name, value) in [
            ("wins", w.wins),
            ("overall_wins", w.overall_wins),
            ("points", w.points),
            ("recent_form", w.recent_form),
            ("consistency", w.consistency),
        ] {
            if value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "Factor weight '{}' must not be negative",
                    name
                )));
            }
        }
        if w.total() == 0.0 {
            return Err(ConfigError::ValidationError(
                "Factor weights must not all be zero".to_string(),
            ));
        }

        if self.thresholds.boom <= self.thresholds.bust {
            return Err(ConfigError::ValidationError(
                "Boom threshold must be above the bust threshold".to_string(),
            ));
        }

        if self.keeper.undrafted_round == 0 {
            return Err(ConfigError::ValidationError(
                "Undrafted keeper round must be at least 1".to_string(),
            ));
        }
        if self.keeper.earliest_eligible_round == Some(0) {
            return Err(ConfigError::ValidationError(
                "Earliest eligible keeper round must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
