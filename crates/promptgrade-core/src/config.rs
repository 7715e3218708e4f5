//! Rubric configuration for promptgrade
//!
//! Resolution order: explicit path, `./promptgrade.toml`, the global config
//! file, then built-in defaults.

pub mod global;
pub mod types;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_config;
use crate::error::{GradeError, Result};
use crate::feature::FeatureCategory;

pub use types::{
    Config, FeatureConfig, FeaturesConfig, SamplingConfig, SamplingMode, ScoringConfig,
    SynthesisConfig, LABEL_THRESHOLD,
};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "promptgrade.toml";

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Local(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Global(_) => write!(f, "{}", global::source_display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GradeError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GradeError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Resolve the effective configuration
    #[tracing::instrument(skip(explicit, cwd))]
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GradeError::not_found("config file", path.display()));
            }
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Ok((Self::load(&local)?, ConfigSource::Local(local)));
        }

        if let Ok(path) = global::global_config_path() {
            if path.exists() {
                return Ok((Self::load(&path)?, ConfigSource::Global(path)));
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Reject values that would break score bounds or labelling
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;

        if !(0..=100).contains(&scoring.base_score) {
            bail_config!("base_score must be within 0..=100, got {}", scoring.base_score);
        }

        if !scoring.accuracy_weight.is_finite() || !scoring.length_weight.is_finite() {
            bail_config!("scoring weights must be finite numbers");
        }

        if scoring.accuracy_weight < 0.0 || scoring.length_weight < 0.0 {
            bail_config!("scoring weights must not be negative");
        }

        let total_weight = scoring.accuracy_weight + scoring.length_weight;
        if (total_weight - 1.0).abs() > 0.01 {
            bail_config!("scoring weights must sum to 1.0, got {}", total_weight);
        }

        // NaN fails the range check too
        if !(0.0..=100.0).contains(&scoring.label_threshold) {
            bail_config!(
                "label_threshold must be within 0..=100, got {}",
                scoring.label_threshold
            );
        }

        for category in FeatureCategory::ALL {
            let feature = self.features.get(category);
            if let Some(weight) = feature.weight {
                if !(0..=100).contains(&weight) {
                    bail_config!(
                        "features.{}.weight must be within 0..=100, got {}",
                        category,
                        weight
                    );
                }
            }
            if let Some(keywords) = &feature.keywords {
                if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
                    bail_config!("features.{}.keywords must be non-empty strings", category);
                }
            }
        }

        Ok(())
    }
}
