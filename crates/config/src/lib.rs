//! Configuration loading, validation, and management for Pathways.
//!
//! Loads configuration from `~/.pathways/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Finest probability step accepted for sweeps and scatters.
pub const MIN_PROBABILITY_STEP: f64 = 1e-6;

/// The root configuration structure.
///
/// Maps directly to `~/.pathways/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine behaviour
    #[serde(default)]
    pub engine: EngineConfig,

    /// Random string sampling defaults
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Length and probability sweeps
    #[serde(default)]
    pub scaling: ScalingConfig,

    /// Entropy scatter
    #[serde(default)]
    pub entropy: EntropyConfig,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Memoize (co)assembly indices within a context
    #[serde(default = "default_true")]
    pub use_cache: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { use_cache: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Strings drawn per data point
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Length of a single random string
    #[serde(default = "default_length")]
    pub length: usize,

    /// Probability of a `'1'`
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// RNG seed; drawn from the OS when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_samples() -> usize {
    10
}
fn default_length() -> usize {
    200
}
fn default_probability() -> f64 {
    0.5
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            length: default_length(),
            probability: default_probability(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Probability used by the length sweep
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// String length used by the probability sweep
    #[serde(default = "default_probability_length")]
    pub probability_length: usize,

    #[serde(default = "default_step")]
    pub probability_step: f64,
}

fn default_min_length() -> usize {
    10
}
fn default_max_length() -> usize {
    50
}
fn default_probability_length() -> usize {
    50
}
fn default_step() -> f64 {
    0.01
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            probability: default_probability(),
            probability_length: default_probability_length(),
            probability_step: default_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntropyConfig {
    #[serde(default = "default_entropy_length")]
    pub length: usize,

    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_entropy_length() -> usize {
    100
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            length: default_entropy_length(),
            step: default_step(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.pathways/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `PATHWAYS_SEED`
    /// - `PATHWAYS_SAMPLES`
    /// - `PATHWAYS_NO_CACHE`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load from `path` (or the default location) and apply environment
    /// overrides.
    pub fn load_with(path: Option<&Path>) -> Result<Self, ConfigError> {
        let default_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(path.unwrap_or(&default_path))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides looked up through `var`.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(seed) = var("PATHWAYS_SEED") {
            let seed = seed.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("PATHWAYS_SEED must be an integer >= 0, got {seed:?}"))
            })?;
            self.sampling.seed = Some(seed);
        }

        if let Some(samples) = var("PATHWAYS_SAMPLES") {
            self.sampling.samples = samples.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!("PATHWAYS_SAMPLES must be an integer, got {samples:?}"))
            })?;
        }

        if let Some(flag) = var("PATHWAYS_NO_CACHE") {
            let flag = flag.trim();
            if !flag.is_empty() && flag != "0" && !flag.eq_ignore_ascii_case("false") {
                self.engine.use_cache = false;
            }
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".pathways")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.samples == 0 {
            return Err(ConfigError::ValidationError(
                "sampling.samples must be at least 1".into(),
            ));
        }

        if self.sampling.length == 0 || self.scaling.probability_length == 0 || self.entropy.length == 0 {
            return Err(ConfigError::ValidationError(
                "string lengths must be at least 1".into(),
            ));
        }

        for (name, p) in [
            ("sampling.probability", self.sampling.probability),
            ("scaling.probability", self.scaling.probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be between 0.0 and 1.0"
                )));
            }
        }

        for (name, step) in [
            ("scaling.probability_step", self.scaling.probability_step),
            ("entropy.step", self.entropy.step),
        ] {
            if !(MIN_PROBABILITY_STEP..=1.0).contains(&step) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be between {MIN_PROBABILITY_STEP} and 1.0"
                )));
            }
        }

        if self.scaling.min_length == 0 || self.scaling.min_length > self.scaling.max_length {
            return Err(ConfigError::ValidationError(
                "scaling requires 1 <= min_length <= max_length".into(),
            ));
        }

        Ok(())
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> String {
        Self::default().to_toml()
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
