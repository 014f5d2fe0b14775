//! Indicator configuration.
//!
//! Built once at startup and handed to `IndicatorCalculator`; nothing in
//! this crate reads configuration from global state after that.
//!
//! Sources, in increasing precedence:
//!   1. built-in defaults (k = 0.85, 7 days)
//!   2. an optional TOML file
//!   3. `ARI_DECAY_FACTOR` / `ARI_DAYS` from the environment (or `.env`)
//!
//! Example file:
//! ```toml
//! ari_decay_factor = 0.9
//! ari_days = 5
//! ```

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::analysis::validate_decay_factor;
use crate::logging::{self, Component};
use crate::model::{DEFAULT_ARI_DAYS, DEFAULT_ARI_DECAY_FACTOR, IndicatorError};

pub const ENV_ARI_DECAY_FACTOR: &str = "ARI_DECAY_FACTOR";
pub const ENV_ARI_DAYS: &str = "ARI_DAYS";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Recession coefficient `k` for the ARI.
    pub ari_decay_factor: f64,
    /// Number of daily values the calculator feeds into the ARI.
    pub ari_days: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ari_decay_factor: DEFAULT_ARI_DECAY_FACTOR,
            ari_days: DEFAULT_ARI_DAYS,
        }
    }
}

impl IndicatorConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: IndicatorConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&contents)?;
        logging::info(
            Component::Config,
            None,
            &format!("Loaded indicator config from {}", path.display()),
        );
        Ok(config)
    }

    /// Defaults with the process environment applied on top. A `.env` file
    /// in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let result = Self::default().with_overrides(|key| std::env::var(key).ok());
        if let Err(ref err) = result {
            logging::error(
                Component::Config,
                None,
                &format!("Environment config rejected: {}", err),
            );
        }
        result
    }

    /// Applies `ARI_DECAY_FACTOR` / `ARI_DAYS` as returned by `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_ARI_DECAY_FACTOR) {
            self.ari_decay_factor = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_ARI_DECAY_FACTOR.to_string(),
                value: raw.clone(),
            })?;
            logging::debug(
                Component::Config,
                None,
                &format!("{} overridden to {}", ENV_ARI_DECAY_FACTOR, self.ari_decay_factor),
            );
        }

        if let Some(raw) = lookup(ENV_ARI_DAYS) {
            self.ari_days = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_ARI_DAYS.to_string(),
                value: raw.clone(),
            })?;
            logging::debug(
                Component::Config,
                None,
                &format!("{} overridden to {}", ENV_ARI_DAYS, self.ari_days),
            );
        }

        self.validate()?;
        Ok(self)
    }

    /// Checks that `k` lies in (0, 1) and the ARI window is at least one day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_decay_factor(self.ari_decay_factor)?;
        if self.ari_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ari_days".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(String),
    /// The config file is not valid TOML or has unexpected keys.
    Parse(String),
    /// An override could not be parsed, or a window length is unusable.
    InvalidValue { key: String, value: String },
    /// A parsed value failed domain validation.
    Invalid(IndicatorError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config read error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: '{}'", key, value)
            }
            ConfigError::Invalid(err) => write!(f, "Invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<IndicatorError> for ConfigError {
    fn from(err: IndicatorError) -> Self {
        ConfigError::Invalid(err)
    }
}
