//! Engine configuration.
//!
//! Loaded from a TOML file (path via `NIGHTSHIFT_CONFIG`) with every field
//! optional; absent fields take the documented defaults. The configuration
//! carries the injected narrowband keyword list and the fallback setup and
//! horizon values applied to requests that omit them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ObservingSetup;
use crate::services::priority::{NarrowbandClassifier, DEFAULT_NARROWBAND_KEYWORDS};

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "NIGHTSHIFT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Fallback overhead and horizon values for requests without a full setup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetupDefaults {
    #[serde(default = "default_slew")]
    pub slew_min: f64,
    #[serde(default = "default_autofocus")]
    pub autofocus_min: f64,
    #[serde(default = "default_autofocus_interval")]
    pub autofocus_interval_min: f64,
    #[serde(default = "default_flip")]
    pub flip_min: f64,
    #[serde(default = "default_min_shoot")]
    pub min_shoot_min: f64,
    #[serde(default = "default_horizon")]
    pub horizon_deg: f64,
}

fn default_slew() -> f64 {
    5.0
}
fn default_autofocus() -> f64 {
    10.0
}
fn default_autofocus_interval() -> f64 {
    60.0
}
fn default_flip() -> f64 {
    5.0
}
fn default_min_shoot() -> f64 {
    30.0
}
fn default_horizon() -> f64 {
    20.0
}

impl Default for SetupDefaults {
    fn default() -> Self {
        Self {
            slew_min: default_slew(),
            autofocus_min: default_autofocus(),
            autofocus_interval_min: default_autofocus_interval(),
            flip_min: default_flip(),
            min_shoot_min: default_min_shoot(),
            horizon_deg: default_horizon(),
        }
    }
}

impl SetupDefaults {
    /// Observing setup with these defaults filled in.
    pub fn as_setup(&self) -> ObservingSetup {
        ObservingSetup {
            slew_min: self.slew_min,
            autofocus_min: self.autofocus_min,
            autofocus_interval_min: self.autofocus_interval_min,
            flip_min: self.flip_min,
            min_shoot_min: self.min_shoot_min,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Type-label keywords classifying a target as narrowband.
    /// An empty list falls back to the built-in keyword set.
    #[serde(default)]
    pub narrowband_keywords: Vec<String>,
    #[serde(default)]
    pub setup_defaults: SetupDefaults,
}

impl EngineConfig {
    /// Load from the file named by `NIGHTSHIFT_CONFIG`, or defaults when
    /// the variable is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Build the narrowband classifier from the configured keywords.
    pub fn classifier(&self) -> NarrowbandClassifier {
        if self.narrowband_keywords.is_empty() {
            NarrowbandClassifier::default()
        } else {
            NarrowbandClassifier::new(self.narrowband_keywords.iter().cloned())
        }
    }

    /// All built-in narrowband keywords, for documentation endpoints.
    pub fn default_keywords() -> &'static [&'static str] {
        DEFAULT_NARROWBAND_KEYWORDS
    }
}
