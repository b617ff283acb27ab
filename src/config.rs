//! YAML configuration file support.
//!
//! A single file configures every layer of the engine: index token handling,
//! matcher scoring, and optional replacement synonym tables.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "storefront"
//!
//! index:
//!   min_token_chars: 3
//!   token_retention: monotonic   # or live_only
//!
//! matcher:
//!   max_results: 50
//!   fuzzy_threshold: 2
//!   featured_boost: 1.2
//!   weights:
//!     exact_name: 1000
//!     name_contains_query: 500
//!     name_contains_token: 100
//!     fuzzy_name: 50
//!     description_contains_token: 30
//!     color_filter: 150
//!     size_filter: 100
//!     category_filter: 200
//!
//! # Omit to keep the built-in tables.
//! colors:
//!   - key: azul
//!     aliases: ["azul marino", "celeste"]
//! ```

use std::fs;
use std::path::Path;

use canonical::SynonymGroup;
use index::IndexConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for a [`crate::SearchEngine`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SearchEngineConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    /// Replacement color synonym groups. `None` keeps the built-in table.
    #[serde(default)]
    pub colors: Option<Vec<SynonymGroup>>,

    /// Replacement size alias groups. `None` keeps the built-in table.
    #[serde(default)]
    pub sizes: Option<Vec<SynonymGroup>>,
}

impl SearchEngineConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SearchEngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.index
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        for (field, groups) in [("colors", &self.colors), ("sizes", &self.sizes)] {
            if matches!(groups, Some(groups) if groups.is_empty()) {
                return Err(ConfigLoadError::Validation(format!(
                    "{field} must list at least one group when present"
                )));
            }
        }

        Ok(())
    }
}

impl Default for SearchEngineConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            name: None,
            index: IndexConfig::default(),
            matcher: MatchConfig::default(),
            colors: None,
            sizes: None,
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}
