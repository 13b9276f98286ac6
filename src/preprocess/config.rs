//! Preprocessor configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::char_class::CharClass;
use crate::error::{Result, ScourError};

/// Configuration for a [`Preprocessor`](super::Preprocessor).
///
/// Every field has a default, so `{}` is a complete configuration.
///
/// # Examples
///
/// ```
/// use scour::preprocess::config::PreprocessorConfig;
///
/// let config = PreprocessorConfig::from_json_str(r#"{"remove_digits": false}"#).unwrap();
/// assert!(!config.remove_digits);
///
/// let config = PreprocessorConfig::from_json_str("{}").unwrap();
/// assert!(config.remove_digits);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreprocessorConfig {
    /// Drop ASCII digits from tokens along with punctuation.
    pub remove_digits: bool,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            remove_digits: true,
        }
    }
}

impl PreprocessorConfig {
    /// Create a configuration with the given digit handling.
    pub fn new(remove_digits: bool) -> Self {
        Self { remove_digits }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading preprocessor config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ScourError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Serialize this configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The character class tokens are filtered to.
    pub fn char_class(&self) -> CharClass {
        CharClass::from_remove_digits(self.remove_digits)
    }
}
