//! Configuration for the staging pipeline.
//!
//! This module provides the configuration structure consumed by the
//! orchestration layer, the error type produced when validation fails, and
//! the validation trait implemented by configuration types.

use crate::core::constants::{DEFAULT_LANGUAGE, SAMPLE_IMAGE_ASSET};
use crate::stage::{default_entries, StageEntry};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that the language code is empty or malformed.
    #[error("invalid language code: '{language}'")]
    InvalidLanguage {
        /// The rejected language code.
        language: String,
    },

    /// Error indicating that the staging plan contains no entries.
    #[error("staging plan contains no entries")]
    NoEntries,

    /// Error indicating that a staging entry names no asset.
    #[error("staging entry has an empty asset name")]
    EmptyAssetName,

    /// Error indicating that a destination path is not relative.
    #[error("destination must be relative to the staging root: {path}")]
    AbsoluteDestination {
        /// The rejected destination path.
        path: PathBuf,
    },

    /// Error indicating that a destination path escapes the staging root.
    #[error("destination must not traverse outside the staging root: {path}")]
    DestinationTraversal {
        /// The rejected destination path.
        path: PathBuf,
    },

    /// Error indicating that the analysis image is not produced by any
    /// staging entry.
    #[error("image '{path}' is not produced by any staging entry")]
    ImageNotStaged {
        /// The rejected image path.
        path: PathBuf,
    },

    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// A trait for validating configuration parameters.
pub trait ConfigValidator {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// A Result indicating success or a ConfigError if validation fails.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Returns the default configuration.
    fn get_defaults() -> Self
    where
        Self: Sized;

    /// Validates that a destination path stays inside the staging root.
    ///
    /// This method checks that the path is relative and contains no
    /// parent-directory components.
    ///
    /// # Arguments
    ///
    /// * `path` - The destination path to validate.
    ///
    /// # Returns
    ///
    /// A Result indicating success or a ConfigError if validation fails.
    fn validate_destination(&self, path: &Path) -> Result<(), ConfigError> {
        if path.is_absolute() {
            return Err(ConfigError::AbsoluteDestination {
                path: path.to_path_buf(),
            });
        }

        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir))
        {
            return Err(ConfigError::DestinationTraversal {
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Configuration for the staging pipeline.
///
/// Describes where staged files land, which assets are staged, which staged
/// file is handed to the engine, and the engine language code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Root of the writable application-private directory tree.
    pub data_root: PathBuf,

    /// Language code handed to the text-extraction engine.
    #[serde(default = "default_language")]
    pub language: String,

    /// The staging plan: one entry per bundled asset.
    #[serde(default = "default_entries")]
    pub entries: Vec<StageEntry>,

    /// Path of the staged image to analyze, relative to `data_root`.
    #[serde(default = "default_image")]
    pub image: PathBuf,

    /// Whether the staged image must decode before the engine is invoked.
    #[serde(default = "default_verify_image")]
    pub verify_image: bool,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_image() -> PathBuf {
    PathBuf::from(SAMPLE_IMAGE_ASSET)
}

fn default_verify_image() -> bool {
    true
}

impl StageConfig {
    /// Creates a configuration with the default staging plan rooted at the
    /// given directory.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            language: default_language(),
            entries: default_entries(),
            image: default_image(),
            verify_image: default_verify_image(),
        }
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the JSON is malformed or the parsed
    /// configuration fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StageConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidConfig {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read, the JSON is
    /// malformed, or the parsed configuration fails validation.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::InvalidConfig {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&json)
    }
}

impl ConfigValidator for StageConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_language(&self.language) {
            return Err(ConfigError::InvalidLanguage {
                language: self.language.clone(),
            });
        }

        if self.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for entry in &self.entries {
            if entry.asset.is_empty() {
                return Err(ConfigError::EmptyAssetName);
            }
            self.validate_destination(&entry.dest)?;
        }

        self.validate_destination(&self.image)?;
        if !self.entries.iter().any(|e| e.dest == self.image) {
            return Err(ConfigError::ImageNotStaged {
                path: self.image.clone(),
            });
        }

        Ok(())
    }

    fn get_defaults() -> Self {
        Self::new(PathBuf::from("."))
    }
}

/// Checks a language code against the engine's naming convention: a leading
/// ASCII letter followed by letters, digits, underscores, or `+` separators
/// for multi-language codes.
fn is_valid_language(language: &str) -> bool {
    let mut chars = language.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '+')
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ConfigValidator, StageConfig};
    use crate::stage::StageEntry;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        let config = StageConfig::new("/var/lib/app");
        assert!(config.validate().is_ok());
        assert_eq!(config.language, "eng");
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.image, PathBuf::from("test.jpg"));
    }

    #[test]
    fn empty_language_is_rejected() {
        let mut config = StageConfig::new("/var/lib/app");
        config.language = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLanguage { .. })
        ));
    }

    #[test]
    fn multi_language_codes_are_accepted() {
        let mut config = StageConfig::new("/var/lib/app");
        config.language = "eng+chi_sim".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_plan_is_rejected() {
        let mut config = StageConfig::new("/var/lib/app");
        config.entries.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoEntries)));
    }

    #[test]
    fn absolute_destination_is_rejected() {
        let mut config = StageConfig::new("/var/lib/app");
        config.entries[0] = StageEntry::new("test.jpg", "/etc/test.jpg");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AbsoluteDestination { .. })
        ));
    }

    #[test]
    fn traversing_destination_is_rejected() {
        let mut config = StageConfig::new("/var/lib/app");
        config.entries[0] = StageEntry::new("test.jpg", "../test.jpg");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DestinationTraversal { .. })
        ));
    }

    #[test]
    fn image_must_be_covered_by_an_entry() {
        let mut config = StageConfig::new("/var/lib/app");
        config.image = PathBuf::from("other.jpg");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ImageNotStaged { .. })
        ));
    }

    #[test]
    fn json_config_fills_in_defaults() {
        let config = StageConfig::from_json(r#"{ "data_root": "/var/lib/app" }"#).unwrap();
        assert_eq!(config.language, "eng");
        assert_eq!(config.entries.len(), 2);
        assert!(config.verify_image);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            StageConfig::from_json("{ not json"),
            Err(ConfigError::InvalidConfig { .. })
        ));
    }
}
