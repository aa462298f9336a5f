//! Error types for asset staging and text extraction.
//!
//! This module defines the error types that can occur while staging bundled
//! assets and querying the text-extraction engine, including asset lookup
//! errors, staging errors, image loading errors, and engine errors. It also
//! provides utility functions for creating these errors with appropriate
//! context.
//!
//! Every fallible operation in the crate returns a `Result` carrying one of
//! these errors; no failure is ever swallowed at the point of occurrence.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Enum identifying the step of the staging sequence an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStep {
    /// Error occurred while creating the destination's parent directory.
    CreateDir,
    /// Error occurred while opening the bundled source asset.
    OpenAsset,
    /// Error occurred while creating the destination file.
    CreateFile,
    /// Error occurred while copying bytes from source to destination.
    Copy,
}

impl std::fmt::Display for StageStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStep::CreateDir => write!(f, "directory creation"),
            StageStep::OpenAsset => write!(f, "asset open"),
            StageStep::CreateFile => write!(f, "file creation"),
            StageStep::Copy => write!(f, "byte copy"),
        }
    }
}

/// Enum representing the errors that can occur while staging assets and
/// extracting text.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The bundled-asset source has no resource under the requested name.
    #[error("bundled asset not found: {name}")]
    AssetMissing {
        /// The logical name that was requested.
        name: String,
    },

    /// An I/O failure during a specific step of the staging sequence.
    #[error("staging failed during {step}: {path}")]
    Staging {
        /// The step of the staging sequence that failed.
        step: StageStep,
        /// The filesystem path involved in the failure.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error occurred while loading the staged image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error reported by the external text-extraction engine.
    #[error("engine {context} failed")]
    Engine {
        /// The engine operation that failed.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error outside the staging sequence.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying an [`OcrError`].
pub type OcrResult<T> = Result<T, OcrError>;

/// Implementation of OcrError with utility functions for creating errors.
impl OcrError {
    /// Creates an OcrError for a missing bundled asset.
    pub fn asset_missing(name: impl Into<String>) -> Self {
        Self::AssetMissing { name: name.into() }
    }

    /// Creates an OcrError for a staging step failure.
    ///
    /// # Arguments
    ///
    /// * `step` - The step of the staging sequence that failed.
    /// * `path` - The filesystem path involved in the failure.
    /// * `source` - The underlying I/O error.
    pub fn staging(step: StageStep, path: &Path, source: std::io::Error) -> Self {
        Self::Staging {
            step,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an OcrError for an engine operation failure.
    ///
    /// # Arguments
    ///
    /// * `context` - The engine operation that failed.
    /// * `error` - The underlying error that caused this error.
    pub fn engine(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Engine {
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates an OcrError for invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an OcrError for configuration errors.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

/// Implementation of From<image::ImageError> for OcrError.
///
/// This allows image::ImageError to be automatically converted to OcrError.
impl From<image::ImageError> for OcrError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}

/// Implementation of From<crate::core::config::ConfigError> for OcrError.
///
/// This allows crate::core::config::ConfigError to be automatically converted to OcrError.
impl From<crate::core::config::ConfigError> for OcrError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::ConfigError {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OcrError, StageStep};
    use std::error::Error;
    use std::path::Path;

    #[test]
    fn staging_error_names_step_and_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = OcrError::staging(StageStep::CreateDir, Path::new("/data/tessdata"), io);
        let display = err.to_string();
        assert!(display.contains("directory creation"));
        assert!(display.contains("/data/tessdata"));
        assert!(err.source().is_some());
    }

    #[test]
    fn asset_missing_names_the_asset() {
        let err = OcrError::asset_missing("tessdata/eng.traineddata");
        assert_eq!(
            err.to_string(),
            "bundled asset not found: tessdata/eng.traineddata"
        );
    }

    #[test]
    fn config_error_converts_from_validation_error() {
        let err: OcrError = crate::core::config::ConfigError::NoEntries.into();
        assert!(matches!(err, OcrError::ConfigError { .. }));
    }
}
