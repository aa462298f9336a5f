//! The text-extraction engine contract.
//!
//! The engine is an external collaborator: this crate configures it, points
//! it at a staged image, and forwards the extracted text. Its internals are
//! opaque behind the [`TextExtractor`] trait. The real Tesseract binding is
//! compiled only when the `tesseract` feature is enabled, so the library
//! and its tests build without the native engine installed.

use crate::core::OcrError;
use std::path::Path;

/// A text-recognition engine that analyzes a staged image file.
pub trait TextExtractor {
    /// Returns the engine identifier (e.g., "tesseract").
    fn name(&self) -> &'static str;

    /// Analyzes the image at the given path and returns the extracted text.
    ///
    /// # Errors
    ///
    /// Returns `OcrError::Engine` if initialization, image ingestion, or
    /// extraction fails inside the engine.
    fn extract(&mut self, image: &Path) -> Result<String, OcrError>;
}

#[cfg(feature = "tesseract")]
mod tesseract;

#[cfg(feature = "tesseract")]
pub use self::tesseract::TesseractEngine;
