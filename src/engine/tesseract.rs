//! Tesseract engine binding.

use crate::core::constants::TRAINED_DATA_DIR;
use crate::core::OcrError;
use crate::engine::TextExtractor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A [`TextExtractor`] backed by the native Tesseract library.
///
/// The engine is configured with the staging root and a language code; it
/// resolves trained-model data from the root's `tessdata` subdirectory, the
/// layout the stager produces.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    data_root: PathBuf,
    language: String,
}

impl TesseractEngine {
    /// Creates an engine reading trained-model data under the given staging
    /// root, for the given language code.
    pub fn new(data_root: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            data_root: data_root.into(),
            language: language.into(),
        }
    }

    /// The directory the engine loads trained-model data from.
    pub fn tessdata_dir(&self) -> PathBuf {
        self.data_root.join(TRAINED_DATA_DIR)
    }
}

impl TextExtractor for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn extract(&mut self, image: &Path) -> Result<String, OcrError> {
        let tessdata = self.tessdata_dir();
        let datapath = tessdata.to_string_lossy();
        let image_path = image.to_string_lossy();

        debug!(
            datapath = %datapath,
            language = %self.language,
            image = %image_path,
            "initializing tesseract"
        );

        let tess = ::tesseract::Tesseract::new(Some(datapath.as_ref()), Some(self.language.as_str()))
            .map_err(|e| OcrError::engine("initialize", e))?;
        let mut tess = tess
            .set_image(image_path.as_ref())
            .map_err(|e| OcrError::engine("set image", e))?;
        let text = tess
            .get_text()
            .map_err(|e| OcrError::engine("extract text", e))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::TesseractEngine;
    use std::path::Path;

    #[test]
    fn tessdata_dir_is_under_the_staging_root() {
        let engine = TesseractEngine::new("/var/lib/app", "eng");
        assert_eq!(engine.tessdata_dir(), Path::new("/var/lib/app/tessdata"));
    }
}
