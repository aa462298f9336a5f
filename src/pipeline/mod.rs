//! Stage-then-extract orchestration.
//!
//! [`OcrStage`] runs the single linear sequence this crate exists for:
//! stage every bundled asset into the writable root, optionally confirm the
//! staged image decodes, then hand the staged image path to the
//! text-extraction engine and return its output. A failure at any step
//! propagates to the caller; the engine is never invoked against a
//! partially staged tree.

use crate::assets::AssetSource;
use crate::core::{ConfigValidator, OcrError, StageConfig};
use crate::engine::TextExtractor;
use crate::stage::{stage_all, StageEntry, StageReport};
use crate::utils::load_image;
use std::path::PathBuf;
use tracing::{debug, info};

/// Builder for [`OcrStage`].
///
/// The staging root is required; language, staging plan, analysis image,
/// and image verification fall back to their defaults.
#[derive(Debug, Default)]
pub struct OcrStageBuilder {
    data_root: Option<PathBuf>,
    language: Option<String>,
    entries: Option<Vec<StageEntry>>,
    image: Option<PathBuf>,
    verify_image: Option<bool>,
}

impl OcrStageBuilder {
    /// Creates a builder with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root of the writable directory tree to stage into.
    pub fn data_root(mut self, data_root: impl Into<PathBuf>) -> Self {
        self.data_root = Some(data_root.into());
        self
    }

    /// Sets the language code handed to the engine.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replaces the staging plan.
    pub fn entries(mut self, entries: Vec<StageEntry>) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Appends one entry to the staging plan.
    pub fn entry(mut self, entry: StageEntry) -> Self {
        self.entries.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Sets the staged image to analyze, relative to the staging root.
    pub fn image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets whether the staged image must decode before the engine runs.
    pub fn verify_image(mut self, verify_image: bool) -> Self {
        self.verify_image = Some(verify_image);
        self
    }

    /// Builds the stage, validating the assembled configuration.
    ///
    /// # Errors
    ///
    /// Returns `OcrError::ConfigError` if the staging root is missing or
    /// the configuration fails validation.
    pub fn build(self) -> Result<OcrStage, OcrError> {
        let data_root = self
            .data_root
            .ok_or_else(|| OcrError::config_error("data_root is required"))?;

        let mut config = StageConfig::new(data_root);
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(entries) = self.entries {
            config.entries = entries;
        }
        if let Some(image) = self.image {
            config.image = image;
        }
        if let Some(verify_image) = self.verify_image {
            config.verify_image = verify_image;
        }

        OcrStage::from_config(config)
    }
}

/// Output of a full stage-then-extract run.
#[derive(Debug, Clone)]
pub struct OcrStageOutcome {
    /// Record of the staged files.
    pub report: StageReport,
    /// The text the engine extracted from the staged image.
    pub text: String,
}

/// The staging pipeline: a validated configuration plus the operations to
/// stage assets and run the engine against them.
#[derive(Debug, Clone)]
pub struct OcrStage {
    config: StageConfig,
}

impl OcrStage {
    /// Creates a builder.
    pub fn builder() -> OcrStageBuilder {
        OcrStageBuilder::new()
    }

    /// Creates a stage from an existing configuration, validating it.
    ///
    /// # Errors
    ///
    /// Returns `OcrError::ConfigError` if the configuration is invalid.
    pub fn from_config(config: StageConfig) -> Result<Self, OcrError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this stage runs with.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Absolute path the analysis image is staged at.
    pub fn staged_image_path(&self) -> PathBuf {
        self.config.data_root.join(&self.config.image)
    }

    /// Stages every asset in the plan into the staging root.
    ///
    /// # Errors
    ///
    /// Returns the error of the first entry that fails to stage.
    pub fn stage(&self, source: &dyn AssetSource) -> Result<StageReport, OcrError> {
        stage_all(source, &self.config.data_root, &self.config.entries)
    }

    /// Stages every asset, then runs the engine against the staged image.
    ///
    /// The staged image is decoded first as a preflight check unless
    /// `verify_image` is disabled in the configuration.
    ///
    /// # Errors
    ///
    /// Propagates staging errors, preflight image errors, and engine
    /// errors. The engine is not invoked if anything before it fails.
    pub fn run(
        &self,
        source: &dyn AssetSource,
        engine: &mut dyn TextExtractor,
    ) -> Result<OcrStageOutcome, OcrError> {
        let report = self.stage(source)?;
        let image_path = self.staged_image_path();

        if self.config.verify_image {
            let image = load_image(&image_path)?;
            debug!(
                image = %image_path.display(),
                width = image.width(),
                height = image.height(),
                "staged image verified"
            );
        }

        info!(
            engine = engine.name(),
            image = %image_path.display(),
            language = %self.config.language,
            "extracting text"
        );
        let text = engine.extract(&image_path)?;

        Ok(OcrStageOutcome { report, text })
    }
}
