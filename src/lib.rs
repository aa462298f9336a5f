//! # ocr-stage
//!
//! A Rust library that materializes bundled, read-only OCR resources (a
//! sample image and a trained-model data file) into a writable
//! application-private directory tree, then hands the staged files to an
//! external text-recognition engine and returns the extracted text.
//!
//! ## Features
//!
//! - Bounded-buffer stream copy with byte-fidelity guarantees
//! - Pluggable bundled-asset sources (in-memory tables, directories)
//! - Explicit, differentiated staging errors instead of swallowed I/O
//!   failures
//! - Idempotent staging: re-running overwrites destinations in place
//! - Opaque text-extraction engine contract with an optional Tesseract
//!   binding behind the `tesseract` feature
//!
//! ## Modules
//!
//! * [`core`] - Error handling, configuration, and constants
//! * [`assets`] - Bundled-asset source trait and implementations
//! * [`stage`] - The asset stager and the stream-copy utility
//! * [`engine`] - The text-extraction engine contract
//! * [`pipeline`] - Stage-then-extract orchestration
//! * [`utils`] - Image loading and logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ocr_stage::prelude::*;
//!
//! # fn main() -> Result<(), OcrError> {
//! let assets = MemoryAssetSource::new()
//!     .with("test.jpg", &b"\xff\xd8\xff\xe0"[..])
//!     .with("tessdata/eng.traineddata", &b"model bytes"[..]);
//!
//! let stage = OcrStage::builder()
//!     .data_root("/var/lib/myapp")
//!     .verify_image(false)
//!     .build()?;
//!
//! let report = stage.stage(&assets)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## JSON Configuration
//!
//! ```rust
//! use ocr_stage::core::config::StageConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StageConfig::from_json(r#"
//! {
//!   "data_root": "/var/lib/myapp",
//!   "language": "eng"
//! }
//! "#)?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod core;
pub mod engine;
pub mod pipeline;
pub mod stage;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use ocr_stage::prelude::*;
/// ```
pub mod prelude {
    // Orchestration (essential)
    pub use crate::pipeline::{OcrStage, OcrStageBuilder, OcrStageOutcome};

    // Staging
    pub use crate::stage::{StageEntry, StageReport, StagedFile};

    // Asset sources
    pub use crate::assets::{AssetSource, DirAssetSource, MemoryAssetSource};

    // Engine contract
    pub use crate::engine::TextExtractor;

    // Error handling (essential)
    pub use crate::core::{OcrError, OcrResult, StageStep};

    // Image utility (minimal)
    pub use crate::utils::load_image;
}
