//! Asset staging.
//!
//! This module materializes bundled, read-only assets into a writable
//! directory tree. Each staging entry names a source asset and a
//! destination path relative to the staging root; staging ensures the
//! destination's parent directory exists, then copies all bytes from the
//! asset to the destination through a bounded buffer.
//!
//! Staging is idempotent at the file level: destinations are overwritten in
//! place, and re-running a plan produces byte-identical files. Failures at
//! any step are reported to the caller with the step and path that failed.

pub mod copy;

pub use copy::copy_stream;

use crate::assets::AssetSource;
use crate::core::constants::{SAMPLE_IMAGE_ASSET, TRAINED_DATA_ASSET};
use crate::core::{OcrError, StageStep};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One staging instruction: a bundled asset and its destination relative to
/// the staging root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageEntry {
    /// Logical name of the bundled asset to read.
    pub asset: String,
    /// Destination path, relative to the staging root.
    pub dest: PathBuf,
}

impl StageEntry {
    /// Creates a staging entry.
    pub fn new(asset: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            asset: asset.into(),
            dest: dest.into(),
        }
    }
}

/// The default staging plan: the sample image at the root and the trained
/// model data under its subdirectory, both keeping their bundled names.
pub fn default_entries() -> Vec<StageEntry> {
    vec![
        StageEntry::new(SAMPLE_IMAGE_ASSET, SAMPLE_IMAGE_ASSET),
        StageEntry::new(TRAINED_DATA_ASSET, TRAINED_DATA_ASSET),
    ]
}

/// Record of one staged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Logical name of the bundled asset that was read.
    pub asset: String,
    /// Absolute destination path the bytes were written to.
    pub path: PathBuf,
    /// Number of bytes copied.
    pub bytes_copied: u64,
}

/// Result of staging a plan: the root it ran against and a record per file,
/// in plan order.
#[derive(Debug, Clone)]
pub struct StageReport {
    /// The staging root the plan ran against.
    pub root: PathBuf,
    /// One record per staged file, in plan order.
    pub files: Vec<StagedFile>,
}

impl StageReport {
    /// Total number of bytes copied across all staged files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes_copied).sum()
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Staged {} file(s) under {}:", self.files.len(), self.root.display())?;
        for file in &self.files {
            writeln!(
                f,
                "  {} -> {} ({} bytes)",
                file.asset,
                file.path.display(),
                file.bytes_copied
            )?;
        }
        write!(f, "  total: {} bytes", self.total_bytes())
    }
}

/// Stages a single entry under the given root.
///
/// Ensures the destination's parent directory exists, opens the bundled
/// asset, creates (or truncates) the destination file, and copies all bytes
/// through a bounded buffer.
///
/// # Errors
///
/// Returns `OcrError::AssetMissing` if the source has no such asset, or
/// `OcrError::Staging` naming the failed step and path for any I/O failure.
pub fn stage_entry(
    source: &dyn AssetSource,
    root: &Path,
    entry: &StageEntry,
) -> Result<StagedFile, OcrError> {
    let dest = root.join(&entry.dest);

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| OcrError::staging(StageStep::CreateDir, parent, e))?;
    }

    let mut reader = source.open(&entry.asset)?;
    let mut writer =
        File::create(&dest).map_err(|e| OcrError::staging(StageStep::CreateFile, &dest, e))?;

    let bytes_copied = copy_stream(reader.as_mut(), &mut writer)
        .map_err(|e| OcrError::staging(StageStep::Copy, &dest, e))?;

    debug!(
        asset = %entry.asset,
        path = %dest.display(),
        bytes = bytes_copied,
        "staged asset"
    );

    Ok(StagedFile {
        asset: entry.asset.clone(),
        path: dest,
        bytes_copied,
    })
}

/// Stages every entry of a plan under the given root, in order.
///
/// Stops at the first failure; files staged before the failure remain on
/// disk, and nothing downstream is invoked against a partially staged tree.
///
/// # Errors
///
/// Returns the error of the first entry that fails to stage.
pub fn stage_all(
    source: &dyn AssetSource,
    root: &Path,
    entries: &[StageEntry],
) -> Result<StageReport, OcrError> {
    info!(root = %root.display(), count = entries.len(), "staging assets");

    let mut files = Vec::with_capacity(entries.len());
    for entry in entries {
        files.push(stage_entry(source, root, entry)?);
    }

    Ok(StageReport {
        root: root.to_path_buf(),
        files,
    })
}
