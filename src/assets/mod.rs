//! Bundled-asset sources.
//!
//! A bundled asset is a read-only resource packaged with the application and
//! addressed by a fixed logical path rather than a filesystem path. This
//! module defines the [`AssetSource`] trait through which the stager reads
//! such resources, plus two implementations: an in-memory table for
//! resources compiled into the binary and a directory-backed source for
//! resources shipped next to it.

use crate::core::{OcrError, StageStep};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Component, Path, PathBuf};

/// A read-only provider of bundled assets, keyed by logical path.
pub trait AssetSource {
    /// Opens the named asset as a byte stream.
    ///
    /// # Errors
    ///
    /// Returns `OcrError::AssetMissing` if the source has no asset under
    /// the given name, or a staging error if the asset exists but cannot
    /// be opened.
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, OcrError>;

    /// Returns true if the source has an asset under the given name.
    fn contains(&self, name: &str) -> bool;
}

/// An asset source backed by an in-memory name-to-bytes table.
///
/// This is the analog of resources compiled into the application bundle;
/// pair it with `include_bytes!` to embed assets at build time.
#[derive(Debug, Default)]
pub struct MemoryAssetSource {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an asset and returns the source, for chained construction.
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Adds an asset to the source, replacing any previous bytes under the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    /// Returns the number of assets in the source.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the source holds no assets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetSource for MemoryAssetSource {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, OcrError> {
        match self.entries.get(name) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(OcrError::asset_missing(name)),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// An asset source backed by a directory on disk.
///
/// Logical asset names are resolved as paths relative to the directory
/// root. Names that are absolute or traverse outside the root are rejected.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Creates a source rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a logical asset name to a path under the root.
    fn resolve(&self, name: &str) -> Result<PathBuf, OcrError> {
        let relative = Path::new(name);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir))
        {
            return Err(OcrError::invalid_input(format!(
                "asset name must stay inside the asset root: {name}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl AssetSource for DirAssetSource {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, OcrError> {
        let path = self.resolve(name)?;
        match std::fs::File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(OcrError::asset_missing(name))
            }
            Err(e) => Err(OcrError::staging(StageStep::OpenAsset, &path, e)),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.resolve(name).map(|p| p.is_file()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetSource, DirAssetSource, MemoryAssetSource};
    use crate::core::OcrError;
    use std::io::Read;

    #[test]
    fn memory_source_round_trips_bytes() {
        let source = MemoryAssetSource::new().with("test.jpg", &[0xFFu8; 16][..]);
        assert!(source.contains("test.jpg"));

        let mut bytes = Vec::new();
        source.open("test.jpg").unwrap().read_to_end(&mut bytes).unwrap();
        assert_eq!(bytes, vec![0xFF; 16]);
    }

    #[test]
    fn memory_source_reports_missing_assets() {
        let source = MemoryAssetSource::new();
        assert!(!source.contains("absent"));
        assert!(matches!(
            source.open("absent"),
            Err(OcrError::AssetMissing { name }) if name == "absent"
        ));
    }

    #[test]
    fn dir_source_reads_files_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("tessdata")).unwrap();
        std::fs::write(dir.path().join("tessdata/eng.traineddata"), b"model").unwrap();

        let source = DirAssetSource::new(dir.path());
        assert!(source.contains("tessdata/eng.traineddata"));

        let mut bytes = Vec::new();
        source
            .open("tessdata/eng.traineddata")
            .unwrap()
            .read_to_end(&mut bytes)
            .unwrap();
        assert_eq!(bytes, b"model");
    }

    #[test]
    fn dir_source_reports_missing_assets() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirAssetSource::new(dir.path());
        assert!(matches!(
            source.open("test.jpg"),
            Err(OcrError::AssetMissing { .. })
        ));
    }

    #[test]
    fn dir_source_rejects_traversing_names() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirAssetSource::new(dir.path());
        assert!(matches!(
            source.open("../outside"),
            Err(OcrError::InvalidInput { .. })
        ));
        assert!(!source.contains("../outside"));
    }
}
