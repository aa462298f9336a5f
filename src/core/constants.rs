//! Constants used throughout the staging pipeline.

/// Size in bytes of the intermediate buffer used by the stream-copy loop.
pub const COPY_BUFFER_SIZE: usize = 1024;

/// Default language code handed to the text-extraction engine.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Logical name of the bundled sample image.
pub const SAMPLE_IMAGE_ASSET: &str = "test.jpg";

/// Logical name of the bundled trained-model data file.
pub const TRAINED_DATA_ASSET: &str = "tessdata/eng.traineddata";

/// Name of the subdirectory holding trained-model data under the staging
/// root.
pub const TRAINED_DATA_DIR: &str = "tessdata";
