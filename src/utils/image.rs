//! Image loading utilities.
//!
//! The stager treats assets as opaque byte streams; these helpers exist for
//! the pipeline's preflight check, which confirms the staged image actually
//! decodes before the engine is pointed at it.

use crate::core::OcrError;
use image::{DynamicImage, RgbImage};

/// Converts a DynamicImage to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// # Errors
///
/// Returns an `OcrError::ImageLoad` error if the image cannot be loaded
/// from the specified path, or if there is an error during conversion.
pub fn load_image(path: &std::path::Path) -> Result<RgbImage, OcrError> {
    let img = image::open(path).map_err(OcrError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

#[cfg(test)]
mod tests {
    use super::load_image;
    use crate::core::OcrError;

    #[test]
    fn undecodable_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.jpg");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(load_image(&path), Err(OcrError::ImageLoad(_))));
    }

    #[test]
    fn decodable_images_load_as_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");
        image::RgbImage::from_pixel(4, 3, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(0, 0), &image::Rgb([10, 20, 30]));
    }
}
