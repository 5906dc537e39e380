// SPDX-License-Identifier: MPL-2.0
//! Dimension probing with the `image` crate decoders.
//!
//! Only the header is parsed (`ImageReader::into_dimensions`); pixel data is
//! never decoded.

use crate::application::port::probe::checked_dimensions;
use crate::application::port::{AssetSource, DiscoveredAsset, ImageProbe, ProbeError};
use crate::domain::media::Dimensions;
use futures_util::future::{BoxFuture, FutureExt};
use image_rs::{ImageError, ImageReader};
use std::io::Cursor;

/// Probe reading image headers on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderProbe;

impl DecoderProbe {
    /// Creates a probe backed by the `image` crate decoders.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageProbe for DecoderProbe {
    fn probe<'a>(
        &'a self,
        asset: &'a DiscoveredAsset,
    ) -> BoxFuture<'a, Result<Dimensions, ProbeError>> {
        let source = asset.source.clone();
        async move {
            tokio::task::spawn_blocking(move || read_dimensions(&source))
                .await
                .map_err(|e| ProbeError::Unexpected(e.to_string()))?
        }
        .boxed()
    }
}

/// Reads the natural dimensions of an asset synchronously.
///
/// The format is guessed from the content; for files the extension is used
/// when the content has no recognizable signature.
///
/// # Errors
///
/// Returns a [`ProbeError`] if the source cannot be read, the format is
/// unknown, the header is corrupted, or a dimension is zero.
pub fn read_dimensions(source: &AssetSource) -> Result<Dimensions, ProbeError> {
    let (width, height) = match source {
        AssetSource::File(path) => ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions(),
        AssetSource::Bytes(bytes) => ImageReader::new(Cursor::new(bytes.as_ref()))
            .with_guessed_format()?
            .into_dimensions(),
    }
    .map_err(ProbeError::from)?;

    checked_dimensions(width, height)
}

impl From<ImageError> for ProbeError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => io.into(),
            ImageError::Unsupported(e) => ProbeError::UnsupportedFormat(e.to_string()),
            ImageError::Decoding(e) => ProbeError::Corrupted(e.to_string()),
            ImageError::Limits(e) => ProbeError::Corrupted(e.to_string()),
            other => ProbeError::Unexpected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("failed to encode png");
        bytes
    }

    #[test]
    fn read_png_file_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let dims = read_dimensions(&AssetSource::File(image_path)).expect("png should probe");
        assert_eq!((dims.width(), dims.height()), (4, 2));
    }

    #[test]
    fn read_bytes_returns_expected_dimensions() {
        let source = AssetSource::Bytes(png_bytes(7, 3).into());
        let dims = read_dimensions(&source).expect("png bytes should probe");
        assert_eq!((dims.width(), dims.height()), (7, 3));
    }

    #[test]
    fn format_is_guessed_from_content_not_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let misnamed = temp_dir.path().join("actually_png.jpg");
        fs::write(&misnamed, png_bytes(5, 5)).expect("failed to write png");

        let dims = read_dimensions(&AssetSource::File(misnamed)).expect("png content should probe");
        assert_eq!((dims.width(), dims.height()), (5, 5));
    }

    #[test]
    fn missing_file_returns_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.png");

        assert_eq!(
            read_dimensions(&AssetSource::File(missing)),
            Err(ProbeError::NotFound)
        );
    }

    #[test]
    fn invalid_bytes_return_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        assert!(read_dimensions(&AssetSource::File(bad_path)).is_err());
    }

    #[test]
    fn unknown_in_memory_format_is_unsupported() {
        let source = AssetSource::Bytes(b"plain text".to_vec().into());
        assert!(matches!(
            read_dimensions(&source),
            Err(ProbeError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn probe_runs_on_blocking_pool() {
        let asset = DiscoveredAsset::bytes("/public/photos/red.png", png_bytes(9, 4));
        let dims = DecoderProbe::new()
            .probe(&asset)
            .await
            .expect("probe should succeed");
        assert_eq!((dims.width(), dims.height()), (9, 4));
    }
}
