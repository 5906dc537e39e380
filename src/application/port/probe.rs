// SPDX-License-Identifier: MPL-2.0
//! Image probe port definition.
//!
//! A probe reads the natural width and height of one discovered asset. It is
//! asynchronous so adapters can offload blocking reads, and so tests can
//! control completion order.

use crate::application::port::DiscoveredAsset;
use crate::domain::media::Dimensions;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// ProbeError
// =============================================================================

/// Errors that can occur while probing a single image.
///
/// These never reach the consumer: the loader logs them and drops the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The file was not found.
    NotFound,

    /// The file could not be read (I/O error).
    Io(String),

    /// The content is not a format the decoder understands.
    UnsupportedFormat(String),

    /// The header is corrupted or truncated.
    Corrupted(String),

    /// The header declares a zero width or height.
    InvalidDimensions {
        /// The width that was detected.
        width: u32,
        /// The height that was detected.
        height: u32,
    },

    /// Anything else, e.g. the worker running the probe panicked.
    Unexpected(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::NotFound => write!(f, "File not found"),
            ProbeError::Io(msg) => write!(f, "I/O error: {msg}"),
            ProbeError::UnsupportedFormat(msg) => write!(f, "Unsupported image format: {msg}"),
            ProbeError::Corrupted(msg) => write!(f, "Corrupted image data: {msg}"),
            ProbeError::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height}")
            }
            ProbeError::Unexpected(msg) => write!(f, "Probe failed: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ProbeError::NotFound
        } else {
            ProbeError::Io(err.to_string())
        }
    }
}

/// Converts raw dimensions into [`Dimensions`], rejecting zero axes.
///
/// # Errors
///
/// Returns [`ProbeError::InvalidDimensions`] if either axis is zero.
pub fn checked_dimensions(width: u32, height: u32) -> Result<Dimensions, ProbeError> {
    Dimensions::new(width, height).ok_or(ProbeError::InvalidDimensions { width, height })
}

// =============================================================================
// ImageProbe Trait
// =============================================================================

/// Port for reading the natural dimensions of an image.
///
/// # Example
///
/// ```ignore
/// use local_photos::application::port::{DiscoveredAsset, ImageProbe};
///
/// async fn print_size(probe: &impl ImageProbe, asset: &DiscoveredAsset) {
///     match probe.probe(asset).await {
///         Ok(dims) => println!("{}: {}x{}", asset.path, dims.width(), dims.height()),
///         Err(e) => eprintln!("Failed to probe: {e}"),
///     }
/// }
/// ```
pub trait ImageProbe: Send + Sync {
    /// Reads the natural width and height of `asset`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] if the asset cannot be read or its header
    /// cannot be decoded.
    fn probe<'a>(&'a self, asset: &'a DiscoveredAsset)
        -> BoxFuture<'a, Result<Dimensions, ProbeError>>;
}
