// SPDX-License-Identifier: MPL-2.0
//! Asset discovery port definition.
//!
//! This module defines the [`AssetDiscovery`] trait: the capability that lists
//! every image bundled with the application. Adapters decide where the list
//! comes from (a folder on disk, files embedded at build time, a fixture in a
//! test); the loader only sees [`DiscoveredAsset`] values.

use crate::error::Result;
use std::borrow::Cow;
use std::path::PathBuf;

/// Where the bytes of a discovered asset can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// A file on the local filesystem.
    File(PathBuf),

    /// Bytes already in memory (embedded at build time or provided by a test).
    Bytes(Cow<'static, [u8]>),
}

/// One entry of a discovery result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAsset {
    /// Discovery key, e.g. `/public/photos/beach.jpg`. Only the last segment is
    /// used to build the public URL.
    pub path: String,

    /// Loadable reference used by the probe.
    pub source: AssetSource,
}

impl DiscoveredAsset {
    /// Creates an asset backed by a file on disk.
    #[must_use]
    pub fn file(path: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: AssetSource::File(file.into()),
        }
    }

    /// Creates an asset backed by in-memory bytes.
    #[must_use]
    pub fn bytes(path: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            path: path.into(),
            source: AssetSource::Bytes(bytes.into()),
        }
    }

    /// Returns the file name part of the discovery key.
    #[must_use]
    pub fn file_name(&self) -> &str {
        crate::media::file_name(&self.path)
    }
}

/// Port for enumerating bundled image assets.
///
/// Implementations return every asset whose extension is in
/// [`IMAGE_EXTENSIONS`](crate::media::IMAGE_EXTENSIONS). The order they return
/// is not significant: the loader sorts by file name.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`, the loader runs on a spawned task.
pub trait AssetDiscovery: Send + Sync {
    /// Lists the discovered assets.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying location cannot be read. An empty
    /// location is not an error and yields an empty list.
    fn discover(&self) -> Result<Vec<DiscoveredAsset>>;

    /// Human-readable name of the scanned location, used in messages
    /// (e.g. `public/photos`).
    fn location(&self) -> &str;
}
