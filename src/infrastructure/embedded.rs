// SPDX-License-Identifier: MPL-2.0
//! Discovery of photos embedded into the binary at build time.
//!
//! `rust-embed` snapshots a folder when the crate is compiled (release builds
//! carry the bytes, debug builds read the folder that existed at compile time).
//! The set of files is therefore fixed for a given build.

use crate::application::port::{AssetDiscovery, DiscoveredAsset};
use crate::error::Result;
use crate::media;
use rust_embed::RustEmbed;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Photos shipped with the application, from `public/photos/`.
#[derive(RustEmbed)]
#[folder = "public/photos/"]
pub struct BundledPhotos;

/// Discovery adapter over any `rust-embed` folder.
pub struct EmbeddedDiscovery<E> {
    location: String,
    assets: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> EmbeddedDiscovery<E> {
    /// Creates an adapter that reports its keys under `/<location>/`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into().trim_matches('/').to_string(),
            assets: PhantomData,
        }
    }
}

impl EmbeddedDiscovery<BundledPhotos> {
    /// Adapter over the bundled `public/photos/` folder.
    pub fn bundled() -> Self {
        Self::new("public/photos")
    }
}

impl<E: RustEmbed> AssetDiscovery for EmbeddedDiscovery<E> {
    fn discover(&self) -> Result<Vec<DiscoveredAsset>> {
        let mut assets = Vec::new();

        for name in E::iter() {
            let name: &str = name.as_ref();
            // Top-level files only, like the filesystem scanner.
            if name.contains('/') || !media::is_supported_image(name) {
                continue;
            }

            match E::get(name) {
                Some(file) => assets.push(DiscoveredAsset::bytes(
                    format!("/{}/{}", self.location, name),
                    file.data,
                )),
                None => warn!(name, "Embedded file listed but not readable"),
            }
        }

        debug!(location = %self.location, count = assets.len(), "Listed embedded photos");
        Ok(assets)
    }

    fn location(&self) -> &str {
        &self.location
    }
}
