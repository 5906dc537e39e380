// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! `image` decoders and files embedded with `rust-embed`.
//!
//! # Available Adapters
//!
//! - [`decoder`]: Header-only dimension probe (implements [`ImageProbe`])
//! - [`embedded`]: Build-time embedded photos (implements [`AssetDiscovery`])
//!
//! The filesystem discovery adapter lives in [`crate::directory_scanner`].
//!
//! [`ImageProbe`]: crate::application::port::ImageProbe
//! [`AssetDiscovery`]: crate::application::port::AssetDiscovery

pub mod decoder;
pub mod embedded;

// Re-export main types for convenience
pub use decoder::DecoderProbe;
pub use embedded::{BundledPhotos, EmbeddedDiscovery};
