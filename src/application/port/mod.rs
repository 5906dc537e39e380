// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`discovery`]: Enumerating the bundled image assets
//! - [`probe`]: Reading the natural dimensions of one asset
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so the loader can be shared with a spawned task
//! - Methods return `Result` with port-specific error types
//! - Probing is asynchronous and returns a boxed future (no `async fn` in traits)

pub mod discovery;
pub mod probe;

pub use discovery::{AssetDiscovery, AssetSource, DiscoveredAsset};
pub use probe::{ImageProbe, ProbeError};
