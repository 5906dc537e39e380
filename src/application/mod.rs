// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`loader`]: The load cycle that turns discovered assets into media items
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The mount handle in [`crate::app`] drives the loader

pub mod loader;
pub mod port;

pub use loader::{BaseUrl, ImageLoader};
