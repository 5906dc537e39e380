// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.

// ==========================================================================
// Discovery Defaults
// ==========================================================================

/// Folder, relative to the project root, that holds the bundled photos.
pub const DEFAULT_PHOTO_DIRECTORY: &str = "public/photos";

/// Whether the CLI uses the build-time bundle instead of scanning a folder.
pub const DEFAULT_USE_EMBEDDED: bool = false;

// ==========================================================================
// URL Defaults
// ==========================================================================

/// Base URL used when neither the config nor the environment provides one.
pub const DEFAULT_BASE_URL: &str = "/";

/// Environment variable holding the deployment base URL.
pub const ENV_BASE_URL: &str = "BASE_URL";

/// Path segment inserted between the base URL and the file name.
pub const DEFAULT_URL_SEGMENT: &str = "photos/";
