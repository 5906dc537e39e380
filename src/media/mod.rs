// SPDX-License-Identifier: MPL-2.0
//! Image format filtering and public URL resolution.
//!
//! Discovery adapters use [`is_supported_image`] to filter candidates; the
//! loader uses [`url::resolve_src`] to turn a discovery key into the URL handed
//! to the presentation layer.

pub mod url;

use std::path::Path;

// Re-export commonly used items
pub use extensions::IMAGE_EXTENSIONS;
pub use url::{file_name, resolve_src};

/// Supported image extensions
pub mod extensions {
    /// Extensions picked up by discovery. Fixed at build time.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

    /// Checks if an extension (without the dot) is in the allow-list,
    /// ignoring ASCII case.
    #[must_use]
    pub fn is_image_extension(ext: &str) -> bool {
        IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}

/// Checks if a path has a supported image extension.
#[must_use]
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(extensions::is_image_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_supported_image_accepts_allow_list() {
        assert!(is_supported_image("beach.jpg"));
        assert!(is_supported_image("beach.jpeg"));
        assert!(is_supported_image("beach.png"));
        assert!(is_supported_image("beach.webp"));
        assert!(is_supported_image("beach.gif"));
    }

    #[test]
    fn is_supported_image_ignores_case() {
        assert!(is_supported_image("BEACH.JPG"));
        assert!(is_supported_image("beach.Png"));
    }

    #[test]
    fn is_supported_image_rejects_other_formats() {
        assert!(!is_supported_image("beach.tiff"));
        assert!(!is_supported_image("beach.svg"));
        assert!(!is_supported_image("notes.txt"));
        assert!(!is_supported_image("jpg"));
        assert!(!is_supported_image("archive.jpg.zip"));
    }
}
