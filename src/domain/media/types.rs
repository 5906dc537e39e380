// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use serde::Serialize;

/// Prefix of the identifier given to every loaded item (`local-1`, `local-2`, ...).
pub const ID_PREFIX: &str = "local";

/// Prefix of the generated alt text (`Local image 1`, ...).
pub const ALT_PREFIX: &str = "Local image";

/// Intrinsic pixel size of an image, guaranteed to be non-zero on both axes.
///
/// # Example
///
/// ```
/// use local_photos::domain::media::Dimensions;
///
/// let dims = Dimensions::new(640, 480).expect("non-zero dimensions");
/// assert_eq!(dims.width(), 640);
/// assert!(Dimensions::new(0, 480).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Creates new dimensions, returning `None` if either axis is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

/// A discovered image that loaded successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    /// Position-based identifier, unique within one load cycle.
    pub id: String,
    /// URL the presentation layer can fetch or render.
    pub src: String,
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// Alt text derived from the position.
    pub alt: String,
}

impl MediaItem {
    /// Builds the item for the asset at `index` (zero-based discovery position).
    #[must_use]
    pub fn new(index: usize, src: String, dimensions: Dimensions) -> Self {
        let position = index + 1;
        Self {
            id: format!("{ID_PREFIX}-{position}"),
            src,
            width: dimensions.width(),
            height: dimensions.height(),
            alt: format!("{ALT_PREFIX} {position}"),
        }
    }
}

/// What the consumer observes about a load cycle.
///
/// A state is never edited in place: the cycle starts from
/// [`LoadState::loading`] and is replaced once by [`LoadState::loaded`] or
/// [`LoadState::failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadState {
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub items: Vec<MediaItem>,
}

impl LoadState {
    /// State published as soon as a consumer mounts.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
            items: Vec::new(),
        }
    }

    /// Terminal state for a cycle that produced at least one item.
    #[must_use]
    pub fn loaded(items: Vec<MediaItem>) -> Self {
        Self {
            is_loading: false,
            error: None,
            items,
        }
    }

    /// Terminal state for a cycle that produced no items.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            error: Some(message.into()),
            items: Vec::new(),
        }
    }

    /// Returns `true` once the cycle has resolved, whatever the outcome.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_loading
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::loading()
    }
}
