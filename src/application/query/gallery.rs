// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation for a single project view session.
//!
//! [`GalleryNavigator`] owns the one and only "current image" index. The main
//! viewer and the thumbnail strip both read it, so they can never disagree on
//! which image is shown.
//!
//! Navigation is ring arithmetic over `[0, N - 1]`:
//! - `next` wraps from the last image to the first,
//! - `previous` wraps from the first image to the last,
//! - with a single image both are no-ops.
//!
//! Direct selection is stricter: an out-of-range index is rejected and the
//! state is left untouched.

use crate::domain::error::GalleryError;
use std::sync::Arc;

/// Navigation state snapshot for UI rendering.
///
/// Contains everything the viewer needs to render the position indicator
/// and the navigation controls without touching the navigator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryInfo {
    /// Current position (0-indexed).
    pub current_index: usize,
    /// Total number of images in the gallery.
    pub total_count: usize,
    /// Whether the current image is the first one.
    pub at_first: bool,
    /// Whether the current image is the last one.
    pub at_last: bool,
    /// Whether next/previous can change the displayed image.
    /// False for single-image galleries, where both are no-ops.
    pub can_navigate: bool,
}

impl GalleryInfo {
    /// Human-facing 1-based position, as shown in "i / N".
    #[must_use]
    pub fn display_position(&self) -> usize {
        self.current_index + 1
    }
}

/// Ring navigator over one project's image sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    /// Read-only handle on the project's images.
    images: Arc<[String]>,
    /// Invariant: `current_index < images.len()`.
    current_index: usize,
}

impl GalleryNavigator {
    /// Starts a gallery session at the first image.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::NoImages`] if `images` is empty.
    pub fn new(images: Arc<[String]>) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::NoImages);
        }
        Ok(Self {
            images,
            current_index: 0,
        })
    }

    /// Advances to the next image, wrapping to the first after the last.
    ///
    /// Returns the new index.
    pub fn next(&mut self) -> usize {
        self.current_index = self.next_index();
        self.current_index
    }

    /// Moves back to the previous image, wrapping to the last before the first.
    ///
    /// Returns the new index.
    pub fn previous(&mut self) -> usize {
        self.current_index = self.previous_index();
        self.current_index
    }

    /// Jumps directly to `index` (thumbnail click).
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::IndexOutOfRange`] if `index >= len()`; the
    /// current index is left unchanged.
    pub fn select_index(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Returns the current index and image reference.
    #[must_use]
    pub fn current(&self) -> (usize, &str) {
        (self.current_index, &self.images[self.current_index])
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> &str {
        &self.images[self.current_index]
    }

    /// Returns the image `next` would show, WITHOUT moving.
    #[must_use]
    pub fn peek_next(&self) -> &str {
        &self.images[self.next_index()]
    }

    /// Returns the image `previous` would show, WITHOUT moving.
    #[must_use]
    pub fn peek_previous(&self) -> &str {
        &self.images[self.previous_index()]
    }

    /// Iterates over `(index, image, is_selected)` for the thumbnail strip.
    pub fn thumbnails(&self) -> impl Iterator<Item = (usize, &str, bool)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(move |(index, image)| (index, image.as_str(), index == self.current_index))
    }

    /// Returns the total number of images. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false: a navigator cannot be built over an empty gallery.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns a snapshot of the navigation state for UI rendering.
    #[must_use]
    pub fn info(&self) -> GalleryInfo {
        let total_count = self.images.len();
        GalleryInfo {
            current_index: self.current_index,
            total_count,
            at_first: self.current_index == 0,
            at_last: self.current_index == total_count - 1,
            can_navigate: total_count > 1,
        }
    }

    fn next_index(&self) -> usize {
        (self.current_index + 1) % self.images.len()
    }

    fn previous_index(&self) -> usize {
        let len = self.images.len();
        (self.current_index + len - 1) % len
    }
}
