// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation errors.

use std::fmt;

/// Errors raised by the gallery navigator.
///
/// Both variants are caller defects (a mismatched thumbnail strip, a project
/// that slipped past catalog validation) and are never clamped or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// A direct selection targeted an index outside `[0, len - 1]`.
    IndexOutOfRange { index: usize, len: usize },

    /// A gallery session was started on an empty image sequence.
    NoImages,
}

impl GalleryError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::IndexOutOfRange { .. } => "error-gallery-index-out-of-range",
            GalleryError::NoImages => "error-gallery-no-images",
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::IndexOutOfRange { index, len } => write!(
                f,
                "Image index {} is out of range for a gallery of {} images",
                index, len
            ),
            GalleryError::NoImages => write!(f, "Gallery has no images"),
        }
    }
}

impl std::error::Error for GalleryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display_reports_index_and_len() {
        let err = GalleryError::IndexOutOfRange { index: 5, len: 3 };
        let message = err.to_string();
        assert!(message.contains('5'));
        assert!(message.contains('3'));
    }
}
