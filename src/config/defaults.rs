// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of thumbnails per row under the main image.
pub const DEFAULT_THUMBNAIL_COLUMNS: u32 = 4;

/// Minimum thumbnails per row.
pub const MIN_THUMBNAIL_COLUMNS: u32 = 1;

/// Maximum thumbnails per row.
pub const MAX_THUMBNAIL_COLUMNS: u32 = 8;

/// Default number of related projects shown below the details.
pub const DEFAULT_RELATED_LIMIT: u32 = 3;

/// Maximum number of related projects shown.
pub const MAX_RELATED_LIMIT: u32 = 12;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the in-memory session event log.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum event log capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum event log capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THUMBNAIL_COLUMNS > 0);
    assert!(MAX_THUMBNAIL_COLUMNS >= MIN_THUMBNAIL_COLUMNS);
    assert!(DEFAULT_THUMBNAIL_COLUMNS >= MIN_THUMBNAIL_COLUMNS);
    assert!(DEFAULT_THUMBNAIL_COLUMNS <= MAX_THUMBNAIL_COLUMNS);

    assert!(DEFAULT_RELATED_LIMIT <= MAX_RELATED_LIMIT);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_defaults_are_valid() {
        assert_eq!(DEFAULT_THUMBNAIL_COLUMNS, 4);
        assert!(DEFAULT_THUMBNAIL_COLUMNS >= MIN_THUMBNAIL_COLUMNS);
        assert!(DEFAULT_THUMBNAIL_COLUMNS <= MAX_THUMBNAIL_COLUMNS);
    }

    #[test]
    fn related_defaults_are_valid() {
        assert_eq!(DEFAULT_RELATED_LIMIT, 3);
        assert!(DEFAULT_RELATED_LIMIT <= MAX_RELATED_LIMIT);
    }
}
