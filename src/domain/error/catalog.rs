// SPDX-License-Identifier: MPL-2.0
//! Catalog integrity and lookup errors.

use std::fmt;

/// Errors raised while building or querying the project catalog.
///
/// An unknown project id is deliberately absent: lookup misses are resolved
/// by falling back to the first catalog entry, not by failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog holds no projects, so lookup has nothing to fall back to.
    Empty,

    /// A project was declared without any gallery image.
    EmptyGallery { id: String },

    /// Two projects share the same identifier.
    DuplicateId { id: String },

    /// A project was declared with an empty identifier.
    MissingId,

    /// The catalog document could not be decoded.
    Parse(String),

    /// The catalog source (embedded asset or file) is unavailable.
    MissingSource(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Empty => "error-catalog-empty",
            CatalogError::EmptyGallery { .. } => "error-catalog-empty-gallery",
            CatalogError::DuplicateId { .. } => "error-catalog-duplicate-id",
            CatalogError::MissingId => "error-catalog-missing-id",
            CatalogError::Parse(_) => "error-catalog-parse",
            CatalogError::MissingSource(_) => "error-catalog-missing-source",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Catalog contains no projects"),
            CatalogError::EmptyGallery { id } => {
                write!(f, "Project '{}' has no gallery images", id)
            }
            CatalogError::DuplicateId { id } => write!(f, "Duplicate project id '{}'", id),
            CatalogError::MissingId => write!(f, "Project declared without an id"),
            CatalogError::Parse(msg) => write!(f, "Invalid catalog document: {}", msg),
            CatalogError::MissingSource(source) => {
                write!(f, "Catalog source not found: {}", source)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_project() {
        let err = CatalogError::EmptyGallery { id: "7".into() };
        assert_eq!(err.to_string(), "Project '7' has no gallery images");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            CatalogError::Empty.i18n_key(),
            CatalogError::EmptyGallery { id: "a".into() }.i18n_key(),
            CatalogError::DuplicateId { id: "a".into() }.i18n_key(),
            CatalogError::MissingId.i18n_key(),
            CatalogError::Parse(String::new()).i18n_key(),
            CatalogError::MissingSource(String::new()).i18n_key(),
        ];
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key), "duplicate key {key}");
        }
    }
}
