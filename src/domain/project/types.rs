// SPDX-License-Identifier: MPL-2.0
//! Core project types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use super::Category;
use crate::domain::error::CatalogError;
use std::sync::Arc;

/// Descriptive metadata shown in the project information panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectDetails {
    pub title: String,
    pub location: String,
    pub developer: String,
    pub completion_date: String,
    pub area: String,
    pub description: String,
    pub long_description: String,
}

/// One catalog entry.
///
/// Projects are immutable once built. The image sequence is held behind an
/// `Arc` so a gallery session can keep a read-only handle on it without
/// borrowing from the catalog.
///
/// # Example
///
/// ```
/// use portfolio_lens::domain::project::{Category, Project, ProjectDetails};
///
/// let project = Project::new(
///     "1",
///     ProjectDetails::default(),
///     vec!["a.png".into(), "b.png".into()],
///     vec![],
///     Category::Interior,
/// );
///
/// assert_eq!(project.image_count(), 2);
/// assert!(project.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: String,
    details: ProjectDetails,
    images: Arc<[String]>,
    features: Vec<String>,
    category: Category,
}

impl Project {
    /// Creates a project record. Call [`Project::validate`] (or go through
    /// `Catalog::new`) before exposing it to a gallery.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        details: ProjectDetails,
        images: Vec<String>,
        features: Vec<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            details,
            images: images.into(),
            features,
            category,
        }
    }

    /// Checks the data-integrity rules every catalog entry must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingId`] for a blank id and
    /// [`CatalogError::EmptyGallery`] when the project has no images.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::MissingId);
        }
        if self.images.is_empty() {
            return Err(CatalogError::EmptyGallery {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn details(&self) -> &ProjectDetails {
        &self.details
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// Returns a shared handle on the image sequence.
    #[must_use]
    pub fn images(&self) -> Arc<[String]> {
        Arc::clone(&self.images)
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Key features in declaration order. Duplicates are kept.
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Splits the long description into paragraphs on blank lines.
    ///
    /// Order is preserved. Runs of blank lines do not produce empty paragraphs.
    pub fn paragraphs(&self) -> Paragraphs<'_> {
        Paragraphs {
            rest: &self.details.long_description,
        }
    }
}

/// Iterator over the paragraphs of a description.
///
/// A line holding only whitespace (including a lone `\r` from CRLF text)
/// ends a paragraph. Each paragraph is trimmed; its inner line breaks are
/// kept.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let text = self.rest;
        let mut start = None;
        let mut end = 0;
        let mut offset = 0;

        for line in text.split_inclusive('\n') {
            let line_start = offset;
            offset += line.len();

            if line.trim().is_empty() {
                if let Some(start) = start {
                    self.rest = &text[offset..];
                    return Some(text[start..end].trim());
                }
                continue;
            }
            start.get_or_insert(line_start);
            end = offset;
        }

        self.rest = "";
        start.map(|start| text[start..end].trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with(long_description: &str, images: Vec<String>) -> Project {
        Project::new(
            "p",
            ProjectDetails {
                long_description: long_description.to_string(),
                ..ProjectDetails::default()
            },
            images,
            vec!["Garden".into(), "Garden".into()],
            Category::Architectural,
        )
    }

    #[test]
    fn paragraphs_split_on_blank_lines_in_order() {
        let project = project_with("First.\n\nSecond line\nwrapped.\n\nThird.", vec!["a".into()]);
        let paragraphs: Vec<_> = project.paragraphs().collect();
        assert_eq!(paragraphs, vec!["First.", "Second line\nwrapped.", "Third."]);
    }

    #[test]
    fn paragraphs_skip_extra_blank_lines() {
        let project = project_with("One.\n\n\n\nTwo.\n\n", vec!["a".into()]);
        let paragraphs: Vec<_> = project.paragraphs().collect();
        assert_eq!(paragraphs, vec!["One.", "Two."]);
    }

    #[test]
    fn paragraphs_split_crlf_text() {
        let project = project_with("First.\r\n\r\nSecond\r\nwrapped.\r\n", vec!["a".into()]);
        let paragraphs: Vec<_> = project.paragraphs().collect();
        assert_eq!(paragraphs, vec!["First.", "Second\r\nwrapped."]);
    }

    #[test]
    fn whitespace_only_line_ends_a_paragraph() {
        let project = project_with("First.\n  \nSecond.\n\t\n\nThird.", vec!["a".into()]);
        let paragraphs: Vec<_> = project.paragraphs().collect();
        assert_eq!(paragraphs, vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn whitespace_only_description_has_no_paragraphs() {
        let project = project_with(" \r\n\n   ", vec!["a".into()]);
        assert_eq!(project.paragraphs().count(), 0);
    }

    #[test]
    fn empty_long_description_has_no_paragraphs() {
        let project = project_with("", vec!["a".into()]);
        assert_eq!(project.paragraphs().count(), 0);
    }

    #[test]
    fn features_keep_duplicates() {
        let project = project_with("", vec!["a".into()]);
        assert_eq!(project.features(), ["Garden", "Garden"]);
    }

    #[test]
    fn validate_rejects_project_without_images() {
        let project = project_with("", Vec::new());
        assert_eq!(
            project.validate(),
            Err(CatalogError::EmptyGallery { id: "p".into() })
        );
    }

    #[test]
    fn validate_rejects_blank_id() {
        let project = Project::new(
            "  ",
            ProjectDetails::default(),
            vec!["a".into()],
            Vec::new(),
            Category::default(),
        );
        assert_eq!(project.validate(), Err(CatalogError::MissingId));
    }

    #[test]
    fn images_handle_shares_storage() {
        let project = project_with("", vec!["a".into(), "b".into()]);
        let first = project.images();
        let second = project.images();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
