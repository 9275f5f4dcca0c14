// SPDX-License-Identifier: MPL-2.0
//! Project detail view model.
//!
//! Binds a looked-up [`Project`] to one [`GalleryNavigator`] and exposes the
//! read-only sections the presentation layer renders (information rows,
//! description paragraphs, features, related projects). All gallery
//! mutations go through [`DetailView::handle`].

use super::gallery::{GalleryInfo, GalleryNavigator};
use crate::catalog::{Catalog, LookupOutcome};
use crate::domain::error::GalleryError;
use crate::domain::project::Project;
use crate::error::Result;
use std::sync::Arc;

/// A user interaction targeting the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    /// "Next" arrow or Right key.
    Next,
    /// "Previous" arrow or Left key.
    Previous,
    /// Thumbnail click.
    Select(usize),
}

/// Fields of the project information panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    Location,
    Developer,
    CompletionDate,
    Area,
}

impl InfoField {
    pub const ALL: [InfoField; 4] = [
        InfoField::Location,
        InfoField::Developer,
        InfoField::CompletionDate,
        InfoField::Area,
    ];

    /// Returns the i18n message key for the field label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            InfoField::Location => "detail-info-location",
            InfoField::Developer => "detail-info-developer",
            InfoField::CompletionDate => "detail-info-completion-date",
            InfoField::Area => "detail-info-area",
        }
    }
}

/// State of one project detail session.
#[derive(Debug, Clone)]
pub struct DetailView {
    project: Arc<Project>,
    gallery: GalleryNavigator,
    related: Vec<Arc<Project>>,
    lookup_outcome: LookupOutcome,
}

impl DetailView {
    /// Looks up `id` in `catalog` and starts a gallery session on it.
    ///
    /// Unknown ids resolve to the first catalog project; see
    /// [`DetailView::lookup_outcome`] to tell the two cases apart.
    ///
    /// # Errors
    ///
    /// Returns a catalog error when the catalog is empty, and a gallery
    /// error if the project somehow has no images.
    pub fn open(catalog: &Catalog, id: &str, related_limit: usize) -> Result<Self> {
        let (project, lookup_outcome) = catalog.lookup_with_outcome(id)?;
        let gallery = GalleryNavigator::new(project.images())?;
        let related = catalog.related(project.id(), related_limit);

        Ok(Self {
            project,
            gallery,
            related,
            lookup_outcome,
        })
    }

    /// Applies a gallery interaction and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::IndexOutOfRange`] for a selection outside the
    /// gallery; the displayed image does not change.
    pub fn handle(&mut self, action: GalleryAction) -> std::result::Result<GalleryInfo, GalleryError> {
        match action {
            GalleryAction::Next => {
                self.gallery.next();
            }
            GalleryAction::Previous => {
                self.gallery.previous();
            }
            GalleryAction::Select(index) => self.gallery.select_index(index)?,
        }
        Ok(self.gallery.info())
    }

    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryNavigator {
        &self.gallery
    }

    /// Whether the requested id was found or the fallback project is shown.
    #[must_use]
    pub fn lookup_outcome(&self) -> LookupOutcome {
        self.lookup_outcome
    }

    /// Image currently shown in the main viewer.
    #[must_use]
    pub fn current_image(&self) -> &str {
        self.gallery.current_image()
    }

    #[must_use]
    pub fn gallery_info(&self) -> GalleryInfo {
        self.gallery.info()
    }

    /// Information panel rows as `(field, value)` pairs.
    pub fn info_rows(&self) -> impl Iterator<Item = (InfoField, &str)> {
        let details = self.project.details();
        InfoField::ALL.into_iter().map(move |field| {
            let value = match field {
                InfoField::Location => details.location.as_str(),
                InfoField::Developer => details.developer.as_str(),
                InfoField::CompletionDate => details.completion_date.as_str(),
                InfoField::Area => details.area.as_str(),
            };
            (field, value)
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.project.paragraphs()
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        self.project.features()
    }

    /// Projects of the same category, excluding this one.
    #[must_use]
    pub fn related(&self) -> &[Arc<Project>] {
        &self.related
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::CatalogError;
    use crate::domain::project::{Category, ProjectDetails};
    use crate::error::Error;

    fn catalog() -> Catalog {
        let make = |id: &str, images: &[&str], category| {
            Project::new(
                id,
                ProjectDetails {
                    title: format!("Project {id}"),
                    location: "Surat".into(),
                    developer: "Anjani".into(),
                    completion_date: "2022".into(),
                    area: "100 sq. ft.".into(),
                    description: String::new(),
                    long_description: "One.\n\nTwo.".into(),
                },
                images.iter().map(|s| s.to_string()).collect(),
                vec!["Garden".into()],
                category,
            )
        };
        Catalog::new(vec![
            make("1", &["a", "b", "c"], Category::Architectural),
            make("2", &["d"], Category::Architectural),
            make("3", &["e"], Category::Interior),
        ])
        .expect("valid catalog")
    }

    #[test]
    fn open_binds_gallery_to_project_images() {
        let view = DetailView::open(&catalog(), "1", 3).expect("open failed");
        assert_eq!(view.project().id(), "1");
        assert_eq!(view.lookup_outcome(), LookupOutcome::Found);
        assert_eq!(view.current_image(), "a");
        assert_eq!(view.gallery_info().total_count, 3);
    }

    #[test]
    fn open_unknown_id_shows_first_project() {
        let view = DetailView::open(&catalog(), "nope", 3).expect("open failed");
        assert_eq!(view.project().id(), "1");
        assert_eq!(view.lookup_outcome(), LookupOutcome::Fallback);
    }

    #[test]
    fn open_on_empty_catalog_fails() {
        let empty = Catalog::new(Vec::new()).expect("empty catalog");
        let result = DetailView::open(&empty, "1", 3);
        assert!(matches!(result, Err(Error::Catalog(CatalogError::Empty))));
    }

    #[test]
    fn handle_routes_actions_to_the_single_index() {
        let mut view = DetailView::open(&catalog(), "1", 3).expect("open failed");

        let info = view.handle(GalleryAction::Previous).expect("previous");
        assert_eq!(info.current_index, 2);
        assert_eq!(view.current_image(), "c");

        let info = view.handle(GalleryAction::Next).expect("next");
        assert_eq!(info.current_index, 0);

        view.handle(GalleryAction::Select(1)).expect("select");
        let selected: Vec<_> = view
            .gallery()
            .thumbnails()
            .filter(|(_, _, selected)| *selected)
            .map(|(index, _, _)| index)
            .collect();
        assert_eq!(selected, vec![1]);
        assert_eq!(view.current_image(), "b");
    }

    #[test]
    fn handle_rejects_bad_selection_without_moving() {
        let mut view = DetailView::open(&catalog(), "1", 3).expect("open failed");
        view.handle(GalleryAction::Select(2)).expect("select");
        assert_eq!(
            view.handle(GalleryAction::Select(3)),
            Err(GalleryError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(view.gallery_info().current_index, 2);
    }

    #[test]
    fn sections_follow_project_data() {
        let view = DetailView::open(&catalog(), "1", 3).expect("open failed");
        let rows: Vec<_> = view.info_rows().collect();
        assert_eq!(
            rows,
            vec![
                (InfoField::Location, "Surat"),
                (InfoField::Developer, "Anjani"),
                (InfoField::CompletionDate, "2022"),
                (InfoField::Area, "100 sq. ft."),
            ]
        );
        assert_eq!(view.paragraphs().collect::<Vec<_>>(), vec!["One.", "Two."]);
        assert_eq!(view.features(), ["Garden"]);
    }

    #[test]
    fn related_excludes_current_project() {
        let view = DetailView::open(&catalog(), "1", 3).expect("open failed");
        let ids: Vec<_> = view.related().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["2"]);

        let limited = DetailView::open(&catalog(), "1", 0).expect("open failed");
        assert!(limited.related().is_empty());
    }
}
