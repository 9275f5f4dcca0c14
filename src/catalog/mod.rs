// SPDX-License-Identifier: MPL-2.0
//! Project catalog: the immutable, ordered source of truth for projects.
//!
//! The catalog is built once (from the embedded TOML document or a file
//! supplied at startup) and never mutated afterwards, so it can be shared
//! freely between view sessions without synchronization.
//!
//! # Lookup policy
//!
//! [`Catalog::lookup`] never reports a miss: an unknown id resolves to the
//! first project in catalog order. This masks typos in links and is kept for
//! compatibility with existing project URLs. Callers that need to detect a
//! miss should use [`Catalog::find`] or [`Catalog::lookup_with_outcome`].
//!
//! # Examples
//!
//! ```
//! use portfolio_lens::catalog::Catalog;
//! use portfolio_lens::domain::project::{Category, Project, ProjectDetails};
//!
//! let project = Project::new(
//!     "1",
//!     ProjectDetails::default(),
//!     vec!["a".into(), "b".into(), "c".into()],
//!     vec![],
//!     Category::Architectural,
//! );
//! let catalog = Catalog::new(vec![project]).unwrap();
//!
//! assert_eq!(catalog.lookup("1").unwrap().id(), "1");
//! assert_eq!(catalog.lookup("nonexistent-id").unwrap().id(), "1");
//! ```

mod loader;

pub use loader::{load_from_path, parse_document};

use crate::domain::error::CatalogError;
use crate::domain::project::Project;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// How a lookup was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A project with the requested id exists.
    Found,
    /// The id is unknown and the first project was returned instead.
    Fallback,
}

/// Immutable, ordered collection of validated projects.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Arc<Project>>,
}

impl Catalog {
    /// Builds a catalog, validating every project and rejecting duplicate ids.
    ///
    /// An empty list is accepted; lookups on it fail with
    /// [`CatalogError::Empty`].
    ///
    /// # Errors
    ///
    /// Returns the first integrity violation found, in catalog order.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            project.validate()?;
            if !seen.insert(project.id()) {
                return Err(CatalogError::DuplicateId {
                    id: project.id().to_string(),
                });
            }
        }

        Ok(Self {
            projects: projects.into_iter().map(Arc::new).collect(),
        })
    }

    /// Returns the project with the given id, or the first project when the
    /// id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] when the catalog holds no projects.
    pub fn lookup(&self, id: &str) -> Result<Arc<Project>, CatalogError> {
        self.lookup_with_outcome(id).map(|(project, _)| project)
    }

    /// Same as [`Catalog::lookup`], also reporting whether the fallback was
    /// taken.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] when the catalog holds no projects.
    pub fn lookup_with_outcome(
        &self,
        id: &str,
    ) -> Result<(Arc<Project>, LookupOutcome), CatalogError> {
        if let Some(project) = self.find(id) {
            return Ok((project, LookupOutcome::Found));
        }
        self.first()
            .map(|project| (project, LookupOutcome::Fallback))
            .ok_or(CatalogError::Empty)
    }

    /// Returns the project with the given id, without any fallback.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Arc<Project>> {
        self.projects
            .iter()
            .find(|project| project.id() == id)
            .cloned()
    }

    /// Returns the first project in catalog order.
    #[must_use]
    pub fn first(&self) -> Option<Arc<Project>> {
        self.projects.first().cloned()
    }

    /// Returns up to `limit` projects sharing the category of `id`,
    /// excluding `id` itself, in catalog order.
    ///
    /// An unknown id yields no related projects.
    #[must_use]
    pub fn related(&self, id: &str, limit: usize) -> Vec<Arc<Project>> {
        let Some(category) = self.find(id).map(|project| project.category()) else {
            return Vec::new();
        };

        self.projects
            .iter()
            .filter(|project| project.id() != id && project.category() == category)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Iterates over projects in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Project>> {
        self.projects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

static BUILTIN: OnceLock<Result<Arc<Catalog>, CatalogError>> = OnceLock::new();

/// Returns the process-wide catalog decoded from the embedded document.
///
/// The document is decoded on first access only; later calls share the
/// same instance.
///
/// # Errors
///
/// Returns the decoding or validation error of the embedded document.
pub fn builtin() -> Result<Arc<Catalog>, CatalogError> {
    BUILTIN
        .get_or_init(|| loader::load_embedded().map(Arc::new))
        .clone()
}
