// SPDX-License-Identifier: MPL-2.0
//! Decoding of TOML catalog documents into validated [`Catalog`]s.
//!
//! The document format is a list of `[[projects]]` tables:
//!
//! ```toml
//! [[projects]]
//! id = "1"
//! title = "Prashthan Bungalows"
//! images = ["/gallery/1/front.svg"]
//! category = "architectural"
//! ```
//!
//! Every descriptive field except `id` and `images` is optional and defaults
//! to an empty string.

use super::Catalog;
use crate::domain::error::CatalogError;
use crate::domain::project::{Category, Project, ProjectDetails};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

/// Name of the embedded catalog document.
const BUILTIN_DOCUMENT: &str = "projects.toml";

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    developer: String,
    #[serde(default)]
    completion_date: String,
    #[serde(default)]
    area: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    long_description: String,
    images: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    category: Option<String>,
}

impl ProjectRecord {
    fn into_project(self) -> Result<Project, CatalogError> {
        let category = match self.category.as_deref() {
            Some(raw) => raw.parse::<Category>().map_err(|msg| {
                CatalogError::Parse(format!("project '{}': {}", self.id, msg))
            })?,
            None => Category::default(),
        };

        Ok(Project::new(
            self.id,
            ProjectDetails {
                title: self.title,
                location: self.location,
                developer: self.developer,
                completion_date: self.completion_date,
                area: self.area,
                description: self.description,
                long_description: self.long_description,
            },
            self.images,
            self.features,
            category,
        ))
    }
}

/// Decodes a TOML catalog document.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed TOML or unknown categories,
/// and the validation errors of [`Catalog::new`].
pub fn parse_document(content: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument =
        toml::from_str(content).map_err(|err| CatalogError::Parse(err.to_string()))?;

    let projects = document
        .projects
        .into_iter()
        .map(ProjectRecord::into_project)
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(projects)
}

/// Loads a catalog document from disk.
///
/// # Errors
///
/// Returns [`CatalogError::MissingSource`] if the file cannot be read, and
/// any error of [`parse_document`].
pub fn load_from_path(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)
        .map_err(|err| CatalogError::MissingSource(format!("{}: {}", path.display(), err)))?;
    parse_document(&content)
}

/// Decodes the catalog document compiled into the binary.
pub(super) fn load_embedded() -> Result<Catalog, CatalogError> {
    let file = Asset::get(BUILTIN_DOCUMENT)
        .ok_or_else(|| CatalogError::MissingSource(BUILTIN_DOCUMENT.to_string()))?;
    parse_document(&String::from_utf8_lossy(file.data.as_ref()))
}
