// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`CatalogError`](error::CatalogError),
//!   [`GalleryError`](error::GalleryError))
//! - [`project`]: Catalog entry types ([`Project`](project::Project),
//!   [`Category`](project::Category))

pub mod error;
pub mod project;
