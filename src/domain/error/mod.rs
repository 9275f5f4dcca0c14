// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

mod catalog;
mod gallery;

pub use catalog::CatalogError;
pub use gallery::GalleryError;
