// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! # Available Services
//!
//! - [`gallery`]: Ring navigation over a project's images (`GalleryNavigator`)
//! - [`detail`]: Project detail view model (`DetailView`)
//!
//! # Design Notes
//!
//! Query services sit in the application layer because they coordinate
//! domain types with the catalog and hold per-session state that the
//! domain records themselves never carry.

pub mod detail;
pub mod gallery;

// Re-export main types
pub use detail::{DetailView, GalleryAction, InfoField};
pub use gallery::{GalleryInfo, GalleryNavigator};
