// SPDX-License-Identifier: MPL-2.0
//! Project domain types.
//!
//! A project is one immutable catalog entry: display metadata plus an
//! ordered, non-empty sequence of opaque image references.

pub mod category;
pub mod types;

// Re-export commonly used types
pub use category::Category;
pub use types::{Paragraphs, Project, ProjectDetails};
