// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`query`]: Query services over the catalog (gallery navigation, detail view)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```
//! use portfolio_lens::application::query::{DetailView, GalleryAction};
//! use portfolio_lens::catalog;
//!
//! let catalog = catalog::builtin().unwrap();
//! let mut view = DetailView::open(&catalog, "1", 3).unwrap();
//!
//! let info = view.handle(GalleryAction::Previous).unwrap();
//! assert_eq!(info.current_index, info.total_count - 1);
//! ```

pub mod query;
