// SPDX-License-Identifier: MPL-2.0
//! Gallery image references.
//!
//! References stay opaque strings everywhere except at render time, where
//! they are resolved against the configured image root.

pub mod reference;

pub use reference::{
    detect_image_kind, resolve, resolve_existing, strip_query, ImageKind, ResolvedImage,
    RASTER_EXTENSIONS,
};
