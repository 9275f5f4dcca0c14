// SPDX-License-Identifier: MPL-2.0
//! Resolution of opaque gallery image references to local files.
//!
//! Catalog image references are passed through the core untouched. Only the
//! presentation layer tries to map them onto files under a configured image
//! root, so a reference such as `/placeholder.svg?height=600&width=800`
//! becomes `<root>/placeholder.svg`.

use std::path::{Path, PathBuf};

/// Supported raster image file extensions.
pub const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "ico"];

/// How a resolved image must be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Raster,
    Svg,
}

/// A gallery reference mapped onto a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub path: PathBuf,
    pub kind: ImageKind,
}

/// Removes a URL query string or fragment from a reference.
#[must_use]
pub fn strip_query(reference: &str) -> &str {
    reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
}

/// Classifies a path by extension.
pub fn detect_image_kind<P: AsRef<Path>>(path: P) -> Option<ImageKind> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)?;

    if extension == "svg" {
        Some(ImageKind::Svg)
    } else if RASTER_EXTENSIONS.contains(&extension.as_str()) {
        Some(ImageKind::Raster)
    } else {
        None
    }
}

/// Maps `reference` onto `root` without touching the filesystem.
///
/// Returns `None` for remote URLs, references with an unknown extension,
/// and references that try to climb out of `root` (`..` segments with
/// either separator, drive prefixes such as `C:`).
#[must_use]
pub fn resolve(root: &Path, reference: &str) -> Option<ResolvedImage> {
    if reference.contains("://") {
        return None;
    }

    let relative = strip_query(reference).trim_start_matches(['/', '\\']);
    if relative.is_empty()
        || relative.contains(':')
        || Path::new(relative).is_absolute()
        || relative.split(['/', '\\']).any(|segment| segment == "..")
    {
        return None;
    }

    let kind = detect_image_kind(relative)?;
    Some(ResolvedImage {
        path: root.join(relative),
        kind,
    })
}

/// Same as [`resolve`], keeping only references backed by an existing file.
#[must_use]
pub fn resolve_existing(root: &Path, reference: &str) -> Option<ResolvedImage> {
    resolve(root, reference).filter(|resolved| resolved.path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn strip_query_removes_parameters() {
        assert_eq!(
            strip_query("/placeholder.svg?height=600&width=800"),
            "/placeholder.svg"
        );
        assert_eq!(strip_query("photo.png#top"), "photo.png");
        assert_eq!(strip_query("plain.jpg"), "plain.jpg");
    }

    #[test]
    fn detect_image_kind_by_extension() {
        assert_eq!(detect_image_kind("a/b.SVG"), Some(ImageKind::Svg));
        assert_eq!(detect_image_kind("a/b.jpeg"), Some(ImageKind::Raster));
        assert_eq!(detect_image_kind("a/b.txt"), None);
        assert_eq!(detect_image_kind("noext"), None);
    }

    #[test]
    fn resolve_joins_onto_root() {
        let root = Path::new("/srv/site");
        let resolved = resolve(root, "/placeholder.svg?height=600&width=800").expect("resolvable");
        assert_eq!(resolved.path, root.join("placeholder.svg"));
        assert_eq!(resolved.kind, ImageKind::Svg);
    }

    #[test]
    fn resolve_rejects_remote_and_escaping_references() {
        let root = Path::new("/srv/site");
        assert!(resolve(root, "https://cdn.example.com/a.png").is_none());
        assert!(resolve(root, "/../etc/passwd.png").is_none());
        assert!(resolve(root, "/").is_none());
        assert!(resolve(root, "/gallery/readme.md").is_none());
    }

    #[test]
    fn resolve_rejects_windows_style_escapes() {
        let root = Path::new("/srv/site");
        assert!(resolve(root, "..\\x.png").is_none());
        assert!(resolve(root, "/gallery\\..\\..\\x.png").is_none());
        assert!(resolve(root, "C:/x.png").is_none());
        assert!(resolve(root, "c:\\photos\\x.png").is_none());
        assert!(resolve(root, "\\\\server\\share\\x.png").is_some_and(|resolved| {
            resolved.path.starts_with(root)
        }));
    }

    #[test]
    fn resolve_existing_requires_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("a.png"), b"fake image data").expect("write failed");

        assert!(resolve_existing(temp_dir.path(), "/a.png").is_some());
        assert!(resolve_existing(temp_dir.path(), "/b.png").is_none());
    }
}
