// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for session activity tracking.

use crate::application::query::GalleryAction;
use std::fmt;
use std::time::Instant;

/// Something worth remembering about the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A project detail view was opened.
    ProjectOpened { id: String },

    /// The requested id was unknown and the first project was shown instead.
    LookupFallback { requested: String, shown: String },

    /// A gallery interaction was applied.
    Navigated { action: GalleryAction, index: usize },

    /// A thumbnail selection pointed outside the gallery.
    SelectionRejected { index: usize, len: usize },

    /// A non-fatal problem surfaced to the user (i18n key).
    Warning { key: String },

    /// A fatal problem that prevented the view from opening.
    Error { message: String },
}

impl DiagnosticEventKind {
    /// Whether the event reports a problem rather than normal activity.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            Self::LookupFallback { .. }
                | Self::SelectionRejected { .. }
                | Self::Warning { .. }
                | Self::Error { .. }
        )
    }
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectOpened { id } => write!(f, "Opened project '{id}'"),
            Self::LookupFallback { requested, shown } => {
                write!(f, "Unknown project id '{requested}', showing '{shown}' instead")
            }
            Self::Navigated { action, index } => write!(f, "Gallery {action:?} -> image {index}"),
            Self::SelectionRejected { index, len } => {
                write!(f, "Rejected thumbnail selection {index} (gallery has {len} images)")
            }
            Self::Warning { key } => write!(f, "Warning: {key}"),
            Self::Error { message } => write!(f, "Error: {message}"),
        }
    }
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}
