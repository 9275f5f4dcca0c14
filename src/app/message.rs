// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{detail_view, diagnostics_panel};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Detail(detail_view::Message),
    Diagnostics(diagnostics_panel::Message),
    /// Shows or hides the session log (F12).
    ToggleDiagnostics,
}

/// Runtime flags passed in from the launcher (`main.rs`).
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Project id to open first. Defaults to the first catalog entry.
    pub project_id: Option<String>,
    /// Optional catalog file replacing the embedded one.
    pub catalog_path: Option<String>,
}
