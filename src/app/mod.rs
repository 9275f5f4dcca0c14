// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, the active detail view,
//! localization and persisted preferences, and translates messages into
//! gallery actions or project switches.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::application::query::DetailView;
use crate::catalog::{self, Catalog, LookupOutcome};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::ui::{detail_view, diagnostics_panel};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    catalog: Option<Arc<Catalog>>,
    detail: Option<DetailView>,
    requested_id: String,
    /// i18n key of the error shown when no detail view can be opened.
    error_key: Option<&'static str>,
    /// i18n key of the settings warning raised at startup.
    config_warning: Option<String>,
    diagnostics: DiagnosticsCollector,
    show_diagnostics: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("requested_id", &self.requested_id)
            .field(
                "shown_id",
                &self.detail.as_ref().map(|detail| detail.project().id()),
            )
            .field("error_key", &self.error_key)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the catalog from `path`, or the embedded one when no path is given.
fn load_catalog(path: Option<&Path>) -> Result<Arc<Catalog>> {
    match path {
        Some(path) => Ok(Arc::new(catalog::load_from_path(path)?)),
        None => Ok(catalog::builtin()?),
    }
}

impl App {
    /// Initializes application state from the launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let catalog = load_catalog(flags.catalog_path.as_deref().map(Path::new));

        let mut app = Self::from_parts(i18n, config, catalog, DiagnosticsCollector::default());
        if let Some(key) = config_warning {
            app.diagnostics
                .record(DiagnosticEventKind::Warning { key: key.clone() });
            app.config_warning = Some(key);
        }

        let initial_id = flags.project_id.or_else(|| {
            app.catalog
                .as_ref()
                .and_then(|catalog| catalog.first())
                .map(|project| project.id().to_string())
        });
        app.open_project(initial_id.as_deref().unwrap_or_default());

        (app, Task::none())
    }

    /// Assembles an application around an already loaded catalog.
    fn from_parts(
        i18n: I18n,
        config: Config,
        catalog: Result<Arc<Catalog>>,
        mut diagnostics: DiagnosticsCollector,
    ) -> Self {
        let (catalog, error_key) = match catalog {
            Ok(catalog) => (Some(catalog), None),
            Err(err) => {
                diagnostics.record(DiagnosticEventKind::Error {
                    message: err.to_string(),
                });
                (None, Some(err.i18n_key()))
            }
        };

        Self {
            i18n,
            config,
            catalog,
            detail: None,
            requested_id: String::new(),
            error_key,
            config_warning: None,
            diagnostics,
            show_diagnostics: false,
        }
    }

    /// Replaces the detail view with the project `id` resolves to.
    fn open_project(&mut self, id: &str) {
        self.requested_id = id.to_string();

        let Some(catalog) = self.catalog.clone() else {
            return;
        };

        match DetailView::open(&catalog, id, self.config.gallery.related_limit()) {
            Ok(detail) => {
                let shown = detail.project().id().to_string();
                if detail.lookup_outcome() == LookupOutcome::Fallback {
                    self.diagnostics.record(DiagnosticEventKind::LookupFallback {
                        requested: id.to_string(),
                        shown: shown.clone(),
                    });
                }
                self.diagnostics
                    .record(DiagnosticEventKind::ProjectOpened { id: shown });
                self.detail = Some(detail);
                self.error_key = None;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: Error) {
        self.diagnostics.record(DiagnosticEventKind::Error {
            message: err.to_string(),
        });
        self.error_key = Some(err.i18n_key());
        self.detail = None;
    }

    fn title(&self) -> String {
        match &self.detail {
            Some(detail) => self
                .i18n
                .tr_with_args("window-title", &[("title", detail.project().title())]),
            None => self.i18n.tr("window-title-empty"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(
            self.detail.is_some() && self.config.gallery.keyboard_navigation(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleDiagnostics => {
                self.show_diagnostics = !self.show_diagnostics;
            }
            Message::Diagnostics(diagnostics_panel::Message::BackToViewer) => {
                self.show_diagnostics = false;
            }
            Message::Detail(detail_view::Message::OpenProject(id)) => {
                self.open_project(&id);
            }
            Message::Detail(message) => {
                let (Some(action), Some(detail)) = (message.gallery_action(), self.detail.as_mut())
                else {
                    return Task::none();
                };
                match detail.handle(action) {
                    Ok(info) => self.diagnostics.record(DiagnosticEventKind::Navigated {
                        action,
                        index: info.current_index,
                    }),
                    Err(crate::error::GalleryError::IndexOutOfRange { index, len }) => {
                        self.diagnostics
                            .record(DiagnosticEventKind::SelectionRejected { index, len });
                    }
                    Err(err) => self.fail(err.into()),
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        if self.show_diagnostics {
            let panel = diagnostics_panel::view(diagnostics_panel::ViewContext {
                i18n: &self.i18n,
                diagnostics: &self.diagnostics,
            });
            return Element::from(iced::widget::scrollable(panel)).map(Message::Diagnostics);
        }

        let content = match (&self.detail, self.error_key) {
            (Some(detail), _) => detail_view::view(detail_view::ViewContext {
                i18n: &self.i18n,
                detail,
                requested_id: &self.requested_id,
                image_root: self.config.display.image_root.as_deref(),
                thumbnail_columns: self.config.gallery.thumbnail_columns() as usize,
                warning_key: self.config_warning.as_deref(),
            }),
            (None, key) => {
                detail_view::error_view(&self.i18n, key.unwrap_or("error-catalog-empty"))
            }
        };

        Element::from(iced::widget::scrollable(content)).map(Message::Detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::BufferCapacity;
    use crate::domain::project::{Category, Project, ProjectDetails};
    use crate::error::CatalogError;

    fn project(id: &str, category: Category, images: usize) -> Project {
        Project::new(
            id,
            ProjectDetails {
                title: format!("Project {id}"),
                ..ProjectDetails::default()
            },
            (0..images).map(|i| format!("/{id}-{i}.jpg")).collect(),
            Vec::new(),
            category,
        )
    }

    fn app_with(catalog: Result<Arc<Catalog>>) -> App {
        App::from_parts(
            I18n::default(),
            Config::default(),
            catalog,
            DiagnosticsCollector::silent(BufferCapacity::default()),
        )
    }

    fn sample_app() -> App {
        let catalog = Catalog::new(vec![
            project("1", Category::Architectural, 4),
            project("2", Category::Architectural, 2),
        ])
        .expect("valid catalog");
        let mut app = app_with(Ok(Arc::new(catalog)));
        app.open_project("1");
        app
    }

    fn shown_index(app: &App) -> usize {
        app.detail
            .as_ref()
            .expect("detail view open")
            .gallery_info()
            .current_index
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut app = sample_app();
        let _ = app.update(Message::Detail(detail_view::Message::Previous));
        assert_eq!(shown_index(&app), 3);
        let _ = app.update(Message::Detail(detail_view::Message::Next));
        assert_eq!(shown_index(&app), 0);
    }

    #[test]
    fn rejected_selection_keeps_image_and_records_event() {
        let mut app = sample_app();
        let _ = app.update(Message::Detail(detail_view::Message::SelectThumbnail(2)));
        let _ = app.update(Message::Detail(detail_view::Message::SelectThumbnail(9)));

        assert_eq!(shown_index(&app), 2);
        assert_eq!(
            app.diagnostics.last(),
            Some(&DiagnosticEventKind::SelectionRejected { index: 9, len: 4 })
        );
        assert!(app.error_key.is_none());
    }

    #[test]
    fn open_project_switches_and_resets_gallery() {
        let mut app = sample_app();
        let _ = app.update(Message::Detail(detail_view::Message::Next));
        let _ = app.update(Message::Detail(detail_view::Message::OpenProject(
            "2".into(),
        )));

        let detail = app.detail.as_ref().expect("detail view open");
        assert_eq!(detail.project().id(), "2");
        assert_eq!(detail.gallery_info().current_index, 0);
    }

    #[test]
    fn unknown_id_falls_back_and_is_recorded() {
        let mut app = sample_app();
        app.open_project("missing");

        let detail = app.detail.as_ref().expect("detail view open");
        assert_eq!(detail.project().id(), "1");
        assert_eq!(detail.lookup_outcome(), LookupOutcome::Fallback);
        assert!(app.diagnostics.timeline().any(|(_, kind)| matches!(
            kind,
            DiagnosticEventKind::LookupFallback { requested, shown }
                if requested == "missing" && shown == "1"
        )));
    }

    #[test]
    fn empty_catalog_shows_error_state() {
        let mut app = app_with(Ok(Arc::new(Catalog::default())));
        app.open_project("1");

        assert!(app.detail.is_none());
        assert_eq!(app.error_key, Some("error-catalog-empty"));
        assert_eq!(app.title(), app.i18n.tr("window-title-empty"));
    }

    #[test]
    fn catalog_load_failure_is_surfaced() {
        let mut app = app_with(Err(CatalogError::MissingSource("nowhere.toml".into()).into()));
        app.open_project("1");

        assert!(app.detail.is_none());
        assert_eq!(app.error_key, Some("error-catalog-missing-source"));
        assert_eq!(app.diagnostics.problem_count(), 1);
    }

    #[test]
    fn f12_toggles_session_log_and_back_returns() {
        let mut app = sample_app();
        let _ = app.update(Message::ToggleDiagnostics);
        assert!(app.show_diagnostics);
        let _ = app.view();

        let _ = app.update(Message::Diagnostics(
            diagnostics_panel::Message::BackToViewer,
        ));
        assert!(!app.show_diagnostics);

        let _ = app.update(Message::ToggleDiagnostics);
        let _ = app.update(Message::ToggleDiagnostics);
        assert!(!app.show_diagnostics);
    }

    #[test]
    fn title_names_the_shown_project() {
        let app = sample_app();
        assert!(app.title().contains("Project 1"));
    }
}
