// SPDX-License-Identifier: MPL-2.0
//! Project detail screen: gallery, information panel, overview and related
//! projects.
//!
//! The view is a pure function of [`ViewContext`]; all state changes travel
//! back to the application as [`Message`]s.

use crate::application::query::{DetailView, GalleryAction};
use crate::catalog::LookupOutcome;
use crate::i18n::I18n;
use crate::media::reference::{self, ImageKind};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, svg, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Messages emitted by the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    SelectThumbnail(usize),
    OpenProject(String),
}

impl Message {
    /// Gallery interaction carried by this message, if any.
    #[must_use]
    pub fn gallery_action(&self) -> Option<GalleryAction> {
        match self {
            Message::Previous => Some(GalleryAction::Previous),
            Message::Next => Some(GalleryAction::Next),
            Message::SelectThumbnail(index) => Some(GalleryAction::Select(*index)),
            Message::OpenProject(_) => None,
        }
    }
}

/// Everything the detail screen needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub detail: &'a DetailView,
    /// Id the user asked for; differs from the shown project after a fallback.
    pub requested_id: &'a str,
    /// Directory image references are resolved against, if configured.
    pub image_root: Option<&'a Path>,
    pub thumbnail_columns: usize,
    /// i18n key of a non-fatal startup warning to display.
    pub warning_key: Option<&'a str>,
}

/// Renders the detail screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().spacing(spacing::LG).padding(spacing::XL);

    if let Some(key) = ctx.warning_key {
        content = content.push(notice(ctx.i18n.tr(key)));
    }
    if ctx.detail.lookup_outcome() == LookupOutcome::Fallback {
        content = content.push(fallback_notice(&ctx));
    }

    let body = Row::new()
        .spacing(spacing::LG)
        .push(
            Column::new()
                .spacing(spacing::MD)
                .width(Length::Fill)
                .push(header(&ctx))
                .push(main_image(&ctx))
                .push(thumbnails(&ctx)),
        )
        .push(info_panel(&ctx));

    content
        .push(body)
        .push(overview(&ctx))
        .push(related(&ctx))
        .into()
}

/// Renders a full-screen message for a catalog that cannot be shown.
pub fn error_view<'a>(i18n: &'a I18n, message_key: &str) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("detail-error-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr(message_key)).size(typography::BODY));

    Container::new(
        Container::new(column)
            .padding(spacing::LG)
            .style(styles::container::error),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn fallback_notice<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    notice(ctx.i18n.tr_with_args(
        "detail-fallback-notice",
        &[
            ("id", ctx.requested_id),
            ("title", ctx.detail.project().title()),
        ],
    ))
}

fn notice<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::notice)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let details = ctx.detail.project().details();
    let breadcrumb = format!(
        "{} / {}",
        ctx.i18n.tr("breadcrumb-portfolio"),
        details.title
    );

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(breadcrumb).size(typography::CAPTION))
        .push(Text::new(details.title.as_str()).size(typography::TITLE_LG))
        .push(Text::new(details.description.as_str()).size(typography::BODY_LG))
        .into()
}

fn main_image<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let info = ctx.detail.gallery_info();
    let current = ctx.detail.current_image();
    let position = ctx.i18n.tr_with_args(
        "gallery-position",
        &[
            ("current", &info.display_position().to_string()),
            ("total", &info.total_count.to_string()),
        ],
    );

    let picture = Container::new(image_element(ctx, current, sizing::MAIN_IMAGE_HEIGHT))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_frame);

    let mut controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    let (previous, next) = match nav_targets(ctx.detail) {
        Some([previous, next]) => (Some(previous), Some(next)),
        None => (None, None),
    };
    if let Some(previous) = previous {
        controls = controls.push(nav_button(ctx, "‹", previous));
    }
    controls = controls
        .push(Space::new().width(Length::Fill))
        .push(Text::new(position).size(typography::BODY))
        .push(Space::new().width(Length::Fill));
    if let Some(next) = next {
        controls = controls.push(nav_button(ctx, "›", next));
    }

    Column::new()
        .spacing(spacing::XS)
        .push(picture)
        .push(controls)
        .into()
}

/// Previous and next buttons with the image each one leads to, or `None`
/// for a single-image gallery.
fn nav_targets(detail: &DetailView) -> Option<[(Message, &str); 2]> {
    let gallery = detail.gallery();
    if !gallery.info().can_navigate {
        return None;
    }
    Some([
        (Message::Previous, gallery.peek_previous()),
        (Message::Next, gallery.peek_next()),
    ])
}

fn nav_button<'a>(
    ctx: &ViewContext<'a>,
    arrow: &'a str,
    (message, target): (Message, &'a str),
) -> Element<'a, Message> {
    let arrow = Container::new(Text::new(arrow).size(typography::TITLE_SM))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fill);
    let preview = Container::new(image_element(ctx, target, sizing::NAV_BUTTON))
        .width(Length::Fixed(sizing::NAV_PREVIEW_WIDTH));

    let content = match message {
        Message::Previous => Row::new().push(arrow).push(preview),
        _ => Row::new().push(preview).push(arrow),
    };

    button(content.spacing(spacing::XXS).align_y(alignment::Vertical::Center))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .padding(spacing::XXS)
        .style(styles::button::gallery_nav)
        .on_press(message)
        .into()
}

fn thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.thumbnail_columns.max(1);
    let entries: Vec<_> = ctx.detail.gallery().thumbnails().collect();

    let mut grid = Column::new().spacing(spacing::XS);
    for chunk in entries.chunks(columns) {
        let mut row = Row::new().spacing(spacing::XS);
        for &(index, reference, selected) in chunk {
            let thumb = button(image_element(ctx, reference, sizing::THUMBNAIL_HEIGHT))
                .width(Length::FillPortion(1))
                .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                .padding(spacing::XXS)
                .style(styles::button::thumbnail(selected))
                .on_press(Message::SelectThumbnail(index));
            row = row.push(thumb);
        }
        // Pad short rows so thumbnails keep the same width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

/// Shows the referenced image when it resolves to a file on disk, otherwise a
/// labelled placeholder.
fn image_element<'a>(ctx: &ViewContext<'a>, reference: &'a str, height: f32) -> Element<'a, Message> {
    let resolved = ctx
        .image_root
        .and_then(|root| reference::resolve_existing(root, reference));

    match resolved {
        Some(resolved) => match resolved.kind {
            ImageKind::Svg => svg::Svg::new(svg::Handle::from_path(resolved.path))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Contain)
                .into(),
            ImageKind::Raster => Image::new(image::Handle::from_path(resolved.path))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Contain)
                .into(),
        },
        None => Container::new(Text::new(placeholder_label(reference)).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::image_frame)
            .into(),
    }
}

/// File name of an image reference, for placeholders.
fn placeholder_label(reference: &str) -> &str {
    let stripped = reference::strip_query(reference);
    stripped.rsplit('/').next().unwrap_or(stripped)
}

fn info_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let project = ctx.detail.project();

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("detail-info-title")).size(typography::TITLE_SM));

    for (field, value) in ctx.detail.info_rows() {
        column = column.push(info_row(ctx.i18n.tr(field.i18n_key()), value.to_string()));
    }
    column = column.push(info_row(
        ctx.i18n.tr("detail-info-category"),
        ctx.i18n.tr(project.category().i18n_key()),
    ));

    if !ctx.detail.features().is_empty() {
        column = column
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(Text::new(ctx.i18n.tr("detail-features-title")).size(typography::BODY_LG));
        for feature in ctx.detail.features() {
            column = column.push(Text::new(format!("• {feature}")).size(typography::BODY));
        }
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::INFO_PANEL_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn info_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn overview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("detail-overview-title")).size(typography::TITLE_SM));

    for paragraph in ctx.detail.paragraphs() {
        column = column.push(Text::new(paragraph).size(typography::BODY));
    }

    column.into()
}

fn related<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx.detail.project().title();
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("detail-related-title")).size(typography::TITLE_SM))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("detail-related-subtitle", &[("title", title)]),
            )
            .size(typography::BODY),
        );

    if ctx.detail.related().is_empty() {
        return column
            .push(Text::new(ctx.i18n.tr("detail-related-empty")).size(typography::BODY))
            .into();
    }

    let mut row = Row::new().spacing(spacing::MD);
    for project in ctx.detail.related() {
        let card = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(project.title().to_string()).size(typography::BODY_LG))
            .push(Text::new(project.details().location.clone()).size(typography::CAPTION))
            .push(Text::new(ctx.i18n.tr("detail-related-open")).size(typography::CAPTION));
        row = row.push(
            button(card)
                .padding(spacing::SM)
                .style(styles::button::related)
                .on_press(Message::OpenProject(project.id().to_string())),
        );
    }
    column = column.push(row);

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_messages_map_to_gallery_actions() {
        assert_eq!(Message::Next.gallery_action(), Some(GalleryAction::Next));
        assert_eq!(
            Message::Previous.gallery_action(),
            Some(GalleryAction::Previous)
        );
        assert_eq!(
            Message::SelectThumbnail(2).gallery_action(),
            Some(GalleryAction::Select(2))
        );
        assert_eq!(Message::OpenProject("2".into()).gallery_action(), None);
    }

    fn detail_with_images(images: usize) -> DetailView {
        use crate::catalog::Catalog;
        use crate::domain::project::{Category, Project, ProjectDetails};

        let catalog = Catalog::new(vec![Project::new(
            "1",
            ProjectDetails::default(),
            ["a", "b", "c", "d"][..images].iter().map(|s| s.to_string()).collect(),
            Vec::new(),
            Category::Residential,
        )])
        .expect("valid catalog");
        DetailView::open(&catalog, "1", 3).expect("detail opens")
    }

    #[test]
    fn nav_buttons_preview_neighbouring_images() {
        let mut detail = detail_with_images(4);
        assert_eq!(
            nav_targets(&detail),
            Some([(Message::Previous, "d"), (Message::Next, "b")])
        );

        detail.handle(GalleryAction::Next).expect("next succeeds");
        assert_eq!(
            nav_targets(&detail),
            Some([(Message::Previous, "a"), (Message::Next, "c")])
        );
    }

    #[test]
    fn single_image_gallery_has_no_nav_buttons() {
        assert_eq!(nav_targets(&detail_with_images(1)), None);
    }

    #[test]
    fn placeholder_label_keeps_file_name_only() {
        assert_eq!(placeholder_label("/placeholder.svg"), "placeholder.svg");
        assert_eq!(
            placeholder_label("/images/villa/front.jpg?height=600"),
            "front.jpg"
        );
        assert_eq!(placeholder_label("plain.png"), "plain.png");
    }
}
