// SPDX-License-Identifier: MPL-2.0
//! Session log screen listing the recorded diagnostic events.

use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::time::Duration;

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub diagnostics: &'a DiagnosticsCollector,
}

/// Messages emitted by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BackToViewer,
}

/// Formats a duration for display.
///
/// - Under 1 hour: "Xm Ys"
/// - Over 1 hour: "Xh Ym Zs"
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

/// One line per event, oldest first: offset and description.
#[must_use]
pub fn event_lines(diagnostics: &DiagnosticsCollector) -> Vec<(String, String, bool)> {
    diagnostics
        .timeline()
        .map(|(offset, kind)| {
            (
                format!("+{}", format_duration(offset)),
                kind.to_string(),
                kind.is_problem(),
            )
        })
        .collect()
}

fn build_summary<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let duration = format_duration(ctx.diagnostics.elapsed());
    let count = ctx.diagnostics.len().to_string();
    let problems = ctx.diagnostics.problem_count().to_string();

    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("diagnostics-running-for", &[("duration", &duration)]),
            )
            .size(typography::BODY),
        )
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "diagnostics-event-count",
                &[("count", &count), ("problems", &problems)],
            ))
            .size(typography::BODY),
        )
        .into()
}

fn build_event_list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let lines = event_lines(ctx.diagnostics);
    if lines.is_empty() {
        return Text::new(ctx.i18n.tr("diagnostics-empty"))
            .size(typography::BODY)
            .into();
    }

    lines
        .into_iter()
        .fold(
            Column::new().spacing(spacing::XXS),
            |column, (offset, description, problem)| {
                let description = Text::new(description).size(typography::BODY);
                let description = if problem {
                    description.color(palette::WARNING_500)
                } else {
                    description
                };
                column.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(
                            Text::new(offset)
                                .size(typography::CAPTION)
                                .width(Length::Fixed(80.0)),
                        )
                        .push(description),
                )
            },
        )
        .into()
}

/// Renders the panel.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("diagnostics-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToViewer);

    let title = Text::new(ctx.i18n.tr("diagnostics-title")).size(typography::TITLE_LG);

    let log = Container::new(build_event_list(&ctx))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::XL)
        .push(back_button)
        .push(title)
        .push(build_summary(&ctx))
        .push(log)
        .into()
}
