// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round previous/next arrows drawn over the main image.
pub fn gallery_nav(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thumbnail button. The active image gets an accent border.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let border_color = if selected {
            palette::ACCENT_500
        } else if status == button::Status::Hovered {
            theme.extended_palette().background.strong.color
        } else {
            Color::TRANSPARENT
        };

        button::Style {
            background: None,
            text_color: theme.palette().text,
            border: Border {
                color: border_color,
                width: if selected { 2.0 } else { 1.0 },
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Link-like button used for related projects.
pub fn related(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(palette::ACCENT_400)), palette::ACCENT_600)
        }
        _ => (
            Some(Background::Color(if is_light {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            })),
            palette::GRAY_400,
        ),
    };

    button::Style {
        background,
        text_color: if is_light { palette::GRAY_900 } else { WHITE },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
