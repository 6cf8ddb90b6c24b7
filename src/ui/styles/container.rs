// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dialog surface of the detail overlay.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the dialog stays readable in both light and dark modes.
pub fn dialog(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    let base = ext.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        text_color: Some(ext.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer behind the dialog. Presses on it dismiss the overlay.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Frame around a preview or media item that has no image yet.
pub fn media_placeholder(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(ext.background.strong.color)),
        text_color: Some(ext.background.strong.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline error message replacing the gallery cards.
pub fn error_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
