// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (fetch).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Grayed out, non-interactive button (fetch while busy).
fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Gallery card. `focused` draws the keyboard focus ring.
pub fn card(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ext = theme.extended_palette();

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => ext.background.strong.color,
            _ => ext.background.weak.color,
        };

        let border = if focused {
            Border {
                color: palette::PRIMARY_400,
                width: 2.0,
                radius: radius::MD.into(),
            }
        } else {
            Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..ext.background.base.text
                },
                width: 1.0,
                radius: radius::MD.into(),
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: ext.background.base.text,
            border,
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::SM
            },
            snap: true,
        }
    }
}

/// Text-only button used for links and the dialog close action.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => ext.primary.strong.color,
        _ => ext.primary.base.color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
