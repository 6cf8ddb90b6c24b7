// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is always rendered; the detail overlay is stacked on top of it
//! while open.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::{detail, gallery};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub detail: &'a detail::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Container::new(
        ctx.gallery
            .view(gallery::ViewEnv { i18n: ctx.i18n })
            .map(Message::Gallery),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(overlay) = detail::view(ctx.detail, ctx.i18n) {
        stack = stack.push(overlay.map(Message::Detail));
    }

    stack.into()
}
