// SPDX-License-Identifier: MPL-2.0
//! Modal rendering of the detail overlay.

use super::component::{Message, State};
use super::content::MediaItem;
use crate::i18n::fluent::I18n;
use crate::media::RemoteImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, image, mouse_area, opaque, scrollable, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the overlay, or nothing while it is closed.
///
/// The dialog is wrapped in `opaque` so presses inside it never reach the
/// backdrop, which closes the overlay.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    if !state.is_open() {
        return None;
    }

    let dialog = Container::new(scrollable(dialog_body(state, i18n)))
        .max_width(sizing::DIALOG_MAX_WIDTH)
        .max_height(sizing::DIALOG_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(styles::container::dialog);

    let backdrop = center(opaque(dialog))
        .padding(spacing::XL)
        .style(styles::container::backdrop);

    Some(opaque(mouse_area(backdrop).on_press(Message::BackdropPressed)))
}

fn dialog_body<'a>(state: &'a State, i18n: &'a I18n) -> Column<'a, Message> {
    let content = state.content();

    let close = button(Text::new(i18n.tr("detail-close")))
        .style(styles::button::link)
        .on_press(Message::CloseRequested);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(content.title.as_str())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(close);

    let mut media = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center);
    for item in &content.media {
        media = media.push(media_item(state, item, i18n));
    }

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(Text::new(content.date.as_str()).size(typography::CAPTION))
        .push(media)
        .push(Text::new(content.explanation.as_str()).size(typography::BODY));

    if let Some(holder) = &content.credit {
        body = body.push(
            Text::new(i18n.tr_with_args("detail-credit", &[("holder", holder.as_str())]))
                .size(typography::CAPTION),
        );
    }

    body
}

fn media_item<'a>(state: &'a State, item: &'a MediaItem, i18n: &'a I18n) -> Element<'a, Message> {
    match item {
        MediaItem::Image { src, alt } => remote_image(state, src, alt, i18n),
        MediaItem::Embed { src, poster } => {
            let play = button(Text::new(i18n.tr("detail-play-video")))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::OpenExternal(src.clone()));

            let mut column = Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center);
            if let Some(poster) = poster {
                column = column.push(remote_image(state, poster, "", i18n));
            }
            column.push(play).into()
        }
        MediaItem::Link { href, label } => button(Text::new(i18n.tr(label.i18n_key())))
            .style(styles::button::link)
            .on_press(Message::OpenExternal(href.clone()))
            .into(),
        MediaItem::Placeholder(placeholder) => {
            media_placeholder(i18n.tr(placeholder.i18n_key()))
        }
    }
}

fn remote_image<'a>(
    state: &'a State,
    src: &str,
    alt: &str,
    i18n: &I18n,
) -> Element<'a, Message> {
    match state.image(src) {
        Some(RemoteImage::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DIALOG_MEDIA_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(RemoteImage::Pending) => media_placeholder(i18n.tr("detail-image-loading")),
        Some(RemoteImage::Unavailable) | None if !alt.is_empty() => media_placeholder(alt.to_owned()),
        Some(RemoteImage::Unavailable) | None => {
            media_placeholder(i18n.tr("detail-image-unavailable"))
        }
    }
}

fn media_placeholder<'a>(caption: String) -> Element<'a, Message> {
    Container::new(Text::new(caption).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DIALOG_MEDIA_HEIGHT / 2.0))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::media_placeholder)
        .into()
}
