// SPDX-License-Identifier: MPL-2.0
//! Gallery card model and its rendering.

use super::component::Message;
use crate::apod::{thumbnail, Record};
use crate::i18n::fluent::I18n;
use crate::media::RemoteImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, tooltip, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// One card of the gallery.
///
/// `index` points back into the gallery's record list so activation can hand
/// the full source record to the detail view, not only the displayed text.
#[derive(Debug, Clone)]
pub struct Card {
    pub index: usize,
    pub preview_url: String,
    /// Accessible label of the preview: title, else date.
    pub label: Option<String>,
    pub title: Option<String>,
    pub date: String,
    pub preview: RemoteImage,
}

impl Card {
    #[must_use]
    pub fn from_record(index: usize, record: &Record) -> Self {
        let preview_url = thumbnail::resolve(record);
        let preview = if preview_url.is_empty() {
            RemoteImage::Unavailable
        } else {
            RemoteImage::Pending
        };

        Self {
            index,
            preview_url,
            label: record.title.clone().or_else(|| record.date.clone()),
            title: record.title.clone(),
            date: record.date().to_owned(),
            preview,
        }
    }

    /// Title text, with the localized "Untitled" fallback.
    pub fn title_text(&self, i18n: &I18n) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| i18n.tr("card-untitled"))
    }

    /// Preview label, with the localized generic fallback.
    pub fn label_text(&self, i18n: &I18n) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| i18n.tr("card-alt-fallback"))
    }
}

/// Renders one card as a pressable button.
pub fn view<'a>(card: &'a Card, focused: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let label = card.label_text(i18n);

    let preview: Element<'a, Message> = match &card.preview {
        RemoteImage::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        RemoteImage::Pending => preview_placeholder(i18n.tr("preview-loading")),
        RemoteImage::Unavailable => preview_placeholder(i18n.tr("preview-unavailable")),
    };

    let preview = tooltip(
        preview,
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let body = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(Text::new(card.title_text(i18n)).size(typography::BODY))
        .push(Text::new(card.date.as_str()).size(typography::CAPTION));

    button(Column::new().push(preview).push(body))
        .padding(0)
        .width(Length::FillPortion(1))
        .style(styles::button::card(focused))
        .on_press(Message::CardActivated(card.index))
        .into()
}

fn preview_placeholder<'a>(caption: String) -> Element<'a, Message> {
    Container::new(Text::new(caption).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_PREVIEW_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::media_placeholder)
        .into()
}
