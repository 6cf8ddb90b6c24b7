// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.

use super::card::{self, Card};
use crate::apod::Record;
use crate::error::LoadError;
use crate::i18n::fluent::I18n;
use crate::media::RemoteImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by gallery widgets and by the tasks it requests.
#[derive(Debug, Clone)]
pub enum Message {
    /// The fetch button was pressed.
    FetchRequested,
    FeedLoaded(Result<Vec<Record>, LoadError>),
    PreviewLoaded {
        generation: u64,
        index: usize,
        result: Result<Vec<u8>, String>,
    },
    /// A card was pressed.
    CardActivated(usize),
    MoveFocus(FocusMove),
    /// Keyboard confirm on the focused card.
    ActivateFocused,
}

/// Keyboard focus movement across the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
    /// One row down.
    Down,
    /// One row up.
    Up,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start reading the feed.
    StartLoad,
    /// Download the previews of freshly rendered cards.
    FetchPreviews {
        generation: u64,
        requests: Vec<(usize, String)>,
    },
    /// Show the detail overlay for this record.
    OpenDetail(Record),
}

/// What the gallery area currently shows.
#[derive(Debug, Clone, Default)]
pub enum Surface {
    /// Nothing loaded yet.
    #[default]
    Idle,
    Cards(Vec<Card>),
    /// Inline error placeholder of the last failed load.
    Failed(LoadError),
}

/// Environment required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    records: Vec<Record>,
    surface: Surface,
    busy: bool,
    focused: Option<usize>,
    generation: u64,
    columns: usize,
}

impl Default for State {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COLUMNS)
    }
}

impl State {
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            records: Vec::new(),
            surface: Surface::Idle,
            busy: false,
            focused: None,
            generation: 0,
            columns: columns.max(1),
        }
    }

    /// Whether a feed load is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Cards currently displayed, empty unless the last load succeeded.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.surface {
            Surface::Cards(cards) => cards,
            _ => &[],
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Marks a load as started. Returns `false` if one is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::FetchRequested => {
                if self.begin_load() {
                    Effect::StartLoad
                } else {
                    Effect::None
                }
            }
            Message::FeedLoaded(result) => {
                // Busy indicator is restored whatever the outcome.
                self.busy = false;
                match result {
                    Ok(records) => self.show(records),
                    Err(err) => {
                        self.fail(err);
                        Effect::None
                    }
                }
            }
            Message::PreviewLoaded {
                generation,
                index,
                result,
            } => {
                self.apply_preview(generation, index, result);
                Effect::None
            }
            Message::CardActivated(index) => {
                self.focused = Some(index);
                self.open(index)
            }
            Message::MoveFocus(direction) => {
                self.move_focus(direction);
                Effect::None
            }
            Message::ActivateFocused => match self.focused {
                Some(index) => self.open(index),
                None => Effect::None,
            },
        }
    }

    /// Replaces every card with the given records, keeping their order.
    fn show(&mut self, records: Vec<Record>) -> Effect {
        self.generation += 1;
        self.focused = None;

        let cards: Vec<Card> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Card::from_record(index, record))
            .collect();
        let requests = cards
            .iter()
            .filter(|card| !card.preview_url.is_empty())
            .map(|card| (card.index, card.preview_url.clone()))
            .collect();

        self.records = records;
        self.surface = Surface::Cards(cards);

        Effect::FetchPreviews {
            generation: self.generation,
            requests,
        }
    }

    fn fail(&mut self, err: LoadError) {
        tracing::error!(error = %err, "failed to fetch APOD data");
        self.generation += 1;
        self.focused = None;
        self.records.clear();
        self.surface = Surface::Failed(err);
    }

    fn apply_preview(&mut self, generation: u64, index: usize, result: Result<Vec<u8>, String>) {
        if generation != self.generation {
            return;
        }
        if let Err(err) = &result {
            tracing::debug!(index, error = %err, "preview unavailable");
        }
        if let Surface::Cards(cards) = &mut self.surface {
            if let Some(card) = cards.get_mut(index) {
                card.preview = RemoteImage::from_fetch(result);
            }
        }
    }

    fn open(&self, index: usize) -> Effect {
        match self.records.get(index) {
            Some(record) => Effect::OpenDetail(record.clone()),
            None => Effect::None,
        }
    }

    fn move_focus(&mut self, direction: FocusMove) {
        let count = self.cards().len();
        if count == 0 {
            self.focused = None;
            return;
        }

        let Some(current) = self.focused else {
            self.focused = Some(match direction {
                FocusMove::Next | FocusMove::Down => 0,
                FocusMove::Previous | FocusMove::Up => count - 1,
            });
            return;
        };

        let next = match direction {
            FocusMove::Next => (current + 1) % count,
            FocusMove::Previous => (current + count - 1) % count,
            FocusMove::Down => {
                let below = current + self.columns;
                if below < count {
                    below
                } else {
                    current
                }
            }
            FocusMove::Up => current.checked_sub(self.columns).unwrap_or(current),
        };
        self.focused = Some(next);
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let i18n = env.i18n;

        let fetch_label = if self.busy {
            i18n.tr("fetch-button-loading")
        } else {
            i18n.tr("fetch-button")
        };
        let fetch_button = button(Text::new(fetch_label))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary)
            .on_press_maybe((!self.busy).then_some(Message::FetchRequested));

        let header = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(i18n.tr("app-heading"))
                    .size(typography::TITLE_LG)
                    .width(Length::Fill),
            )
            .push(fetch_button);

        let body: Element<'a, Message> = match &self.surface {
            Surface::Idle => empty_state(i18n),
            Surface::Failed(err) => error_state(err, i18n),
            Surface::Cards(cards) => self.grid(cards, i18n),
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(sizing::GALLERY_MAX_WIDTH)
            .push(header)
            .push(body);

        Container::new(scrollable(content).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    }

    fn grid<'a>(&'a self, cards: &'a [Card], i18n: &'a I18n) -> Element<'a, Message> {
        let mut grid = Column::new().spacing(spacing::MD);

        for chunk in cards.chunks(self.columns) {
            let mut row = Row::new().spacing(spacing::MD);
            for card in chunk {
                row = row.push(card::view(card, self.focused == Some(card.index), i18n));
            }
            // Pad the last row so its cards keep the same width as the others.
            for _ in chunk.len()..self.columns {
                row = row.push(Column::new().width(Length::FillPortion(1)));
            }
            grid = grid.push(row);
        }

        grid.into()
    }
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("gallery-empty-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("gallery-empty-subtitle")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// Single inline failure message; hovering it reveals the failure kind.
fn error_state<'a>(err: &LoadError, i18n: &'a I18n) -> Element<'a, Message> {
    let message = Container::new(Text::new(i18n.tr("gallery-load-error")).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::error_placeholder);

    tooltip(
        message,
        Text::new(i18n.tr(err.i18n_key())).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}
