// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report side effects as `Effect`s; the handlers here turn them
//! into `Task`s running on the shared HTTP client.

use super::subscription::KeyAction;
use super::Message;
use crate::apod::{feed, Record};
use crate::media::remote;
use crate::ui::detail;
use crate::ui::gallery::{self, FocusMove};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub detail: &'a mut detail::State,
    pub client: &'a reqwest::Client,
    pub feed_url: &'a str,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle_message(message) {
        gallery::Effect::None => Task::none(),
        gallery::Effect::StartLoad => load_feed(ctx.client, ctx.feed_url),
        gallery::Effect::FetchPreviews {
            generation,
            requests,
        } => fetch_previews(ctx.client, generation, requests),
        gallery::Effect::OpenDetail(record) => open_detail(ctx, &record),
    }
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail::Message,
) -> Task<Message> {
    match ctx.detail.handle_message(message) {
        detail::Effect::None => {}
        detail::Effect::OpenUrl(url) => {
            if let Err(err) = remote::open_in_browser(&url) {
                tracing::warn!(%url, error = %err, "could not open link");
            }
        }
    }
    Task::none()
}

/// Routes a keyboard shortcut to the overlay while it is open, otherwise to
/// the gallery.
pub fn handle_key_action(ctx: &mut UpdateContext<'_>, action: KeyAction) -> Task<Message> {
    if ctx.detail.is_open() {
        return match action {
            KeyAction::Cancel => handle_detail_message(ctx, detail::Message::CancelKeyPressed),
            _ => Task::none(),
        };
    }

    let message = match action {
        KeyAction::Cancel => return Task::none(),
        KeyAction::Confirm => gallery::Message::ActivateFocused,
        KeyAction::FocusNext => gallery::Message::MoveFocus(FocusMove::Next),
        KeyAction::FocusPrevious => gallery::Message::MoveFocus(FocusMove::Previous),
        KeyAction::FocusDown => gallery::Message::MoveFocus(FocusMove::Down),
        KeyAction::FocusUp => gallery::Message::MoveFocus(FocusMove::Up),
    };
    handle_gallery_message(ctx, message)
}

/// Starts reading the feed.
pub fn load_feed(client: &reqwest::Client, url: &str) -> Task<Message> {
    Task::perform(feed::load(client.clone(), url.to_owned()), |result| {
        Message::Gallery(gallery::Message::FeedLoaded(result))
    })
}

fn fetch_previews(
    client: &reqwest::Client,
    generation: u64,
    requests: Vec<(usize, String)>,
) -> Task<Message> {
    Task::batch(requests.into_iter().map(|(index, url)| {
        Task::perform(remote::fetch_image(client.clone(), url), move |result| {
            Message::Gallery(gallery::Message::PreviewLoaded {
                generation,
                index,
                result,
            })
        })
    }))
}

fn open_detail(ctx: &mut UpdateContext<'_>, record: &Record) -> Task<Message> {
    tracing::debug!(title = record.title(), "opening detail");
    let sources = ctx.detail.open(record);
    let generation = ctx.detail.generation();

    Task::batch(sources.into_iter().map(|src| {
        Task::perform(
            remote::fetch_image(ctx.client.clone(), src.clone()),
            move |result| {
                Message::Detail(detail::Message::ImageLoaded {
                    generation,
                    src,
                    result,
                })
            },
        )
    }))
}
