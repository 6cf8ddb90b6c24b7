// SPDX-License-Identifier: MPL-2.0
//! Detail overlay state and update logic.

use super::content::DetailContent;
use crate::apod::Record;
use crate::media::RemoteImage;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Message {
    /// The close button was pressed.
    CloseRequested,
    /// A press landed on the dimmed area outside the dialog.
    BackdropPressed,
    /// Escape while the overlay is open.
    CancelKeyPressed,
    ImageLoaded {
        generation: u64,
        src: String,
        result: Result<Vec<u8>, String>,
    },
    /// Hand a URL to the system browser.
    OpenExternal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenUrl(String),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    open: bool,
    content: DetailContent,
    images: HashMap<String, RemoteImage>,
    generation: u64,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn content(&self) -> &DetailContent {
        &self.content
    }

    /// Generation tag for image fetches started by the latest `open`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Loading state of a media image requested by the latest `open`.
    #[must_use]
    pub fn image(&self, src: &str) -> Option<&RemoteImage> {
        self.images.get(src)
    }

    /// Shows the overlay for `record`, replacing whatever was shown before.
    ///
    /// Returns the image URLs to fetch, tagged with [`State::generation`].
    pub fn open(&mut self, record: &Record) -> Vec<String> {
        self.generation += 1;
        self.content = DetailContent::from_record(record);
        self.images.clear();
        self.open = true;

        let sources = self.content.image_sources();
        for src in &sources {
            self.images.insert(src.clone(), RemoteImage::Pending);
        }
        sources
    }

    /// Hides the overlay and releases its media.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.generation += 1;
        self.content.media.clear();
        self.images.clear();
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::CloseRequested | Message::BackdropPressed | Message::CancelKeyPressed => {
                self.close();
                Effect::None
            }
            Message::ImageLoaded {
                generation,
                src,
                result,
            } => {
                if generation == self.generation && self.open {
                    if let Err(err) = &result {
                        tracing::debug!(%src, error = %err, "detail image unavailable");
                    }
                    self.images.insert(src, RemoteImage::from_fetch(result));
                }
                Effect::None
            }
            Message::OpenExternal(url) => Effect::OpenUrl(url),
        }
    }
}
