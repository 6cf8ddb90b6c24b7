// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! detail overlay.
//!
//! The `App` struct wires together localization, configuration and the two
//! UI components, and translates their effects into network tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{key_action, KeyAction};

use crate::i18n::fluent::I18n;
use crate::media::remote;
use crate::ui::theming::ThemeMode;
use crate::ui::{detail, gallery};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    feed_url: String,
    client: reqwest::Client,
    gallery: gallery::State,
    detail: detail::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("feed_url", &self.feed_url)
            .field("cards", &self.gallery.cards().len())
            .field("detail_open", &self.detail.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are only consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off the first feed
    /// load based on the launcher `Flags` and the config file.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let client = remote::build_client(config.timeout()).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to a default HTTP client");
            reqwest::Client::new()
        });

        let feed_url = flags
            .feed_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| config.feed_url().to_owned());

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            feed_url,
            client,
            gallery: gallery::State::new(config.columns()),
            detail: detail::State::new(),
        };

        let task = if flags.load_on_start || config.load_on_start() {
            app.update(Message::Gallery(gallery::Message::FetchRequested))
        } else {
            Task::none()
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let title = &self.detail.content().title;

        if self.detail.is_open() && !title.is_empty() {
            format!("{title} - {app_name}")
        } else {
            app_name
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            detail: &mut self.detail,
            client: &self.client,
            feed_url: &self.feed_url,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
            Message::Keyboard(action) => update::handle_key_action(&mut ctx, action),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            detail: &self.detail,
        })
    }
}
