// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::subscription::KeyAction;
use crate::ui::{detail, gallery};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Detail(detail::Message),
    /// Keyboard shortcut not captured by any widget.
    Keyboard(KeyAction),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Feed URL taking precedence over the config file.
    pub feed_url: Option<String>,
    /// Config directory taking precedence over `APOD_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Start fetching the feed as soon as the window opens.
    pub load_on_start: bool,
}
