// SPDX-License-Identifier: MPL-2.0
//! Astronomy-picture-of-the-day domain: records, feed loading and preview
//! resolution. Nothing in here depends on the UI.

pub mod feed;
pub mod record;
pub mod thumbnail;

pub use record::{MediaKind, Record};

/// Feed served when neither the CLI nor the config file names another one.
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";
