// SPDX-License-Identifier: MPL-2.0
//! `apod_gallery` is a desktop gallery for NASA's Astronomy Picture of the Day
//! feed, built with the Iced GUI framework.
//!
//! The feed is read once per request, sorted newest first and shown as a grid
//! of cards; activating a card opens a detail overlay with the full record.

pub mod apod;
pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

pub use app::config;
