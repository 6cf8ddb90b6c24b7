// SPDX-License-Identifier: MPL-2.0
//! Detail overlay for one APOD record.

pub mod component;
pub mod content;
pub mod view;

pub use component::{Effect, Message, State};
pub use content::{DetailContent, LinkLabel, MediaItem, Placeholder};
pub use view::view;
