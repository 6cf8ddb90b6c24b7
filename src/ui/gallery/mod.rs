// SPDX-License-Identifier: MPL-2.0
//! Gallery of APOD cards: header, fetch control and the card grid.

pub mod card;
pub mod component;

pub use card::Card;
pub use component::{Effect, FocusMove, Message, State, Surface, ViewEnv};
