// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `State`, handles its own `Message` and reports side effects to
//! the application as an `Effect`.
//!
//! - [`gallery`] - Fetch control and the card grid
//! - [`detail`] - Modal overlay for one record
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod detail;
pub mod gallery;
pub mod styles;
pub mod theming;
