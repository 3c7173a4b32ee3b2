// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `State`, handles its own `Message`, and reports work for the
//! application as an `Effect` or `Event`.
//!
//! # Screens
//!
//! - [`gallery`] - Explore stream, album grid and single-album view
//! - [`lightbox`] - Full-window photo viewer with zoom
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (zoom)
//! - [`widgets`] - Custom Iced widgets (spinner, wheel zoom)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Language and theme selectors

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
