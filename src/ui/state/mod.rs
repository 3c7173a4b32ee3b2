// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State logic kept apart from the widgets that render it.

pub mod zoom;

pub use zoom::ZoomState;
