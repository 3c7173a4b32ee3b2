// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types and business rules.
//!
//! This module contains pure domain types and value objects. Apart from
//! `chrono` for calendar dates it has no dependencies beyond `std`, so every
//! rule here is testable without a network or a window.
//!
//! # Modules
//!
//! - [`gallery`]: Albums, photos and their identifiers
//!   ([`Album`](gallery::Album), [`Photo`](gallery::Photo),
//!   [`LocalizedText`](gallery::LocalizedText), [`FolderId`](gallery::FolderId))

pub mod gallery;
