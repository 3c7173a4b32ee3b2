// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files for English, Vietnamese and Japanese
//! - Runtime language switching
//! - Fallback to English when translations are missing
//! - Localized long-form dates for album captions

pub mod date;
pub mod fluent;

pub use date::format_capture_date;
pub use fluent::I18n;
