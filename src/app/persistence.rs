// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Language and theme changes are written to `settings.toml` as soon as the
//! user makes them.

use super::Message;
use crate::config::{self, Config};
use crate::domain::gallery::Language;
use crate::i18n::I18n;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Writes `config` to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the apply functions directly.
pub fn persist_preferences(config: &Config) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    if let Err(error) = config::save(config) {
        tracing::warn!(%error, "failed to save config");
    }

    Task::none()
}

/// Switches the UI language and records it in the config.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    language: Language,
) -> Task<Message> {
    i18n.set_language(language);
    config.general.language = Some(i18n.language().code().to_string());
    tracing::debug!(language = language.code(), "language changed");
    persist_preferences(config)
}

/// Switches the theme mode and records it in the config.
pub fn apply_theme_change(
    theme_mode: &mut ThemeMode,
    config: &mut Config,
    mode: ThemeMode,
) -> Task<Message> {
    *theme_mode = mode;
    config.general.theme_mode = mode;
    persist_preferences(config)
}
