// SPDX-License-Identifier: MPL-2.0
//! Supported languages and per-language text.

use std::fmt;

/// Languages the gallery is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Vi,
    Ja,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Vi, Language::Ja];

    /// Two-letter language code used by the content store and config file.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
            Language::Ja => "ja",
        }
    }

    /// Parses a language code, accepting region-qualified tags (`ja-JP`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "vi" => Some(Language::Vi),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Vi => "Tiếng Việt",
            Language::Ja => "日本語",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

/// Text available in up to three languages.
///
/// Reads always go through [`LocalizedText::get`], which falls back to
/// English and then to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: Option<String>,
    pub vi: Option<String>,
    pub ja: Option<String>,
}

impl LocalizedText {
    /// Text with only the English entry set.
    #[must_use]
    pub fn english(text: impl Into<String>) -> Self {
        Self {
            en: Some(text.into()),
            ..Self::default()
        }
    }

    fn entry(&self, language: Language) -> Option<&str> {
        let value = match language {
            Language::En => self.en.as_deref(),
            Language::Vi => self.vi.as_deref(),
            Language::Ja => self.ja.as_deref(),
        };
        value.filter(|text| !text.is_empty())
    }

    /// Returns the text for `language`, else the English text, else `""`.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        self.entry(language)
            .or_else(|| self.entry(Language::En))
            .unwrap_or("")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Language::ALL.iter().all(|lang| self.entry(*lang).is_none())
    }
}
