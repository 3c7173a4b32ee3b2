// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for the supported languages.

use crate::config::Config;
use crate::domain::gallery::Language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("loaded", &self.bundles.len())
            .finish()
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the starting language.
    ///
    /// Resolution order: CLI flag, config file, OS locale, English.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(language) = filename.strip_suffix(".ftl").and_then(Language::from_code) else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            if let Some(bundle) = build_bundle(language, &String::from_utf8_lossy(content.data.as_ref())) {
                bundles.insert(language, bundle);
            }
        }

        let current = resolve_language(
            cli_lang.as_deref(),
            config.general.language.as_deref(),
            sys_locale::get_locale().as_deref(),
        );

        Self { bundles, current }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        if self.bundles.contains_key(&language) {
            self.current = language;
        }
    }

    /// Translates `key` in the current language, falling back to English and
    /// then to the key itself.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Like [`I18n::tr`] with named Fluent arguments.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        [self.current, Language::En]
            .into_iter()
            .find_map(|language| self.format_in(language, key, args))
            .unwrap_or_else(|| key.to_string())
    }

    fn format_in(&self, language: Language, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        errors.is_empty().then(|| value.into_owned())
    }
}

fn build_bundle(language: Language, source: &str) -> Option<FluentBundle<FluentResource>> {
    let langid: LanguageIdentifier = language.code().parse().ok()?;
    let resource = match FluentResource::try_new(source.to_string()) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(language = language.code(), ?errors, "translation file has syntax errors");
            resource
        }
    };
    let mut bundle = FluentBundle::new(vec![langid]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(language = language.code(), ?errors, "duplicate translation messages");
    }
    Some(bundle)
}

/// Picks the first recognized language among the CLI flag, the config value
/// and the OS locale.
#[must_use]
pub fn resolve_language(cli: Option<&str>, config: Option<&str>, os_locale: Option<&str>) -> Language {
    [cli, config, os_locale]
        .into_iter()
        .flatten()
        .find_map(Language::from_code)
        .unwrap_or_default()
}
