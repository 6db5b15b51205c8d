//! One translator per locale.

use std::{collections::BTreeMap, path::Path};

use anyhow::Result;
use glob::Pattern;
use tracing::debug;

use super::{
    AllLocaleMessages, Catalog, MessageScanWarning, Translator, parsers::json::scan_message_files,
};

/// Translators for every loaded locale, with fallback to a primary locale.
///
/// Translators are immutable, so a registry can be shared between request
/// handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    primary_locale: String,
    translators: BTreeMap<String, Translator>,
}

impl LocaleRegistry {
    pub fn new(primary_locale: impl Into<String>) -> Self {
        Self {
            primary_locale: primary_locale.into(),
            translators: BTreeMap::new(),
        }
    }

    pub fn from_catalogs(
        primary_locale: impl Into<String>,
        catalogs: impl IntoIterator<Item = (String, Catalog)>,
    ) -> Self {
        let mut registry = Self::new(primary_locale);
        for (locale, catalog) in catalogs {
            registry.insert(locale, catalog);
        }
        registry
    }

    pub fn from_messages(primary_locale: impl Into<String>, messages: &AllLocaleMessages) -> Self {
        let mut registry = Self::new(primary_locale);
        for (locale, locale_messages) in messages {
            registry
                .translators
                .insert(locale.clone(), locale_messages.translator());
        }
        registry
    }

    /// Load every locale in `locales_dir`.
    ///
    /// Files that failed to load are returned alongside the registry.
    pub fn load(
        locales_dir: impl AsRef<Path>,
        primary_locale: impl Into<String>,
        ignores: &[Pattern],
    ) -> Result<(Self, Vec<MessageScanWarning>)> {
        let scan = scan_message_files(locales_dir, ignores)?;
        let registry = Self::from_messages(primary_locale, &scan.messages);
        Ok((registry, scan.warnings))
    }

    pub fn insert(&mut self, locale: impl Into<String>, catalog: Catalog) {
        self.translators.insert(locale.into(), Translator::new(catalog));
    }

    pub fn primary_locale(&self) -> &str {
        &self.primary_locale
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translators.keys().map(String::as_str)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.translators.contains_key(locale)
    }

    pub fn translator(&self, locale: &str) -> Option<&Translator> {
        self.translators.get(locale)
    }

    /// The loaded locale that serves `locale`: the locale itself, else its
    /// base language (`zh-CN` -> `zh`), else the primary locale.
    pub fn resolve_locale<'a>(&'a self, locale: &'a str) -> Option<&'a str> {
        if self.contains(locale) {
            return Some(locale);
        }

        if let Some((base, _)) = locale.split_once(['-', '_'])
            && self.contains(base)
        {
            debug!(locale, base, "using base language");
            return Some(base);
        }

        if self.contains(&self.primary_locale) {
            debug!(locale, primary = %self.primary_locale, "using primary locale");
            return Some(&self.primary_locale);
        }
        None
    }

    /// Translator for `locale` with the fallbacks of [`Self::resolve_locale`].
    pub fn translator_or_primary(&self, locale: &str) -> Option<&Translator> {
        self.resolve_locale(locale)
            .and_then(|resolved| self.translator(resolved))
    }
}
