use std::collections::BTreeMap;

use crate::core::catalog::Catalog;
use crate::core::translator::Translator;

/// Position information in locale files (JSON).
///
/// Represents a specific location in a locale JSON file, used for error reporting
/// when there are issues with translation values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./locales/en/common.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// A translation key together with its value and where it was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The full translation key, namespace included (e.g., "common.submit").
    pub key: String,
    /// The translation value.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Everything loaded for a single locale.
#[derive(Debug, Clone)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "zh-CN").
    pub locale: String,
    /// Merged catalog of every file of this locale.
    pub catalog: Catalog,
    /// Leaf entries keyed by full translation key.
    pub entries: BTreeMap<String, MessageContext>,
    /// Files that were merged into the catalog, in merge order.
    pub files: Vec<String>,
}

pub type AllLocaleMessages = BTreeMap<String, LocaleMessages>;

impl LocaleMessages {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            catalog: Catalog::empty(),
            entries: BTreeMap::new(),
            files: Vec::new(),
        }
    }

    /// Get a message entry by key.
    pub fn get(&self, key: &str) -> Option<&MessageContext> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A translator over this locale's catalog.
    pub fn translator(&self) -> Translator {
        Translator::new(self.catalog.clone())
    }
}
