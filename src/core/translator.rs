//! Key lookup over a [`Catalog`].
//!
//! A [`Translator`] resolves dotted keys such as `common.home.title` by
//! walking the catalog one segment at a time. Resolution is total: whenever
//! the walk fails, or ends on a node instead of a leaf, the key itself is
//! returned so that pages render the raw key rather than failing.

use std::sync::Arc;

use super::catalog::Catalog;
use crate::utils::interpolate;

/// Immutable, cheaply clonable lookup handle over a single catalog.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalog: Arc<Catalog>,
}

impl Translator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The leaf at `key`, or `None` when the key does not resolve to a string.
    ///
    /// Use this instead of comparing [`translate`](Self::translate) output with
    /// the key when a translation may legitimately equal its own key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.catalog.leaf(key)
    }

    /// Resolve `key`, falling back to the key itself.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// Resolve `key` and substitute `{name}` placeholders from `args`.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.translate(key), args)
    }
}

impl From<Catalog> for Translator {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

/// Build a lookup function closed over `catalog`.
///
/// ```
/// use glossa::core::{Catalog, create_translator};
///
/// let catalog = Catalog::from_json_str(r#"{"common": {"title": "Hello"}}"#).unwrap();
/// let t = create_translator(catalog);
///
/// assert_eq!(t("common.title"), "Hello");
/// assert_eq!(t("common.missing"), "common.missing");
/// assert_eq!(t("common"), "common");
/// ```
pub fn create_translator(catalog: Catalog) -> impl Fn(&str) -> String + Clone + Send + Sync {
    let translator = Translator::new(catalog);
    move |key: &str| translator.translate(key).to_string()
}
