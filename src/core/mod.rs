//! Core localization engine.
//!
//! ## Module Structure
//!
//! - `catalog`: nested translation tree (`Catalog`)
//! - `translator`: dotted-key lookup with key fallback (`Translator`)
//! - `locator`: upward search for the locales directory (`Locator`)
//! - `parsers`: loading locale JSON files into catalogs
//! - `registry`: one translator per locale with primary-locale fallback
//! - `context`: CLI settings and loaded locale data shared by commands
//! - `data`: loaded locale data with key locations for reporting

pub mod catalog;
pub mod context;
pub mod data;
pub mod locator;
pub mod parsers;
pub mod registry;
pub mod translator;

pub use catalog::Catalog;
pub use context::{CheckContext, Settings};
pub use data::{AllLocaleMessages, LocaleMessages, MessageContext, MessageLocation};
pub use locator::{
    DEFAULT_MAX_DEPTH, FsProbe, LOCALES_DIR_NAME, Locator, TokioFs, effective_locales_dir,
    find_directory_recursive, find_locales_directory,
};
pub use parsers::json::{MessageScanWarning, ScanMessagesResult, scan_message_files};
pub use registry::LocaleRegistry;
pub use translator::{Translator, create_translator};
