//! Glossa - translation lookup and locale checking for JSON message catalogs
//!
//! Glossa finds a project's locale directory, loads its JSON catalogs and
//! resolves dotted keys like `common.home.title` to translated text. A key
//! that cannot be resolved comes back unchanged, so a missing translation
//! never breaks rendering.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalogs, translators, directory discovery and locale loading
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Consistency checks across locales
//! - `utils`: Shared utility functions
//!
//! ## Example
//!
//! ```
//! use glossa::core::{Catalog, create_translator};
//!
//! let catalog = Catalog::from_json_str(r#"{"common": {"title": "Home"}}"#).unwrap();
//! let t = create_translator(catalog);
//!
//! assert_eq!(t("common.title"), "Home");
//! assert_eq!(t("common.missing"), "common.missing");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
