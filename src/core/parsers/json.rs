//! Locale file loading.
//!
//! Two layouts are supported inside a locales directory and may be mixed:
//!
//! ```text
//! locales/
//! ├── en.json              # merged at the catalog root
//! └── en/
//!     ├── common.json      # keys under "common."
//!     └── game/
//!         └── skills.json  # keys under "game.skills."
//! ```
//!
//! Files are parsed in parallel. A file that cannot be read or parsed is
//! reported as a [`MessageScanWarning`] and skipped; the rest of the locale
//! still loads.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{
    AllLocaleMessages, LocaleMessages, MessageContext, MessageLocation,
    catalog::{Catalog, KEY_SEPARATOR},
};

const JSON_EXTENSION: &str = "json";

/// A warning from scanning locale files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub messages: AllLocaleMessages,
    pub warnings: Vec<MessageScanWarning>,
}

impl ScanMessagesResult {
    /// Number of locale files that were loaded successfully.
    pub fn files_loaded(&self) -> usize {
        self.messages.values().map(|m| m.files.len()).sum()
    }
}

/// A locale file and the namespace its keys are nested under.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LocaleFile {
    path: PathBuf,
    namespace: Vec<String>,
}

/// Parsed content of one locale file.
struct ParsedFile {
    file: LocaleFile,
    content: String,
    catalog: Catalog,
}

fn parse_json_file(file: LocaleFile) -> Result<ParsedFile, MessageScanWarning> {
    let read = fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read JSON file: {:?}", file.path))
        .and_then(|content| {
            let catalog = Catalog::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON file: {:?}", file.path))?;
            Ok((content, catalog))
        });

    match read {
        Ok((content, catalog)) => Ok(ParsedFile {
            file,
            content,
            catalog,
        }),
        Err(e) => Err(MessageScanWarning {
            file_path: file.path.to_string_lossy().to_string(),
            error: format!("{:#}", e),
        }),
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(JSON_EXTENSION)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn ensure_dir(locales_dir: &Path) -> Result<()> {
    if !locales_dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your .glossarc.json 'localesDir' setting.",
            locales_dir.display()
        );
    }

    if !locales_dir.is_dir() {
        bail!("'{}' is not a directory.", locales_dir.display());
    }

    Ok(())
}

/// List the locales available in `locales_dir`, sorted.
///
/// Both `<locale>.json` files and `<locale>/` directories count; hidden
/// entries are skipped.
pub fn discover_locales(locales_dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let locales_dir = locales_dir.as_ref();
    ensure_dir(locales_dir)?;

    let mut locales = BTreeSet::new();
    for entry in fs::read_dir(locales_dir)
        .with_context(|| format!("Failed to read directory: {:?}", locales_dir))?
    {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_hidden(name) {
            continue;
        }

        if path.is_dir() {
            locales.insert(name.to_string());
        } else if is_json(&path)
            && let Some(locale) = extract_locale(&path)
        {
            locales.insert(locale);
        }
    }

    Ok(locales.into_iter().collect())
}

fn is_ignored(path: &Path, locales_dir: &Path, ignores: &[Pattern]) -> bool {
    let relative = path.strip_prefix(locales_dir).unwrap_or(path);
    ignores.iter().any(|p| p.matches_path(relative))
}

/// Collect the files of `locale` in merge order: the root file first, then
/// namespace files sorted by path.
fn collect_locale_files(locales_dir: &Path, locale: &str, ignores: &[Pattern]) -> Vec<LocaleFile> {
    let mut files = Vec::new();

    let root_file = locales_dir.join(format!("{}.{}", locale, JSON_EXTENSION));
    if root_file.is_file() && !is_ignored(&root_file, locales_dir, ignores) {
        files.push(LocaleFile {
            path: root_file,
            namespace: Vec::new(),
        });
    }

    let locale_dir = locales_dir.join(locale);
    if !locale_dir.is_dir() {
        return files;
    }

    let walker = WalkDir::new(&locale_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_str().is_some_and(is_hidden));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable locale path");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_json(path) {
            continue;
        }
        if is_ignored(path, locales_dir, ignores) {
            debug!(path = %path.display(), "ignored by config");
            continue;
        }

        let Ok(relative) = path.strip_prefix(&locale_dir) else {
            continue;
        };
        let namespace = relative
            .with_extension("")
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        files.push(LocaleFile {
            path: path.to_path_buf(),
            namespace,
        });
    }

    files
}

/// Load every file of one locale into a single catalog.
///
/// Files that fail to load are returned as warnings.
pub fn load_locale(
    locales_dir: impl AsRef<Path>,
    locale: &str,
    ignores: &[Pattern],
) -> (LocaleMessages, Vec<MessageScanWarning>) {
    let locales_dir = locales_dir.as_ref();
    let files = collect_locale_files(locales_dir, locale, ignores);

    let parsed: Vec<Result<ParsedFile, MessageScanWarning>> =
        files.into_par_iter().map(parse_json_file).collect();

    let mut messages = LocaleMessages::new(locale);
    let mut warnings = Vec::new();
    let mut locations = BTreeMap::new();

    for result in parsed {
        match result {
            Ok(parsed) => add_file(&mut messages, &mut locations, parsed),
            Err(warning) => {
                debug!(file = %warning.file_path, error = %warning.error, "skipping locale file");
                warnings.push(warning);
            }
        }
    }

    // Later files can replace leaves of earlier ones, so entries come from
    // the merged catalog rather than from each file.
    let entries: BTreeMap<String, MessageContext> = messages
        .catalog
        .flatten()
        .into_iter()
        .filter_map(|(key, value)| {
            let location = locations.remove(&key)?;
            Some((key.clone(), MessageContext::new(location, key, value)))
        })
        .collect();
    messages.entries = entries;

    (messages, warnings)
}

/// Merge one parsed file into `messages`, recording where each of its
/// leaves was defined.
fn add_file(
    messages: &mut LocaleMessages,
    locations: &mut BTreeMap<String, MessageLocation>,
    parsed: ParsedFile,
) {
    let ParsedFile {
        file,
        content,
        catalog,
    } = parsed;
    let file_path = file.path.to_string_lossy().to_string();
    let line_index = build_line_index(&content);
    let prefix = file.namespace.join(".");

    if catalog.as_leaf().is_some() {
        locations.insert(prefix.clone(), MessageLocation::with_line(file_path.clone(), 1));
    } else {
        for key in catalog.flatten().into_keys() {
            let line = find_key_line(&content, &key, &line_index);
            let full_key = if file.namespace.is_empty() {
                key
            } else {
                format!("{}{}{}", prefix, KEY_SEPARATOR, key)
            };
            locations.insert(full_key, MessageLocation::with_line(file_path.clone(), line));
        }
    }

    let namespace: Vec<&str> = file.namespace.iter().map(String::as_str).collect();
    messages.catalog.insert_at(&namespace, catalog);
    messages.files.push(file_path);
}

/// Load every locale found in `locales_dir`.
pub fn scan_message_files(
    locales_dir: impl AsRef<Path>,
    ignores: &[Pattern],
) -> Result<ScanMessagesResult> {
    let locales_dir = locales_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    for locale in discover_locales(locales_dir)? {
        let (messages, warnings) = load_locale(locales_dir, &locale, ignores);
        debug!(
            locale = %locale,
            files = messages.files.len(),
            keys = messages.len(),
            "loaded locale"
        );
        result.messages.insert(locale, messages);
        result.warnings.extend(warnings);
    }

    Ok(result)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line number where a key appears in the JSON content.
///
/// Searches for each key part in sequence so that `common.submit` finds the
/// `"submit"` that comes after `"common"`, not one in another namespace.
/// Only matches followed by `:` count, so string values containing the same
/// text are skipped. Array index segments have no quoted key and end the
/// search at the enclosing key.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}
