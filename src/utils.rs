//! Common utility functions shared across the codebase.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Captures, Regex};

/// Matches `{name}` placeholders, allowing whitespace inside the braces.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}").unwrap());

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use glossa::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Names of all `{name}` placeholders in a translated string.
///
/// ```
/// use glossa::utils::placeholders;
///
/// let names: Vec<_> = placeholders("{count} skills for { hero }").into_iter().collect();
/// assert_eq!(names, vec!["count", "hero"]);
/// ```
pub fn placeholders(text: &str) -> BTreeSet<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Replace `{name}` placeholders using `args`.
///
/// Placeholders without a matching argument are kept verbatim.
pub fn interpolate(text: &str, args: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            match args.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
