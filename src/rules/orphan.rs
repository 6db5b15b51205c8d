//! Orphan translation key detection rule.
//!
//! Detects translation keys that exist in non-primary locales
//! but are missing from the primary locale.

use crate::{core::AllLocaleMessages, issues::OrphanKeyIssue};

/// Check for orphan translation keys.
///
/// These are typically leftovers from content that was removed from the
/// primary locale but not from the others.
pub fn check_orphan_keys(
    primary_locale: &str,
    all_messages: &AllLocaleMessages,
) -> Vec<OrphanKeyIssue> {
    let Some(primary_messages) = all_messages.get(primary_locale) else {
        return Vec::new();
    };

    all_messages
        .iter()
        .filter(|(locale, _)| *locale != primary_locale)
        .flat_map(|(locale, messages)| {
            messages
                .entries
                .iter()
                .filter(|(key, _)| !primary_messages.contains_key(key))
                .map(|(_, context)| OrphanKeyIssue {
                    context: context.clone(),
                    locale: locale.clone(),
                })
        })
        .collect()
}
