//! Keys defined in the primary locale but missing from other locales.

use crate::{core::AllLocaleMessages, issues::MissingKeyIssue};

/// Check for keys missing in non-primary locales.
///
/// One issue is reported per primary key, listing every locale that lacks
/// it. Returns nothing when the primary locale itself was not loaded.
pub fn check_missing_keys(
    primary_locale: &str,
    all_messages: &AllLocaleMessages,
) -> Vec<MissingKeyIssue> {
    let Some(primary_messages) = all_messages.get(primary_locale) else {
        return Vec::new();
    };

    primary_messages
        .entries
        .iter()
        .filter_map(|(key, context)| {
            let missing_in: Vec<String> = all_messages
                .iter()
                .filter(|(locale, msgs)| *locale != primary_locale && !msgs.contains_key(key))
                .map(|(locale, _)| locale.clone())
                .collect();

            if missing_in.is_empty() {
                None
            } else {
                Some(MissingKeyIssue {
                    context: context.clone(),
                    primary_locale: primary_locale.to_string(),
                    missing_in,
                })
            }
        })
        .collect()
}
