//! Values that were copied from the primary locale instead of translated.

use crate::{core::AllLocaleMessages, issues::UntranslatedIssue, utils::contains_alphabetic};

/// Check for values identical to the primary locale.
///
/// Values without alphabetic characters (numbers, symbols, `{count}`-only
/// strings) are the same in every language and are skipped.
pub fn check_untranslated(
    primary_locale: &str,
    all_messages: &AllLocaleMessages,
) -> Vec<UntranslatedIssue> {
    let Some(primary_messages) = all_messages.get(primary_locale) else {
        return Vec::new();
    };

    primary_messages
        .entries
        .iter()
        .filter(|(_, context)| is_translatable(&context.value))
        .filter_map(|(key, context)| {
            let identical_in: Vec<String> = all_messages
                .iter()
                .filter(|(locale, msgs)| {
                    *locale != primary_locale
                        && msgs.get(key).is_some_and(|c| c.value == context.value)
                })
                .map(|(locale, _)| locale.clone())
                .collect();

            if identical_in.is_empty() {
                None
            } else {
                Some(UntranslatedIssue {
                    context: context.clone(),
                    primary_locale: primary_locale.to_string(),
                    identical_in,
                })
            }
        })
        .collect()
}

fn is_translatable(value: &str) -> bool {
    let without_placeholders = value
        .split(['{', '}'])
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, part)| part)
        .collect::<String>();
    contains_alphabetic(&without_placeholders)
}
