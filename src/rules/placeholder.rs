//! Translations whose `{placeholders}` differ from the primary locale.
//!
//! A translation that drops `{name}` renders without the value; one that
//! adds an unknown placeholder renders the braces literally.

use crate::{core::AllLocaleMessages, issues::PlaceholderMismatchIssue, utils::placeholders};

pub fn check_placeholder_mismatches(
    primary_locale: &str,
    all_messages: &AllLocaleMessages,
) -> Vec<PlaceholderMismatchIssue> {
    let Some(primary_messages) = all_messages.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for (locale, messages) in all_messages {
        if locale == primary_locale {
            continue;
        }

        for (key, context) in &messages.entries {
            let Some(primary) = primary_messages.get(key) else {
                continue;
            };

            let expected = placeholders(&primary.value);
            let found = placeholders(&context.value);
            if expected != found {
                issues.push(PlaceholderMismatchIssue {
                    context: context.clone(),
                    locale: locale.clone(),
                    expected: expected.into_iter().map(String::from).collect(),
                    found: found.into_iter().map(String::from).collect(),
                });
            }
        }
    }

    issues
}
