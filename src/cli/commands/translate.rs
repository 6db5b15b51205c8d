use anyhow::Result;

use super::{CommandResult, CommandSummary, TranslateSummary, Translation};
use crate::{cli::args::TranslateCommand, core::CheckContext};

pub async fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common).await?;
    let messages = ctx.locale_messages(cmd.locale.as_deref())?;
    let translator = messages.translator();

    let args: Vec<(&str, &str)> = cmd
        .args
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    let translations = cmd
        .keys
        .into_iter()
        .map(|key| {
            let translated = translator.lookup(&key).is_some();
            let text = translator.format(&key, &args);
            Translation {
                key,
                text,
                translated,
            }
        })
        .collect();

    let summary = TranslateSummary {
        locale: messages.locale.clone(),
        translations,
    };
    let untranslated = summary.untranslated_count();

    let mut result = CommandResult::new(CommandSummary::Translate(summary), 0);
    if cmd.strict {
        result.error_count = untranslated;
    } else {
        result.warning_count = untranslated;
    }
    Ok(result)
}
