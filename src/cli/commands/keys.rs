use anyhow::Result;

use super::{CommandResult, CommandSummary, KeysSummary};
use crate::{cli::args::KeysCommand, core::CheckContext};

pub async fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common).await?;
    let messages = ctx.locale_messages(cmd.locale.as_deref())?;
    let prefix = cmd.prefix.as_deref().unwrap_or("");

    let entries = messages
        .catalog
        .flatten()
        .into_iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(key, value)| (key, value.to_string()))
        .collect();

    Ok(CommandResult::new(
        CommandSummary::Keys(KeysSummary {
            locale: messages.locale.clone(),
            entries,
        }),
        0,
    ))
}
