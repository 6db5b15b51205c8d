use anyhow::Result;

use super::{CommandResult, CommandSummary, LocateSummary};
use crate::{cli::args::LocateCommand, core::{LOCALES_DIR_NAME, Settings}};

pub async fn locate(cmd: LocateCommand) -> Result<CommandResult> {
    let mut settings = Settings::new(&cmd.common)?;
    if let Some(max_depth) = cmd.max_depth {
        settings.config.max_depth = max_depth;
    }
    let max_depth = settings.config.max_depth;

    let (name, found) = match cmd.name {
        Some(name) => {
            let found = settings.locator().find_directory(&name, max_depth).await;
            (name, found)
        }
        None => (LOCALES_DIR_NAME.to_string(), settings.locales_dir().await),
    };

    let error_count = usize::from(found.is_none());
    Ok(CommandResult::new(
        CommandSummary::Locate(LocateSummary {
            name,
            found,
            max_depth,
        }),
        error_count,
    ))
}
