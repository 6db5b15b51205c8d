//! Dispatch parsed arguments to the command handlers.
//!
//! Commands that search the filesystem are async; they run on a
//! current-thread tokio runtime created per invocation.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check::check, init::init, keys::keys, locate::locate, translate::translate},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match command {
        Some(Command::Locate(cmd)) => runtime.block_on(locate(cmd)),
        Some(Command::Translate(cmd)) => runtime.block_on(translate(cmd)),
        Some(Command::Keys(cmd)) => runtime.block_on(keys(cmd)),
        Some(Command::Check(cmd)) => runtime.block_on(check(cmd)),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
