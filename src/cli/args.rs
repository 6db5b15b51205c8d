//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all glossa commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `locate`: Print the locales directory that would be used
//! - `translate`: Resolve translation keys
//! - `keys`: List every key of a locale
//! - `check`: Compare locales against the primary locale
//! - `init`: Initialize glossa configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Locate(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to start from (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Preferred locales directory (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Search upward for a directory with this name instead of the
    /// configured locales directory
    #[arg(long)]
    pub name: Option<String>,

    /// Number of directories to check, the start directory included
    /// (overrides config file)
    #[arg(long)]
    pub max_depth: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dotted translation keys, e.g. common.home.title
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Locale to translate into (defaults to the primary locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Placeholder value as name=value; can be repeated
    #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    /// Exit with an error when a key has no translation
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Only list keys starting with this prefix
    pub prefix: Option<String>,

    /// Locale to list (defaults to the primary locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the locales directory (preferred path, else nearest ancestor match)
    Locate(LocateCommand),
    /// Translate keys using the locale files
    Translate(TranslateCommand),
    /// List translation keys and values of a locale
    Keys(KeysCommand),
    /// Check locales for missing, orphan, untranslated and mismatched keys
    Check(CheckCommand),
    /// Initialize a new .glossarc.json configuration file
    Init,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}
