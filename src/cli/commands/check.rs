use anyhow::Result;
use clap::ValueEnum;

use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    cli::args::CheckCommand,
    core::CheckContext,
    issues::Issue,
    rules::{
        missing::check_missing_keys, orphan::check_orphan_keys,
        placeholder::check_placeholder_mismatches, untranslated::check_untranslated,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Missing,
    Orphan,
    Untranslated,
    Placeholder,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Missing,
            CheckRule::Orphan,
            CheckRule::Untranslated,
            CheckRule::Placeholder,
        ]
    }
}

pub async fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common).await?;
    let primary_locale = ctx.primary_locale();

    if !ctx.messages.contains_key(primary_locale) {
        anyhow::bail!(
            "Primary locale '{}' not found in {}",
            primary_locale,
            ctx.locales_dir.display()
        );
    }

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Missing => {
                let issues = check_missing_keys(primary_locale, &ctx.messages);
                all_issues.extend(issues.into_iter().map(Issue::MissingKey));
            }
            CheckRule::Orphan => {
                let issues = check_orphan_keys(primary_locale, &ctx.messages);
                all_issues.extend(issues.into_iter().map(Issue::OrphanKey));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated(primary_locale, &ctx.messages);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_mismatches(primary_locale, &ctx.messages);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
        }
    }

    all_issues.extend(ctx.parse_errors().into_iter().map(Issue::ParseError));

    Ok(CommandResult::from_issues(
        CommandSummary::Check(CheckSummary {
            locale_count: ctx.messages.len(),
            locale_files_checked: ctx.locale_files_loaded(),
        }),
        all_issues,
    ))
}
