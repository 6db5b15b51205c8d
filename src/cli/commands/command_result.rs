use std::path::PathBuf;

use crate::issues::{Issue, Severity};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Locate(LocateSummary),
    Translate(TranslateSummary),
    Keys(KeysSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Locales compared, the primary locale included.
    pub locale_count: usize,
    /// Locale files loaded successfully.
    pub locale_files_checked: usize,
}

#[derive(Debug)]
pub struct LocateSummary {
    /// Directory that was searched for.
    pub name: String,
    /// Absolute path of the directory found, if any.
    pub found: Option<PathBuf>,
    pub max_depth: usize,
}

#[derive(Debug)]
pub struct Translation {
    pub key: String,
    /// Resolved text; the key itself when untranslated.
    pub text: String,
    pub translated: bool,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub locale: String,
    pub translations: Vec<Translation>,
}

impl TranslateSummary {
    pub fn untranslated_count(&self) -> usize {
        self.translations.iter().filter(|t| !t.translated).count()
    }
}

#[derive(Debug)]
pub struct KeysSummary {
    pub locale: String,
    /// `(key, value)` pairs sorted by key.
    pub entries: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running glossa commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of locale files that failed to load.
    pub parse_error_count: usize,
}

impl CommandResult {
    /// Result with no issues; `error_count` is taken from the summary.
    pub fn new(summary: CommandSummary, error_count: usize) -> Self {
        Self {
            summary,
            error_count,
            warning_count: 0,
            issues: Vec::new(),
            parse_error_count: 0,
        }
    }

    /// Result of a check: issues are sorted and counted by severity.
    pub fn from_issues(summary: CommandSummary, mut issues: Vec<Issue>) -> Self {
        issues.sort();

        let parse_error_count = issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseError(_)))
            .count();
        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();
        let warning_count = issues.len() - error_count;

        Self {
            summary,
            error_count,
            warning_count,
            issues,
            parse_error_count,
        }
    }
}
