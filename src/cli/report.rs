//! Report formatting and printing utilities.
//!
//! Issues are displayed cargo-style; command results go to stdout in a
//! pipe-friendly form with diagnostics on stderr. Separate from core logic
//! so glossa can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, InitSummary, KeysSummary, LocateSummary,
    TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Keys wider than this do not widen the value column.
const MAX_KEY_COLUMN: usize = 48;

pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match &result.summary {
        CommandSummary::Check(summary) => {
            if result.issues.is_empty() {
                print_success_to(summary, &mut out);
            } else {
                report_to(&result.issues, &mut out);
            }
        }
        CommandSummary::Locate(summary) => print_locate_to(summary, &mut out, &mut err),
        CommandSummary::Translate(summary) => {
            print_translations_to(summary, verbose, &mut out, &mut err)
        }
        CommandSummary::Keys(summary) => print_keys_to(summary, &mut out),
        CommandSummary::Init(summary) => print_init_to(summary, &mut out, &mut err),
    }
}

/// Print issues followed by a problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {}, {} locale {} - no issues found",
            summary.locale_count,
            if summary.locale_count == 1 {
                "locale"
            } else {
                "locales"
            },
            summary.locale_files_checked,
            if summary.locale_files_checked == 1 {
                "file"
            } else {
                "files"
            }
        )
        .green()
    );
}

fn print_locate_to<O: Write, E: Write>(summary: &LocateSummary, out: &mut O, err: &mut E) {
    match &summary.found {
        Some(path) => {
            let _ = writeln!(out, "{}", path.display());
        }
        None => {
            let _ = writeln!(
                err,
                "{} No '{}' directory found within {} level(s)",
                FAILURE_MARK.red(),
                summary.name,
                summary.max_depth
            );
        }
    }
}

fn print_translations_to<O: Write, E: Write>(
    summary: &TranslateSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for translation in &summary.translations {
        if verbose {
            let _ = writeln!(out, "{} = {}", translation.key.dimmed(), translation.text);
        } else {
            let _ = writeln!(out, "{}", translation.text);
        }

        if !translation.translated {
            let _ = writeln!(
                err,
                "{} no translation for \"{}\" in {}",
                "warning:".bold().yellow(),
                translation.key,
                summary.locale
            );
        }
    }
}

fn print_keys_to<W: Write>(summary: &KeysSummary, writer: &mut W) {
    let width = summary
        .entries
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .filter(|w| *w <= MAX_KEY_COLUMN)
        .max()
        .unwrap_or(0);

    for (key, value) in &summary.entries {
        let padding = width.saturating_sub(UnicodeWidthStr::width(key.as_str()));
        let _ = writeln!(
            writer,
            "{}{:padding$}  {}",
            key.cyan(),
            "",
            value.replace('\n', "\\n"),
            padding = padding
        );
    }
}

fn print_init_to<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else if let Some(error) = &summary.error {
        let _ = writeln!(err, "{} {}", "Error:".bold().red(), error);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    match issue.location() {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        if issues.len() == 1 {
            "problem"
        } else {
            "problems"
        },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
