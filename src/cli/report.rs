//! Report formatting and printing utilities.
//!
//! Kept apart from the library so the resolver can be embedded without
//! printing side effects.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    error::I18nError,
    language::{LANGUAGES, LanguageCode},
    parity::{ParityIssue, ParityIssueKind, ParityReport, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the language table to stdout.
pub fn print_languages(active: LanguageCode) {
    print_languages_to(active, &mut io::stdout().lock());
}

/// One row per language: code, name, flag, and a mark on the active one.
///
/// Names are padded by display width so Devanagari and CJK names line up.
pub fn print_languages_to<W: Write>(active: LanguageCode, writer: &mut W) {
    let name_width = LANGUAGES
        .iter()
        .map(|l| UnicodeWidthStr::width(l.display_name))
        .max()
        .unwrap_or(0);

    for lang in &LANGUAGES {
        let padding = name_width - UnicodeWidthStr::width(lang.display_name);
        let row = format!(
            "{}  {}{:padding$}  {}",
            lang.code.code(),
            lang.display_name,
            "",
            lang.flag,
            padding = padding
        );
        if lang.code == active {
            let _ = writeln!(writer, "{} {}", row.bold(), SUCCESS_MARK.green());
        } else {
            let _ = writeln!(writer, "{}", row);
        }
    }
}

/// Print loader warnings to stderr.
pub fn print_warnings(warnings: &[String]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

/// Print a rejected request, with the accepted language codes as a hint.
pub fn print_rejected(err: &I18nError) {
    print_rejected_to(err, &mut io::stderr().lock());
}

pub fn print_rejected_to<W: Write>(err: &I18nError, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);
    if matches!(err, I18nError::UnsupportedLanguageCode { .. }) {
        let supported = LanguageCode::ALL.map(|l| l.code()).join(", ");
        let _ = writeln!(
            writer,
            "  {} {} supported: {}",
            "=".blue(),
            "hint:".bold().cyan(),
            supported
        );
    }
}

/// Print a parity report in cargo style to stdout.
pub fn report_parity(report: &ParityReport, messages_dir: &Path) {
    report_parity_to(report, messages_dir, &mut io::stdout().lock());
}

pub fn report_parity_to<W: Write>(report: &ParityReport, messages_dir: &Path, writer: &mut W) {
    for lang in &report.missing_catalogs {
        let _ = writeln!(
            writer,
            "{}: no catalog for \"{}\"  {}",
            "error".bold().red(),
            lang,
            "missing-catalog".dimmed().cyan()
        );
        let expected = messages_dir.join(format!("{}.json", lang.code()));
        let _ = writeln!(writer, "  {} {}", "-->".blue(), expected.display());
        let _ = writeln!(writer);
    }

    for issue in &report.issues {
        print_issue(issue, report.reference, writer);
    }

    let total_errors = report.error_count();
    let total_warnings = report.warning_count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
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
}

fn print_issue<W: Write>(issue: &ParityIssue, reference: LanguageCode, writer: &mut W) {
    let severity_str = match issue.kind.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let message = match issue.kind {
        ParityIssueKind::Missing => format!("\"{}\" is missing in {}", issue.key, issue.language),
        ParityIssueKind::Extra => format!(
            "\"{}\" in {} is not defined in {}",
            issue.key, issue.language, reference
        ),
        ParityIssueKind::Empty => format!("\"{}\" is empty in {}", issue.key, issue.language),
        ParityIssueKind::Unreachable => format!(
            "\"{}\" in {} cannot be reached by its key path",
            issue.key, issue.language
        ),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        message,
        issue.kind.label().dimmed().cyan()
    );

    if let Some(location) = &issue.location {
        let _ = writeln!(
            writer,
            "  {} {}:{}",
            "-->".blue(),
            location.file_path,
            location.line
        );
    }

    let note = match issue.kind {
        ParityIssueKind::Empty => Some("renders as the key path"),
        ParityIssueKind::Unreachable => Some("'.' separates segments, so this key is never looked up"),
        ParityIssueKind::Missing | ParityIssueKind::Extra => None,
    };
    if let Some(note) = note {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), note);
    }

    let _ = writeln!(writer);
}

/// Print a success message when the catalogs agree.
pub fn print_success(catalogs: usize, keys: usize) {
    print_success_to(catalogs, keys, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(catalogs: usize, keys: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {}, {} {} each - no issues found",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" },
            keys,
            if keys == 1 { "key" } else { "keys" }
        )
        .green()
    );
}
