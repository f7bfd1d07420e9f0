//! # Output Module
//!
//! This module centralizes all user-facing output for the lice tool.
//! It provides consistent formatting, colors, and symbols for terminal
//! output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show what changed without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Header present and current
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Header added
  pub const ADDED: &str = "+";
  /// Header replaced
  pub const UPDATED: &str = "\u{21bb}"; // ↻
  /// Skipped entry
  pub const SKIPPED: &str = "-";
}

/// Maximum number of files to show per list before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// File reports grouped by outcome for presentation.
pub struct CategorizedReports<'a> {
  /// Files that had a header prepended
  pub added: Vec<&'a FileReport>,
  /// Files whose stale header was replaced
  pub updated: Vec<&'a FileReport>,
  /// Entries that were skipped, with their reasons
  pub skipped: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Groups reports by the action taken.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut added = Vec::new();
    let mut updated = Vec::new();
    let mut skipped = Vec::new();

    for report in reports {
      match report.action {
        FileAction::Added => added.push(report),
        FileAction::Updated => updated.push(report),
        FileAction::Skipped(_) => skipped.push(report),
        FileAction::AlreadyOk => {}
      }
    }

    Self { added, updated, skipped }
  }

  /// Whether nothing was changed or skipped.
  pub fn is_all_ok(&self) -> bool {
    self.added.is_empty() && self.updated.is_empty() && self.skipped.is_empty()
  }
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of files that had headers added.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files; verbose mode shows all.
/// Files are sorted alphabetically by path.
pub fn print_added_files(files: &[&FileReport]) {
  print_file_list(
    files,
    &format!("{}", symbols::ADDED.if_supports_color(Stream::Stdout, |s| s.green())),
    "Added license to",
  );
}

/// Print the list of files whose headers were replaced.
pub fn print_updated_files(files: &[&FileReport]) {
  print_file_list(
    files,
    &format!("{}", symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow())),
    "Updated license in",
  );
}

fn print_file_list(files: &[&FileReport], symbol: &str, verb: &str) {
  if is_quiet() || files.is_empty() {
    return;
  }

  let mut sorted_files: Vec<_> = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

  let count = sorted_files.len();
  println!(
    "{} {} {} {}:",
    symbol,
    verb,
    count,
    if count == 1 { "file" } else { "files" }
  );

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in sorted_files.iter().take(limit) {
    println!("  {}", file.path.display());
  }

  if !show_all && count > limit {
    let remaining = count - limit;
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      remaining
    );
  }
}

/// Print the list of skipped entries with their reasons.
///
/// Only shown in verbose mode; the warnings for skips that matter were
/// already emitted on stderr as they happened.
pub fn print_skipped_files(files: &[&FileReport]) {
  if !is_verbose() || files.is_empty() {
    return;
  }

  let mut sorted_files: Vec<_> = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

  let count = sorted_files.len();
  println!(
    "{} Skipped {} {}:",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    count,
    if count == 1 { "entry" } else { "entries" }
  );

  for file in sorted_files {
    if let FileAction::Skipped(ref reason) = file.action {
      println!(
        "  {} ({})",
        file.path.display().if_supports_color(Stream::Stdout, |s| s.dimmed()),
        reason
      );
    }
  }
}

/// Print the success message when every file already had the header.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the processing summary.
///
/// Format: "Summary: W OK, X added, Y updated, Z skipped"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  let ok_str = summary.files_ok.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string();
  let added_str = if summary.files_added > 0 {
    summary
      .files_added
      .if_supports_color(Stream::Stdout, |s| s.green())
      .to_string()
  } else {
    summary.files_added.to_string()
  };
  let updated_str = if summary.files_updated > 0 {
    summary
      .files_updated
      .if_supports_color(Stream::Stdout, |s| s.yellow())
      .to_string()
  } else {
    summary.files_updated.to_string()
  };
  let skipped_str = summary
    .files_skipped
    .if_supports_color(Stream::Stdout, |s| s.dimmed())
    .to_string();

  let mut summary_line = format!(
    "Summary: {} OK, {} added, {} updated, {} skipped",
    ok_str, added_str, updated_str, skipped_str
  );

  // Show timing in verbose mode
  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::report::SkipReason;

  #[test]
  fn test_categorize_reports() {
    let reports = vec![
      FileReport::new("a.c", FileAction::Added),
      FileReport::new("b.c", FileAction::AlreadyOk),
      FileReport::new("c.c", FileAction::Updated),
      FileReport::new("d.c", FileAction::Skipped(SkipReason::MalformedComment)),
    ];

    let categorized = CategorizedReports::from_reports(&reports);

    assert_eq!(categorized.added.len(), 1);
    assert_eq!(categorized.updated.len(), 1);
    assert_eq!(categorized.skipped.len(), 1);
    assert!(!categorized.is_all_ok());
  }

  #[test]
  fn test_all_ok_when_only_current_files() {
    let reports = vec![
      FileReport::new("a.c", FileAction::AlreadyOk),
      FileReport::new("b.h", FileAction::AlreadyOk),
    ];

    let categorized = CategorizedReports::from_reports(&reports);

    assert!(categorized.is_all_ok());
  }
}
