//! # Report Module
//!
//! Per-file outcome records collected during a run.
//!
//! Outcomes exist for operator visibility only: they feed the end-of-run
//! summary and the grouped file lists. Nothing here is persisted; there is
//! no cross-run state anywhere in the tool.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Why a file was skipped without being rewritten.
///
/// Every variant is the recoverable error tier: the skip is logged as a
/// warning and the run continues with the next file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
  /// The path matched an exclusion pattern.
  #[error("matches exclude pattern '{0}'")]
  Excluded(String),
  /// The file could not be read (permissions, missing, not valid UTF-8).
  #[error("could not read file: {0}")]
  Unreadable(String),
  /// The file opens with `/*` but never closes the comment.
  #[error("malformed block comment (missing \"*/\")")]
  MalformedComment,
  /// The rewritten content could not be written back.
  #[error("could not write file: {0}")]
  WriteFailed(String),
}

/// Action taken on a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
  /// A header was prepended to a file that had no leading block comment.
  Added,
  /// An existing leading block comment was replaced with the golden header.
  Updated,
  /// The file already began with the golden header; nothing was written.
  AlreadyOk,
  /// The file was skipped.
  Skipped(SkipReason),
}

/// Outcome record for one traversed entry.
#[derive(Debug, Clone)]
pub struct FileReport {
  /// Path to the file as it was traversed
  pub path: PathBuf,
  /// Action taken on the file
  pub action: FileAction,
}

impl FileReport {
  /// Creates a report for one file.
  pub fn new(path: impl Into<PathBuf>, action: FileAction) -> Self {
    Self {
      path: path.into(),
      action,
    }
  }

  /// Whether this outcome was a skip.
  pub const fn is_skip(&self) -> bool {
    matches!(self.action, FileAction::Skipped(_))
  }
}

/// Aggregate counts for the end-of-run summary.
#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
  /// Files already carrying the golden header
  pub files_ok: usize,
  /// Files that had a header prepended
  pub files_added: usize,
  /// Files whose stale header was replaced
  pub files_updated: usize,
  /// Entries skipped (excluded, unreadable, malformed, or unwritable)
  pub files_skipped: usize,
  /// Wall-clock time for the whole run
  pub processing_time: Duration,
}

impl ProcessingSummary {
  /// Builds a summary from the collected file reports.
  pub fn from_reports(reports: &[FileReport], processing_time: Duration) -> Self {
    let mut summary = Self {
      processing_time,
      ..Self::default()
    };

    for report in reports {
      match report.action {
        FileAction::Added => summary.files_added += 1,
        FileAction::Updated => summary.files_updated += 1,
        FileAction::AlreadyOk => summary.files_ok += 1,
        FileAction::Skipped(_) => summary.files_skipped += 1,
      }
    }

    summary
  }

  /// Total number of entries that produced an outcome.
  pub const fn total(&self) -> usize {
    self.files_ok + self.files_added + self.files_updated + self.files_skipped
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  #[test]
  fn test_summary_counts_actions() {
    let reports = vec![
      FileReport::new("a.c", FileAction::Added),
      FileReport::new("b.c", FileAction::Updated),
      FileReport::new("c.c", FileAction::AlreadyOk),
      FileReport::new("d.c", FileAction::AlreadyOk),
      FileReport::new("vendor/e.c", FileAction::Skipped(SkipReason::Excluded("vendor".to_string()))),
    ];

    let summary = ProcessingSummary::from_reports(&reports, Duration::from_millis(10));

    assert_eq!(summary.files_added, 1);
    assert_eq!(summary.files_updated, 1);
    assert_eq!(summary.files_ok, 2);
    assert_eq!(summary.files_skipped, 1);
    assert_eq!(summary.total(), 5);
  }

  #[test]
  fn test_skip_reason_messages() {
    assert_eq!(
      SkipReason::MalformedComment.to_string(),
      "malformed block comment (missing \"*/\")"
    );
    assert_eq!(
      SkipReason::Excluded("vendor".to_string()).to_string(),
      "matches exclude pattern 'vendor'"
    );
  }

  #[test]
  fn test_is_skip() {
    assert!(FileReport::new("x.c", FileAction::Skipped(SkipReason::MalformedComment)).is_skip());
    assert!(!FileReport::new("x.c", FileAction::Added).is_skip());
  }
}
