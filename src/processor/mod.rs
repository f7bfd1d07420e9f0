//! # Processor Module
//!
//! The traversal driver and per-file processor. [`Processor::process`] walks
//! every configured target path, consults the exclusion patterns, and applies
//! the golden header to each `.c`/`.h` file it finds.
//!
//! The module is organized into two layers:
//! - [`splice`] - pure header detection and content splicing
//! - [`Processor`] - traversal, filtering, file I/O, and outcome collection
//!
//! Processing is strictly sequential: one target, one file, one blocking
//! read-modify-write at a time. Failures are isolated per file: an entry
//! that cannot be read or rewritten is logged as a warning, recorded in the
//! reports, and the run moves on.

mod splice;

use std::fs;
use std::path::Path;

pub use splice::{HeaderState, classify, prepend_header, replace_header};
use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::exclude::ExcludePatterns;
use crate::header::GoldenHeader;
use crate::report::{FileAction, FileReport, SkipReason};
use crate::{info_log, verbose_log};

/// Extensions of files that receive headers. Case-sensitive, so `.C` files
/// are left alone.
const SOURCE_EXTENSIONS: [&str; 2] = ["c", "h"];

/// Processor for applying the golden header across target paths.
///
/// The `Processor` is responsible for:
/// - Walking target directories recursively
/// - Skipping excluded paths and non-source files
/// - Deciding per file whether to keep, replace, or prepend the header
/// - Rewriting files in place
/// - Collecting an outcome record for every decision
pub struct Processor {
  /// The formatted header every file is compared against
  golden_header: GoldenHeader,

  /// Exclusion patterns from the command line
  excludes: ExcludePatterns,

  /// Outcome records, in traversal order
  reports: Vec<FileReport>,
}

impl Processor {
  /// Creates a processor from the run's golden header and exclusion list.
  pub const fn new(golden_header: GoldenHeader, excludes: ExcludePatterns) -> Self {
    Self {
      golden_header,
      excludes,
      reports: Vec::new(),
    }
  }

  /// Processes every target path in order.
  ///
  /// A target that does not exist is a warning, not an error: the run
  /// continues with the remaining targets. Directories are walked
  /// recursively; a target that exists but is not a directory is handed to
  /// the per-entry callback as a single file.
  pub fn process(&mut self, targets: &[String]) {
    for target in targets {
      let path = Path::new(target);

      if !path.exists() {
        warn!("Target path not found: {}", target);
        continue;
      }

      if path.is_dir() {
        self.walk_directory(path);
      } else {
        // Not traversable as a directory; process it as a single file.
        self.process_entry(path, true);
      }
    }
  }

  /// Collected outcome records, in traversal order.
  pub fn reports(&self) -> &[FileReport] {
    &self.reports
  }

  /// Consumes the processor and returns the collected reports.
  pub fn into_reports(self) -> Vec<FileReport> {
    self.reports
  }

  fn walk_directory(&mut self, root: &Path) {
    trace!("Walking directory: {}", root.display());
    let mut entries = WalkDir::new(root).into_iter();

    while let Some(entry) = entries.next() {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          warn!("Error reading entry under {}: {}", root.display(), e);
          continue;
        }
      };

      if entry.file_type().is_dir() {
        // Excluded directories are pruned from the walk entirely; their
        // contents are never enumerated.
        if let Some(pattern) = self.excludes.first_match(entry.path()).map(str::to_owned) {
          verbose_log!("Skipping: {} (matches '{}')", entry.path().display(), pattern);
          self
            .reports
            .push(FileReport::new(entry.path(), FileAction::Skipped(SkipReason::Excluded(pattern))));
          entries.skip_current_dir();
        }
        continue;
      }

      self.process_entry(entry.path(), entry.file_type().is_file());
    }
  }

  /// Per-entry callback: exclusion check, file-type check, extension check,
  /// then the header state machine.
  fn process_entry(&mut self, path: &Path, is_regular_file: bool) {
    if let Some(pattern) = self.excludes.first_match(path).map(str::to_owned) {
      verbose_log!("Skipping: {} (matches '{}')", path.display(), pattern);
      self
        .reports
        .push(FileReport::new(path, FileAction::Skipped(SkipReason::Excluded(pattern))));
      return;
    }

    if !is_regular_file {
      return;
    }

    if !has_source_extension(path) {
      trace!("Skipping: {} (extension is not c or h)", path.display());
      return;
    }

    self.apply_license(path);
  }

  /// Applies the golden header to a single file.
  ///
  /// Implements the per-file state machine: read, classify, splice, write.
  /// Every failure here is recoverable; the outcome lands in the report list
  /// and the caller moves on to the next entry.
  fn apply_license(&mut self, path: &Path) {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) => {
        warn!("Could not read file '{}': {}", path.display(), e);
        self
          .reports
          .push(FileReport::new(path, FileAction::Skipped(SkipReason::Unreadable(e.to_string()))));
        return;
      }
    };

    let action = match classify(&content, self.golden_header.as_str()) {
      HeaderState::Current => {
        info_log!("License OK: {}", path.display());
        FileAction::AlreadyOk
      }
      HeaderState::Malformed => {
        warn!("Skipping '{}' (malformed block comment)", path.display());
        FileAction::Skipped(SkipReason::MalformedComment)
      }
      HeaderState::Replace { body_start } => {
        info_log!("Updating license: {}", path.display());
        let rewritten = replace_header(&content, self.golden_header.as_str(), body_start);
        write_back(path, &rewritten, FileAction::Updated)
      }
      HeaderState::Prepend => {
        info_log!("Adding license: {}", path.display());
        let rewritten = prepend_header(&content, self.golden_header.as_str());
        write_back(path, &rewritten, FileAction::Added)
      }
    };

    self.reports.push(FileReport::new(path, action));
  }
}

/// Writes rewritten content back in place.
///
/// The write overwrites the file directly; no temp-file rename, no backup.
/// A failed write is the recoverable tier like everything else per file.
fn write_back(path: &Path, content: &str, on_success: FileAction) -> FileAction {
  match fs::write(path, content) {
    Ok(()) => on_success,
    Err(e) => {
      warn!("Could not write file '{}': {}", path.display(), e);
      FileAction::Skipped(SkipReason::WriteFailed(e.to_string()))
    }
  }
}

/// Extension check from the traversal contract: exactly `c` or `h`,
/// case-sensitive, compared without the leading dot.
fn has_source_extension(path: &Path) -> bool {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_source_extension_filter() {
    assert!(has_source_extension(Path::new("src/main.c")));
    assert!(has_source_extension(Path::new("include/api.h")));

    assert!(!has_source_extension(Path::new("README.md")));
    assert!(!has_source_extension(Path::new("lib.rs")));
    assert!(!has_source_extension(Path::new("noext")));
    // Case-sensitive: uppercase variants do not count.
    assert!(!has_source_extension(Path::new("LEGACY.C")));
    assert!(!has_source_extension(Path::new("api.H")));
    // The extension is the last dot-separated part.
    assert!(!has_source_extension(Path::new("main.c.bak")));
  }
}
