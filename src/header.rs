//! # Header Module
//!
//! Loads the raw license text and renders it as the canonical block comment
//! (the "golden header") that every processed file is compared against.
//!
//! The header is built once per run and shared read-only by all file
//! processing; its exact byte sequence is what makes the idempotence check
//! work, so formatting is deterministic and depends only on the license
//! line content.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::verbose_log;

/// The canonical block-comment form of the license, derived once per run.
///
/// A file whose content starts with this exact string is already compliant.
/// The header always ends with a blank line so the license block stays
/// visually separated from the code that follows it.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use lice::header::GoldenHeader;
///
/// # fn main() -> anyhow::Result<()> {
/// let header = GoldenHeader::load(Path::new("HEADER.txt"))?;
/// assert!(header.as_str().starts_with("/*\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GoldenHeader {
  text: String,
}

impl GoldenHeader {
  /// Reads the raw license file and formats it as a block comment.
  ///
  /// # Errors
  ///
  /// Returns an error if the file does not exist, cannot be read, or is not
  /// valid UTF-8. This is a fatal error: without the license text there is
  /// nothing to apply.
  pub fn load(path: &Path) -> Result<Self> {
    verbose_log!("Loading license text from: {}", path.display());

    let raw =
      fs::read_to_string(path).with_context(|| format!("Failed to read license file: {}", path.display()))?;

    Ok(Self::from_raw(&raw))
  }

  /// Formats already-loaded license text as a block comment.
  pub fn from_raw(raw: &str) -> Self {
    Self {
      text: format_as_block_comment(raw),
    }
  }

  /// The formatted header text.
  pub fn as_str(&self) -> &str {
    &self.text
  }
}

/// Formats raw license text as a C block comment.
///
/// Produces an opening `/*` line, one ` * <line>` per input line (empty
/// lines become a bare ` *` with no trailing space), a closing ` */` line,
/// and a final blank line. Text after the last newline still counts as a
/// line.
///
/// A `*/` sequence inside the license text is passed through untouched and
/// would terminate the comment early; callers are expected to supply plain
/// license prose.
pub fn format_as_block_comment(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len() + 64);
  out.push_str("/*\n");

  for line in raw.lines() {
    if line.is_empty() {
      out.push_str(" *\n");
    } else {
      out.push_str(" * ");
      out.push_str(line);
      out.push('\n');
    }
  }

  out.push_str(" */\n\n");
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_basic_body() {
    let formatted = format_as_block_comment("Copyright X\n\nLine 2");

    assert_eq!(formatted, "/*\n * Copyright X\n *\n * Line 2\n */\n\n");
  }

  #[test]
  fn test_empty_lines_have_no_trailing_space() {
    let formatted = format_as_block_comment("a\n\nb\n");

    assert!(formatted.contains("\n *\n"));
    assert!(!formatted.contains(" * \n"));
  }

  #[test]
  fn test_trailing_text_without_newline_is_a_line() {
    let formatted = format_as_block_comment("first\nlast");

    assert_eq!(formatted, "/*\n * first\n * last\n */\n\n");
  }

  #[test]
  fn test_trailing_newline_does_not_add_a_line() {
    assert_eq!(
      format_as_block_comment("only line\n"),
      format_as_block_comment("only line")
    );
  }

  #[test]
  fn test_crlf_input_drops_carriage_returns() {
    let formatted = format_as_block_comment("a\r\nb\r\n");

    assert_eq!(formatted, "/*\n * a\n * b\n */\n\n");
  }

  #[test]
  fn test_empty_license_still_forms_a_comment() {
    assert_eq!(format_as_block_comment(""), "/*\n */\n\n");
  }

  #[test]
  fn test_golden_header_ends_with_blank_line() {
    let header = GoldenHeader::from_raw("Copyright 2025 Example");

    assert!(header.as_str().ends_with(" */\n\n"));
  }
}
