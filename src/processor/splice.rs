//! Header detection and splicing.
//!
//! Pure functions that decide what to do with a file's current content
//! (keep it, replace a leading block comment, or prepend the golden header)
//! and build the rewritten content. Kept free of I/O so the decision table
//! is directly testable.

/// What the processor should do with a file, derived from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
  /// Content already starts with the golden header byte-for-byte.
  Current,
  /// A leading block comment closes at `*/`; the body resumes at
  /// `body_start`.
  Replace {
    /// Byte offset of the first body byte after the old comment and any
    /// immediately-following spaces, newlines, and carriage returns.
    body_start: usize,
  },
  /// No leading block comment; the header goes in front of everything.
  Prepend,
  /// A leading `/*` with no closing `*/` anywhere in the file.
  Malformed,
}

/// Classifies `content` against the golden header.
///
/// The checks run in order: an exact golden-header prefix wins, then a
/// leading `/*` selects the replace path (or malformed, when the comment
/// never closes), and anything else is a plain prepend.
pub fn classify(content: &str, golden_header: &str) -> HeaderState {
  if content.starts_with(golden_header) {
    return HeaderState::Current;
  }

  if !content.starts_with("/*") {
    return HeaderState::Prepend;
  }

  let Some(end) = content.find("*/") else {
    // Never guess at truncated comments.
    return HeaderState::Malformed;
  };

  let mut body_start = end + "*/".len();
  let bytes = content.as_bytes();
  // Skip spaces, LF, and CR after the old comment, but not tabs.
  while body_start < bytes.len() && matches!(bytes[body_start], b' ' | b'\n' | b'\r') {
    body_start += 1;
  }

  HeaderState::Replace { body_start }
}

/// Builds the content for the replace path: golden header plus the body that
/// followed the old comment.
pub fn replace_header(content: &str, golden_header: &str, body_start: usize) -> String {
  let body = &content[body_start..];
  let mut rewritten = String::with_capacity(golden_header.len() + body.len());
  rewritten.push_str(golden_header);
  rewritten.push_str(body);
  rewritten
}

/// Builds the content for the prepend path: golden header plus the original
/// content, unmodified.
pub fn prepend_header(content: &str, golden_header: &str) -> String {
  let mut rewritten = String::with_capacity(golden_header.len() + content.len());
  rewritten.push_str(golden_header);
  rewritten.push_str(content);
  rewritten
}
