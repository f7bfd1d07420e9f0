//! # Exclude Module
//!
//! Path exclusion matching for the traversal driver.
//!
//! Patterns are literal strings matched against whole path components:
//! `temp` excludes `temp`, `temp/file.c`, and `src/temp/x.c`, but not
//! `template.c`. There is no globbing, no regex, and no case folding:
//! a pattern either names a component (or a run of components, when it
//! contains a separator itself) or it does not match.

use std::path::Path;

/// Path separators recognized on both Unix and Windows.
const fn is_path_separator(byte: u8) -> bool {
  byte == b'/' || byte == b'\\'
}

/// Ordered list of exclusion patterns from the command line.
///
/// A path is excluded when it matches ANY pattern; patterns are tried in the
/// order they were given, short-circuiting on the first match.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
  patterns: Vec<String>,
}

impl ExcludePatterns {
  /// Creates a pattern list from command-line `-e/--exclude` values.
  pub const fn new(patterns: Vec<String>) -> Self {
    Self { patterns }
  }

  /// Returns the first pattern that excludes `path`, if any.
  ///
  /// The pattern is returned (rather than a bare bool) so callers can say
  /// which pattern caused the skip.
  pub fn first_match(&self, path: &Path) -> Option<&str> {
    let path = path.to_string_lossy();
    self
      .patterns
      .iter()
      .find(|pattern| is_excluded(&path, pattern))
      .map(String::as_str)
  }

  /// Whether any patterns were configured.
  pub fn is_empty(&self) -> bool {
    self.patterns.is_empty()
  }
}

/// Checks whether `pattern` occurs in `path` as an independent path component.
///
/// Both edges of the match must sit on a path separator or on the start/end
/// of the string. Every substring occurrence is tested, not just the first:
/// `tempx/temp/y.c` still matches `temp` even though the first occurrence
/// fails the boundary check.
///
/// ```
/// use lice::exclude::is_excluded;
///
/// assert!(is_excluded("temp", "temp"));
/// assert!(is_excluded("temp/file.c", "temp"));
/// assert!(is_excluded("src/temp/x.c", "temp"));
/// assert!(!is_excluded("template.c", "temp"));
/// assert!(!is_excluded("item_post.c", "post"));
/// ```
pub fn is_excluded(path: &str, pattern: &str) -> bool {
  // An empty needle can never name a component.
  if pattern.is_empty() {
    return false;
  }

  let path = path.as_bytes();
  let pattern = pattern.as_bytes();
  let mut start = 0;

  while start + pattern.len() <= path.len() {
    let Some(offset) = find_subslice(&path[start..], pattern) else {
      break;
    };
    let index = start + offset;
    let end = index + pattern.len();

    let left_ok = index == 0 || is_path_separator(path[index - 1]);
    let right_ok = end == path.len() || is_path_separator(path[end]);
    if left_ok && right_ok {
      return true;
    }

    // Resume the search one byte past this occurrence.
    start = index + 1;
  }

  false
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
  haystack.windows(needle.len()).position(|window| window == needle)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  #[test]
  fn test_pattern_matches_whole_path() {
    assert!(is_excluded("temp", "temp"));
  }

  #[test]
  fn test_pattern_matches_leading_component() {
    assert!(is_excluded("temp/file.c", "temp"));
  }

  #[test]
  fn test_pattern_matches_inner_component() {
    assert!(is_excluded("src/temp/x.c", "temp"));
  }

  #[test]
  fn test_pattern_matches_trailing_component() {
    assert!(is_excluded("src/temp", "temp"));
  }

  #[test]
  fn test_mid_token_occurrence_does_not_match() {
    assert!(!is_excluded("template.c", "temp"));
    assert!(!is_excluded("src/contemporary/x.c", "temp"));
  }

  #[test]
  fn test_underscore_and_dot_are_not_boundaries() {
    assert!(!is_excluded("item_post.c", "post"));
    assert!(!is_excluded("main.temp", "temp"));
  }

  #[test]
  fn test_later_occurrence_matches_after_earlier_failure() {
    // First "temp" sits mid-token; the search must keep going.
    assert!(is_excluded("tempx/temp/y.c", "temp"));
    assert!(is_excluded("attempt/src/temp/y.c", "temp"));
  }

  #[test]
  fn test_backslash_is_a_separator() {
    assert!(is_excluded("src\\temp\\x.c", "temp"));
    assert!(!is_excluded("src\\template.c", "temp"));
  }

  #[test]
  fn test_pattern_with_separator_spans_components() {
    assert!(is_excluded("a/src/temp/x.c", "src/temp"));
    assert!(!is_excluded("a/src/template.c", "src/temp"));
  }

  #[test]
  fn test_empty_pattern_never_matches() {
    assert!(!is_excluded("src/main.c", ""));
    assert!(!is_excluded("", ""));
  }

  #[test]
  fn test_first_match_reports_matching_pattern() {
    let patterns = ExcludePatterns::new(vec!["vendor".to_string(), "build".to_string()]);

    assert_eq!(patterns.first_match(Path::new("src/build/gen.c")), Some("build"));
    assert_eq!(patterns.first_match(Path::new("vendor/lib.c")), Some("vendor"));
    assert_eq!(patterns.first_match(Path::new("src/main.c")), None);
  }

  #[test]
  fn test_first_match_checks_patterns_in_order() {
    let patterns = ExcludePatterns::new(vec!["a".to_string(), "b".to_string()]);

    // Path matches both; the earlier pattern wins.
    assert_eq!(patterns.first_match(Path::new("a/b/x.c")), Some("a"));
  }
}
