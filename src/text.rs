//! # Text Utilities
//!
//! Small string helpers shared by the header loader and the comment formatter.

/// Characters that are ignored when comparing headers.
pub const SIGNATURE_IGNORED: [char; 4] = [' ', '\t', '\r', '\n'];

/// Returns `s` without its trailing whitespace.
pub fn rtrim(s: &str) -> &str {
  s.trim_end()
}

/// Removes every occurrence of each of `patterns` from `s`, in order.
///
/// Empty patterns are skipped.
pub fn remove_all(s: &str, patterns: &[&str]) -> String {
  let mut result = s.to_string();
  for pattern in patterns.iter().filter(|p| !p.is_empty()) {
    if result.contains(pattern) {
      result = result.replace(pattern, "");
    }
  }
  result
}

/// Computes the whitespace-insensitive signature of `s`.
///
/// Spaces, tabs, carriage returns and newlines are dropped; every other
/// character is kept in its original order.
pub fn signature_of(s: &str) -> String {
  s.chars().filter(|c| !SIGNATURE_IGNORED.contains(c)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rtrim_keeps_leading_whitespace() {
    assert_eq!(rtrim("  * text \t "), "  * text");
    assert_eq!(rtrim(" * "), " *");
    assert_eq!(rtrim(""), "");
  }

  #[test]
  fn test_remove_all() {
    assert_eq!(remove_all("/* a */ b", &["/*", "*/", " "]), "ab");
    assert_eq!(remove_all("abc", &["", "b"]), "ac");
  }

  #[test]
  fn test_signature_of_drops_only_whitespace_classes() {
    assert_eq!(signature_of(" a\tb\r\nc  d "), "abcd");
    // Other unicode whitespace is kept
    assert_eq!(signature_of("a\u{a0}b"), "a\u{a0}b");
  }
}
