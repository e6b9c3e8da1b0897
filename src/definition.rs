//! # Definition Module
//!
//! A [`HeaderDefinition`] describes how a file type delimits a comment block:
//! an optional first line, a prefix for every content line and an optional
//! end line. Any of the three may embed the [`EOL_TOKEN`], which is replaced
//! with the chosen [`LineEnding`] when a header is rendered.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Token replaced by the line ending inside definition fields.
pub const EOL_TOKEN: &str = "EOL";

/// Line-ending convention used when rendering a header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
  /// `\n`
  #[default]
  Unix,
  /// `\r\n`
  Windows,
}

impl LineEnding {
  /// Picks [`LineEnding::Unix`] when `unix` is true, [`LineEnding::Windows`]
  /// otherwise.
  pub const fn from_unix(unix: bool) -> Self {
    if unix { Self::Unix } else { Self::Windows }
  }

  /// The characters that terminate a line.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Unix => "\n",
      Self::Windows => "\r\n",
    }
  }

  /// Guesses the convention of existing file content.
  ///
  /// Content with no newline at all is treated as unix.
  pub fn detect(content: &str) -> Self {
    match content.find('\n') {
      Some(idx) if idx > 0 && content.as_bytes()[idx - 1] == b'\r' => Self::Windows,
      _ => Self::Unix,
    }
  }
}

impl fmt::Display for LineEnding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Unix => f.write_str("unix"),
      Self::Windows => f.write_str("windows"),
    }
  }
}

/// Comment decoration for one file type.
///
/// # Fields
///
/// * `first_line` - Emitted once before the header lines (e.g. "/*")
/// * `before_each_line` - Prepended to every header line (e.g. " * ")
/// * `end_line` - Emitted once after the header lines (e.g. " */")
///
/// Empty `first_line` and `end_line` are skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HeaderDefinition {
  #[serde(default)]
  pub first_line: String,

  #[serde(default)]
  pub before_each_line: String,

  #[serde(default)]
  pub end_line: String,
}

impl HeaderDefinition {
  /// Create a definition from its three parts.
  pub fn new(first_line: &str, before_each_line: &str, end_line: &str) -> Self {
    Self {
      first_line: first_line.to_string(),
      before_each_line: before_each_line.to_string(),
      end_line: end_line.to_string(),
    }
  }

  /// Create a line-comment definition (no first or end line).
  ///
  /// # Arguments
  ///
  /// * `prefix` - The prefix to use for each line (e.g., "// " or "# ")
  pub fn line(prefix: &str) -> Self {
    Self::new("", prefix, "")
  }

  /// True when none of the three parts carries any text.
  pub const fn is_empty(&self) -> bool {
    self.first_line.is_empty() && self.before_each_line.is_empty() && self.end_line.is_empty()
  }

  /// Replaces the [`EOL_TOKEN`] in `field` with `line_ending`.
  pub(crate) fn expand_eol(field: &str, line_ending: LineEnding) -> String {
    field.replace(EOL_TOKEN, line_ending.as_str())
  }

  /// The decorations as they appear in a file once surrounding whitespace
  /// and line-break tokens are removed. Used to strip comment markers before
  /// comparing signatures.
  pub(crate) fn decorations(&self) -> [String; 3] {
    [&self.first_line, &self.before_each_line, &self.end_line].map(|s| s.replace(EOL_TOKEN, "").trim().to_string())
  }
}
