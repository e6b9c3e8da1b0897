//! # Header Module
//!
//! This module loads license header templates, substitutes `${name}`
//! placeholders, and renders the result into the comment syntax described by
//! a [`HeaderDefinition`].
//!
//! A [`Header`] is immutable once built. It caches two views of its content:
//! the lines used for every rendering, and a whitespace-free signature used
//! to tell whether a file already carries an equivalent header.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//!
//! use licheader::definition::{HeaderDefinition, LineEnding};
//! use licheader::header::Header;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut properties = HashMap::new();
//! properties.insert("year".to_string(), "2025".to_string());
//! properties.insert("owner".to_string(), "Example Corp".to_string());
//!
//! let header = Header::load("builtin:apache-2", Some(&properties))?;
//! let rendered = header.build_for_definition(&HeaderDefinition::new("/*", " * ", " */"), LineEnding::Unix);
//! assert!(rendered.starts_with("/*\n * Copyright (C) 2025 Example Corp\n"));
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::{Captures, Regex};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::definition::{HeaderDefinition, LineEnding};
use crate::error::HeaderError;
use crate::text::{remove_all, rtrim, signature_of};

/// Placeholder values, keyed by placeholder name.
pub type Properties = HashMap<String, String>;

/// Prefix selecting a template embedded in the crate.
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Templates shipped with the crate, addressable as `builtin:<name>`.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
  ("apache-2", include_str!("../licenses/apache-2.txt")),
  ("bsd-3", include_str!("../licenses/bsd-3.txt")),
  ("mit", include_str!("../licenses/mit.txt")),
];

/// Names of the embedded templates.
pub fn builtin_template_names() -> impl Iterator<Item = &'static str> {
  BUILTIN_TEMPLATES.iter().map(|(name, _)| *name)
}

fn builtin_template(name: &str) -> Option<&'static str> {
  BUILTIN_TEMPLATES
    .iter()
    .find(|(builtin, _)| builtin.eq_ignore_ascii_case(name))
    .map(|(_, text)| *text)
}

/// Where a header template comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateLocation {
  /// A file on disk.
  Path(PathBuf),
  /// A template embedded in the crate.
  Builtin(String),
}

impl TemplateLocation {
  /// Parses a location string. `builtin:<name>` selects an embedded
  /// template; anything else is a file path.
  pub fn parse(s: &str) -> Self {
    match s.strip_prefix(BUILTIN_PREFIX) {
      Some(name) => Self::Builtin(name.trim().to_string()),
      None => Self::Path(PathBuf::from(s)),
    }
  }

  /// True when the location does not name anything.
  pub fn is_empty(&self) -> bool {
    match self {
      Self::Path(path) => path.as_os_str().to_string_lossy().trim().is_empty(),
      Self::Builtin(name) => name.is_empty(),
    }
  }
}

impl fmt::Display for TemplateLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Path(path) => write!(f, "{}", path.display()),
      Self::Builtin(name) => write!(f, "{BUILTIN_PREFIX}{name}"),
    }
  }
}

impl From<&str> for TemplateLocation {
  fn from(s: &str) -> Self {
    Self::parse(s)
  }
}

impl From<String> for TemplateLocation {
  fn from(s: String) -> Self {
    Self::parse(&s)
  }
}

impl From<&Path> for TemplateLocation {
  fn from(path: &Path) -> Self {
    Self::Path(path.to_path_buf())
  }
}

impl From<PathBuf> for TemplateLocation {
  fn from(path: PathBuf) -> Self {
    Self::Path(path)
  }
}

/// Character encoding of a template file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
  /// Strict UTF-8; invalid sequences fail the load
  #[default]
  Utf8,
  /// ISO-8859-1, every byte maps to the code point of the same value
  Latin1,
}

impl Encoding {
  fn decode(self, bytes: Vec<u8>) -> io::Result<String> {
    match self {
      Self::Utf8 => String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
      Self::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
    }
  }
}

/// A license header template with its placeholders resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
  location: TemplateLocation,
  content: String,
  one_line: String,
  lines: Vec<String>,
}

impl Header {
  /// Loads a UTF-8 header template and substitutes `properties` into it.
  ///
  /// # Errors
  ///
  /// Returns [`HeaderError::InvalidLocation`] for an empty location and
  /// [`HeaderError::Read`] when the template cannot be read or decoded.
  pub fn load(location: impl Into<TemplateLocation>, properties: Option<&Properties>) -> Result<Self, HeaderError> {
    Self::load_with_encoding(location, properties, Encoding::Utf8)
  }

  /// Loads a header template decoded with `encoding`.
  ///
  /// Embedded templates are always UTF-8; `encoding` only applies to files.
  pub fn load_with_encoding(
    location: impl Into<TemplateLocation>,
    properties: Option<&Properties>,
    encoding: Encoding,
  ) -> Result<Self, HeaderError> {
    let location = location.into();
    if location.is_empty() {
      return Err(HeaderError::InvalidLocation);
    }

    debug!("Loading header template from {}", location);

    let raw = match &location {
      TemplateLocation::Path(path) => std::fs::read(path)
        .and_then(|bytes| encoding.decode(bytes))
        .map_err(|e| HeaderError::read(&location, e))?,
      TemplateLocation::Builtin(name) => builtin_template(name)
        .ok_or_else(|| {
          let known = builtin_template_names().collect::<Vec<_>>().join(", ");
          let message = format!("no builtin template named '{name}' (available: {known})");
          HeaderError::read(&location, io::Error::new(io::ErrorKind::NotFound, message))
        })?
        .to_string(),
    };

    Self::from_text(location, &raw, properties)
  }

  /// Builds a header from template text that has already been read.
  pub fn from_text(
    location: impl Into<TemplateLocation>,
    text: &str,
    properties: Option<&Properties>,
  ) -> Result<Self, HeaderError> {
    let location = location.into();
    if location.is_empty() {
      return Err(HeaderError::InvalidLocation);
    }

    let content = match properties {
      Some(properties) if !properties.is_empty() => substitute(text, properties),
      _ => text.to_string(),
    };
    let lines = split_lines(&content);
    let one_line = signature_of(&content);

    trace!("Header {} has {} lines", location, lines.len());

    Ok(Self {
      location,
      content,
      one_line,
      lines,
    })
  }

  /// The substituted template text.
  pub fn as_str(&self) -> &str {
    &self.content
  }

  /// The template text with spaces, tabs, carriage returns and newlines
  /// removed.
  pub fn as_one_line_str(&self) -> &str {
    &self.one_line
  }

  pub fn line_count(&self) -> usize {
    self.lines.len()
  }

  /// Where the template was loaded from.
  pub const fn location(&self) -> &TemplateLocation {
    &self.location
  }

  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  /// Renders the header into the comment syntax of `definition`.
  ///
  /// The first and end lines are emitted only when non-empty. Every template
  /// line is prefixed with `before_each_line` and right-trimmed. Each emitted
  /// segment is terminated by `line_ending`, and occurrences of the `EOL`
  /// token inside the definition are replaced by it as well.
  pub fn build_for_definition(&self, definition: &HeaderDefinition, line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let mut result = String::with_capacity(self.content.len() * 2);

    if !definition.first_line.is_empty() {
      result.push_str(&HeaderDefinition::expand_eol(&definition.first_line, line_ending));
      result.push_str(eol);
    }

    let before_each_line = HeaderDefinition::expand_eol(&definition.before_each_line, line_ending);
    for line in &self.lines {
      let decorated = format!("{before_each_line}{line}");
      result.push_str(rtrim(&decorated));
      result.push_str(eol);
    }

    if !definition.end_line.is_empty() {
      result.push_str(&HeaderDefinition::expand_eol(&definition.end_line, line_ending));
      result.push_str(eol);
    }

    result
  }

  /// Checks whether `text` already contains this header decorated for
  /// `definition`, ignoring whitespace.
  ///
  /// Both sides are reduced to their signature and then stripped of the
  /// comment markers of `definition`, so a header re-wrapped or re-indented by
  /// an editor still matches. A header with nothing left after stripping is
  /// never reported present.
  pub fn is_present_in(&self, text: &str, definition: &HeaderDefinition) -> bool {
    let [first, each, end] = definition.decorations();
    let markers = [first.as_str(), end.as_str(), each.as_str()];

    let header_one_line = remove_all(&self.one_line, &markers);
    if header_one_line.is_empty() {
      return false;
    }
    remove_all(&signature_of(text), &markers).contains(&header_one_line)
  }
}

impl fmt::Display for Header {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.content)
  }
}

/// Replaces every `${name}` whose name is in `properties`. Unknown names are
/// left untouched and replacement text is never rescanned.
fn substitute(text: &str, properties: &Properties) -> String {
  static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").expect("placeholder regex must compile"));

  PLACEHOLDER_REGEX
    .replace_all(text, |caps: &Captures<'_>| match properties.get(&caps[1]) {
      Some(value) => value.clone(),
      None => caps[0].to_string(),
    })
    .into_owned()
}

/// Splits content into lines after dropping carriage returns.
///
/// Trailing empty segments are discarded, so a template ending in a newline
/// does not grow an extra blank line. Content without any newline is a
/// single line, even when empty.
fn split_lines(content: &str) -> Vec<String> {
  let stripped = content.replace('\r', "");
  if !stripped.contains('\n') {
    return vec![stripped];
  }

  let mut lines: Vec<String> = stripped.split('\n').map(str::to_string).collect();
  while lines.last().is_some_and(String::is_empty) {
    lines.pop();
  }
  lines
}
