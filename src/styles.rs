//! # Styles Module
//!
//! The catalog of builtin header styles and the resolvers that pick a style
//! for a file.
//!
//! - [`HeaderStyle`] names every builtin [`HeaderDefinition`]
//! - [`StyleResolver`] maps a file path to a definition
//! - [`BuiltinResolver`] uses the builtin extension table
//! - [`ConfigurableResolver`] consults user configuration first
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use licheader::styles::{BuiltinResolver, HeaderStyle, StyleResolver};
//!
//! let style = BuiltinResolver.resolve(Path::new("Main.java"));
//! assert_eq!(style, Some(HeaderStyle::JavadocStyle.definition()));
//! ```

use std::path::Path;

use crate::config::Config;
use crate::definition::HeaderDefinition;
use crate::verbose_log;

/// Builtin header styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderStyle {
  JavadocStyle,
  SlashstarStyle,
  ScriptStyle,
  HamlStyle,
  XmlStyle,
  SemicolonStyle,
  ApostropheStyle,
  ExclamationStyle,
  DoubledashesStyle,
  BracesstarStyle,
  SharpstarStyle,
  DynascriptStyle,
  Dynascript3Style,
  Percent3Style,
  Exclamation3Style,
  DoubleslashStyle,
  Text,
  Asp,
  Batch,
  Unknown,
}

impl HeaderStyle {
  /// Every builtin style, in catalog order.
  pub const ALL: [Self; 20] = [
    Self::JavadocStyle,
    Self::SlashstarStyle,
    Self::ScriptStyle,
    Self::HamlStyle,
    Self::XmlStyle,
    Self::SemicolonStyle,
    Self::ApostropheStyle,
    Self::ExclamationStyle,
    Self::DoubledashesStyle,
    Self::BracesstarStyle,
    Self::SharpstarStyle,
    Self::DynascriptStyle,
    Self::Dynascript3Style,
    Self::Percent3Style,
    Self::Exclamation3Style,
    Self::DoubleslashStyle,
    Self::Text,
    Self::Asp,
    Self::Batch,
    Self::Unknown,
  ];

  /// The lowercase name used in configuration files and on the command line.
  pub const fn name(self) -> &'static str {
    match self {
      Self::JavadocStyle => "javadoc",
      Self::SlashstarStyle => "slashstar",
      Self::ScriptStyle => "script",
      Self::HamlStyle => "haml",
      Self::XmlStyle => "xml",
      Self::SemicolonStyle => "semicolon",
      Self::ApostropheStyle => "apostrophe",
      Self::ExclamationStyle => "exclamation",
      Self::DoubledashesStyle => "doubledashes",
      Self::BracesstarStyle => "bracesstar",
      Self::SharpstarStyle => "sharpstar",
      Self::DynascriptStyle => "dynascript",
      Self::Dynascript3Style => "dynascript3",
      Self::Percent3Style => "percent3",
      Self::Exclamation3Style => "exclamation3",
      Self::DoubleslashStyle => "doubleslash",
      Self::Text => "text",
      Self::Asp => "asp",
      Self::Batch => "batch",
      Self::Unknown => "unknown",
    }
  }

  /// Looks a style up by name, ignoring case. A trailing `_style` or
  /// `-style` suffix is accepted.
  pub fn from_name(name: &str) -> Option<Self> {
    let lowered = name.trim().to_lowercase();
    let name = lowered
      .strip_suffix("_style")
      .or_else(|| lowered.strip_suffix("-style"))
      .unwrap_or(lowered.as_str());
    Self::ALL.into_iter().find(|style| style.name() == name)
  }

  /// The comment decoration for this style.
  pub fn definition(self) -> HeaderDefinition {
    let (first, each, end) = match self {
      Self::JavadocStyle => ("/**", " * ", " */"),
      Self::SlashstarStyle => ("/*", " * ", " */"),
      Self::ScriptStyle => ("#", "# ", "#EOL"),
      Self::HamlStyle => ("-#", "-# ", "-#EOL"),
      Self::XmlStyle => ("<!--EOL", "    ", "EOL-->"),
      Self::SemicolonStyle => (";", "; ", ";EOL"),
      Self::ApostropheStyle => ("'", "' ", "'EOL"),
      Self::ExclamationStyle => ("!", "! ", "!EOL"),
      Self::DoubledashesStyle => ("--", "-- ", "--EOL"),
      Self::BracesstarStyle => ("{*", " * ", " *}"),
      Self::SharpstarStyle => ("#*", " * ", " *#"),
      Self::DynascriptStyle => ("<%--EOL", "    ", "EOL--%>"),
      Self::Dynascript3Style => ("<!---EOL", "    ", "EOL--->"),
      Self::Percent3Style => ("%%%", "%%% ", "%%%EOL"),
      Self::Exclamation3Style => ("!!!", "!!! ", "!!!EOL"),
      Self::DoubleslashStyle => ("//", "// ", "//EOL"),
      Self::Text => ("====", "    ", "====EOL"),
      Self::Asp => ("<%", "    ", "%>"),
      Self::Batch => ("@REM", "@REM ", "@REMEOL"),
      Self::Unknown => ("", "", ""),
    };
    HeaderDefinition::new(first, each, end)
  }
}

/// Trait for resolving header definitions for file paths.
///
/// Implementations can use built-in mappings, user configuration, or both.
pub trait StyleResolver: Send + Sync {
  /// Resolve the header definition for the given file path, or `None` when
  /// the file type has no known comment syntax.
  fn resolve(&self, path: &Path) -> Option<HeaderDefinition>;
}

/// Default resolver using built-in mappings.
#[derive(Debug, Default)]
pub struct BuiltinResolver;

impl StyleResolver for BuiltinResolver {
  fn resolve(&self, path: &Path) -> Option<HeaderDefinition> {
    get_style_for_file(path).map(HeaderStyle::definition)
  }
}

/// Configurable resolver that checks user config first, then falls back to
/// builtin.
pub struct ConfigurableResolver {
  config: Config,
}

impl std::fmt::Debug for ConfigurableResolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ConfigurableResolver")
      .field("config", &"<config>")
      .finish()
  }
}

impl ConfigurableResolver {
  pub const fn new(config: Config) -> Self {
    Self { config }
  }
}

impl StyleResolver for ConfigurableResolver {
  fn resolve(&self, path: &Path) -> Option<HeaderDefinition> {
    let file_name = path
      .file_name()
      .and_then(|name| name.to_str())
      .unwrap_or("")
      .to_lowercase();

    // 1. Check filename patterns in config (exact match first)
    if let Some(style) = self.config.filenames.get(&file_name) {
      verbose_log!("Using config filename override for: {}", file_name);
      return self.config.style(style);
    }

    // 2. Check filename patterns with glob matching
    for (pattern, style) in &self.config.filenames {
      if pattern.contains('*')
        && let Ok(glob_pattern) = glob::Pattern::new(pattern)
        && glob_pattern.matches(&file_name)
      {
        verbose_log!("Using config filename glob override '{}' for: {}", pattern, file_name);
        return self.config.style(style);
      }
    }

    // 3. Check extension mappings in config
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .unwrap_or("")
      .to_lowercase();

    if let Some(style) = self.config.mapping.get(&extension) {
      verbose_log!("Using config extension mapping for: .{}", extension);
      return self.config.style(style);
    }

    // 4. Fall back to builtin resolver
    BuiltinResolver.resolve(path)
  }
}

/// Create a style resolver based on the provided configuration.
pub fn create_resolver(config: Option<Config>) -> Box<dyn StyleResolver> {
  match config {
    Some(cfg) => Box::new(ConfigurableResolver::new(cfg)),
    None => Box::new(BuiltinResolver),
  }
}

/// Determines the builtin header style for a file based on its extension.
///
/// A handful of extension-less build files are recognized by name. Unknown
/// extensions (including binary formats) resolve to `None` so callers can
/// skip them.
pub fn get_style_for_file(path: &Path) -> Option<HeaderStyle> {
  let file_name = path
    .file_name()
    .and_then(|name| name.to_str())
    .unwrap_or("")
    .to_lowercase();

  let extension = path
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or("")
    .to_lowercase();

  let style = match extension.as_str() {
    "java" | "groovy" | "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" | "css" | "scss" | "sass" | "less" | "as" | "gv" => {
      HeaderStyle::JavadocStyle
    }
    "c" | "h" | "scala" | "kt" | "kts" | "php" => HeaderStyle::SlashstarStyle,
    "cc" | "cpp" | "cs" | "go" | "hcl" | "hh" | "hpp" | "m" | "mm" | "proto" | "rs" | "swift" | "dart" | "v" | "sv" => {
      HeaderStyle::DoubleslashStyle
    }
    "py" | "sh" | "bash" | "yaml" | "yml" | "rb" | "tcl" | "tf" | "bzl" | "pl" | "pm" | "pp" | "toml" | "properties"
    | "r" | "ps1" => HeaderStyle::ScriptStyle,
    "xml" | "html" | "htm" | "xhtml" | "vue" | "xsd" | "xsl" | "xslt" | "pom" | "wxi" | "wxl" | "wxs" | "dtd"
    | "tld" | "jspx" | "fml" | "xul" => HeaderStyle::XmlStyle,
    "el" | "lisp" | "clj" | "ini" | "asm" => HeaderStyle::SemicolonStyle,
    "vb" | "vbs" | "bas" => HeaderStyle::ApostropheStyle,
    "f" | "f90" => HeaderStyle::ExclamationStyle,
    "hs" | "sql" | "lua" | "ada" | "adb" | "ads" | "sdl" => HeaderStyle::DoubledashesStyle,
    "tpl" => HeaderStyle::BracesstarStyle,
    "vm" => HeaderStyle::SharpstarStyle,
    "jsp" | "jspf" | "tag" => HeaderStyle::DynascriptStyle,
    "cfc" | "cfm" => HeaderStyle::Dynascript3Style,
    "erl" | "hrl" | "tex" => HeaderStyle::Percent3Style,
    "haml" => HeaderStyle::HamlStyle,
    "apt" => HeaderStyle::Text,
    "asp" => HeaderStyle::Asp,
    "bat" | "cmd" => HeaderStyle::Batch,
    _ => {
      // Handle special cases based on filename
      if file_name == "cmakelists.txt"
        || file_name.ends_with(".cmake.in")
        || file_name.ends_with(".cmake")
        || file_name == "dockerfile"
        || file_name.ends_with(".dockerfile")
        || file_name == "makefile"
      {
        HeaderStyle::ScriptStyle
      } else {
        return None;
      }
    }
  };

  Some(style)
}
