//! # Configuration Module
//!
//! This module provides configuration support for licheader: the header
//! template location, placeholder values, custom header styles and the
//! mapping from file extensions and file names to styles.
//!
//! Configuration can be specified in a `.licheader.toml` file or via the
//! `LICHEADER_CONFIG` environment variable.
//!
//! ```toml
//! header = "builtin:apache-2"
//! line-ending = "unix"
//!
//! [properties]
//! owner = "Example Corp"
//!
//! [styles.lua]
//! first-line = "--[["
//! before-each-line = "  "
//! end-line = "]]"
//!
//! [mapping]
//! lua = "lua"
//! java = "doubleslash"
//!
//! [filenames]
//! "Justfile" = "script"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::definition::{HeaderDefinition, LineEnding};
use crate::header::{Encoding, Properties};
use crate::styles::HeaderStyle;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".licheader.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "LICHEADER_CONFIG";

/// Main configuration struct for licheader.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
  /// Header template location (a path or `builtin:<name>`).
  #[serde(default)]
  pub header: Option<String>,

  /// Encoding of the header template file.
  #[serde(default)]
  pub encoding: Option<Encoding>,

  /// Line ending used when rendering headers.
  #[serde(default)]
  pub line_ending: Option<LineEnding>,

  /// Placeholder values substituted into the template.
  #[serde(default)]
  pub properties: Properties,

  /// Custom header styles, keyed by style name.
  #[serde(default)]
  pub styles: HashMap<String, HeaderDefinition>,

  /// Extension (without the leading dot) to style name.
  #[serde(default)]
  pub mapping: HashMap<String, String>,

  /// Exact file name or glob pattern to style name.
  #[serde(default)]
  pub filenames: HashMap<String, String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A mapping entry is invalid.
  #[error("Invalid mapping for '{key}': {message}")]
  InvalidMapping { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config = Self::parse(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })?;

    verbose_log!(
      "Loaded {} custom styles and {} mappings",
      config.styles.len(),
      config.mapping.len() + config.filenames.len()
    );

    Ok(config)
  }

  /// Parse, validate and normalize configuration from TOML text.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;

    // Normalize keys to lowercase for case-insensitive matching
    let config = config.normalize();
    config.validate()?;
    Ok(config)
  }

  /// Looks up a style by name, custom styles first.
  pub fn style(&self, name: &str) -> Option<HeaderDefinition> {
    let name = name.to_lowercase();
    self
      .styles
      .get(&name)
      .cloned()
      .or_else(|| HeaderStyle::from_name(&name).map(HeaderStyle::definition))
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - Every mapping names a custom or builtin style
  /// - Extension keys don't include the leading dot
  fn validate(&self) -> Result<(), ConfigError> {
    for (ext, style) in &self.mapping {
      if ext.starts_with('.') {
        return Err(ConfigError::InvalidMapping {
          key: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
      self.check_style_exists(ext, style)?;
    }

    for (filename, style) in &self.filenames {
      self.check_style_exists(filename, style)?;
    }

    Ok(())
  }

  fn check_style_exists(&self, key: &str, style: &str) -> Result<(), ConfigError> {
    if self.style(style).is_none() {
      return Err(ConfigError::InvalidMapping {
        key: key.to_string(),
        message: format!("unknown header style '{style}'"),
      });
    }
    Ok(())
  }

  /// Normalize configuration keys to lowercase for case-insensitive matching.
  fn normalize(self) -> Self {
    let lower_keys = |map: HashMap<String, String>| -> HashMap<String, String> {
      map.into_iter().map(|(k, v)| (k.to_lowercase(), v.to_lowercase())).collect()
    };

    Self {
      styles: self.styles.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect(),
      mapping: lower_keys(self.mapping),
      filenames: lower_keys(self.filenames),
      ..self
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `LICHEADER_CONFIG` environment variable
/// 3. `.licheader.toml` in `root`
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check the root directory
  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when `no_config` is set or no file is found.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_full_config() -> anyhow::Result<()> {
    let config = Config::parse(concat!(
      "header = \"builtin:mit\"\n",
      "encoding = \"latin1\"\n",
      "line-ending = \"windows\"\n",
      "[properties]\n",
      "owner = \"Acme\"\n",
      "[styles.Lua]\n",
      "first-line = \"--[[\"\n",
      "before-each-line = \"  \"\n",
      "end-line = \"]]\"\n",
      "[mapping]\n",
      "LUA = \"lua\"\n",
      "java = \"DoubleSlash\"\n",
      "[filenames]\n",
      "\"Justfile\" = \"script\"\n",
    ))?;

    assert_eq!(config.header.as_deref(), Some("builtin:mit"));
    assert_eq!(config.encoding, Some(Encoding::Latin1));
    assert_eq!(config.line_ending, Some(LineEnding::Windows));
    assert_eq!(config.properties.get("owner").map(String::as_str), Some("Acme"));
    assert_eq!(config.mapping.get("lua").map(String::as_str), Some("lua"));
    assert_eq!(config.mapping.get("java").map(String::as_str), Some("doubleslash"));
    assert_eq!(config.filenames.get("justfile").map(String::as_str), Some("script"));
    assert_eq!(config.style("LUA"), Some(HeaderDefinition::new("--[[", "  ", "]]")));
    assert_eq!(config.style("doubleslash"), Some(HeaderDefinition::new("//", "// ", "//EOL")));
    Ok(())
  }

  #[test]
  fn test_empty_config() -> anyhow::Result<()> {
    let config = Config::parse("")?;
    assert!(config.header.is_none());
    assert!(config.styles.is_empty());
    assert!(config.mapping.is_empty());
    Ok(())
  }

  #[test]
  fn test_reject_unknown_style() {
    let err = Config::parse("[mapping]\nxyz = \"nonexistent\"\n").expect_err("unknown style");
    assert!(matches!(err, ConfigError::InvalidMapping { .. }));
    assert!(err.to_string().contains("nonexistent"));
  }

  #[test]
  fn test_reject_leading_dot() {
    let err = Config::parse("[mapping]\n\".rs\" = \"doubleslash\"\n").expect_err("leading dot");
    assert!(err.to_string().contains("leading dot"));
  }

  #[test]
  fn test_invalid_toml() {
    assert!(matches!(Config::parse("header = ["), Err(ConfigError::ParseError { .. })));
  }

  #[test]
  fn test_load_reports_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "header = [")?;

    let err = Config::load(&path).expect_err("invalid toml");
    assert!(err.to_string().contains(DEFAULT_CONFIG_FILENAME));
    Ok(())
  }

  #[test]
  fn test_discover_explicit_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "")?;

    assert_eq!(discover_config_path(Some(&path), Path::new("/nonexistent")), Some(path.clone()));
    assert_eq!(discover_config_path(Some(&dir.path().join("missing.toml")), dir.path()), None);
    Ok(())
  }

  #[test]
  fn test_load_config_disabled() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILENAME), "header = \"x\"")?;

    assert!(load_config(None, dir.path(), true)?.is_none());
    let explicit = dir.path().join(DEFAULT_CONFIG_FILENAME);
    let config = load_config(Some(&explicit), dir.path(), false)?;
    assert_eq!(config.and_then(|c| c.header).as_deref(), Some("x"));
    Ok(())
  }
}
