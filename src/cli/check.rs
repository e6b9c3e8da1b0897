//! # Check Command
//!
//! This module implements the check command: for every given file, resolve
//! its comment style and report whether the header is already present.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use licheader::config::Config;
use licheader::header::Header;
use licheader::styles::{StyleResolver, create_resolver};
use licheader::verbose_log;
use tracing::debug;

use super::HeaderArgs;
use crate::output::{
  CategorizedReports, FileReport, FileStatus, print_missing_files, print_skipped_files, print_summary,
};

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  #[command(flatten)]
  pub header: HeaderArgs,

  /// Files to check
  #[arg(required = true, value_name = "FILES")]
  pub files: Vec<PathBuf>,
}

/// Checks one file.
///
/// Non-UTF-8 bytes are replaced before comparison; the signature only has to
/// match the header text.
fn check_file(header: &Header, resolver: &dyn StyleResolver, path: PathBuf) -> Result<FileReport> {
  let Some(definition) = resolver.resolve(&path) else {
    verbose_log!("Skipping {}: no known comment style", path.display());
    return Ok(FileReport::new(path, FileStatus::Skipped));
  };

  let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
  let content = String::from_utf8_lossy(&bytes);

  let status = if header.is_present_in(&content, &definition) {
    FileStatus::Present
  } else {
    FileStatus::Missing
  };
  debug!("{}: {:?}", path.display(), status);

  Ok(FileReport::new(path, status))
}

/// Run the check command with the given arguments.
///
/// Returns `false` when at least one file is missing the header.
pub fn run_check(args: &CheckArgs, config: Option<Config>) -> Result<bool> {
  let header = args.header.load_header(config.as_ref())?;
  let resolver = create_resolver(config);

  let reports = args
    .files
    .iter()
    .map(|path| check_file(&header, resolver.as_ref(), path.clone()))
    .collect::<Result<Vec<_>>>()?;

  let categorized = CategorizedReports::new(&reports);
  print_skipped_files(&categorized.skipped);
  print_missing_files(&categorized.missing);
  print_summary(&categorized);

  Ok(categorized.missing.is_empty())
}

#[cfg(test)]
mod tests {
  use licheader::definition::LineEnding;
  use licheader::styles::BuiltinResolver;
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_check_file_statuses() -> Result<()> {
    let dir = TempDir::new()?;
    let header = Header::from_text("inline", "Copyright 2008\nApache License", None)?;
    let resolver = BuiltinResolver;

    let definition = resolver.resolve(&dir.path().join("x.rs")).context("rust style")?;
    let with_header = dir.path().join("with.rs");
    fs::write(
      &with_header,
      format!("{}\nfn main() {{}}\n", header.build_for_definition(&definition, LineEnding::Windows)),
    )?;
    let without_header = dir.path().join("without.rs");
    fs::write(&without_header, "fn main() {}\n")?;
    let binary = dir.path().join("logo.png");
    fs::write(&binary, [0x89, b'P', b'N', b'G'])?;

    assert_eq!(check_file(&header, &resolver, with_header)?.status, FileStatus::Present);
    assert_eq!(check_file(&header, &resolver, without_header)?.status, FileStatus::Missing);
    assert_eq!(check_file(&header, &resolver, binary)?.status, FileStatus::Skipped);
    Ok(())
  }

  #[test]
  fn test_check_file_missing_file_errors() -> Result<()> {
    let header = Header::from_text("inline", "Copyright 2008", None)?;
    let result = check_file(&header, &BuiltinResolver, PathBuf::from("/nonexistent/file.rs"));
    assert!(result.is_err());
    Ok(())
  }
}
