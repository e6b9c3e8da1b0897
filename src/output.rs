//! # Output Module
//!
//! This module centralizes all user-facing output of the check command.
//! Colors and symbols follow the global color mode; quiet mode prints bare
//! paths so the output can be piped into other tools.

use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};

use licheader::logging::{is_quiet, is_verbose};

/// Symbols used in output
pub mod symbols {
  /// Header present
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Header missing
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Skipped, no known comment style
  pub const IGNORED: &str = "-";
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Outcome of checking one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
  Present,
  Missing,
  /// The file type has no known comment style
  Skipped,
}

/// Result of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  pub path: PathBuf,
  pub status: FileStatus,
}

impl FileReport {
  pub const fn new(path: PathBuf, status: FileStatus) -> Self {
    Self { path, status }
  }
}

/// Reports grouped by status, each group sorted by path.
#[derive(Debug, Default)]
pub struct CategorizedReports<'a> {
  pub present: Vec<&'a FileReport>,
  pub missing: Vec<&'a FileReport>,
  pub skipped: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  pub fn new(reports: &'a [FileReport]) -> Self {
    let mut categorized = Self::default();
    for report in reports {
      match report.status {
        FileStatus::Present => categorized.present.push(report),
        FileStatus::Missing => categorized.missing.push(report),
        FileStatus::Skipped => categorized.skipped.push(report),
      }
    }
    for group in [&mut categorized.present, &mut categorized.missing, &mut categorized.skipped] {
      group.sort_by(|a, b| a.path.cmp(&b.path));
    }
    categorized
  }
}

const fn plural(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Print the list of files missing the header.
///
/// Shows up to [`DEFAULT_FILE_LIST_LIMIT`] files unless verbose mode is on.
pub fn print_missing_files(files: &[&FileReport]) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    // In quiet mode, just print the file paths (for scripting)
    for file in files {
      println!("{}", file.path.display());
    }
    return;
  }

  let count = files.len();
  println!(
    "{} {} {} missing the license header:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    plural(count)
  );

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    println!("  {}", file.path.display());
  }

  if !show_all && count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}

/// Print the files that were skipped. Only shown in verbose mode.
pub fn print_skipped_files(files: &[&FileReport]) {
  if !is_verbose() || files.is_empty() {
    return;
  }

  println!(
    "{} {} {} skipped (unknown comment style):",
    symbols::IGNORED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    files.len(),
    plural(files.len())
  );
  for file in files {
    println!("  {}", file.path.display());
  }
}

/// Print the final one-line summary.
pub fn print_summary(reports: &CategorizedReports<'_>) {
  if is_quiet() {
    return;
  }

  let checked = reports.present.len() + reports.missing.len();
  if checked == 0 {
    let skipped = reports.skipped.len();
    println!(
      "{} No files checked, {} {} skipped (unknown comment style)",
      symbols::IGNORED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      skipped,
      plural(skipped)
    );
  } else if reports.missing.is_empty() {
    println!(
      "{} All {} {} have the license header",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      checked,
      plural(checked)
    );
  } else {
    println!(
      "{} of {} {} missing the license header",
      reports.missing.len(),
      checked,
      plural(checked)
    );
  }
}
