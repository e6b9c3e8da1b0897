//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing, with one subcommand per operation.

mod check;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Datelike;
pub use check::{CheckArgs, run_check};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
use licheader::config::{Config, load_config};
use licheader::header::{Header, Properties, builtin_template_names};
use licheader::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use licheader::styles::HeaderStyle;
pub use render::{RenderArgs, run_render, run_signature};
use tracing::debug;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Render the Apache header for a Rust file
  licheader render --header builtin:apache-2 -p owner=\"Acme Inc\" --file src/main.rs

  # Render a custom template in XML style with Windows line endings
  licheader render --header HEADER.txt --style xml --line-ending windows

  # Print the whitespace-free signature of a header
  licheader signature --header HEADER.txt --year 2008

  # Check that files carry the header (exit status 1 if any is missing)
  licheader check --header HEADER.txt src/*.rs
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  #[command(flatten)]
  pub global: GlobalArgs,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and rendered headers
  #[arg(short, long, global = true, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    global = true,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Path to config file (default: .licheader.toml in the current directory)
  #[arg(long, global = true, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, global = true)]
  pub no_config: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Render a header in the comment style of a file type
  Render(RenderArgs),
  /// Print the whitespace-free signature of a header
  Signature(HeaderArgs),
  /// Check whether files already contain the header
  Check(CheckArgs),
  /// List the builtin header styles and templates
  Styles,
}

/// Arguments selecting and filling in a header template
#[derive(Args, Debug, Default)]
pub struct HeaderArgs {
  /// Header template: a file path or builtin:<name> (apache-2, bsd-3, mit)
  #[arg(long = "header", short = 'H', value_name = "LOCATION")]
  pub header: Option<String>,

  /// Placeholder value substituted for ${KEY} (repeatable)
  #[arg(long = "property", short = 'p', value_name = "KEY=VALUE", value_parser = parse_property)]
  pub properties: Vec<(String, String)>,

  /// Value for ${year} (default: the current year)
  #[arg(long)]
  pub year: Option<String>,

  /// Encoding of the header template file
  #[arg(long, value_enum)]
  pub encoding: Option<licheader::header::Encoding>,
}

impl HeaderArgs {
  /// Builds the placeholder map. Later sources win: the current year, the
  /// config file, `--year`, then `--property`.
  fn properties(&self, config: Option<&Config>) -> Properties {
    let mut properties = Properties::new();
    properties.insert("year".to_string(), chrono::Local::now().year().to_string());

    if let Some(config) = config {
      properties.extend(config.properties.clone());
    }
    if let Some(year) = &self.year {
      properties.insert("year".to_string(), year.clone());
    }
    properties.extend(self.properties.iter().cloned());
    properties
  }

  /// Loads the header named on the command line or in the config file.
  pub fn load_header(&self, config: Option<&Config>) -> Result<Header> {
    let Some(location) = self.header.clone().or_else(|| config.and_then(|c| c.header.clone())) else {
      bail!("Missing required argument: --header <LOCATION> (or `header` in the config file)");
    };
    let encoding = self
      .encoding
      .or_else(|| config.and_then(|c| c.encoding))
      .unwrap_or_default();

    let properties = self.properties(config);
    debug!("Substituting {} properties into {}", properties.len(), location);

    Header::load_with_encoding(location.as_str(), Some(&properties), encoding)
      .with_context(|| format!("Failed to load header template from {location}"))
  }
}

/// Parses a `KEY=VALUE` pair.
fn parse_property(s: &str) -> Result<(String, String), String> {
  match s.split_once('=') {
    Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
    _ => Err(format!("expected KEY=VALUE, got '{s}'")),
  }
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Runs the selected subcommand. Returns `false` when a check found files
  /// without the header.
  pub fn run(self) -> Result<bool> {
    let global = &self.global;

    init_tracing(global.quiet, global.verbose);
    if global.verbose > 0 {
      set_verbose();
    } else if global.quiet {
      set_quiet();
    }
    global.colors.apply();

    let config = load_config(global.config.as_deref(), Path::new("."), global.no_config)?;
    if config.is_some() {
      debug!("Using configuration file");
    }

    match self.command {
      Command::Render(args) => run_render(&args, config).map(|()| true),
      Command::Signature(args) => run_signature(&args, config.as_ref()).map(|()| true),
      Command::Check(args) => run_check(&args, config),
      Command::Styles => {
        print_styles();
        Ok(true)
      }
    }
  }
}

fn print_styles() {
  for style in HeaderStyle::ALL {
    let definition = style.definition();
    println!(
      "{:<14} {:?} {:?} {:?}",
      style.name(),
      definition.first_line,
      definition.before_each_line,
      definition.end_line
    );
  }
  println!();
  let templates: Vec<&str> = builtin_template_names().collect();
  println!("builtin templates: {}", templates.join(", "));
}
