//! # Render Command
//!
//! Prints a header decorated for one file type, or its signature.

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::Args;
use licheader::config::Config;
use licheader::definition::{HeaderDefinition, LineEnding};
use licheader::styles::create_resolver;
use serde::Serialize;
use tracing::debug;

use super::HeaderArgs;

/// Arguments for the render command
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
  #[command(flatten)]
  pub header: HeaderArgs,

  /// File whose type selects the comment style; its line endings are reused
  /// when it exists
  #[arg(long, short = 'f', value_name = "FILE", required_unless_present = "style")]
  pub file: Option<PathBuf>,

  /// Header style name (see `licheader styles`)
  #[arg(long, short = 's', value_name = "NAME", conflicts_with = "file")]
  pub style: Option<String>,

  /// Line ending of the rendered header
  #[arg(long, value_enum)]
  pub line_ending: Option<LineEnding>,

  /// Print a JSON document with the header, its signature and metadata
  #[arg(long)]
  pub json: bool,
}

/// JSON form of a rendered header.
#[derive(Debug, Serialize)]
struct RenderedHeader<'a> {
  location: String,
  line_ending: String,
  line_count: usize,
  signature: &'a str,
  header: &'a str,
}

impl RenderArgs {
  fn definition(&self, config: Option<Config>) -> Result<HeaderDefinition> {
    if let Some(name) = &self.style {
      let config = config.unwrap_or_default();
      return config
        .style(name)
        .ok_or_else(|| anyhow!("Unknown header style '{name}' (see `licheader styles`)"));
    }

    let Some(file) = &self.file else {
      bail!("Either --file or --style is required");
    };
    create_resolver(config)
      .resolve(file)
      .ok_or_else(|| anyhow!("No header style known for {}", file.display()))
  }

  /// An explicit flag wins, then the line endings of an existing target
  /// file, then the config file.
  fn line_ending(&self, config: Option<&Config>) -> LineEnding {
    if let Some(line_ending) = self.line_ending {
      return line_ending;
    }
    if let Some(content) = self.file.as_ref().and_then(|f| fs::read(f).ok()) {
      let detected = LineEnding::detect(&String::from_utf8_lossy(&content));
      debug!("Detected {} line endings in target file", detected);
      return detected;
    }
    config.and_then(|c| c.line_ending).unwrap_or_default()
  }
}

/// Run the render command with the given arguments
pub fn run_render(args: &RenderArgs, config: Option<Config>) -> Result<()> {
  let header = args.header.load_header(config.as_ref())?;
  let line_ending = args.line_ending(config.as_ref());
  let definition = args.definition(config)?;

  let rendered = header.build_for_definition(&definition, line_ending);

  if args.json {
    let document = RenderedHeader {
      location: header.location().to_string(),
      line_ending: line_ending.to_string(),
      line_count: header.line_count(),
      signature: header.as_one_line_str(),
      header: &rendered,
    };
    println!("{}", serde_json::to_string_pretty(&document)?);
  } else {
    print!("{rendered}");
  }

  Ok(())
}

/// Run the signature command with the given arguments
pub fn run_signature(args: &HeaderArgs, config: Option<&Config>) -> Result<()> {
  let header = args.load_header(config)?;
  println!("{}", header.as_one_line_str());
  Ok(())
}
