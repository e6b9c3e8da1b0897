//! # licheader
//!
//! Renders license headers for source files and checks whether files carry
//! them.

mod cli;
mod output;

use std::process;

use anyhow::Result;

use crate::cli::Cli;

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  let all_present = cli.run()?;
  if !all_present {
    process::exit(1);
  }

  Ok(())
}
