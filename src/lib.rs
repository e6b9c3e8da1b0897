//! # licheader
//!
//! Renders license header templates into the comment syntax of arbitrary
//! source file types, and produces a whitespace-insensitive signature of the
//! header so existing headers can be recognized.
//!
//! ## Features
//!
//! * `${name}` placeholder substitution from a caller-supplied map
//! * Builtin comment styles for common file types, overridable by config
//! * Unix or Windows line endings, with an `EOL` token usable inside styles
//! * Whitespace-insensitive detection of a header already present in a file
//!
//! ## Usage as a Library
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use licheader::definition::{HeaderDefinition, LineEnding};
//! use licheader::header::Header;
//!
//! fn main() -> anyhow::Result<()> {
//!   let mut properties = HashMap::new();
//!   properties.insert("year".to_string(), "2008".to_string());
//!
//!   let header = Header::from_text("inline", "Copyright ${year}\nApache License", Some(&properties))?;
//!   let style = HeaderDefinition::new("/*", " * ", " */");
//!
//!   let rendered = header.build_for_definition(&style, LineEnding::Unix);
//!   assert_eq!(rendered, "/*\n * Copyright 2008\n * Apache License\n */\n");
//!   assert!(header.is_present_in(&rendered, &style));
//!
//!   Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`header`] - Template loading, substitution and rendering
//! * [`definition`] - Comment decoration and line endings
//! * [`styles`] - Builtin style catalog and resolvers
//! * [`config`] - `.licheader.toml` configuration
//! * [`logging`] - Logging utilities for verbose output

pub mod config;
pub mod definition;
pub mod error;
pub mod header;
pub mod logging;
pub mod styles;
pub mod text;

pub use definition::{HeaderDefinition, LineEnding};
pub use error::HeaderError;
pub use header::Header;
