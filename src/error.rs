//! Error types for loading header templates.

use std::io;

use crate::header::TemplateLocation;

/// Error type for header template construction.
///
/// Rendering a loaded header never fails, so this is only returned while a
/// [`Header`](crate::header::Header) is being built.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
  /// No template location was given.
  #[error("Cannot read license template header file with an empty location")]
  InvalidLocation,

  /// The template could not be read or decoded.
  #[error("Cannot read header document {location}. Cause: {message}")]
  Read {
    location: TemplateLocation,
    message: String,
    source: io::Error,
  },
}

impl HeaderError {
  /// Wraps `source`, keeping its message unmodified.
  pub(crate) fn read(location: &TemplateLocation, source: io::Error) -> Self {
    Self::Read {
      location: location.clone(),
      message: source.to_string(),
      source,
    }
  }
}
