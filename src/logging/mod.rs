//! # Logging
//!
//! Two channels carry diagnostics, both on stderr so that rendered headers on
//! stdout can be piped straight into a file:
//!
//! - [`verbose_log!`](crate::verbose_log) for human-readable notes shown with
//!   `-v`, such as which config rule picked a comment style
//! - `tracing` events from the library, filtered by [`init_tracing`] and
//!   `RUST_LOG`
//!
//! The global quiet/verbose switch and the color mode are set once by the CLI.
//!
//! ```rust
//! use licheader::logging::{ColorMode, is_verbose, set_verbose};
//! use licheader::verbose_log;
//!
//! ColorMode::Never.apply();
//! set_verbose();
//! assert!(is_verbose());
//!
//! verbose_log!("Resolved {} with the doubleslash style", "main.rs");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Prints to stderr when verbose mode is on; same syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
  ($($arg:tt)*) => {
    if $crate::logging::is_verbose() {
      eprintln!($($arg)*);
    }
  };
}
