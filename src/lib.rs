//! Client-side runtime bootstrap.
//!
//! - [`paths`]: slash normalization for URL-like paths.
//! - [`base`]: resolution of configured base paths against the document location.
//! - [`options`]: merging of embedded settings and the `options` query override.
//! - [`cookies`]: duplicate-free insertion into in-memory cookie collections.
//!
//! The host environment (document location, document attributes, logger) is
//! always passed in explicitly, see [`location::Location`],
//! [`options::Document`] and [`logging::LogSink`].

pub mod base;
pub mod cookies;
pub mod errors;
pub mod location;
pub mod logging;
pub mod options;
pub mod paths;

pub use errors::BootstrapError;
pub use options::{get_options, Configuration};
