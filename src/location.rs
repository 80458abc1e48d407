//! Snapshot of the host document location.
//!
//! The browser exposes `location.origin`, `location.pathname` and
//! `location.search` as globals. Here they are captured once into a
//! [`Location`] value and passed explicitly to whatever needs them, so the
//! resolution logic stays a plain function of its inputs.
//!
//! ```rust
//! use gosub_bootstrap::location::Location;
//!
//! let loc = Location::parse("https://example.com/app/index.html?options=%7B%7D").unwrap();
//! assert_eq!(loc.origin(), "https://example.com");
//! assert_eq!(loc.pathname(), "/app/index.html");
//! assert_eq!(loc.query_param("options").as_deref(), Some("{}"));
//! ```

use crate::errors::BootstrapError;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Parses an absolute href such as `https://host/app/index.html?x=1`.
    pub fn parse(href: &str) -> Result<Self, BootstrapError> {
        Ok(Self { url: Url::parse(href)? })
    }

    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `scheme://host[:port]`, with default ports elided.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// Raw query string without the leading `?`.
    pub fn search(&self) -> Option<&str> {
        self.url.query()
    }

    /// First value of query parameter `name`, decoded the way
    /// `URLSearchParams` decodes it (percent escapes and `+` as space).
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self::from_url(url)
    }
}
