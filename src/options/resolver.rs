//! Options resolution.
//!
//! Two sources feed the [`Configuration`]:
//!
//! 1. **Embedded settings**: JSON in an attribute of a known element of the
//!    served document. A missing element, missing attribute or undecodable
//!    value is expected (local development, host pages without settings) and
//!    silently yields an empty object.
//! 2. **Query override**: JSON in the `options` query parameter. When present
//!    it is merged over the embedded settings key by key. A malformed value
//!    is an error, since somebody explicitly asked for the override.
//!
//! After merging, `base` and `staticBase` are run through
//! [`resolve_base`](crate::base::resolve_base) and the resolved `logLevel` is
//! pushed into the resolver's [`LogSink`]. That write is the only side effect
//! of resolution.
//!
//! # Example
//! ```rust
//! use gosub_bootstrap::location::Location;
//! use gosub_bootstrap::logging::RecordingLogSink;
//! use gosub_bootstrap::options::{OptionsResolver, StaticDocument};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let location = Location::parse("https://example.com/app/index.html?options=%7B%22logLevel%22%3A2%7D")?;
//! let document = StaticDocument::new()
//!     .with_attribute("app-options", "data-options", r#"{"base": "sub", "logLevel": 1}"#);
//! let sink = RecordingLogSink::new();
//!
//! let cfg = OptionsResolver::builder()
//!     .location(location)
//!     .document(&document)
//!     .log_sink(&sink)
//!     .build()?
//!     .resolve()?;
//!
//! assert_eq!(cfg.base, "/app/sub");
//! assert_eq!(cfg.log_level, 2);
//! # Ok(()) }
//! ```

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::base::resolve_base;
use crate::errors::BootstrapError;
use crate::location::Location;
use crate::logging::{level_filter, GlobalLogSink, LogSink};
use crate::options::config::Configuration;
use crate::options::document::Document;

/// Id of the element carrying the embedded settings.
pub const DEFAULT_SETTINGS_ELEMENT_ID: &str = "app-options";
/// Attribute of that element holding the JSON.
pub const DEFAULT_SETTINGS_ATTRIBUTE: &str = "data-options";
/// Query parameter carrying the override.
pub const OPTIONS_QUERY_PARAM: &str = "options";

/// Resolves the effective [`Configuration`] for one application load.
pub struct OptionsResolver<'a> {
    location: Location,
    document: Option<&'a dyn Document>,
    log_sink: &'a dyn LogSink,
    element_id: String,
    attribute: String,
}

impl<'a> OptionsResolver<'a> {
    pub fn builder() -> OptionsResolverBuilder<'a> {
        OptionsResolverBuilder::default()
    }

    /// Merges both sources, resolves base paths and applies the log level.
    pub fn resolve(&self) -> Result<Configuration, BootstrapError> {
        let mut merged = self.embedded_options().unwrap_or_default();
        if let Some(overrides) = self.query_options()? {
            for (key, value) in overrides {
                merged.insert(key, value);
            }
        }

        let mut config: Configuration =
            serde_json::from_value(Value::Object(merged)).map_err(BootstrapError::MalformedOptions)?;

        config.base = resolve_base(Some(config.base.as_str()), &self.location);
        config.static_base = resolve_base(Some(config.static_base.as_str()), &self.location);

        self.log_sink.set_max_level(level_filter(config.log_level));
        log::debug!("Resolved options: {config:?}");

        Ok(config)
    }

    /// Embedded settings, or `None` when absent or unusable.
    fn embedded_options(&self) -> Option<Map<String, Value>> {
        let raw = self
            .document?
            .element_attribute(&self.element_id, &self.attribute)?;

        match decode_options(&raw) {
            Ok(map) => Some(map),
            Err(e) => {
                log::debug!(
                    "Ignoring embedded options in #{}[{}]: {e}",
                    self.element_id,
                    self.attribute
                );
                None
            }
        }
    }

    /// Query override, `Ok(None)` when the parameter is not present.
    fn query_options(&self) -> Result<Option<Map<String, Value>>, BootstrapError> {
        match self.location.query_param(OPTIONS_QUERY_PARAM) {
            Some(raw) => decode_options(&raw).map(Some),
            None => Ok(None),
        }
    }
}

/// Decodes a JSON object and checks the known keys carry the right types.
fn decode_options(raw: &str) -> Result<Map<String, Value>, BootstrapError> {
    let value: Value = serde_json::from_str(raw).map_err(BootstrapError::MalformedOptions)?;
    if !value.is_object() {
        return Err(BootstrapError::OptionsNotAnObject);
    }

    Configuration::deserialize(&value).map_err(BootstrapError::MalformedOptions)?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(BootstrapError::OptionsNotAnObject),
    }
}

/// Resolves options for `location` and `document`, writing the log level to
/// the process-wide `log` threshold.
pub fn get_options(location: &Location, document: &dyn Document) -> Result<Configuration, BootstrapError> {
    OptionsResolver {
        location: location.clone(),
        document: Some(document),
        log_sink: &GlobalLogSink,
        element_id: DEFAULT_SETTINGS_ELEMENT_ID.to_string(),
        attribute: DEFAULT_SETTINGS_ATTRIBUTE.to_string(),
    }
    .resolve()
}

/// Builder for [`OptionsResolver`].
pub struct OptionsResolverBuilder<'a> {
    location: Option<Location>,
    document: Option<&'a dyn Document>,
    log_sink: &'a dyn LogSink,
    element_id: String,
    attribute: String,
}

impl Default for OptionsResolverBuilder<'_> {
    fn default() -> Self {
        Self {
            location: None,
            document: None,
            log_sink: &GlobalLogSink,
            element_id: DEFAULT_SETTINGS_ELEMENT_ID.to_string(),
            attribute: DEFAULT_SETTINGS_ATTRIBUTE.to_string(),
        }
    }
}

impl<'a> OptionsResolverBuilder<'a> {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }

    pub fn location(self, location: Location) -> Self { self.map(|b| b.location = Some(location)) }
    pub fn document(self, document: &'a dyn Document) -> Self { self.map(|b| b.document = Some(document)) }
    pub fn log_sink(self, sink: &'a dyn LogSink) -> Self { self.map(|b| b.log_sink = sink) }
    pub fn element_id<S: Into<String>>(self, id: S) -> Self { self.map(|b| b.element_id = id.into()) }
    pub fn attribute<S: Into<String>>(self, attr: S) -> Self { self.map(|b| b.attribute = attr.into()) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut Self)) -> Self { self.map(f) }

    pub fn build(self) -> Result<OptionsResolver<'a>, OptionsResolverError> {
        let location = self.location.ok_or(OptionsResolverError::MissingLocation)?;
        if self.element_id.is_empty() || self.attribute.is_empty() {
            return Err(OptionsResolverError::EmptySettingsSelector);
        }

        Ok(OptionsResolver {
            location,
            document: self.document,
            log_sink: self.log_sink,
            element_id: self.element_id,
            attribute: self.attribute,
        })
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsResolverError {
    MissingLocation,
    EmptySettingsSelector,
}

impl fmt::Display for OptionsResolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsResolverError::MissingLocation =>
                write!(f, "a location is required to resolve options"),
            OptionsResolverError::EmptySettingsSelector =>
                write!(f, "settings element id and attribute must not be empty"),
        }
    }
}
impl std::error::Error for OptionsResolverError {}
