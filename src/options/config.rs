//! The resolved application configuration.
//!
//! Keys use the camelCase names the served document and the `options` query
//! parameter carry (`base`, `staticBase`, `logLevel`). Keys this crate does
//! not know about are kept in [`Configuration::extra`] so the rest of the
//! application can still read them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verbosity used when no source sets `logLevel` (warn).
pub const DEFAULT_LOG_LEVEL: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// URL mount point of the application. Empty or root-relative.
    pub base: String,
    /// Root for static assets. Same shape as `base`.
    pub static_base: String,
    /// Numeric verbosity threshold, see [`crate::logging::level_filter`].
    pub log_level: i64,
    /// Every other key found in the merged sources.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base: String::new(),
            static_base: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
            extra: Map::new(),
        }
    }
}

impl Configuration {
    /// Looks up an application-specific key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
