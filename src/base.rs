//! Resolution of configured base paths against the document location.

use crate::location::Location;
use crate::paths::normalize;

/// Turns a configured base path into a root-relative one.
///
/// `None` and the empty string give the empty string. Values already starting
/// with `/` only get their slashes normalized. Anything else is taken relative
/// to the directory of the current document: the last segment of the location's path is replaced by `base`,
/// the result is resolved against the location (which collapses `.` and `..`)
/// and normalized without a trailing slash.
///
/// ```rust
/// use gosub_bootstrap::base::resolve_base;
/// use gosub_bootstrap::location::Location;
///
/// let loc = Location::parse("https://example.com/app/index.html").unwrap();
/// assert_eq!(resolve_base(Some("sub"), &loc), "/app/sub");
/// assert_eq!(resolve_base(Some("/x"), &loc), "/x");
/// assert_eq!(resolve_base(None, &loc), "");
/// ```
pub fn resolve_base(base: Option<&str>, location: &Location) -> String {
    let base = match base {
        None => return String::new(),
        Some(b) if b.is_empty() || b.starts_with('/') => return normalize(b, false),
        Some(b) => b,
    };

    let mut segments: Vec<&str> = location.pathname().split('/').collect();
    if let Some(last) = segments.last_mut() {
        *last = base;
    }
    let joined = segments.join("/");

    let resolved = match location.url().join(&joined) {
        Ok(url) => url.path().to_string(),
        Err(e) => {
            log::warn!("Cannot resolve base {base:?} against {}: {e}", location.url());
            joined
        }
    };

    normalize(&resolved, false)
}
