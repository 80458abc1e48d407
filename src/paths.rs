//! String transforms for URL-like paths.
//!
//! These functions never look at the filesystem and never fail: every string,
//! including the empty string, has a defined output.

/// Collapses runs of `/` into a single `/` and strips trailing slashes.
///
/// With `keep_trailing` set, exactly one trailing `/` survives when the input
/// ended in one or more slashes. A slash is never added.
///
/// ```rust
/// use gosub_bootstrap::paths::normalize;
///
/// assert_eq!(normalize("a//b///c", false), "a/b/c");
/// assert_eq!(normalize("/a/b/", false), "/a/b");
/// assert_eq!(normalize("/a/b/", true), "/a/b/");
/// ```
pub fn normalize(path: &str, keep_trailing: bool) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }

    if out.ends_with('/') {
        out.pop();
        if keep_trailing {
            out.push('/');
        }
    }

    out
}

/// Strips every leading and trailing `/`. Interior slashes are left alone.
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}
