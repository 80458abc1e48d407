//! Helpers over ordered cookie collections.
//!
//! A collection is a plain slice of [`Cookie`] records. Names are meant to be
//! unique, but nothing enforces that except the insertion policy here: a new
//! record is only appended when no record with the same name exists. On a
//! collision the existing record is kept as-is, even when the candidate
//! carries different values (first write wins).
//!
//! None of the helpers mutate their input. [`upsert_if_absent`] hands back the
//! very same slice when there is nothing to add, so callers can tell with
//! `Cow::Borrowed` that the collection did not change.

use std::borrow::Cow;

use http::header::SET_COOKIE;
use http::HeaderMap;

use crate::cookies::Cookie;

/// Returns `true` if a record in `collection` is named exactly `name`.
pub fn has_cookie(collection: &[Cookie], name: &str) -> bool {
    collection.iter().any(|c| c.name == name)
}

/// Appends `candidate` unless a record with its name already exists.
pub fn upsert_if_absent(collection: &[Cookie], candidate: Cookie) -> Cow<'_, [Cookie]> {
    if has_cookie(collection, &candidate.name) {
        return Cow::Borrowed(collection);
    }

    let mut next = Vec::with_capacity(collection.len() + 1);
    next.extend_from_slice(collection);
    next.push(candidate);
    Cow::Owned(next)
}

/// Records every `Set-Cookie` header of a response into a new collection.
///
/// Each header is parsed with [`Cookie::from_set_cookie`] and added under the
/// same policy as [`upsert_if_absent`]: cookies already in `collection` (or
/// repeated names within the same response) keep their first value.
pub fn collect_response_cookies(collection: &[Cookie], headers: &HeaderMap, now: i64) -> Vec<Cookie> {
    let mut cookies = collection.to_vec();

    for header in headers.get_all(SET_COOKIE) {
        let Ok(line) = header.to_str() else {
            log::debug!("Skipping non-ASCII Set-Cookie header");
            continue;
        };
        let Some(candidate) = Cookie::from_set_cookie(line, now) else {
            log::debug!("Skipping Set-Cookie header without a name: {line}");
            continue;
        };

        if !has_cookie(&cookies, &candidate.name) {
            cookies.push(candidate);
        }
    }

    cookies
}
