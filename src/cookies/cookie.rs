//! Cookie record.
//!
//! A [`Cookie`] is one browser cookie candidate. Records are plain values:
//! once built they are never modified by this crate, only copied into or left
//! out of collections.
//!
//! ```rust
//! use gosub_bootstrap::cookies::{Cookie, SameSite};
//!
//! let c = Cookie {
//!     name: "session".into(),
//!     value: "abc123".into(),
//!     domain: "example.com".into(),
//!     path: "/".into(),
//!     expires: 1_767_225_599, // Unix seconds, 0 for a session cookie
//!     http_only: true,
//!     secure: true,
//!     same_site: SameSite::Lax,
//! };
//! assert!(!c.is_session());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;

/// SameSite policy of a cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl FromStr for SameSite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("strict") {
            Ok(SameSite::Strict)
        } else if s.eq_ignore_ascii_case("lax") {
            Ok(SameSite::Lax)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(SameSite::None)
        } else {
            Err(format!("unknown SameSite value: {s}"))
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        };
        f.write_str(s)
    }
}

/// A cookie candidate. `name` is the key within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    /// Cookie name (case-sensitive).
    pub name: String,

    /// Raw cookie value (not URL-decoded).
    pub value: String,

    /// Domain scoping. Empty for a host-only cookie.
    pub domain: String,

    /// Path scoping (e.g. `"/"`).
    pub path: String,

    /// Expiry in Unix seconds. `0` marks a session cookie.
    pub expires: i64,

    /// If `true`, the cookie is hidden from client-side scripts.
    pub http_only: bool,

    /// If `true`, the cookie is only sent over HTTPS.
    pub secure: bool,

    pub same_site: SameSite,
}

impl Cookie {
    /// Session cookie scoped to `/` with default attributes.
    pub fn new<S: Into<String>>(name: S, value: S) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: String::new(),
            path: "/".to_string(),
            expires: 0,
            http_only: false,
            secure: false,
            same_site: SameSite::default(),
        }
    }

    pub fn is_session(&self) -> bool {
        self.expires == 0
    }

    /// Parses one `Set-Cookie` header line.
    ///
    /// `now` (Unix seconds) anchors `Max-Age`, which wins over `Expires` when
    /// both are given. Unknown attributes and unparsable attribute values are
    /// skipped. Returns `None` when the line has no `name=value` pair or the
    /// name is empty.
    pub fn from_set_cookie(header: &str, now: i64) -> Option<Cookie> {
        let mut parts = header.split(';');
        let (name, value) = parts.next()?.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut cookie = Cookie::new(name, value.trim());
        let mut max_age: Option<i64> = None;

        for part in parts {
            let part = part.trim();
            if let Some((k, v)) = part.split_once('=') {
                let v = v.trim();
                match k.trim().to_ascii_lowercase().as_str() {
                    "path" if v.starts_with('/') => cookie.path = v.to_string(),
                    "domain" => cookie.domain = v.trim_start_matches('.').to_ascii_lowercase(),
                    "expires" => match parse_cookie_date(v) {
                        Some(ts) => cookie.expires = ts,
                        None => log::debug!("Ignoring unparsable Expires on cookie {name}: {v}"),
                    },
                    "max-age" => match v.parse::<i64>() {
                        Ok(secs) => max_age = Some(secs),
                        Err(_) => log::debug!("Ignoring unparsable Max-Age on cookie {name}: {v}"),
                    },
                    "samesite" => match v.parse() {
                        Ok(same_site) => cookie.same_site = same_site,
                        Err(e) => log::debug!("{e} on cookie {name}"),
                    },
                    _ => {}
                }
            } else if part.eq_ignore_ascii_case("secure") {
                cookie.secure = true;
            } else if part.eq_ignore_ascii_case("httponly") {
                cookie.http_only = true;
            }
        }

        if let Some(secs) = max_age {
            cookie.expires = now.saturating_add(secs);
        }

        Some(cookie)
    }
}

/// Parses an `Expires` date into Unix seconds.
fn parse_cookie_date(value: &str) -> Option<i64> {
    // IMF-fixdate ends in "GMT", which is an obsolete zone for RFC 2822.
    let value = match value.strip_suffix(" GMT") {
        Some(head) => format!("{head} +0000"),
        None => value.to_string(),
    };

    OffsetDateTime::parse(&value, &Rfc2822)
        .ok()
        .map(|dt| dt.unix_timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn same_site_parses_case_insensitively() {
        assert_eq!("strict".parse::<SameSite>(), Ok(SameSite::Strict));
        assert_eq!("LAX".parse::<SameSite>(), Ok(SameSite::Lax));
        assert_eq!(" None ".parse::<SameSite>(), Ok(SameSite::None));
        assert!("sometimes".parse::<SameSite>().is_err());
        assert_eq!(SameSite::None.to_string(), "None");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let c = Cookie::new("a", "1");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["httpOnly"], serde_json::json!(false));
        assert_eq!(v["sameSite"], serde_json::json!("Lax"));

        let back: Cookie = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn parses_full_set_cookie_line() {
        let c = Cookie::from_set_cookie(
            "sid=abc; Path=/app; Domain=.Example.com; Secure; HttpOnly; SameSite=strict",
            NOW,
        )
        .unwrap();

        assert_eq!(c.name, "sid");
        assert_eq!(c.value, "abc");
        assert_eq!(c.path, "/app");
        assert_eq!(c.domain, "example.com");
        assert!(c.secure);
        assert!(c.http_only);
        assert_eq!(c.same_site, SameSite::Strict);
        assert!(c.is_session());
    }

    #[test]
    fn defaults_for_bare_pair() {
        let c = Cookie::from_set_cookie("a=1", NOW).unwrap();
        assert_eq!(c, Cookie::new("a", "1"));
    }

    #[test]
    fn missing_name_is_rejected() {
        assert_eq!(Cookie::from_set_cookie("=value", NOW), None);
        assert_eq!(Cookie::from_set_cookie("novalue", NOW), None);
        assert_eq!(Cookie::from_set_cookie("", NOW), None);
    }

    #[test]
    fn attribute_pair_is_not_taken_as_name() {
        assert_eq!(Cookie::from_set_cookie("flag; Path=/a", NOW), None);
        assert_eq!(Cookie::from_set_cookie("flag; Secure", NOW), None);
        assert_eq!(Cookie::from_set_cookie("; a=1", NOW), None);
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let c = Cookie::from_set_cookie("token=a=b==; Path=/", NOW).unwrap();
        assert_eq!(c.name, "token");
        assert_eq!(c.value, "a=b==");
    }

    #[test]
    fn empty_value_is_allowed() {
        let c = Cookie::from_set_cookie("a=; Secure", NOW).unwrap();
        assert_eq!(c.value, "");
        assert!(c.secure);
    }

    #[test]
    fn expires_is_converted_to_unix_seconds() {
        let c = Cookie::from_set_cookie("a=1; Expires=Wed, 21 Oct 2015 07:28:00 +0000", NOW).unwrap();
        assert_eq!(c.expires, 1_445_412_480);

        let c = Cookie::from_set_cookie("a=1; Expires=Wed, 21 Oct 2015 07:28:00 GMT", NOW).unwrap();
        assert_eq!(c.expires, 1_445_412_480);
    }

    #[test]
    fn unparsable_attributes_are_skipped() {
        let c = Cookie::from_set_cookie("a=1; Expires=someday; Max-Age=soon; SameSite=maybe; Path=relative", NOW).unwrap();
        assert_eq!(c, Cookie::new("a", "1"));
    }

    #[test]
    fn max_age_wins_over_expires() {
        let c = Cookie::from_set_cookie("a=1; Max-Age=60; Expires=Wed, 21 Oct 2015 07:28:00 GMT", NOW).unwrap();
        assert_eq!(c.expires, NOW + 60);
    }
}
