// src/cookies.rs
//! Cookies: the [`Cookie`] record and helpers over ordered cookie collections.

mod collection;
mod cookie;

pub use cookie::Cookie;
pub use cookie::SameSite;

pub use collection::collect_response_cookies;
pub use collection::has_cookie;
pub use collection::upsert_if_absent;
