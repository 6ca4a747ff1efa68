//! Extractor for the raw `user_id` cookie.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use cookie::Cookie;

/// Cookie carrying the caller's user identifier.
pub const USER_ID_COOKIE: &str = "user_id";

/// Raw, un-normalized value of the `user_id` cookie.
///
/// A missing cookie yields an empty string; the extractor never rejects.
/// Header bytes that are not valid UTF-8 are decoded lossily, so a stray
/// Latin-1 byte in some other cookie does not hide `user_id`. When the cookie appears more than once, the
/// first occurrence wins. The value is taken verbatim, without percent
/// decoding.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(UserIdCookie(raw): UserIdCookie) -> String {
///     UserIdentifier::normalize(&raw).into_inner()
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdCookie(pub String);

impl UserIdCookie {
    /// Read the cookie from request headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        for value in &headers.get_all(COOKIE) {
            let header = String::from_utf8_lossy(value.as_bytes());
            let found = Cookie::split_parse(header.as_ref())
                .filter_map(Result::ok)
                .find(|cookie| cookie.name() == USER_ID_COOKIE);
            if let Some(cookie) = found {
                return Self(cookie.value().to_owned());
            }
        }
        Self::default()
    }

    /// The raw cookie value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for UserIdCookie
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
