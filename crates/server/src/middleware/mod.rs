//! HTTP middleware and extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request span with method, uri and `request_id`)
//! 3. Request ID (record into the span, echo on the response)

pub mod request_id;
pub mod user_cookie;

pub use request_id::{MAX_REQUEST_ID_LEN, REQUEST_ID_HEADER, request_id_middleware};
pub use user_cookie::{USER_ID_COOKIE, UserIdCookie};
