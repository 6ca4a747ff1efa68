//! User identifier carried in the `user_id` cookie.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A normalized user identifier.
///
/// The raw cookie value is untrusted free text (clients have been seen sending
/// prefixed forms such as `ox1234`). Normalization keeps only the ASCII digits,
/// in their original order. An empty identifier means "no usable identifier"
/// and is not an error.
///
/// ## Examples
///
/// ```
/// use vendor_cart_core::UserIdentifier;
///
/// assert_eq!(UserIdentifier::normalize("1234").as_str(), "1234");
/// assert_eq!(UserIdentifier::normalize("ox1234").as_str(), "1234");
/// assert!(UserIdentifier::normalize("").is_empty());
/// assert!(UserIdentifier::normalize("guest").is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct UserIdentifier(String);

impl UserIdentifier {
    /// Normalize a raw cookie value by stripping every non-digit character.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter(char::is_ascii_digit).collect())
    }

    /// Returns `true` if the raw value contained no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Bound against the TEXT `user_id` column. Only encoding is provided: identifiers
// are derived from requests, never read back out of the database.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for UserIdentifier {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for UserIdentifier {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
