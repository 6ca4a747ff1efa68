//! Vendor identifier newtype.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the vendor (seller) a cart item belongs to.
///
/// Stored as a nullable `INTEGER` column. A value of `0` is never a real
/// vendor: it is what legacy rows carry when no vendor was assigned, so it is
/// treated the same as a missing vendor when grouping.
///
/// ```
/// use vendor_cart_core::VendorId;
///
/// assert!(VendorId::new(11).is_assigned());
/// assert!(!VendorId::new(0).is_assigned());
/// assert_eq!(VendorId::new(11).group_key(), "11");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(i32);

impl VendorId {
    /// Create a new vendor ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Whether this ID refers to an actual vendor (non-zero).
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    /// The string key this vendor is grouped under in responses.
    #[must_use]
    pub fn group_key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for VendorId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<VendorId> for i32 {
    fn from(id: VendorId) -> Self {
        id.0
    }
}

// Write-only: rows come back through `to_jsonb` and serde.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for VendorId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for VendorId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
