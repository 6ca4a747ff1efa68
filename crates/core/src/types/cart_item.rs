//! Cart line items as stored for a user.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::VendorId;

/// One line item in a user's cart.
///
/// Only `vendor_id` is interpreted by this crate. Every other column of the
/// stored row (product name, quantity, timestamps, ...) is kept verbatim in
/// [`CartItem::fields`] and serialized back out unchanged.
///
/// ```
/// use serde_json::json;
/// use vendor_cart_core::{CartItem, VendorId};
///
/// let item: CartItem =
///     serde_json::from_value(json!({ "vendor_id": 11, "product_name": "p1" })).unwrap();
///
/// assert_eq!(item.vendor_id, Some(VendorId::new(11)));
/// assert_eq!(item.field("product_name"), Some(&json!("p1")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Vendor the item is sold by. `None` for rows with a NULL vendor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<VendorId>,
    /// All remaining columns, passed through as-is.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl CartItem {
    /// Create an item with no extra fields.
    #[must_use]
    pub fn new(vendor_id: Option<VendorId>) -> Self {
        Self {
            vendor_id,
            fields: Map::new(),
        }
    }

    /// Add a pass-through field, replacing any previous value under `key`.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a pass-through field by name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The vendor this item should be grouped under, if any.
    ///
    /// Missing and zero vendor IDs both yield `None`.
    #[must_use]
    pub fn assigned_vendor(&self) -> Option<VendorId> {
        self.vendor_id.filter(VendorId::is_assigned)
    }
}
