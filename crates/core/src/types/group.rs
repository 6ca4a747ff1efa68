//! Grouping of cart items by vendor.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use super::cart_item::CartItem;

/// Cart items partitioned by vendor.
///
/// Keys are the decimal string form of the vendor ID so the map serializes
/// directly as a JSON object. Within each group, items keep the relative order
/// they had in the source list. Items without an assigned vendor are never
/// present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorGroups(BTreeMap<String, Vec<CartItem>>);

impl VendorGroups {
    /// Create an empty grouping.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Append an item to its vendor's group. Returns `false` (and drops the
    /// item) if it has no assigned vendor.
    pub fn push(&mut self, item: CartItem) -> bool {
        let Some(vendor) = item.assigned_vendor() else {
            return false;
        };
        self.0.entry(vendor.group_key()).or_default().push(item);
        true
    }

    /// Items for a vendor key, in source order.
    #[must_use]
    pub fn get(&self, vendor_key: &str) -> Option<&[CartItem]> {
        self.0.get(vendor_key).map(Vec::as_slice)
    }

    /// Number of distinct vendors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no item had an assigned vendor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the vendor keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(vendor key, items)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CartItem])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consume the grouping and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<CartItem>> {
        self.0
    }
}

impl FromIterator<CartItem> for VendorGroups {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        let mut groups = Self::new();
        for item in iter {
            groups.push(item);
        }
        groups
    }
}

impl IntoIterator for VendorGroups {
    type Item = (String, Vec<CartItem>);
    type IntoIter = btree_map::IntoIter<String, Vec<CartItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Group cart items by vendor without touching the input.
///
/// Items with a missing or zero vendor ID are skipped. An empty slice yields an
/// empty grouping.
///
/// ```
/// use vendor_cart_core::{CartItem, VendorId, group_by_vendor};
///
/// let items = vec![
///     CartItem::new(Some(VendorId::new(11))).with_field("product_name", "p1"),
///     CartItem::new(Some(VendorId::new(22))).with_field("product_name", "p2"),
///     CartItem::new(Some(VendorId::new(11))).with_field("product_name", "p3"),
/// ];
///
/// let groups = group_by_vendor(&items);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.get("11").map(<[_]>::len), Some(2));
/// ```
#[must_use]
pub fn group_by_vendor(items: &[CartItem]) -> VendorGroups {
    items.iter().cloned().collect()
}
