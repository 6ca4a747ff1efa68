//! Core types for Vendor Cart.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart_item;
pub mod group;
pub mod id;
pub mod user;

pub use cart_item::CartItem;
pub use group::{VendorGroups, group_by_vendor};
pub use id::VendorId;
pub use user::UserIdentifier;
