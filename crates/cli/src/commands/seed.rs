//! Seed the cart table from a YAML file.
//!
//! The file is a list of items:
//!
//! ```yaml
//! - user_id: "1234"
//!   vendor_id: 11        # optional; omitted items never show up in a vendor group
//!   product_name: p1
//!   quantity: 2          # optional, defaults to 1
//! ```
//!
//! Entries are validated before the database is touched. Items are inserted in
//! file order inside one transaction, so the stored order matches the file.

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use vendor_cart_core::{UserIdentifier, VendorId};

use super::{CommandError, connect};

/// One cart item as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedItem {
    pub user_id: String,
    #[serde(default)]
    pub vendor_id: Option<VendorId>,
    pub product_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

const fn default_quantity() -> i32 {
    1
}

/// Parse seed entries from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML does not describe a list of items.
pub fn parse(content: &str) -> Result<Vec<SeedItem>, CommandError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Check seed entries, returning one message per problem.
///
/// User IDs must already be in normalized (digits only) form, otherwise the
/// rows could never be reached through the `/cart` route.
#[must_use]
pub fn validate(items: &[SeedItem]) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let normalized = UserIdentifier::normalize(&item.user_id);
        if normalized.is_empty() {
            errors.push(format!("item {index}: user_id must contain digits"));
        } else if normalized.as_str() != item.user_id {
            errors.push(format!(
                "item {index}: user_id {:?} is not normalized (expected {:?})",
                item.user_id,
                normalized.as_str()
            ));
        }

        if item.product_name.trim().is_empty() {
            errors.push(format!("item {index}: product_name cannot be empty"));
        }

        if item.quantity < 1 {
            errors.push(format!("item {index}: quantity must be positive"));
        }
    }

    errors
}

/// Insert cart items from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
/// * `clear_existing` - If true, delete every existing cart item first
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid, configuration is
/// missing, or database operations fail.
pub async fn run(file_path: &str, clear_existing: bool) -> Result<(), CommandError> {
    let path = Path::new(file_path);

    info!(path = %file_path, "Loading cart items from file");

    // Read and validate before connecting to the database
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CommandError::Io(file_path.to_string(), e))?;
    let items = parse(&content)?;

    let errors = validate(&items);
    if !errors.is_empty() {
        error!("Seed file validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(CommandError::InvalidSeed(errors.len()));
    }

    info!(items = items.len(), "Seed file validated");

    let pool = connect().await?;
    let mut tx = pool.begin().await?;

    if clear_existing {
        let cleared = sqlx::query("DELETE FROM cart.cart_item")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        info!(cleared, "Cleared existing cart items");
    }

    for item in &items {
        sqlx::query(
            r"
            INSERT INTO cart.cart_item (user_id, vendor_id, product_name, quantity)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(UserIdentifier::normalize(&item.user_id))
        .bind(item.vendor_id)
        .bind(&item.product_name)
        .bind(item.quantity)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(inserted = items.len(), "Seeding complete");
    Ok(())
}
