//! Cart item repository.
//!
//! Rows are read back as whole JSON objects (`to_jsonb(row)`) so that every
//! column reaches the response untouched; only `vendor_id` is interpreted.

use async_trait::async_trait;
use sqlx::PgPool;

use vendor_cart_core::{CartItem, UserIdentifier};

use super::RepositoryError;

/// Read access to stored cart items.
///
/// The handle is shared by all in-flight requests; implementations must be
/// safe for concurrent use.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load every cart item stored for `user`, in storage order.
    ///
    /// Callers go through [`fetch_items`], which never passes an empty
    /// identifier.
    async fn items_for_user(&self, user: &UserIdentifier) -> Result<Vec<CartItem>, RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Fetch the cart items for a normalized user identifier.
///
/// An empty identifier yields no items without touching the store, so a
/// missing or garbage cookie can never widen the query.
///
/// # Errors
///
/// Returns whatever the store reports; failures are not retried.
pub async fn fetch_items(
    store: &dyn CartStore,
    user: &UserIdentifier,
) -> Result<Vec<CartItem>, RepositoryError> {
    if user.is_empty() {
        return Ok(Vec::new());
    }
    store.items_for_user(user).await
}

/// `PostgreSQL`-backed [`CartStore`].
#[derive(Clone)]
pub struct PgCartStore {
    pool: PgPool,
}

impl PgCartStore {
    /// Create a new store over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn items_for_user(&self, user: &UserIdentifier) -> Result<Vec<CartItem>, RepositoryError> {
        let rows: Vec<serde_json::Value> = sqlx::query_scalar(
            r"
            SELECT to_jsonb(item)
            FROM cart.cart_item AS item
            WHERE item.user_id = $1
            ORDER BY item.id
            ",
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value::<CartItem>(row).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid cart item row: {e}"))
                })
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
