//! Database migration command.
//!
//! Applies the migrations in `crates/server/migrations/`:
//!
//! ```bash
//! vc-cli migrate
//! ```

use super::{CommandError, connect};

/// Run cart database migrations.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is unreachable,
/// or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running cart migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Cart migrations complete!");
    Ok(())
}
