//! CLI subcommands.

pub mod migrate;
pub mod seed;

use sqlx::PgPool;
use thiserror::Error;

use vendor_cart_server::config::{ConfigError, ServerConfig};
use vendor_cart_server::db;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to read {0}: {1}")]
    Io(String, std::io::Error),

    #[error("Invalid seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0} invalid seed entries")]
    InvalidSeed(usize),
}

/// Connect to the cart database using the server's configuration.
async fn connect() -> Result<PgPool, CommandError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to cart database...");
    Ok(db::create_pool(&config.database_url, &config.pool).await?)
}
