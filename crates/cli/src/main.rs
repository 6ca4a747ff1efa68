//! Vendor Cart CLI - Database migrations and seed data.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! vc-cli migrate
//!
//! # Load cart items from a YAML file
//! vc-cli seed crates/cli/seed/demo_cart.yaml
//!
//! # Replace all cart items with the file contents
//! vc-cli seed crates/cli/seed/demo_cart.yaml --clear
//! ```
//!
//! # Environment Variables
//!
//! - `CART_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "vc-cli")]
#[command(author, version, about = "Vendor Cart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert cart items from a YAML file
    Seed {
        /// Path to the YAML seed file
        file: String,

        /// Delete all existing cart items first
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { file, clear } => commands::seed::run(&file, clear).await,
    }
}
