//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the store)
//! GET  /cart                   - Cart items grouped by vendor
//! ```

pub mod cart;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/cart", get(cart::show))
}
