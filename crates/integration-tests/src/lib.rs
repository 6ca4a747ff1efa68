//! Integration tests for Vendor Cart.
//!
//! These tests talk to a running server backed by a migrated and seeded
//! database. They are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! vc-cli migrate
//! vc-cli seed crates/cli/seed/demo_cart.yaml --clear
//! cargo run -p vendor-cart-server &
//! cargo test -p vendor-cart-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use reqwest::header::COOKIE;
use serde::Deserialize;

use vendor_cart_core::VendorGroups;

/// User seeded by `crates/cli/seed/demo_cart.yaml`.
pub const DEMO_USER_ID: &str = "1234";

/// Response body of `GET /cart`.
#[derive(Debug, Deserialize)]
pub struct CartGroupBody {
    pub group: VendorGroups,
}

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CART_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8092".to_string())
}

/// Fetch `/cart`, optionally sending a raw `user_id` cookie value.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a cart response.
pub async fn get_cart(
    client: &Client,
    user_id: Option<&str>,
) -> Result<(reqwest::StatusCode, CartGroupBody), reqwest::Error> {
    let mut request = client.get(format!("{}/cart", base_url()));
    if let Some(user_id) = user_id {
        request = request.header(COOKIE, format!("user_id={user_id}"));
    }
    let response = request.send().await?;
    let status = response.status();
    Ok((status, response.json().await?))
}
