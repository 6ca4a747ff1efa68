//! Cart route handler.
//!
//! `GET /cart` reads the `user_id` cookie, loads that user's cart items and
//! returns them grouped by vendor:
//!
//! ```json
//! { "group": { "11": [{ "vendor_id": 11, "product_name": "p1" }] } }
//! ```

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use vendor_cart_core::{UserIdentifier, VendorGroups, group_by_vendor};

use crate::db;
use crate::error::Result;
use crate::middleware::UserIdCookie;
use crate::state::AppState;

/// Response body of `GET /cart`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartGroupResponse {
    /// Cart items keyed by vendor ID.
    pub group: VendorGroups,
}

/// Show the caller's cart grouped by vendor.
///
/// A missing cookie or one without digits yields `{ "group": {} }` without
/// querying the store. Store failures abort the request.
#[instrument(skip(state, cookie))]
pub async fn show(
    State(state): State<AppState>,
    cookie: UserIdCookie,
) -> Result<Json<CartGroupResponse>> {
    let user = UserIdentifier::normalize(cookie.value());

    state.log().info(&format!("user_id: {}", cookie.value()));

    let items = db::fetch_items(state.store(), &user).await?;
    let group = group_by_vendor(&items);

    Ok(Json(CartGroupResponse { group }))
}
