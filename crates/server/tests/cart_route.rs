//! Tests for `GET /cart` and the health routes, driven through the full router
//! with an in-memory cart store.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderValue, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use vendor_cart_core::{CartItem, UserIdentifier, VendorId};
use vendor_cart_server::db::{CartStore, RepositoryError};
use vendor_cart_server::logging::InfoLog;
use vendor_cart_server::middleware::{MAX_REQUEST_ID_LEN, REQUEST_ID_HEADER};
use vendor_cart_server::state::AppState;

/// Store with fixed carts per user that records every lookup.
#[derive(Default)]
struct FakeStore {
    carts: HashMap<String, Vec<CartItem>>,
    queried: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeStore {
    fn with_cart(mut self, user: &str, items: Vec<CartItem>) -> Self {
        self.carts.insert(user.to_string(), items);
        self
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl CartStore for FakeStore {
    async fn items_for_user(&self, user: &UserIdentifier) -> Result<Vec<CartItem>, RepositoryError> {
        self.queried.lock().unwrap().push(user.to_string());
        if self.fail {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.carts.get(user.as_str()).cloned().unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        if self.fail {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// Log sink that keeps every message; clones share the same lines.
#[derive(Clone, Default)]
struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl InfoLog for MemoryLog {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_owned());
    }
}

fn item(vendor: Option<i32>, name: &str) -> CartItem {
    CartItem::new(vendor.map(VendorId::new)).with_field("product_name", name)
}

fn three_item_cart() -> Vec<CartItem> {
    vec![
        item(Some(11), "p1"),
        item(Some(22), "p2"),
        item(Some(11), "p3"),
    ]
}

struct Harness {
    store: Arc<FakeStore>,
    log: MemoryLog,
    state: AppState,
}

impl Harness {
    fn new(store: FakeStore) -> Self {
        let store = Arc::new(store);
        let log = MemoryLog::default();
        let state = AppState::new(store.clone(), Arc::new(log.clone()));
        Self { store, log, state }
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let response = vendor_cart_server::app(self.state.clone())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(&self, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
        let (status, body) = self.get(uri, cookie).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

#[tokio::test]
async fn test_empty_cookie_returns_empty_group() {
    let harness = Harness::new(FakeStore::default().with_cart("", three_item_cart()));

    let (status, body) = harness.get_json("/cart", Some("user_id=")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "group": {} }));
    assert!(harness.store.queried().is_empty());
}

#[tokio::test]
async fn test_missing_cookie_returns_empty_group() {
    let harness = Harness::new(FakeStore::default());

    let (status, body) = harness.get_json("/cart", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "group": {} }));
    assert!(harness.store.queried().is_empty());
}

#[tokio::test]
async fn test_cookie_without_digits_returns_empty_group() {
    let harness = Harness::new(FakeStore::default());

    let (_, body) = harness.get_json("/cart", Some("user_id=guest")).await;

    assert_eq!(body, json!({ "group": {} }));
    assert!(harness.store.queried().is_empty());
}

#[tokio::test]
async fn test_valid_cookie_returns_grouped_items() {
    let harness = Harness::new(FakeStore::default().with_cart("1234", three_item_cart()));

    let (status, body) = harness.get_json("/cart", Some("user_id=1234")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "group": {
                "11": [
                    { "vendor_id": 11, "product_name": "p1" },
                    { "vendor_id": 11, "product_name": "p3" }
                ],
                "22": [
                    { "vendor_id": 22, "product_name": "p2" }
                ]
            }
        })
    );
    assert_eq!(harness.store.queried(), vec!["1234".to_string()]);
}

#[tokio::test]
async fn test_prefixed_cookie_is_normalized_before_lookup() {
    let harness = Harness::new(FakeStore::default().with_cart("1234", three_item_cart()));

    let (_, body) = harness
        .get_json("/cart", Some("theme=dark; user_id=ox1234"))
        .await;

    assert_eq!(harness.store.queried(), vec!["1234".to_string()]);
    assert_eq!(body["group"]["11"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_items_without_vendor_are_left_out() {
    let cart = vec![
        item(Some(11), "p1"),
        item(None, "p2"),
        item(Some(0), "p3"),
    ];
    let harness = Harness::new(FakeStore::default().with_cart("7", cart));

    let (_, body) = harness.get_json("/cart", Some("user_id=7")).await;

    assert_eq!(
        body,
        json!({ "group": { "11": [{ "vendor_id": 11, "product_name": "p1" }] } })
    );
}

#[tokio::test]
async fn test_pass_through_fields_survive() {
    let cart = vec![
        CartItem::new(Some(VendorId::new(5)))
            .with_field("id", 42)
            .with_field("product_name", "tea")
            .with_field("quantity", 3),
    ];
    let harness = Harness::new(FakeStore::default().with_cart("9", cart));

    let (_, body) = harness.get_json("/cart", Some("user_id=9")).await;

    assert_eq!(
        body["group"]["5"][0],
        json!({ "id": 42, "vendor_id": 5, "product_name": "tea", "quantity": 3 })
    );
}

#[tokio::test]
async fn test_raw_cookie_value_is_logged() {
    let harness = Harness::new(FakeStore::default());

    harness.get("/cart", Some("user_id=ox1234")).await;

    assert_eq!(harness.log.lines(), vec!["user_id: ox1234".to_string()]);
}

#[tokio::test]
async fn test_non_utf8_cookie_does_not_hide_user_id() {
    let harness =
        Harness::new(FakeStore::default().with_cart("1234", vec![item(Some(11), "p1")]));

    let response = vendor_cart_server::app(harness.state.clone())
        .oneshot(
            Request::builder()
                .uri("/cart")
                .header(
                    header::COOKIE,
                    HeaderValue::from_bytes(b"user_id=1234; name=caf\xe9").unwrap(),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({ "group": { "11": [{ "vendor_id": 11, "product_name": "p1" }] } })
    );
    assert_eq!(harness.store.queried(), vec!["1234".to_string()]);
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let harness = Harness::new(FakeStore::failing());

    let (status, body) = harness.get("/cart", Some("user_id=1234")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, b"Internal server error");
    // The log line is written before the store is queried
    assert_eq!(harness.log.lines().len(), 1);
}

#[tokio::test]
async fn test_store_failure_not_reached_for_empty_identifier() {
    let harness = Harness::new(FakeStore::failing());

    let (status, body) = harness.get_json("/cart", Some("user_id=")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "group": {} }));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let harness = Harness::new(FakeStore::default());

    let response = vendor_cart_server::app(harness.state.clone())
        .oneshot(
            Request::builder()
                .uri("/cart")
                .header(REQUEST_ID_HEADER, "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let harness = Harness::new(FakeStore::default());

    let response = vendor_cart_server::app(harness.state.clone())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_oversized_request_id_is_replaced() {
    let harness = Harness::new(FakeStore::default());
    let oversized = "x".repeat(MAX_REQUEST_ID_LEN + 1);

    let response = vendor_cart_server::app(harness.state.clone())
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(REQUEST_ID_HEADER, oversized.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_ne!(id, oversized);
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_health() {
    let harness = Harness::new(FakeStore::default());

    let (status, body) = harness.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_readiness_reflects_store() {
    let healthy = Harness::new(FakeStore::default());
    let broken = Harness::new(FakeStore::failing());

    assert_eq!(healthy.get("/health/ready", None).await.0, StatusCode::OK);
    assert_eq!(
        broken.get("/health/ready", None).await.0,
        StatusCode::SERVICE_UNAVAILABLE
    );
}
