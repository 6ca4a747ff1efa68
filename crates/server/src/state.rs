//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::CartStore;
use crate::logging::InfoLog;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is the only way handlers
/// reach the cart store and the log sink; both are injected at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn CartStore>,
    log: Arc<dyn InfoLog>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `store` - Cart item store (a `PgCartStore` in production)
    /// * `log` - Sink for per-request informational lines
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>, log: Arc<dyn InfoLog>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, log }),
        }
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn store(&self) -> &dyn CartStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the request log sink.
    #[must_use]
    pub fn log(&self) -> &dyn InfoLog {
        self.inner.log.as_ref()
    }
}
