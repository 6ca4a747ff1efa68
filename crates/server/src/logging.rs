//! Request-level log sink handed to route handlers.
//!
//! Handlers log through an [`InfoLog`] taken from application state instead of
//! calling a global logger, so tests can install their own sink and capture
//! exactly what a request wrote.

/// Fire-and-forget informational log sink.
pub trait InfoLog: Send + Sync {
    /// Record one informational message.
    fn info(&self, message: &str);
}

/// Production sink: forwards to `tracing` at `INFO`, inside the request span.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl InfoLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "vendor_cart_server::cart", "{message}");
    }
}
