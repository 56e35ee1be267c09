// crates/integration-broker/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared helpers for integration-broker tests.
// Purpose: Provide knowledge fixtures, writers, and event capture helpers.
// Dependencies: integration-broker, integration-broker-core
// ============================================================================

//! ## Overview
//! Provides shared fixtures for broker and publisher integration tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]
#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use integration_broker::CallbackPublisher;
use integration_broker::InMemoryKnowledgeBase;
use integration_broker_core::ApiCriteria;
use integration_broker_core::EventKind;
use integration_broker_core::PublishError;

// ============================================================================
// SECTION: Knowledge Fixtures
// ============================================================================

/// Criteria that pass both selection thresholds.
pub const fn strong() -> ApiCriteria {
    ApiCriteria::new(0.95, 0.9, 2.0)
}

/// Criteria that fail the reliability threshold.
pub const fn flaky() -> ApiCriteria {
    ApiCriteria::new(0.99, 0.5, 1.0)
}

/// Knowledge base where `Feature A` qualifies and only `payments-v2` is available.
pub fn feature_catalog() -> InMemoryKnowledgeBase {
    InMemoryKnowledgeBase::new()
        .with_api("Feature A", strong())
        .with_api("Feature B", flaky())
        .with_api("payments-v2", strong())
        .with_available("payments-v2")
}

// ============================================================================
// SECTION: Event Capture
// ============================================================================

/// Captured `(event, payload)` pairs.
pub type EventLog = Arc<Mutex<Vec<(EventKind, String)>>>;

/// Boxed publisher callback.
pub type Handler = Box<dyn Fn(EventKind, &str) -> Result<(), PublishError> + Send + Sync>;

/// Returns a callback publisher that records every event.
pub fn capturing_publisher() -> (CallbackPublisher<Handler>, EventLog) {
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let handler: Handler = Box::new(move |event, payload| {
        sink.lock().expect("event lock").push((event, payload.to_string()));
        Ok(())
    });
    (CallbackPublisher::new(handler), events)
}

/// Returns a callback publisher that rejects every event.
pub fn rejecting_publisher() -> CallbackPublisher<Handler> {
    let handler: Handler =
        Box::new(|_, _| Err(PublishError::DeliveryFailed("subscriber offline".to_string())));
    CallbackPublisher::new(handler)
}

// ============================================================================
// SECTION: Shared Buffer for Write Testing
// ============================================================================

/// A thread-safe buffer for testing Write implementations.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates a new empty shared buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contents as a string.
    pub fn to_string_lossy(&self) -> String {
        let guard = self.inner.lock().expect("buffer lock");
        String::from_utf8_lossy(&guard).to_string()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect("buffer lock").is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Failing Writer for Error Testing
// ============================================================================

/// A writer that always fails, for testing error paths.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("simulated write failure"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
