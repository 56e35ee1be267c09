// crates/integration-broker/src/publisher/callback.rs
// ============================================================================
// Module: Callback Publisher
// Description: Event publisher that forwards events to a closure.
// Purpose: Let embedders observe integration events in-process.
// Dependencies: integration-broker-core
// ============================================================================

//! ## Overview
//! [`CallbackPublisher`] hands each event to a caller-supplied handler and
//! issues a receipt when the handler succeeds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use integration_broker_core::EventKind;
use integration_broker_core::EventPublisher;
use integration_broker_core::PublishError;
use integration_broker_core::PublishReceipt;

use crate::publisher::ReceiptFactory;

// ============================================================================
// SECTION: Callback Publisher
// ============================================================================

/// Publisher that invokes a handler for every event.
pub struct CallbackPublisher<F> {
    /// Event handler.
    handler: F,
    /// Receipt builder.
    receipts: ReceiptFactory,
}

impl<F> CallbackPublisher<F>
where
    F: Fn(EventKind, &str) -> Result<(), PublishError> + Send + Sync,
{
    /// Creates a callback publisher named `callback`.
    pub fn new(handler: F) -> Self {
        Self::with_publisher(handler, "callback")
    }

    /// Creates a callback publisher with a custom publisher name.
    pub fn with_publisher(handler: F, publisher: impl Into<String>) -> Self {
        Self {
            handler,
            receipts: ReceiptFactory::new(publisher),
        }
    }
}

impl<F> EventPublisher for CallbackPublisher<F>
where
    F: Fn(EventKind, &str) -> Result<(), PublishError> + Send + Sync,
{
    fn publish_event(
        &self,
        event: EventKind,
        payload: &str,
    ) -> Result<PublishReceipt, PublishError> {
        (self.handler)(event, payload)?;
        Ok(self.receipts.next(event))
    }
}
