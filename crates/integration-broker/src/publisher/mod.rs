// crates/integration-broker/src/publisher/mod.rs
// ============================================================================
// Module: Integration Event Publishers
// Description: Reference event publishers and receipt helpers.
// Purpose: Deliver integration events to callbacks, channels, and logs.
// Dependencies: integration-broker-core, serde
// ============================================================================

//! ## Overview
//! Publishers implement [`integration_broker_core::EventPublisher`] and return
//! a [`PublishReceipt`] for every accepted event.
//! Invariants:
//! - Receipts are returned only after successful delivery.
//! - Receipt sequence numbers are 1-based and monotonic per publisher.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use integration_broker_core::EventKind;
use integration_broker_core::PublishReceipt;
use serde::Serialize;

// ============================================================================
// SECTION: Published Event
// ============================================================================

/// Event record emitted by channel and log publishers.
///
/// # Invariants
/// - `receipt.event` equals `event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedEvent {
    /// Event kind.
    pub event: EventKind,
    /// Event payload.
    pub payload: String,
    /// Publish receipt.
    pub receipt: PublishReceipt,
}

// ============================================================================
// SECTION: Receipt Helpers
// ============================================================================

/// Builds deterministic publish receipts.
#[derive(Debug)]
pub(crate) struct ReceiptFactory {
    /// Publisher name embedded in receipts.
    publisher: String,
    /// Monotonic counter used for deterministic IDs.
    counter: AtomicU64,
}

impl ReceiptFactory {
    /// Creates a receipt factory with the provided publisher name.
    pub(crate) fn new(publisher: impl Into<String>) -> Self {
        Self {
            publisher: publisher.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the next receipt for the provided event.
    pub(crate) fn next(&self, event: EventKind) -> PublishReceipt {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        PublishReceipt {
            publish_id: format!("{}-{}", self.publisher, sequence),
            publisher: self.publisher.clone(),
            event,
            sequence,
        }
    }
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod callback;
pub mod channel;
pub mod log;

pub use callback::CallbackPublisher;
pub use channel::ChannelPublisher;
pub use log::LogPublisher;
