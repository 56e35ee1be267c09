// crates/integration-broker/src/publisher/log.rs
// ============================================================================
// Module: Log Publisher
// Description: Event publisher that writes JSON lines to a writer.
// Purpose: Record integration events for offline inspection.
// Dependencies: integration-broker-core, serde_json
// ============================================================================

//! ## Overview
//! [`LogPublisher`] serializes each event as a single JSON object followed by a
//! newline. Write failures are returned as [`PublishError::LogWriteFailed`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use integration_broker_core::EventKind;
use integration_broker_core::EventPublisher;
use integration_broker_core::PublishError;
use integration_broker_core::PublishReceipt;

use crate::publisher::PublishedEvent;
use crate::publisher::ReceiptFactory;

// ============================================================================
// SECTION: Log Publisher
// ============================================================================

/// Publisher that appends JSON event records to a writer.
pub struct LogPublisher<W> {
    /// Output writer.
    writer: Mutex<W>,
    /// Receipt builder.
    receipts: ReceiptFactory,
}

impl<W: Write + Send> LogPublisher<W> {
    /// Creates a log publisher named `log`.
    pub fn new(writer: W) -> Self {
        Self::with_publisher(writer, "log")
    }

    /// Creates a log publisher with a custom publisher name.
    pub fn with_publisher(writer: W, publisher: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            receipts: ReceiptFactory::new(publisher),
        }
    }
}

impl<W: Write + Send> EventPublisher for LogPublisher<W> {
    fn publish_event(
        &self,
        event: EventKind,
        payload: &str,
    ) -> Result<PublishReceipt, PublishError> {
        let receipt = self.receipts.next(event);
        let record = PublishedEvent {
            event,
            payload: payload.to_string(),
            receipt: receipt.clone(),
        };
        let mut line = serde_json::to_vec(&record)
            .map_err(|err| PublishError::LogWriteFailed(err.to_string()))?;
        line.push(b'\n');
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| PublishError::LogWriteFailed("writer lock poisoned".to_string()))?;
        writer.write_all(&line).map_err(|err| PublishError::LogWriteFailed(err.to_string()))?;
        writer.flush().map_err(|err| PublishError::LogWriteFailed(err.to_string()))?;
        Ok(receipt)
    }
}
