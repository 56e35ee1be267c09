// crates/integration-broker/src/publisher/channel.rs
// ============================================================================
// Module: Channel Publisher
// Description: Event publisher backed by a bounded tokio channel.
// Purpose: Hand integration events to an async consumer without blocking.
// Dependencies: integration-broker-core, tokio
// ============================================================================

//! ## Overview
//! [`ChannelPublisher`] uses `try_send`, so a full or closed channel is reported
//! as a delivery failure instead of blocking the synchronous broker.

// ============================================================================
// SECTION: Imports
// ============================================================================

use integration_broker_core::EventKind;
use integration_broker_core::EventPublisher;
use integration_broker_core::PublishError;
use integration_broker_core::PublishReceipt;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::TrySendError;

use crate::publisher::PublishedEvent;
use crate::publisher::ReceiptFactory;

// ============================================================================
// SECTION: Channel Publisher
// ============================================================================

/// Publisher that sends [`PublishedEvent`] values over an mpsc channel.
pub struct ChannelPublisher {
    /// Channel sender.
    sender: Sender<PublishedEvent>,
    /// Receipt builder.
    receipts: ReceiptFactory,
}

impl ChannelPublisher {
    /// Creates a channel publisher named `channel`.
    #[must_use]
    pub fn new(sender: Sender<PublishedEvent>) -> Self {
        Self::with_publisher(sender, "channel")
    }

    /// Creates a channel publisher with a custom publisher name.
    #[must_use]
    pub fn with_publisher(sender: Sender<PublishedEvent>, publisher: impl Into<String>) -> Self {
        Self {
            sender,
            receipts: ReceiptFactory::new(publisher),
        }
    }
}

impl EventPublisher for ChannelPublisher {
    fn publish_event(
        &self,
        event: EventKind,
        payload: &str,
    ) -> Result<PublishReceipt, PublishError> {
        let receipt = self.receipts.next(event);
        let message = PublishedEvent {
            event,
            payload: payload.to_string(),
            receipt: receipt.clone(),
        };
        self.sender.try_send(message).map_err(|err| match err {
            TrySendError::Full(_) => PublishError::DeliveryFailed("channel full".to_string()),
            TrySendError::Closed(_) => PublishError::DeliveryFailed("channel closed".to_string()),
        })?;
        Ok(receipt)
    }
}
