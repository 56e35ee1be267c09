// crates/integration-broker/tests/publishers/channel_tests.rs
// ============================================================================
// Module: ChannelPublisher Unit Tests
// Description: Tests for the channel-backed event publisher.
// Purpose: Validate message delivery, receipts, and backpressure errors.
// Dependencies: integration-broker, integration-broker-core, tokio
// ============================================================================

//! ## Overview
//! Exercises [`integration_broker::ChannelPublisher`] behavior.

use integration_broker::ChannelPublisher;
use integration_broker::PublishedEvent;
use integration_broker_core::EventKind;
use integration_broker_core::EventPublisher;
use integration_broker_core::PublishError;

// ============================================================================
// SECTION: Success Path Tests
// ============================================================================

/// Tests channel publisher sends message to channel.
#[test]
fn channel_publisher_sends_message() {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<PublishedEvent>(1);
    let publisher = ChannelPublisher::new(tx);

    let receipt =
        publisher.publish_event(EventKind::IntegrationSuccess, "payments-v2").expect("publish");
    let message = rx.try_recv().expect("recv");

    assert_eq!(message.event, EventKind::IntegrationSuccess);
    assert_eq!(message.payload, "payments-v2");
    assert_eq!(message.receipt, receipt);
    assert_eq!(receipt.publish_id, "channel-1");
}

/// Tests channel publisher with a custom name.
#[test]
fn channel_publisher_with_custom_name() {
    let (tx, _rx) = tokio::sync::mpsc::channel::<PublishedEvent>(4);
    let publisher = ChannelPublisher::with_publisher(tx, "bus");
    let receipt = publisher.publish_event(EventKind::IntegrationFailure, "x").expect("publish");
    assert_eq!(receipt.publish_id, "bus-1");
    assert_eq!(receipt.publisher, "bus");
}

// ============================================================================
// SECTION: Error Path Tests
// ============================================================================

/// Tests a full channel is a delivery failure.
#[test]
fn channel_publisher_reports_full_channel() {
    let (tx, _rx) = tokio::sync::mpsc::channel::<PublishedEvent>(1);
    let publisher = ChannelPublisher::new(tx);
    publisher.publish_event(EventKind::IntegrationSuccess, "first").expect("publish");
    let err = publisher.publish_event(EventKind::IntegrationSuccess, "second").unwrap_err();
    assert_eq!(err.to_string(), "event delivery failed: channel full");
}

/// Tests a closed channel is a delivery failure.
#[test]
fn channel_publisher_reports_closed_channel() {
    let (tx, rx) = tokio::sync::mpsc::channel::<PublishedEvent>(1);
    drop(rx);
    let publisher = ChannelPublisher::new(tx);
    let err = publisher.publish_event(EventKind::IntegrationFailure, "x").unwrap_err();
    assert!(matches!(
        err,
        PublishError::DeliveryFailed(ref message) if message == "channel closed"
    ));
}
