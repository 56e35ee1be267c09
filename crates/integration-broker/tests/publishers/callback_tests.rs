// crates/integration-broker/tests/publishers/callback_tests.rs
// ============================================================================
// Module: CallbackPublisher Unit Tests
// Description: Tests for the closure-backed event publisher.
// Purpose: Validate handler invocation, receipts, and error propagation.
// Dependencies: integration-broker, integration-broker-core
// ============================================================================

//! ## Overview
//! Exercises [`integration_broker::CallbackPublisher`] behavior.

use integration_broker::CallbackPublisher;
use integration_broker_core::EventKind;
use integration_broker_core::EventPublisher;
use integration_broker_core::PublishError;

use super::common::capturing_publisher;
use super::common::rejecting_publisher;

// ============================================================================
// SECTION: Success Path Tests
// ============================================================================

/// Tests callback publisher forwards event and payload.
#[test]
fn callback_publisher_forwards_event_and_payload() {
    let (publisher, events) = capturing_publisher();
    publisher.publish_event(EventKind::IntegrationSuccess, "payments-v2").expect("publish");
    let events = events.lock().unwrap().clone();
    assert_eq!(events, vec![(EventKind::IntegrationSuccess, "payments-v2".to_string())]);
}

/// Tests callback publisher receipts use the default name.
#[test]
fn callback_publisher_receipts_are_sequential() {
    let (publisher, _) = capturing_publisher();
    let first = publisher.publish_event(EventKind::IntegrationSuccess, "a").expect("publish");
    let second = publisher.publish_event(EventKind::IntegrationFailure, "b").expect("publish");
    assert_eq!(first.publish_id, "callback-1");
    assert_eq!(second.publish_id, "callback-2");
    assert_eq!(second.sequence, 2);
    assert_eq!(second.event, EventKind::IntegrationFailure);
    assert_eq!(second.publisher, "callback");
}

/// Tests callback publisher uses a custom publisher name.
#[test]
fn callback_publisher_with_custom_name() {
    let handler = |_: EventKind, _: &str| Ok::<(), PublishError>(());
    let publisher = CallbackPublisher::with_publisher(handler, "observer");
    let receipt = publisher.publish_event(EventKind::IntegrationSuccess, "x").expect("publish");
    assert_eq!(receipt.publish_id, "observer-1");
}

// ============================================================================
// SECTION: Error Path Tests
// ============================================================================

/// Tests handler errors propagate unchanged.
#[test]
fn callback_publisher_propagates_handler_error() {
    let err = rejecting_publisher().publish_event(EventKind::IntegrationFailure, "x").unwrap_err();
    assert!(matches!(
        err,
        PublishError::DeliveryFailed(ref message) if message == "subscriber offline"
    ));
}
