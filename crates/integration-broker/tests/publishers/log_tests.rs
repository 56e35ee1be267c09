// crates/integration-broker/tests/publishers/log_tests.rs
// ============================================================================
// Module: LogPublisher Unit Tests
// Description: Tests for the JSON-line event publisher.
// Purpose: Validate record formatting and write error handling.
// Dependencies: integration-broker, integration-broker-core, serde_json
// ============================================================================

//! ## Overview
//! Exercises [`integration_broker::LogPublisher`] behavior and JSON output.

use integration_broker::LogPublisher;
use integration_broker_core::EventKind;
use integration_broker_core::EventPublisher;
use integration_broker_core::PublishError;
use serde_json::Value;

use super::common::FailingWriter;
use super::common::SharedBuffer;

// ============================================================================
// SECTION: Success Path Tests
// ============================================================================

/// Tests log publisher writes a json record.
#[test]
fn log_publisher_writes_json_record() {
    let buffer = SharedBuffer::new();
    let publisher = LogPublisher::new(buffer.clone());

    let receipt = publisher
        .publish_event(EventKind::IntegrationFailure, "integration with X failed")
        .expect("publish");

    let output = buffer.to_string_lossy();
    let record: Value = serde_json::from_str(output.trim_end()).expect("parse json");
    assert_eq!(record["event"], "integration_failure");
    assert_eq!(record["payload"], "integration with X failed");
    assert_eq!(record["receipt"]["publish_id"], receipt.publish_id);
    assert_eq!(record["receipt"]["publisher"], "log");
    assert_eq!(record["receipt"]["sequence"], 1);
}

/// Tests each event is written on its own line.
#[test]
fn log_publisher_writes_one_line_per_event() {
    let buffer = SharedBuffer::new();
    let publisher = LogPublisher::with_publisher(buffer.clone(), "audit");
    publisher.publish_event(EventKind::IntegrationSuccess, "a").expect("publish");
    publisher.publish_event(EventKind::IntegrationSuccess, "b").expect("publish");

    let output = buffer.to_string_lossy();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: Value = serde_json::from_str(lines[1]).expect("parse json");
    assert_eq!(second["receipt"]["publish_id"], "audit-2");
}

// ============================================================================
// SECTION: Error Path Tests
// ============================================================================

/// Tests write failures surface as log write errors.
#[test]
fn log_publisher_reports_write_failure() {
    let publisher = LogPublisher::new(FailingWriter);
    let err = publisher.publish_event(EventKind::IntegrationSuccess, "x").unwrap_err();
    assert!(matches!(err, PublishError::LogWriteFailed(_)));
    assert!(err.to_string().contains("simulated write failure"));
}
