// crates/integration-broker-core/src/core/events.rs
// ============================================================================
// Module: Integration Events
// Description: Event labels and publish receipts for integration outcomes.
// Purpose: Name the events the broker publishes and describe delivery receipts.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The broker publishes exactly two event kinds. Labels are part of the
//! external contract and must not change.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Event Kind
// ============================================================================

/// Integration event published by the broker.
///
/// # Invariants
/// - Variants and their labels are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Integration with the selected API succeeded.
    IntegrationSuccess,
    /// Integration with the selected API failed.
    IntegrationFailure,
}

impl EventKind {
    /// Returns the stable event label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IntegrationSuccess => "integration_success",
            Self::IntegrationFailure => "integration_failure",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Publish Receipt
// ============================================================================

/// Receipt returned by a publisher after accepting an event.
///
/// # Invariants
/// - `sequence` is 1-based and monotonic per publisher instance.
/// - `publish_id` is `<publisher>-<sequence>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    /// Publisher-scoped identifier.
    pub publish_id: String,
    /// Publisher name.
    pub publisher: String,
    /// Event that was published.
    pub event: EventKind,
    /// Logical sequence number.
    pub sequence: u64,
}
