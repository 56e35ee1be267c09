// crates/integration-broker-core/src/interfaces/mod.rs
// ============================================================================
// Module: Integration Broker Interfaces
// Description: Collaborator contracts for knowledge, event publishing, and logging.
// Purpose: Define the capability surfaces the selector and broker depend on.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces describe how the broker reaches external systems without
//! embedding backend-specific details. All collaborators are synchronous and
//! `Send + Sync` so they can be shared behind [`std::sync::Arc`].
//! Invariants:
//! - Knowledge sources return fresh [`ApiCriteria`] per lookup.
//! - Unknown candidates are reported as [`KnowledgeError::UnknownApi`], never as
//!   default criteria.
//! - Logging is infallible from the caller's view.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::ApiCriteria;
use crate::core::ApiId;
use crate::core::EventKind;
use crate::core::LogRecord;
use crate::core::PublishReceipt;

// ============================================================================
// SECTION: Knowledge Source
// ============================================================================

/// Knowledge source errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeError {
    /// The knowledge source has no criteria for the candidate.
    #[error("unknown api: {0}")]
    UnknownApi(ApiId),
    /// The knowledge source could not answer the query.
    #[error("knowledge source unavailable: {0}")]
    Unavailable(String),
}

/// Source of criteria and availability data for candidate APIs.
pub trait KnowledgeSource: Send + Sync {
    /// Returns the criteria for a candidate.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::UnknownApi`] when the candidate is not known and
    /// [`KnowledgeError::Unavailable`] when the lookup itself fails.
    fn get_api_criteria(&self, api: &ApiId) -> Result<ApiCriteria, KnowledgeError>;

    /// Returns the set of APIs currently available for integration.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::Unavailable`] when availability cannot be read.
    fn get_available_apis(&self) -> Result<BTreeSet<ApiId>, KnowledgeError>;
}

// ============================================================================
// SECTION: Event Publisher
// ============================================================================

/// Errors emitted by event publishers.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Event delivery failed.
    #[error("event delivery failed: {0}")]
    DeliveryFailed(String),
    /// Log publisher failed to write.
    #[error("event log write failed: {0}")]
    LogWriteFailed(String),
}

/// Receives integration events.
pub trait EventPublisher: Send + Sync {
    /// Publishes an event with a free-form payload.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] when the event could not be delivered.
    fn publish_event(&self, event: EventKind, payload: &str)
    -> Result<PublishReceipt, PublishError>;
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Injected logging capability.
pub trait BrokerLog: Send + Sync {
    /// Records a log line. Implementations must not panic on sink failure.
    fn record(&self, record: &LogRecord);
}

/// Logger that discards every record.
///
/// # Invariants
/// - Records are intentionally discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl BrokerLog for NoopLog {
    fn record(&self, _record: &LogRecord) {}
}
