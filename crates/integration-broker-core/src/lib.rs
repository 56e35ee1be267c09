// crates/integration-broker-core/src/lib.rs
// ============================================================================
// Module: Integration Broker Core Library
// Description: Candidate criteria, collaborator interfaces, and API selection.
// Purpose: Provide the decision logic that picks an external API to integrate.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Integration Broker core defines the data model ([`ApiId`], [`ApiCriteria`]),
//! the collaborator contracts ([`KnowledgeSource`], [`EventPublisher`],
//! [`BrokerLog`]), and the [`DefaultApiSelector`] strategy.
//! Invariants:
//! - Selection is a single synchronous pass in candidate order.
//! - A candidate is accepted iff it is reliable and meets [`PERFORMANCE_THRESHOLD`].
//! - No component holds mutable shared state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::ApiCriteria;
pub use crate::core::ApiId;
pub use crate::core::EventKind;
pub use crate::core::LogLevel;
pub use crate::core::LogRecord;
pub use crate::core::Opportunity;
pub use crate::core::PublishReceipt;
pub use crate::core::RELIABILITY_THRESHOLD;
pub use crate::core::format_candidates;
pub use crate::interfaces::BrokerLog;
pub use crate::interfaces::EventPublisher;
pub use crate::interfaces::KnowledgeError;
pub use crate::interfaces::KnowledgeSource;
pub use crate::interfaces::NoopLog;
pub use crate::interfaces::PublishError;
pub use crate::runtime::ApiSelectionStrategy;
pub use crate::runtime::DefaultApiSelector;
pub use crate::runtime::PERFORMANCE_THRESHOLD;
pub use crate::runtime::SelectionError;
