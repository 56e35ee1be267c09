// crates/integration-broker-core/src/core/mod.rs
// ============================================================================
// Module: Integration Broker Core Types
// Description: Identifiers, criteria, events, and log records.
// Purpose: Group the plain data types shared by every broker crate.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Plain data types with no behavior beyond small predicates.

pub mod criteria;
pub mod events;
pub mod identifiers;
pub mod logging;

pub use criteria::ApiCriteria;
pub use criteria::RELIABILITY_THRESHOLD;
pub use events::EventKind;
pub use events::PublishReceipt;
pub use identifiers::ApiId;
pub use identifiers::Opportunity;
pub use identifiers::format_candidates;
pub use logging::LogLevel;
pub use logging::LogRecord;
