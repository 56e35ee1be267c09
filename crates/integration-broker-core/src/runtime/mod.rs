// crates/integration-broker-core/src/runtime/mod.rs
// ============================================================================
// Module: Integration Broker Runtime
// Description: Decision logic evaluated against collaborator data.
// Purpose: Expose selection strategies.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Runtime logic that consumes interface implementations.

pub mod selection;

pub use selection::ApiSelectionStrategy;
pub use selection::DefaultApiSelector;
pub use selection::PERFORMANCE_THRESHOLD;
pub use selection::SelectionError;
