// crates/integration-broker/src/lib.rs
// ============================================================================
// Module: Integration Broker Library
// Description: Orchestrator, reference publishers, loggers, and knowledge base.
// Purpose: Run the simulated integration flow around the core selector.
// Dependencies: integration-broker-core, serde_json, thiserror, tokio
// ============================================================================

//! ## Overview
//! Integration Broker provides the [`IntegrationBroker`] orchestrator plus
//! ready-made [`integration_broker_core::EventPublisher`] implementations
//! ([`CallbackPublisher`], [`ChannelPublisher`], [`LogPublisher`]), injectable
//! loggers ([`JsonLineLog`], [`MemoryLog`]), and an [`InMemoryKnowledgeBase`].
//! Invariants:
//! - Runs terminate gracefully; no error escapes [`IntegrationBroker::run`].
//! - Publishers return receipts only on successful delivery.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod broker;
pub mod knowledge;
pub mod logging;
pub mod publisher;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use broker::BrokerError;
pub use broker::DEFAULT_NEEDS;
pub use broker::IntegrationBroker;
pub use broker::IntegrationBrokerBuilder;
pub use broker::IntegrationError;
pub use broker::RunOutcome;
pub use knowledge::InMemoryKnowledgeBase;
pub use logging::JsonLineLog;
pub use logging::MemoryLog;
pub use publisher::CallbackPublisher;
pub use publisher::ChannelPublisher;
pub use publisher::LogPublisher;
pub use publisher::PublishedEvent;
