// crates/integration-broker-config/src/lib.rs
// ============================================================================
// Module: Integration Broker Config Library
// Description: Canonical configuration model for the integration broker.
// Purpose: Load, validate, and convert broker configuration.
// Dependencies: integration-broker, integration-broker-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is read from TOML with bounded input handling and strict
//! validation. See [`BrokerConfig`] for the schema.

pub mod config;

pub use config::ApiConfig;
pub use config::BrokerConfig;
pub use config::BrokerSettings;
pub use config::CONFIG_ENV;
pub use config::ConfigError;
pub use config::DEFAULT_CONFIG_FILE;
pub use config::EventsConfig;
pub use config::LoggingConfig;
pub use config::MAX_CONFIG_BYTES;
pub use config::PublisherKind;
pub use config::resolve_config_path;
