// crates/integration-broker-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures for integration-broker-config tests.
// =============================================================================

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

use integration_broker_config::BrokerConfig;
use integration_broker_config::ConfigError;

/// Catalog with one qualifying and one unavailable API.
pub const SAMPLE_TOML: &str = r#"
[broker]
needs = ["search", "payments"]

[events]
publisher = "log"

[logging]
level = "warn"

[[apis]]
id = "search"
performance_score = 0.95
reliability_score = 0.85
cost = 4.5

[[apis]]
id = "payments-v2"
performance_score = 0.91
reliability_score = 0.99
cost = 12.0
available = true
"#;

/// Parses the sample config.
pub fn sample_config() -> Result<BrokerConfig, ConfigError> {
    BrokerConfig::from_toml_str(SAMPLE_TOML)
}
