// crates/integration-broker-config/src/config.rs
// ============================================================================
// Module: Integration Broker Configuration
// Description: TOML configuration model, bounded loading, and validation.
// Purpose: Describe ecosystem needs, the API catalog, events, and logging.
// Dependencies: integration-broker, integration-broker-core, serde, toml
// ============================================================================

//! ## Overview
//! [`BrokerConfig`] is loaded from a TOML file with strict input bounds and
//! validated before use. Unknown fields are rejected in every section.
//! Invariants:
//! - Loaded configs have already passed [`BrokerConfig::validate`].
//! - Scores are finite and within `[0, 1]`; costs are finite and non-negative.
//! - API identifiers and needs are unique and carry no surrounding whitespace.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use integration_broker::DEFAULT_NEEDS;
use integration_broker::InMemoryKnowledgeBase;
use integration_broker_core::ApiCriteria;
use integration_broker_core::LogLevel;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "INTEGRATION_BROKER_CONFIG";
/// Config file used when neither a path nor [`CONFIG_ENV`] is given.
pub const DEFAULT_CONFIG_FILE: &str = "integration-broker.toml";
/// Maximum config file size in bytes.
pub const MAX_CONFIG_BYTES: u64 = 1024 * 1024;
/// Maximum total config path length in bytes.
pub const MAX_PATH_BYTES: usize = 4096;
/// Maximum length of a single path component in bytes.
pub const MAX_PATH_COMPONENT_BYTES: usize = 255;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// Config file is not valid TOML for the schema.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config input or contents are invalid.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrokerConfig {
    /// Orchestrator settings.
    #[serde(default)]
    pub broker: BrokerSettings,
    /// Event publishing settings.
    #[serde(default)]
    pub events: EventsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Simulated API catalog.
    #[serde(default)]
    pub apis: Vec<ApiConfig>,
}

/// Orchestrator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrokerSettings {
    /// Ecosystem needs checked during opportunity detection, in order.
    #[serde(default = "default_needs")]
    pub needs: Vec<String>,
}

impl Default for BrokerSettings {
    fn default() -> Self {
        Self {
            needs: default_needs(),
        }
    }
}

/// Publisher used for integration events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublisherKind {
    /// JSON lines on standard output.
    #[default]
    Log,
    /// Events are discarded.
    None,
}

/// Event publishing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsConfig {
    /// Publisher kind.
    #[serde(default)]
    pub publisher: PublisherKind,
}

/// Logging settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Lowest level written.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Catalog entry for one simulated API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API identifier.
    pub id: String,
    /// Performance score in `[0, 1]`.
    pub performance_score: f64,
    /// Reliability score in `[0, 1]`.
    pub reliability_score: f64,
    /// Non-negative cost.
    pub cost: f64,
    /// Whether the API is available for integration.
    #[serde(default)]
    pub available: bool,
}

impl ApiConfig {
    /// Returns the criteria described by this entry.
    #[must_use]
    pub const fn criteria(&self) -> ApiCriteria {
        ApiCriteria::new(self.performance_score, self.reliability_score, self.cost)
    }
}

/// Returns the default needs list.
fn default_needs() -> Vec<String> {
    DEFAULT_NEEDS.iter().map(ToString::to_string).collect()
}

/// Returns the default log level.
const fn default_log_level() -> LogLevel {
    LogLevel::Info
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl BrokerConfig {
    /// Loads and validates a config file.
    ///
    /// With `None`, the path comes from [`CONFIG_ENV`] or falls back to
    /// [`DEFAULT_CONFIG_FILE`]; see [`resolve_config_path`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path, file, or contents are invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = resolve_path(path);
        validate_path(&path)?;
        let bytes = read_bounded(&path)?;
        let content = String::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates config contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates config contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_needs(&self.broker.needs)?;
        let mut seen = BTreeSet::new();
        for api in &self.apis {
            if api.id.trim().is_empty() {
                return Err(invalid("apis.id must not be empty"));
            }
            if api.id.trim() != api.id {
                return Err(invalid(format!(
                    "apis.id must not have surrounding whitespace: '{}'",
                    api.id
                )));
            }
            if !seen.insert(api.id.as_str()) {
                return Err(invalid(format!("duplicate api id: {}", api.id)));
            }
            validate_score(&api.id, "performance_score", api.performance_score)?;
            validate_score(&api.id, "reliability_score", api.reliability_score)?;
            if !api.cost.is_finite() || api.cost < 0.0 {
                return Err(invalid(format!(
                    "apis[{}].cost must be finite and non-negative",
                    api.id
                )));
            }
        }
        Ok(())
    }

    /// Builds a knowledge base from the API catalog.
    #[must_use]
    pub fn knowledge_base(&self) -> InMemoryKnowledgeBase {
        let mut knowledge = InMemoryKnowledgeBase::new();
        for api in &self.apis {
            knowledge.insert_api(api.id.as_str(), api.criteria());
            if api.available {
                knowledge.mark_available(api.id.as_str());
            }
        }
        knowledge
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds an [`ConfigError::Invalid`] error.
fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

/// Resolves the config path from the argument, environment, or default.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    resolve_config_path(path, std::env::var_os(CONFIG_ENV))
}

/// Picks the config path: explicit path first, then a non-empty value of
/// [`CONFIG_ENV`], then [`DEFAULT_CONFIG_FILE`].
#[must_use]
pub fn resolve_config_path(path: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    env_value
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
}

/// Rejects overlong paths and path components.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_PATH_BYTES {
        return Err(invalid("config path exceeds max length"));
    }
    if path.components().any(|component| component.as_os_str().len() > MAX_PATH_COMPONENT_BYTES) {
        return Err(invalid("config path component too long"));
    }
    Ok(())
}

/// Reads at most [`MAX_CONFIG_BYTES`] from the file.
fn read_bounded(path: &Path) -> Result<Vec<u8>, ConfigError> {
    let file = File::open(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    let mut bytes = Vec::new();
    file.take(MAX_CONFIG_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|err| ConfigError::Io(err.to_string()))?;
    if u64::try_from(bytes.len()).unwrap_or(u64::MAX) > MAX_CONFIG_BYTES {
        return Err(invalid("config file exceeds size limit"));
    }
    Ok(bytes)
}

/// Validates the needs list.
fn validate_needs(needs: &[String]) -> Result<(), ConfigError> {
    if needs.is_empty() {
        return Err(invalid("broker.needs must not be empty"));
    }
    let mut seen = BTreeSet::new();
    for need in needs {
        if need.trim().is_empty() {
            return Err(invalid("broker.needs entries must not be empty"));
        }
        if need.trim() != need {
            return Err(invalid(format!(
                "broker.needs entries must not have surrounding whitespace: '{need}'"
            )));
        }
        if !seen.insert(need.as_str()) {
            return Err(invalid(format!("duplicate need: {need}")));
        }
    }
    Ok(())
}

/// Validates a score is finite and within `[0, 1]`.
fn validate_score(id: &str, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0 ..= 1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("apis[{id}].{field} must be within [0, 1]")))
    }
}
