// crates/integration-broker-core/src/core/logging.rs
// ============================================================================
// Module: Log Records
// Description: Log levels and records emitted by broker components.
// Purpose: Give injected loggers a stable record shape.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Components never reach for a global logger. They build [`LogRecord`] values
//! and hand them to an injected [`crate::BrokerLog`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Log Level
// ============================================================================

/// Severity of a log record.
///
/// # Invariants
/// - Variants are stable for log labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Informational progress.
    Info,
    /// Recoverable problem.
    Warn,
    /// Failed operation.
    Error,
}

// ============================================================================
// SECTION: Log Record
// ============================================================================

/// A single log line emitted by a broker component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Record severity.
    pub level: LogLevel,
    /// Emitting component label.
    pub component: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl LogRecord {
    /// Creates an info record.
    #[must_use]
    pub fn info(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, component, message)
    }

    /// Creates a warning record.
    #[must_use]
    pub fn warn(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, component, message)
    }

    /// Creates an error record.
    #[must_use]
    pub fn error(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, component, message)
    }

    /// Creates a record with an explicit level.
    #[must_use]
    pub fn new(level: LogLevel, component: &'static str, message: impl Into<String>) -> Self {
        Self {
            level,
            component,
            message: message.into(),
        }
    }
}
