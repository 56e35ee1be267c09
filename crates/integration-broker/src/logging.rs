// crates/integration-broker/src/logging.rs
// ============================================================================
// Module: Reference Loggers
// Description: JSON-line and in-memory implementations of the broker log.
// Purpose: Provide injectable loggers for binaries and tests.
// Dependencies: integration-broker-core, serde, serde_json, time
// ============================================================================

//! ## Overview
//! [`JsonLineLog`] writes each [`LogRecord`] as one JSON object per line,
//! stamped with the UTC write time in RFC 3339 form.
//! [`MemoryLog`] keeps records for later inspection. Neither panics when its
//! backing store fails; [`JsonLineLog`] counts dropped records instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use integration_broker_core::BrokerLog;
use integration_broker_core::LogLevel;
use integration_broker_core::LogRecord;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: JSON Line Log
// ============================================================================

/// Serialized shape of one log line.
#[derive(Serialize)]
struct LogLine<'a> {
    /// UTC write time (RFC 3339).
    timestamp: String,
    /// Record severity.
    level: LogLevel,
    /// Emitting component label.
    component: &'a str,
    /// Human-readable message.
    message: &'a str,
}

/// Logger writing JSON lines to a writer.
///
/// Lines carry `timestamp`, `level`, `component`, and `message` fields.
///
/// # Invariants
/// - Records below `min_level` are skipped and not counted as dropped.
pub struct JsonLineLog<W> {
    /// Output writer.
    writer: Mutex<W>,
    /// Lowest level that is written.
    min_level: LogLevel,
    /// Records lost to write failures.
    dropped: AtomicU64,
}

impl<W: Write + Send> JsonLineLog<W> {
    /// Creates a logger that writes every level.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_level: LogLevel::Info,
            dropped: AtomicU64::new(0),
        }
    }

    /// Sets the lowest level that is written.
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Returns the number of records lost to write failures.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Serializes and writes one record.
    fn write_record(&self, record: &LogRecord) -> std::io::Result<()> {
        let timestamp =
            OffsetDateTime::now_utc().format(&Rfc3339).map_err(std::io::Error::other)?;
        let entry = LogLine {
            timestamp,
            level: record.level,
            component: record.component,
            message: &record.message,
        };
        let mut line = serde_json::to_vec(&entry).map_err(std::io::Error::other)?;
        line.push(b'\n');
        let mut writer =
            self.writer.lock().map_err(|_| std::io::Error::other("log writer lock poisoned"))?;
        writer.write_all(&line)?;
        writer.flush()
    }
}

impl<W: Write + Send> BrokerLog for JsonLineLog<W> {
    fn record(&self, record: &LogRecord) {
        if record.level < self.min_level {
            return;
        }
        if self.write_record(record).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}

// ============================================================================
// SECTION: Memory Log
// ============================================================================

/// Logger that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    /// Recorded entries in arrival order.
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    /// Creates an empty memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded entries.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().map(|records| records.clone()).unwrap_or_default()
    }

    /// Returns the messages recorded at `level`.
    #[must_use]
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .map(|record| record.message)
            .collect()
    }
}

impl BrokerLog for MemoryLog {
    fn record(&self, record: &LogRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record.clone());
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
