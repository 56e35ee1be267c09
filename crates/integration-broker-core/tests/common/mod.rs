// crates/integration-broker-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared helpers for integration-broker-core tests.
// Purpose: Provide a table-backed knowledge source and a recording logger.
// Dependencies: integration-broker-core
// ============================================================================

//! ## Overview
//! Provides a table-backed [`KnowledgeSource`] and a [`BrokerLog`] that keeps
//! records for assertions.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]
#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;

use integration_broker_core::ApiCriteria;
use integration_broker_core::ApiId;
use integration_broker_core::BrokerLog;
use integration_broker_core::KnowledgeError;
use integration_broker_core::KnowledgeSource;
use integration_broker_core::LogRecord;

// ============================================================================
// SECTION: Table Knowledge Source
// ============================================================================

/// Knowledge source backed by a fixed criteria table.
pub struct TableKnowledge {
    criteria: BTreeMap<ApiId, ApiCriteria>,
    failing: BTreeSet<ApiId>,
    lookups: Mutex<Vec<ApiId>>,
}

impl TableKnowledge {
    /// Builds a table from `(id, performance, reliability, cost)` rows.
    pub fn new(rows: &[(&str, f64, f64, f64)]) -> Self {
        let criteria = rows
            .iter()
            .map(|(id, performance, reliability, cost)| {
                (ApiId::new(*id), ApiCriteria::new(*performance, *reliability, *cost))
            })
            .collect();
        Self {
            criteria,
            failing: BTreeSet::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Marks a candidate whose lookup reports the source as unavailable.
    pub fn failing(mut self, id: &str) -> Self {
        self.failing.insert(ApiId::new(id));
        self
    }

    /// Returns the candidates looked up so far, in call order.
    pub fn lookups(&self) -> Vec<ApiId> {
        self.lookups.lock().expect("lookup lock").clone()
    }
}

impl KnowledgeSource for TableKnowledge {
    fn get_api_criteria(&self, api: &ApiId) -> Result<ApiCriteria, KnowledgeError> {
        self.lookups.lock().expect("lookup lock").push(api.clone());
        if self.failing.contains(api) {
            return Err(KnowledgeError::Unavailable("simulated outage".to_string()));
        }
        self.criteria.get(api).copied().ok_or_else(|| KnowledgeError::UnknownApi(api.clone()))
    }

    fn get_available_apis(&self) -> Result<BTreeSet<ApiId>, KnowledgeError> {
        Ok(self.criteria.keys().cloned().collect())
    }
}

// ============================================================================
// SECTION: Recording Log
// ============================================================================

/// Logger that keeps every record.
#[derive(Default)]
pub struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    /// Returns a snapshot of recorded entries.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("log lock").clone()
    }
}

impl BrokerLog for RecordingLog {
    fn record(&self, record: &LogRecord) {
        self.records.lock().expect("log lock").push(record.clone());
    }
}

// ============================================================================
// SECTION: Candidate Helpers
// ============================================================================

/// Converts string literals into candidate identifiers.
pub fn ids(names: &[&str]) -> Vec<ApiId> {
    names.iter().map(|name| ApiId::new(*name)).collect()
}
