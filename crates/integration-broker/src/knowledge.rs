// crates/integration-broker/src/knowledge.rs
// ============================================================================
// Module: In-Memory Knowledge Base
// Description: Table-backed knowledge source for criteria and availability.
// Purpose: Serve simulated API criteria to the selector and broker.
// Dependencies: integration-broker-core
// ============================================================================

//! ## Overview
//! [`InMemoryKnowledgeBase`] stores a criteria catalog and an independent set
//! of available APIs. An API may be cataloged without being available, and
//! lookups for uncataloged APIs fail with [`KnowledgeError::UnknownApi`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use integration_broker_core::ApiCriteria;
use integration_broker_core::ApiId;
use integration_broker_core::KnowledgeError;
use integration_broker_core::KnowledgeSource;

// ============================================================================
// SECTION: Knowledge Base
// ============================================================================

/// Knowledge source backed by in-memory tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryKnowledgeBase {
    /// Criteria keyed by API.
    catalog: BTreeMap<ApiId, ApiCriteria>,
    /// APIs available for integration.
    available: BTreeSet<ApiId>,
}

impl InMemoryKnowledgeBase {
    /// Creates an empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds criteria for an API; later entries overwrite earlier ones.
    #[must_use]
    pub fn with_api(mut self, api: impl Into<ApiId>, criteria: ApiCriteria) -> Self {
        self.insert_api(api, criteria);
        self
    }

    /// Marks an API as available for integration.
    #[must_use]
    pub fn with_available(mut self, api: impl Into<ApiId>) -> Self {
        self.mark_available(api);
        self
    }

    /// Inserts or replaces criteria for an API.
    pub fn insert_api(&mut self, api: impl Into<ApiId>, criteria: ApiCriteria) {
        self.catalog.insert(api.into(), criteria);
    }

    /// Marks an API as available for integration.
    pub fn mark_available(&mut self, api: impl Into<ApiId>) {
        self.available.insert(api.into());
    }

    /// Returns the number of cataloged APIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns true when no APIs are cataloged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl KnowledgeSource for InMemoryKnowledgeBase {
    fn get_api_criteria(&self, api: &ApiId) -> Result<ApiCriteria, KnowledgeError> {
        self.catalog.get(api).copied().ok_or_else(|| KnowledgeError::UnknownApi(api.clone()))
    }

    fn get_available_apis(&self) -> Result<BTreeSet<ApiId>, KnowledgeError> {
        Ok(self.available.clone())
    }
}
