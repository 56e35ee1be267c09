// crates/integration-broker-core/src/core/identifiers.rs
// ============================================================================
// Module: Integration Broker Identifiers
// Description: Opaque identifiers for candidate APIs and ecosystem needs.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Candidate APIs and opportunities are named by opaque strings. Identity is
//! plain string equality; no normalization is applied. Identifiers serialize
//! transparently as strings on the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Identifier naming an external API under consideration for integration.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiId(String);

impl ApiId {
    /// Creates a new API identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApiId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A named ecosystem need not currently satisfied by any available API.
///
/// # Invariants
/// - Opaque UTF-8 string; compared against [`ApiId`] values by string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Opportunity(String);

impl Opportunity {
    /// Creates a new opportunity name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the candidate identifier carrying the same name.
    #[must_use]
    pub fn as_candidate(&self) -> ApiId {
        ApiId::new(self.0.clone())
    }
}

impl fmt::Display for Opportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SECTION: Formatting Helpers
// ============================================================================

/// Renders a candidate list as `[a, b, c]` for error and log messages.
#[must_use]
pub fn format_candidates(candidates: &[ApiId]) -> String {
    let joined = candidates.iter().map(ApiId::as_str).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
