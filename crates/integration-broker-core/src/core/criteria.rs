// crates/integration-broker-core/src/core/criteria.rs
// ============================================================================
// Module: API Criteria
// Description: Scored attributes used to judge candidate APIs.
// Purpose: Hold performance, reliability, and cost scores with the reliability policy.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`ApiCriteria`] is the immutable score triple a knowledge source returns for a
//! candidate. The reliability threshold is a fixed policy constant owned by this
//! type; no range checks are applied on construction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Policy Constants
// ============================================================================

/// Minimum reliability score for a candidate to count as reliable.
pub const RELIABILITY_THRESHOLD: f64 = 0.8;

// ============================================================================
// SECTION: Criteria
// ============================================================================

/// Scored attributes for a candidate API.
///
/// # Invariants
/// - Values are taken as given; scores are conceptually in `[0, 1]` and cost `>= 0`.
/// - Instances are never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApiCriteria {
    /// Performance score.
    pub performance_score: f64,
    /// Reliability score.
    pub reliability_score: f64,
    /// Integration cost.
    pub cost: f64,
}

impl ApiCriteria {
    /// Creates criteria from the three scores.
    #[must_use]
    pub const fn new(performance_score: f64, reliability_score: f64, cost: f64) -> Self {
        Self {
            performance_score,
            reliability_score,
            cost,
        }
    }

    /// Returns true when the reliability score meets [`RELIABILITY_THRESHOLD`].
    #[must_use]
    pub fn is_reliable(&self) -> bool {
        self.reliability_score >= RELIABILITY_THRESHOLD
    }

    /// Returns true when the performance score is at least `threshold`.
    #[must_use]
    pub fn meets_performance(&self, threshold: f64) -> bool {
        self.performance_score >= threshold
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
