// crates/integration-broker-core/src/runtime/selection.rs
// ============================================================================
// Module: API Selection
// Description: Selection strategy contract and the default first-match selector.
// Purpose: Pick the first candidate API that satisfies the acceptance policy.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! [`DefaultApiSelector`] scans candidates in input order, fetches each
//! candidate's [`ApiCriteria`] from a [`KnowledgeSource`], and returns the first
//! candidate that is reliable with a performance score of at least
//! [`PERFORMANCE_THRESHOLD`]. Input order is the only tie-break.
//! Invariants:
//! - Lookups are read-only; the selector holds no mutable state.
//! - Every failure surfaces as [`SelectionError`] carrying the full candidate list.
//! - Lookup failures stop the scan; later candidates are not consulted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use thiserror::Error;

use crate::core::ApiCriteria;
use crate::core::ApiId;
use crate::core::LogRecord;
use crate::core::format_candidates;
use crate::interfaces::BrokerLog;
use crate::interfaces::KnowledgeSource;
use crate::interfaces::NoopLog;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Minimum performance score accepted by [`DefaultApiSelector`].
pub const PERFORMANCE_THRESHOLD: f64 = 0.9;

/// Component label used in selector log records.
const COMPONENT: &str = "selector";

// ============================================================================
// SECTION: Selection Errors
// ============================================================================

/// Errors returned by selection strategies.
///
/// Both variants describe a failed selection over the same candidate list.
/// Callers that only care whether selection succeeded may treat them alike.
///
/// # Invariants
/// - `candidates` is the complete input list, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No candidate met the acceptance policy (includes the empty list).
    #[error("failed to select api from candidates: {}", format_candidates(.candidates))]
    NoQualifyingCandidate {
        /// Rejected candidates.
        candidates: Vec<ApiId>,
    },
    /// A criteria lookup failed before a candidate was accepted.
    #[error(
        "failed to select api from candidates: {} (lookup for {candidate} failed: {reason})",
        format_candidates(.candidates)
    )]
    LookupFailed {
        /// Candidates under evaluation.
        candidates: Vec<ApiId>,
        /// Candidate whose lookup failed.
        candidate: ApiId,
        /// Lookup failure description.
        reason: String,
    },
}

impl SelectionError {
    /// Returns the candidate list the failed selection was run against.
    #[must_use]
    pub fn candidates(&self) -> &[ApiId] {
        match self {
            Self::NoQualifyingCandidate {
                candidates,
            }
            | Self::LookupFailed {
                candidates, ..
            } => candidates,
        }
    }
}

// ============================================================================
// SECTION: Strategy Trait
// ============================================================================

/// Strategy that chooses one API from an ordered candidate list.
pub trait ApiSelectionStrategy: Send + Sync {
    /// Selects the best candidate.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when no candidate can be selected.
    fn select_best(&self, candidates: &[ApiId]) -> Result<ApiId, SelectionError>;
}

impl<F> ApiSelectionStrategy for F
where
    F: Fn(&[ApiId]) -> Result<ApiId, SelectionError> + Send + Sync,
{
    fn select_best(&self, candidates: &[ApiId]) -> Result<ApiId, SelectionError> {
        self(candidates)
    }
}

// ============================================================================
// SECTION: Default Selector
// ============================================================================

/// First-match selector backed by a knowledge source.
pub struct DefaultApiSelector {
    /// Source of per-candidate criteria.
    knowledge: Arc<dyn KnowledgeSource>,
    /// Injected logger.
    log: Arc<dyn BrokerLog>,
}

impl DefaultApiSelector {
    /// Creates a selector that discards log records.
    #[must_use]
    pub fn new(knowledge: Arc<dyn KnowledgeSource>) -> Self {
        Self {
            knowledge,
            log: Arc::new(NoopLog),
        }
    }

    /// Replaces the logger used for selection failures.
    #[must_use]
    pub fn with_log(mut self, log: Arc<dyn BrokerLog>) -> Self {
        self.log = log;
        self
    }

    /// Returns true when the criteria pass the acceptance policy.
    #[must_use]
    pub fn accepts(criteria: &ApiCriteria) -> bool {
        criteria.is_reliable() && criteria.meets_performance(PERFORMANCE_THRESHOLD)
    }
}

impl ApiSelectionStrategy for DefaultApiSelector {
    fn select_best(&self, candidates: &[ApiId]) -> Result<ApiId, SelectionError> {
        for candidate in candidates {
            let criteria = match self.knowledge.get_api_criteria(candidate) {
                Ok(criteria) => criteria,
                Err(err) => {
                    self.log.record(&LogRecord::error(
                        COMPONENT,
                        format!("API selection error: {err}"),
                    ));
                    return Err(SelectionError::LookupFailed {
                        candidates: candidates.to_vec(),
                        candidate: candidate.clone(),
                        reason: err.to_string(),
                    });
                }
            };
            if Self::accepts(&criteria) {
                return Ok(candidate.clone());
            }
        }
        self.log.record(&LogRecord::error(COMPONENT, "API selection error: no suitable API found"));
        Err(SelectionError::NoQualifyingCandidate {
            candidates: candidates.to_vec(),
        })
    }
}
