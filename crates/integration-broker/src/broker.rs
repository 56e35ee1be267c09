// crates/integration-broker/src/broker.rs
// ============================================================================
// Module: Integration Broker
// Description: Orchestrator wiring selection, knowledge, events, and logging.
// Purpose: Detect opportunities, select an API, and simulate the integration.
// Dependencies: integration-broker-core, thiserror
// ============================================================================

//! ## Overview
//! [`IntegrationBroker`] runs one linear pass: detect opportunities, select an
//! API among them, execute the simulated integration, and publish the outcome.
//! Invariants:
//! - [`IntegrationBroker::run`] never propagates errors; failures are logged and
//!   reported through [`RunOutcome`].
//! - Exactly one event is published per [`IntegrationBroker::execute_integration`] call.
//! - Publish failures are logged and never change an integration outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use integration_broker_core::ApiId;
use integration_broker_core::ApiSelectionStrategy;
use integration_broker_core::BrokerLog;
use integration_broker_core::DefaultApiSelector;
use integration_broker_core::EventKind;
use integration_broker_core::EventPublisher;
use integration_broker_core::KnowledgeError;
use integration_broker_core::KnowledgeSource;
use integration_broker_core::LogRecord;
use integration_broker_core::NoopLog;
use integration_broker_core::Opportunity;
use integration_broker_core::SelectionError;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Ecosystem needs checked when none are configured.
pub const DEFAULT_NEEDS: [&str; 2] = ["Feature A", "Feature B"];

/// Component label used in broker log records.
const COMPONENT: &str = "broker";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while executing an integration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// The selected API is not in the available set.
    #[error("integration with {api} failed: api is not available")]
    NotAvailable {
        /// Selected API.
        api: ApiId,
    },
    /// The knowledge source could not be consulted.
    #[error("knowledge source failure: {0}")]
    KnowledgeSource(#[from] KnowledgeError),
}

/// Errors returned while assembling a broker.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BrokerError {
    /// A required collaborator was not configured.
    #[error("broker {0} is not configured")]
    MissingComponent(&'static str),
}

// ============================================================================
// SECTION: Run Outcome
// ============================================================================

/// Terminal state of one [`IntegrationBroker::run`] pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every configured need is already served by an available API.
    NoOpportunities,
    /// Opportunities could not be determined.
    DetectionFailed,
    /// No candidate could be selected.
    SelectionFailed,
    /// Integration with the API succeeded.
    Integrated(ApiId),
    /// Integration with the API failed.
    IntegrationFailed(ApiId),
}

impl RunOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoOpportunities => "no_opportunities",
            Self::DetectionFailed => "detection_failed",
            Self::SelectionFailed => "selection_failed",
            Self::Integrated(_) => "integrated",
            Self::IntegrationFailed(_) => "integration_failed",
        }
    }

    /// Returns true when the run ended without a failure.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::NoOpportunities | Self::Integrated(_))
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for an [`IntegrationBroker`].
///
/// # Invariants
/// - `build` succeeds only when a knowledge source and a publisher are configured.
/// - Without an explicit strategy, a [`DefaultApiSelector`] over the same
///   knowledge source and logger is used.
#[derive(Default)]
pub struct IntegrationBrokerBuilder {
    /// Selection strategy.
    strategy: Option<Arc<dyn ApiSelectionStrategy>>,
    /// Knowledge source shared with the default selector.
    knowledge: Option<Arc<dyn KnowledgeSource>>,
    /// Event publisher.
    publisher: Option<Arc<dyn EventPublisher>>,
    /// Injected logger.
    log: Option<Arc<dyn BrokerLog>>,
    /// Ecosystem needs, in check order.
    needs: Option<Vec<Opportunity>>,
}

impl IntegrationBrokerBuilder {
    /// Sets the selection strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: impl ApiSelectionStrategy + 'static) -> Self {
        self.strategy = Some(Arc::new(strategy));
        self
    }

    /// Sets the knowledge source.
    #[must_use]
    pub fn knowledge(mut self, knowledge: Arc<dyn KnowledgeSource>) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Sets the event publisher.
    #[must_use]
    pub fn publisher(mut self, publisher: impl EventPublisher + 'static) -> Self {
        self.publisher = Some(Arc::new(publisher));
        self
    }

    /// Sets the logger.
    #[must_use]
    pub fn log(mut self, log: Arc<dyn BrokerLog>) -> Self {
        self.log = Some(log);
        self
    }

    /// Sets the ecosystem needs checked during opportunity detection.
    #[must_use]
    pub fn needs<I, S>(mut self, needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.needs = Some(needs.into_iter().map(Opportunity::new).collect());
        self
    }

    /// Builds the broker.
    ///
    /// # Errors
    ///
    /// Returns [`BrokerError::MissingComponent`] when the knowledge source or
    /// publisher is absent.
    pub fn build(self) -> Result<IntegrationBroker, BrokerError> {
        let knowledge = self.knowledge.ok_or(BrokerError::MissingComponent("knowledge source"))?;
        let publisher = self.publisher.ok_or(BrokerError::MissingComponent("event publisher"))?;
        let log: Arc<dyn BrokerLog> = self.log.unwrap_or_else(|| Arc::new(NoopLog));
        let strategy: Arc<dyn ApiSelectionStrategy> = match self.strategy {
            Some(strategy) => strategy,
            None => Arc::new(
                DefaultApiSelector::new(Arc::clone(&knowledge)).with_log(Arc::clone(&log)),
            ),
        };
        let needs = self
            .needs
            .unwrap_or_else(|| DEFAULT_NEEDS.iter().copied().map(Opportunity::new).collect());
        Ok(IntegrationBroker {
            strategy,
            knowledge,
            publisher,
            log,
            needs,
        })
    }
}

// ============================================================================
// SECTION: Integration Broker
// ============================================================================

/// Orchestrator for one integration pass.
pub struct IntegrationBroker {
    /// Selection strategy.
    strategy: Arc<dyn ApiSelectionStrategy>,
    /// Knowledge source for availability checks.
    knowledge: Arc<dyn KnowledgeSource>,
    /// Event publisher.
    publisher: Arc<dyn EventPublisher>,
    /// Injected logger.
    log: Arc<dyn BrokerLog>,
    /// Ecosystem needs, in check order.
    needs: Vec<Opportunity>,
}

impl IntegrationBroker {
    /// Returns a builder for the broker.
    #[must_use]
    pub fn builder() -> IntegrationBrokerBuilder {
        IntegrationBrokerBuilder::default()
    }

    /// Returns the configured ecosystem needs.
    #[must_use]
    pub fn needs(&self) -> &[Opportunity] {
        &self.needs
    }

    /// Returns the needs not served by an available API, in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::KnowledgeSource`] when availability cannot be read.
    pub fn detect_integration_opportunities(&self) -> Result<Vec<Opportunity>, IntegrationError> {
        let available = self.knowledge.get_available_apis()?;
        Ok(self
            .needs
            .iter()
            .filter(|need| !available.contains(&need.as_candidate()))
            .cloned()
            .collect())
    }

    /// Selects the optimal API from the candidates using the configured strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when the strategy selects nothing.
    pub fn select_optimal_api(&self, candidates: &[ApiId]) -> Result<ApiId, SelectionError> {
        let best = self.strategy.select_best(candidates)?;
        self.info(format!("Selected {best} as the optimal API."));
        Ok(best)
    }

    /// Executes the simulated integration and publishes the outcome.
    ///
    /// Returns true when the API is available and the integration succeeded.
    pub fn execute_integration(&self, api: &ApiId) -> bool {
        match self.ensure_available(api) {
            Ok(()) => {
                self.info(format!("Successfully integrated with {api}."));
                self.publish(EventKind::IntegrationSuccess, api.as_str());
                true
            }
            Err(err) => {
                self.error(format!("Integration error: {err}"));
                self.publish(EventKind::IntegrationFailure, &err.to_string());
                false
            }
        }
    }

    /// Runs one detection, selection, and integration pass.
    pub fn run(&self) -> RunOutcome {
        let opportunities = match self.detect_integration_opportunities() {
            Ok(opportunities) => opportunities,
            Err(err) => {
                self.error(format!("Opportunity detection failed: {err}"));
                return RunOutcome::DetectionFailed;
            }
        };
        if opportunities.is_empty() {
            self.info("No integration opportunities detected.");
            return RunOutcome::NoOpportunities;
        }
        self.info(format!("Detected {} integration opportunities.", opportunities.len()));

        let candidates: Vec<ApiId> = opportunities.iter().map(Opportunity::as_candidate).collect();
        let selected = match self.select_optimal_api(&candidates) {
            Ok(api) => api,
            Err(err) => {
                self.error(format!("Failed to select API: {err}"));
                return RunOutcome::SelectionFailed;
            }
        };

        if self.execute_integration(&selected) {
            RunOutcome::Integrated(selected)
        } else {
            self.error("Integration execution failed.");
            RunOutcome::IntegrationFailed(selected)
        }
    }

    /// Checks that the API is in the available set.
    fn ensure_available(&self, api: &ApiId) -> Result<(), IntegrationError> {
        if self.knowledge.get_available_apis()?.contains(api) {
            Ok(())
        } else {
            Err(IntegrationError::NotAvailable {
                api: api.clone(),
            })
        }
    }

    /// Publishes an event, logging delivery failures.
    fn publish(&self, event: EventKind, payload: &str) {
        if let Err(err) = self.publisher.publish_event(event, payload) {
            let message = format!("Failed to publish {event}: {err}");
            self.log.record(&LogRecord::warn(COMPONENT, message));
        }
    }

    /// Records an info line.
    fn info(&self, message: impl Into<String>) {
        self.log.record(&LogRecord::info(COMPONENT, message));
    }

    /// Records an error line.
    fn error(&self, message: impl Into<String>) {
        self.log.record(&LogRecord::error(COMPONENT, message));
    }
}
