//! Scoring providers
//!
//! The `ScoringProvider` port turns one claim into one assessment. Intake,
//! review, and the archive only see this trait, so the placeholder scorers
//! here can be replaced by a model-serving client without touching them.
//!
//! # Available Providers
//!
//! - **RandomScorer**: draws a random probability, lower for medical claims
//! - **HeuristicScorer**: fixed rule-of-thumb points over claim attributes
//! - **SimulatedLatency**: wraps any provider with an artificial delay
//!
//! Neither scorer is a validated fraud model.

pub mod random;
pub mod heuristic;
pub mod latency;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use core_kernel::{DomainPort, HealthCheckable, PortError};
use domain_claims::ClaimRecord;
use crate::assessment::AssessmentResult;

pub use random::RandomScorer;
pub use heuristic::HeuristicScorer;
pub use latency::SimulatedLatency;

/// Port for anything that can score a claim
#[async_trait]
pub trait ScoringProvider: DomainPort + HealthCheckable {
    /// Short provider name recorded on every assessment
    fn name(&self) -> &str;

    /// Scores a claim
    ///
    /// # Errors
    ///
    /// Returns a `PortError` if the provider cannot produce an assessment.
    async fn score(&self, claim: &ClaimRecord) -> Result<AssessmentResult, PortError>;
}

/// Which scoring provider to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringBackend {
    #[default]
    Random,
    Heuristic,
}

impl ScoringBackend {
    /// Builds the provider, wrapped in a latency simulator when `latency` is non-zero
    ///
    /// `seed` makes the random scorer deterministic; the heuristic scorer
    /// ignores it.
    pub fn build(self, latency: Duration, seed: Option<u64>) -> Arc<dyn ScoringProvider> {
        match (self, latency.is_zero()) {
            (ScoringBackend::Random, true) => Arc::new(random_scorer(seed)),
            (ScoringBackend::Random, false) => {
                Arc::new(SimulatedLatency::new(random_scorer(seed), latency))
            }
            (ScoringBackend::Heuristic, true) => Arc::new(HeuristicScorer::new()),
            (ScoringBackend::Heuristic, false) => {
                Arc::new(SimulatedLatency::new(HeuristicScorer::new(), latency))
            }
        }
    }
}

fn random_scorer(seed: Option<u64>) -> RandomScorer {
    match seed {
        Some(seed) => RandomScorer::with_seed(seed),
        None => RandomScorer::new(),
    }
}

impl fmt::Display for ScoringBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringBackend::Random => f.write_str("random"),
            ScoringBackend::Heuristic => f.write_str("heuristic"),
        }
    }
}

impl FromStr for ScoringBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "stub" => Ok(ScoringBackend::Random),
            "heuristic" | "rules" => Ok(ScoringBackend::Heuristic),
            other => Err(format!("unknown scoring provider: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parsing() {
        assert_eq!("Random".parse::<ScoringBackend>().unwrap(), ScoringBackend::Random);
        assert_eq!("heuristic".parse::<ScoringBackend>().unwrap(), ScoringBackend::Heuristic);
        assert!("xgboost".parse::<ScoringBackend>().is_err());
    }

    #[test]
    fn test_build_names_provider() {
        let provider = ScoringBackend::Heuristic.build(Duration::from_millis(5), None);
        assert_eq!(provider.name(), "heuristic");

        let provider = ScoringBackend::Random.build(Duration::ZERO, Some(7));
        assert_eq!(provider.name(), "random");
    }
}
