//! Random placeholder scorer
//!
//! Stands in for a real model. Medical claims draw from `[0, 45)` and vehicle
//! claims from `[0, 100)`; the asymmetry is a placeholder constant, not a
//! validated policy. Feature impacts and rationale come from one fixed
//! template per category and do not look at the claim beyond its category
//! and the applicant's age.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal_macros::dec;
use std::sync::Mutex;
use tracing::debug;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::{ClaimRecord, PolicyCategory};
use crate::assessment::{AssessmentResult, FeatureImpact};
use crate::probability::FraudProbability;
use crate::scoring::ScoringProvider;

/// Exclusive upper bound of the draw for medical claims
pub const MEDICAL_PROBABILITY_CEILING: u32 = 45;

/// Exclusive upper bound of the draw for vehicle claims
pub const VEHICLE_PROBABILITY_CEILING: u32 = 100;

const PROVIDER_NAME: &str = "random";

/// Exclusive upper bound of the probability draw for a category
pub fn probability_ceiling(category: PolicyCategory) -> u32 {
    match category {
        PolicyCategory::Medical => MEDICAL_PROBABILITY_CEILING,
        PolicyCategory::Vehicle => VEHICLE_PROBABILITY_CEILING,
    }
}

/// Scorer that draws a uniformly random whole-percent probability
pub struct RandomScorer {
    rng: Mutex<StdRng>,
}

impl Default for RandomScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomScorer {
    /// Creates a scorer seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a deterministic scorer
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn draw(&self, category: PolicyCategory) -> Result<u32, PortError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| PortError::internal("random scorer state poisoned"))?;
        Ok(rng.random_range(0..probability_ceiling(category)))
    }
}

/// The fixed feature list and rationale for a claim's category
pub fn category_template(claim: &ClaimRecord, probability: FraudProbability) -> (Vec<FeatureImpact>, String) {
    let low = probability.is_low();
    match claim.category() {
        PolicyCategory::Medical => (
            vec![
                FeatureImpact::new("Treatment Consistency", dec!(0.18)),
                FeatureImpact::new("Provider History", dec!(0.12)),
                FeatureImpact::new("Policy Maturity", dec!(-0.15)),
            ],
            format!(
                "Medical billing audit suggests {} claim patterns for a {} year old client.",
                if low { "standard" } else { "irregular" },
                claim.age()
            ),
        ),
        PolicyCategory::Vehicle => (
            vec![
                FeatureImpact::new("Damage Severity", dec!(0.38)),
                FeatureImpact::new("Claim Velocity", dec!(0.22)),
                FeatureImpact::new("Authority Reporting", dec!(-0.08)),
            ],
            format!(
                "Incident forensics indicate {} loss patterns relative to the reported severity.",
                if low { "consistent" } else { "deviant" }
            ),
        ),
    }
}

impl DomainPort for RandomScorer {}

#[async_trait]
impl HealthCheckable for RandomScorer {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy(PROVIDER_NAME).with_message("in-process placeholder scorer")
    }
}

#[async_trait]
impl ScoringProvider for RandomScorer {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn score(&self, claim: &ClaimRecord) -> Result<AssessmentResult, PortError> {
        let probability = FraudProbability::from_percent(self.draw(claim.category())?);
        let (features, reasoning) = category_template(claim, probability);
        debug!(claim_id = %claim.id, %probability, "Random scorer drew probability");
        Ok(AssessmentResult::new(claim, probability, features, reasoning, PROVIDER_NAME))
    }
}
