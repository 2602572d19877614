//! Rule-of-thumb scorer
//!
//! Adds fixed points for a handful of red flags on top of a base score. Used
//! when no trained model is available.
//!
//! | rule | points |
//! |------|--------|
//! | base | 15 |
//! | vehicle: total claim > 50 000 | 25 |
//! | vehicle: major damage or total loss | 30 |
//! | medical: BMI > 35 | 10 |
//! | medical: smoker | 15 |
//! | medical: total claim > 20 000 | 15 |
//! | tenure < 24 months | 10 |

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::{CategoryDetails, ClaimRecord};
use crate::assessment::{AssessmentResult, FeatureImpact};
use crate::probability::FraudProbability;
use crate::scoring::ScoringProvider;

const PROVIDER_NAME: &str = "heuristic";

const BASE_SCORE: Decimal = dec!(15);
const NEW_CUSTOMER_MONTHS: u32 = 24;

/// Scorer built from fixed red-flag rules
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    /// Sums the rule points for a claim
    pub fn points(&self, claim: &ClaimRecord) -> Decimal {
        let mut score = BASE_SCORE;
        let total = claim.total_claim_amount();

        match &claim.details {
            CategoryDetails::Vehicle(_) => {
                if total > dec!(50000) {
                    score += dec!(25);
                }
                if claim.incident.is_major_loss() {
                    score += dec!(30);
                }
            }
            CategoryDetails::Medical(medical) => {
                if medical.bmi > dec!(35) {
                    score += dec!(10);
                }
                if medical.smoker {
                    score += dec!(15);
                }
                if total > dec!(20000) {
                    score += dec!(15);
                }
            }
        }

        if claim.months_as_customer() < NEW_CUSTOMER_MONTHS {
            score += dec!(10);
        }

        score
    }
}

impl DomainPort for HeuristicScorer {}

#[async_trait]
impl HealthCheckable for HeuristicScorer {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy(PROVIDER_NAME).with_message("in-process rule scorer")
    }
}

#[async_trait]
impl ScoringProvider for HeuristicScorer {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn score(&self, claim: &ClaimRecord) -> Result<AssessmentResult, PortError> {
        let points = self.points(claim);
        let probability = FraudProbability::new(points.min(dec!(100)))
            .map_err(|e| PortError::internal(e.to_string()))?;

        debug!(claim_id = %claim.id, %probability, "Heuristic scorer applied rules");

        let features = vec![
            FeatureImpact::new("Policy Type Context", dec!(0.25)),
            FeatureImpact::new("Severity Analysis", dec!(0.35)),
            FeatureImpact::new("Customer Tenure", dec!(0.15)),
        ];
        let reasoning = format!(
            "Simulated AI evaluation for {} based on established insurance fraud heuristic patterns.",
            claim.category()
        );

        Ok(AssessmentResult::new(claim, probability, features, reasoning, PROVIDER_NAME))
    }
}
