//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claims, assessments, and scoring stubs. The stubs
//! implement the scoring port so service and HTTP tests can pin the
//! probability or force a provider failure.

use async_trait::async_trait;
use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_assessment::{AssessmentResult, AuditEntry, FraudProbability, HumanDecision, ScoringProvider};
use domain_claims::ClaimRecord;
use rust_decimal_macros::dec;

use crate::builders::{AssessmentBuilder, ClaimRecordBuilder};

/// Fixture for claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Vehicle claim with the intake defaults
    pub fn vehicle_default() -> ClaimRecord {
        ClaimRecordBuilder::vehicle().build()
    }

    /// Medical claim with the intake defaults
    pub fn medical_default() -> ClaimRecord {
        ClaimRecordBuilder::medical().build()
    }

    /// Vehicle claim that trips every vehicle heuristic rule
    pub fn suspicious_vehicle() -> ClaimRecord {
        ClaimRecordBuilder::vehicle()
            .with_total_claim(dec!(75000))
            .with_severity("Total Loss")
            .with_months_as_customer(6)
            .build()
    }

    /// Medical claim that trips every medical heuristic rule
    pub fn suspicious_medical() -> ClaimRecord {
        ClaimRecordBuilder::medical()
            .with_bmi(dec!(38.2))
            .smoker(true)
            .with_total_claim(dec!(42000))
            .with_months_as_customer(3)
            .build()
    }
}

/// Fixture for assessments and audit entries
pub struct AssessmentFixtures;

impl AssessmentFixtures {
    /// 12%: Accept, Low
    pub fn low_risk() -> AssessmentResult {
        AssessmentBuilder::new().with_percent(12).build()
    }

    /// 50%: Reject, Medium
    pub fn medium_risk() -> AssessmentResult {
        AssessmentBuilder::new().with_percent(50).build()
    }

    /// 88%: Reject, High
    pub fn high_risk() -> AssessmentResult {
        AssessmentBuilder::new().with_percent(88).build()
    }

    pub fn entry(percent: u32, decision: HumanDecision) -> AuditEntry {
        AssessmentBuilder::new().with_percent(percent).finalized(decision)
    }
}

/// Scorer that always returns the same probability
pub struct FixedScorer {
    probability: FraudProbability,
}

impl FixedScorer {
    pub fn new(percent: u32) -> Self {
        Self {
            probability: FraudProbability::from_percent(percent),
        }
    }
}

impl DomainPort for FixedScorer {}

#[async_trait]
impl HealthCheckable for FixedScorer {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("fixed")
    }
}

#[async_trait]
impl ScoringProvider for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn score(&self, claim: &ClaimRecord) -> Result<AssessmentResult, PortError> {
        Ok(AssessmentBuilder::new()
            .for_claim(claim.clone())
            .with_probability(self.probability)
            .build())
    }
}

/// Scorer whose backend is always down
pub struct UnavailableScorer;

impl DomainPort for UnavailableScorer {}

#[async_trait]
impl HealthCheckable for UnavailableScorer {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::unhealthy("unavailable", "model endpoint unreachable")
    }
}

#[async_trait]
impl ScoringProvider for UnavailableScorer {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn score(&self, _claim: &ClaimRecord) -> Result<AssessmentResult, PortError> {
        Err(PortError::unavailable("model endpoint unreachable"))
    }
}
