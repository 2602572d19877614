//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for assessments and the archive
//! that give more meaningful error messages than standard assertions.

use domain_assessment::{AssessmentResult, AuditEntry, Recommendation, RiskTier, ACCEPT_THRESHOLD, HIGH_RISK_THRESHOLD};
use rust_decimal::Decimal;

/// Asserts that recommendation and risk tier agree with the probability
///
/// # Panics
///
/// Panics if either derived value is inconsistent with the thresholds
pub fn assert_assessment_consistent(assessment: &AssessmentResult) {
    let p = assessment.fraud_probability().value();

    let expected_recommendation = if p < ACCEPT_THRESHOLD {
        Recommendation::Accept
    } else {
        Recommendation::Reject
    };
    assert_eq!(
        assessment.ai_recommendation(),
        expected_recommendation,
        "Recommendation mismatch for probability {}",
        p
    );

    let expected_tier = if p < ACCEPT_THRESHOLD {
        RiskTier::Low
    } else if p < HIGH_RISK_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::High
    };
    assert_eq!(
        assessment.risk_level(),
        expected_tier,
        "Risk tier mismatch for probability {}",
        p
    );
}

/// Asserts that the probability lies in `[0, ceiling)`
pub fn assert_probability_below(assessment: &AssessmentResult, ceiling: u32) {
    let p = assessment.fraud_probability().value();
    assert!(
        p >= Decimal::ZERO && p < Decimal::from(ceiling),
        "Expected probability in [0, {}), got {}",
        ceiling,
        p
    );
}

/// Asserts that entries are ordered newest first
pub fn assert_newest_first(entries: &[AuditEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].decided_at() >= pair[1].decided_at(),
            "Archive out of order: {} decided before {}",
            pair[0].assessment().id(),
            pair[1].assessment().id()
        );
    }
}
