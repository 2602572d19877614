//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims, probabilities, and
//! decisions that respect the intake invariants.

use domain_assessment::{FraudProbability, HumanDecision};
use domain_claims::{ClaimRecord, PolicyCategory};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::ClaimRecordBuilder;

/// Strategy for either policy category
pub fn policy_category_strategy() -> impl Strategy<Value = PolicyCategory> {
    prop_oneof![Just(PolicyCategory::Vehicle), Just(PolicyCategory::Medical)]
}

/// Strategy for either human decision
pub fn decision_strategy() -> impl Strategy<Value = HumanDecision> {
    prop_oneof![Just(HumanDecision::Accepted), Just(HumanDecision::Rejected)]
}

/// Strategy for incident severity labels seen on the intake form
pub fn severity_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Trivial Damage".to_string()),
        Just("Minor Damage".to_string()),
        Just("Major Damage".to_string()),
        Just("Total Loss".to_string()),
    ]
}

/// Strategy for claim amounts with cents (0 to 200 000)
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..20_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for BMI values (15.0 to 50.0)
pub fn bmi_strategy() -> impl Strategy<Value = Decimal> {
    (150i64..=500i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Strategy for probabilities with two decimal places across `[0, 100]`
pub fn probability_strategy() -> impl Strategy<Value = FraudProbability> {
    (0i64..=10_000i64).prop_filter_map("in range", |n| FraudProbability::new(Decimal::new(n, 2)).ok())
}

/// Strategy for complete claim records of either category
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        policy_category_strategy(),
        18u32..=90u32,
        0u32..=480u32,
        claim_amount_strategy(),
        severity_strategy(),
        bmi_strategy(),
        any::<bool>(),
    )
        .prop_map(|(category, age, months, total, severity, bmi, smoker)| {
            let builder = match category {
                PolicyCategory::Vehicle => ClaimRecordBuilder::vehicle(),
                PolicyCategory::Medical => ClaimRecordBuilder::medical(),
            };
            builder
                .with_age(age)
                .with_months_as_customer(months)
                .with_total_claim(total)
                .with_severity(severity)
                .with_bmi(bmi)
                .smoker(smoker)
                .build()
        })
}
