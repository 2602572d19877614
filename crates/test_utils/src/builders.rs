//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Claims start from the intake form defaults, so tests only set the fields
//! that matter to them.

use domain_assessment::{AssessmentResult, AuditEntry, FeatureImpact, FraudProbability, HumanDecision};
use domain_claims::{CategoryDetails, ClaimForm, ClaimRecord, PolicyCategory};
use rust_decimal::Decimal;

/// Builder for constructing claim records
pub struct ClaimRecordBuilder {
    record: ClaimRecord,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::vehicle()
    }
}

impl ClaimRecordBuilder {
    /// A vehicle claim with the form defaults
    pub fn vehicle() -> Self {
        Self {
            record: ClaimForm::new().build(),
        }
    }

    /// A medical claim with the form defaults
    pub fn medical() -> Self {
        let mut form = ClaimForm::new();
        form.switch_category(PolicyCategory::Medical);
        Self { record: form.build() }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.record.profile.age = age;
        self
    }

    pub fn with_months_as_customer(mut self, months: u32) -> Self {
        self.record.profile.months_as_customer = months;
        self
    }

    pub fn with_total_claim(mut self, amount: Decimal) -> Self {
        self.record.financials.total_claim_amount = amount;
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.record.incident.severity = severity.into();
        self
    }

    /// Sets the BMI; ignored on vehicle claims
    pub fn with_bmi(mut self, bmi: Decimal) -> Self {
        if let CategoryDetails::Medical(medical) = &mut self.record.details {
            medical.bmi = bmi;
        }
        self
    }

    /// Sets the smoker flag; ignored on vehicle claims
    pub fn smoker(mut self, smoker: bool) -> Self {
        if let CategoryDetails::Medical(medical) = &mut self.record.details {
            medical.smoker = smoker;
        }
        self
    }

    pub fn build(self) -> ClaimRecord {
        self.record
    }
}

/// Builder for assessments and the audit entries made from them
pub struct AssessmentBuilder {
    claim: ClaimRecord,
    probability: FraudProbability,
    features: Vec<FeatureImpact>,
    reasoning: String,
    scored_by: String,
}

impl Default for AssessmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentBuilder {
    pub fn new() -> Self {
        Self {
            claim: ClaimRecordBuilder::vehicle().build(),
            probability: FraudProbability::from_percent(20),
            features: Vec::new(),
            reasoning: "fixture assessment".to_string(),
            scored_by: "fixture".to_string(),
        }
    }

    pub fn for_claim(mut self, claim: ClaimRecord) -> Self {
        self.claim = claim;
        self
    }

    pub fn with_percent(mut self, percent: u32) -> Self {
        self.probability = FraudProbability::from_percent(percent);
        self
    }

    pub fn with_probability(mut self, probability: FraudProbability) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_feature(mut self, feature: &str, impact: Decimal) -> Self {
        self.features.push(FeatureImpact::new(feature, impact));
        self
    }

    pub fn build(self) -> AssessmentResult {
        AssessmentResult::new(
            &self.claim,
            self.probability,
            self.features,
            self.reasoning,
            self.scored_by,
        )
    }

    /// Builds and finalizes in one step
    pub fn finalized(self, decision: HumanDecision) -> AuditEntry {
        self.build().finalize(decision)
    }
}
