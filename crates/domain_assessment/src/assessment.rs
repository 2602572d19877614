//! Assessment results and audit entries
//!
//! An `AssessmentResult` is pending by construction: it carries no human
//! decision. Finalizing consumes it and yields an `AuditEntry`, so the same
//! assessment cannot be both pending and archived.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{AssessmentId, ClaimId};
use domain_claims::{ClaimRecord, PolicyCategory};
use crate::probability::{FraudProbability, Recommendation, RiskTier};

/// A named feature and its signed contribution, for display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureImpact {
    pub feature: String,
    pub impact: Decimal,
}

impl FeatureImpact {
    pub fn new(feature: impl Into<String>, impact: Decimal) -> Self {
        Self {
            feature: feature.into(),
            impact,
        }
    }
}

/// The reviewer's decision
///
/// Deserialization goes through `FromStr`, so every accepted spelling is
/// accepted on the wire too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum HumanDecision {
    #[serde(rename = "ACCEPTED")]
    Accepted,
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl HumanDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            HumanDecision::Accepted => "ACCEPTED",
            HumanDecision::Rejected => "REJECTED",
        }
    }

    /// Whether this decision matches a recommendation
    pub fn agrees_with(&self, recommendation: Recommendation) -> bool {
        matches!(
            (self, recommendation),
            (HumanDecision::Accepted, Recommendation::Accept)
                | (HumanDecision::Rejected, Recommendation::Reject)
        )
    }
}

impl fmt::Display for HumanDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HumanDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACCEPTED" | "ACCEPT" => Ok(HumanDecision::Accepted),
            "REJECTED" | "REJECT" => Ok(HumanDecision::Rejected),
            other => Err(format!("unknown decision: {}", other)),
        }
    }
}

impl TryFrom<String> for HumanDecision {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A fraud assessment awaiting human review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    id: AssessmentId,
    claim_id: ClaimId,
    policy_type: PolicyCategory,
    fraud_probability: FraudProbability,
    ai_recommendation: Recommendation,
    risk_level: RiskTier,
    top_features: Vec<FeatureImpact>,
    reasoning: String,
    /// Name of the scoring provider that produced the assessment
    scored_by: String,
    timestamp: DateTime<Utc>,
}

impl AssessmentResult {
    /// Creates an assessment for a claim
    ///
    /// Recommendation and risk tier are derived from the probability here and
    /// nowhere else, so they can never disagree with it.
    pub fn new(
        claim: &ClaimRecord,
        fraud_probability: FraudProbability,
        top_features: Vec<FeatureImpact>,
        reasoning: impl Into<String>,
        scored_by: impl Into<String>,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            claim_id: claim.id,
            policy_type: claim.category(),
            fraud_probability,
            ai_recommendation: fraud_probability.recommendation(),
            risk_level: fraud_probability.risk_tier(),
            top_features,
            reasoning: reasoning.into(),
            scored_by: scored_by.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn claim_id(&self) -> ClaimId {
        self.claim_id
    }

    pub fn policy_type(&self) -> PolicyCategory {
        self.policy_type
    }

    pub fn fraud_probability(&self) -> FraudProbability {
        self.fraud_probability
    }

    pub fn ai_recommendation(&self) -> Recommendation {
        self.ai_recommendation
    }

    pub fn risk_level(&self) -> RiskTier {
        self.risk_level
    }

    pub fn top_features(&self) -> &[FeatureImpact] {
        &self.top_features
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    pub fn scored_by(&self) -> &str {
        &self.scored_by
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Short reference shown to the reviewer
    pub fn reference(&self) -> String {
        self.id.reference()
    }

    /// Attaches the human decision, consuming the pending assessment
    pub fn finalize(self, decision: HumanDecision) -> AuditEntry {
        AuditEntry {
            assessment: self,
            final_decision: decision,
            decided_at: Utc::now(),
        }
    }
}

/// A finalized assessment, immutable once archived
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    #[serde(flatten)]
    assessment: AssessmentResult,
    final_decision: HumanDecision,
    decided_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn assessment(&self) -> &AssessmentResult {
        &self.assessment
    }

    pub fn final_decision(&self) -> HumanDecision {
        self.final_decision
    }

    pub fn decided_at(&self) -> DateTime<Utc> {
        self.decided_at
    }

    pub fn ai_recommendation(&self) -> Recommendation {
        self.assessment.ai_recommendation
    }

    /// Whether the reviewer followed the recommendation
    pub fn reviewer_agreed(&self) -> bool {
        self.final_decision.agrees_with(self.assessment.ai_recommendation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::ClaimForm;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_derives_recommendation_and_tier() {
        let claim = ClaimForm::new().build();
        let probability = FraudProbability::new(dec!(72)).unwrap();
        let result = AssessmentResult::new(&claim, probability, vec![], "test", "unit");

        assert_eq!(result.claim_id(), claim.id);
        assert_eq!(result.policy_type(), PolicyCategory::Vehicle);
        assert_eq!(result.ai_recommendation(), Recommendation::Reject);
        assert_eq!(result.risk_level(), RiskTier::High);
    }

    #[test]
    fn test_finalize_keeps_assessment() {
        let claim = ClaimForm::new().build();
        let result = AssessmentResult::new(&claim, FraudProbability::from_percent(10), vec![], "ok", "unit");
        let id = result.id();

        let entry = result.finalize(HumanDecision::Rejected);
        assert_eq!(entry.assessment().id(), id);
        assert_eq!(entry.ai_recommendation(), Recommendation::Accept);
        assert!(!entry.reviewer_agreed());
    }

    #[test]
    fn test_decision_parsing() {
        assert_eq!("accepted".parse::<HumanDecision>().unwrap(), HumanDecision::Accepted);
        assert_eq!("REJECT".parse::<HumanDecision>().unwrap(), HumanDecision::Rejected);
        assert!("maybe".parse::<HumanDecision>().is_err());
    }

    #[test]
    fn test_decision_json_matches_parsing() {
        for text in ["ACCEPT", "accepted", " Rejected "] {
            let parsed: HumanDecision = serde_json::from_value(serde_json::json!(text)).unwrap();
            assert_eq!(parsed, text.parse::<HumanDecision>().unwrap());
        }
        assert!(serde_json::from_str::<HumanDecision>("\"maybe\"").is_err());
        assert_eq!(serde_json::to_string(&HumanDecision::Accepted).unwrap(), "\"ACCEPTED\"");
    }
}
