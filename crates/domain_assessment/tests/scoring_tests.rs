//! Tests for probability rules and scoring providers

use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_assessment::scoring::random::{MEDICAL_PROBABILITY_CEILING, VEHICLE_PROBABILITY_CEILING};
use domain_assessment::{
    FraudProbability, HeuristicScorer, RandomScorer, Recommendation, RiskTier, ScoringProvider,
};
use domain_claims::PolicyCategory;
use test_utils::{
    assert_assessment_consistent, assert_probability_below, claim_record_strategy,
    probability_strategy, ClaimFixtures,
};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

// ============================================================================
// Probability Rules
// ============================================================================

mod probability_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_accept_iff_below_threshold(p in probability_strategy()) {
            let accept = p.recommendation() == Recommendation::Accept;
            prop_assert_eq!(accept, p.value() < dec!(35));
        }

        #[test]
        fn prop_tier_partitions_range(p in probability_strategy()) {
            let expected = if p.value() < dec!(35) {
                RiskTier::Low
            } else if p.value() < dec!(70) {
                RiskTier::Medium
            } else {
                RiskTier::High
            };
            prop_assert_eq!(p.risk_tier(), expected);
        }

        #[test]
        fn prop_low_tier_always_accepts(p in probability_strategy()) {
            prop_assert_eq!(
                p.risk_tier() == RiskTier::Low,
                p.recommendation() == Recommendation::Accept
            );
        }
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: Result<FraudProbability, _> = serde_json::from_str("101");
        assert!(parsed.is_err());

        let parsed: FraudProbability = serde_json::from_str("42.5").unwrap();
        assert_eq!(parsed.value(), dec!(42.5));
    }
}

// ============================================================================
// Random Scorer
// ============================================================================

mod random_scorer_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_probability_within_category_ceiling(
            seed in any::<u64>(),
            claim in claim_record_strategy(),
        ) {
            let scorer = RandomScorer::with_seed(seed);
            let assessment = block_on(scorer.score(&claim)).unwrap();

            let ceiling = match claim.category() {
                PolicyCategory::Medical => MEDICAL_PROBABILITY_CEILING,
                PolicyCategory::Vehicle => VEHICLE_PROBABILITY_CEILING,
            };
            assert_probability_below(&assessment, ceiling);
            assert_assessment_consistent(&assessment);
            prop_assert_eq!(assessment.policy_type(), claim.category());
            prop_assert_eq!(assessment.claim_id(), claim.id);
        }
    }

    #[tokio::test]
    async fn test_medical_claims_never_high_risk() {
        let scorer = RandomScorer::with_seed(7);
        let claim = ClaimFixtures::medical_default();

        for _ in 0..200 {
            let assessment = scorer.score(&claim).await.unwrap();
            assert_ne!(assessment.risk_level(), RiskTier::High);
        }
    }

    #[tokio::test]
    async fn test_vehicle_template() {
        let scorer = RandomScorer::with_seed(1);
        let assessment = scorer.score(&ClaimFixtures::vehicle_default()).await.unwrap();

        let names: Vec<&str> = assessment.top_features().iter().map(|f| f.feature.as_str()).collect();
        assert_eq!(names, vec!["Damage Severity", "Claim Velocity", "Authority Reporting"]);
        assert_eq!(assessment.scored_by(), "random");
        assert!(assessment.reasoning().starts_with("Incident forensics"));
    }
}

// ============================================================================
// Heuristic Scorer
// ============================================================================

mod heuristic_scorer_tests {
    use super::*;

    #[test]
    fn test_defaults_score_base_only() {
        let scorer = HeuristicScorer::new();
        assert_eq!(scorer.points(&ClaimFixtures::vehicle_default()), dec!(15));
        assert_eq!(scorer.points(&ClaimFixtures::medical_default()), dec!(15));
    }

    #[test]
    fn test_vehicle_red_flags() {
        // 15 base + 25 amount + 30 total loss + 10 new customer
        let scorer = HeuristicScorer::new();
        assert_eq!(scorer.points(&ClaimFixtures::suspicious_vehicle()), dec!(80));
    }

    #[test]
    fn test_medical_red_flags() {
        // 15 base + 10 BMI + 15 smoker + 15 amount + 10 new customer
        let scorer = HeuristicScorer::new();
        assert_eq!(scorer.points(&ClaimFixtures::suspicious_medical()), dec!(65));
    }

    #[tokio::test]
    async fn test_score_derives_tier_from_points() {
        let scorer = HeuristicScorer::new();

        let assessment = scorer.score(&ClaimFixtures::suspicious_vehicle()).await.unwrap();
        assert_eq!(assessment.fraud_probability().value(), dec!(80));
        assert_eq!(assessment.risk_level(), RiskTier::High);
        assert_eq!(assessment.ai_recommendation(), Recommendation::Reject);
        assert_eq!(assessment.top_features().len(), 3);
        assert!(assessment.reasoning().contains("Vehicle"));

        let assessment = scorer.score(&ClaimFixtures::medical_default()).await.unwrap();
        assert_eq!(assessment.ai_recommendation(), Recommendation::Accept);
        assert!(assessment.reasoning().contains("Medical"));
    }

    proptest! {
        #[test]
        fn prop_points_stay_in_range(claim in claim_record_strategy()) {
            let points = HeuristicScorer::new().points(&claim);
            prop_assert!(points >= dec!(15));
            prop_assert!(points <= dec!(100));
        }
    }
}
