//! Tests for the review workflow: reviewer, archive, session, service

use proptest::prelude::*;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;

use domain_assessment::{
    AssessmentError, AuditArchive, ClaimEvaluationService, EvaluationSession, HumanDecision,
    RandomScorer, Recommendation, ReviewMetrics, ReviewPhase, Reviewer, RiskTier, ScoringProvider,
    SimulatedLatency,
};
use test_utils::{
    assert_assessment_consistent, assert_newest_first, decision_strategy, AssessmentBuilder,
    AssessmentFixtures, ClaimFixtures, FixedScorer, UnavailableScorer,
};

// ============================================================================
// Reviewer and Archive
// ============================================================================

mod archive_tests {
    use super::*;

    #[test]
    fn test_finalize_with_nothing_pending_is_noop() {
        let mut session = EvaluationSession::new();

        assert!(session.finalize(HumanDecision::Accepted).is_none());
        assert!(session.finalize(HumanDecision::Rejected).is_none());
        assert!(session.archive().is_empty());
        assert_eq!(session.phase(), ReviewPhase::Idle);
    }

    #[test]
    fn test_present_twice_keeps_only_second() {
        let mut reviewer = Reviewer::new();
        let first = AssessmentFixtures::low_risk();
        let second = AssessmentFixtures::high_risk();
        let second_id = second.id();

        reviewer.present(first.clone());
        let displaced = reviewer.present(second);

        assert_eq!(displaced, Some(first));
        assert_eq!(reviewer.pending().map(|a| a.id()), Some(second_id));
    }

    #[test]
    fn test_archive_lists_newest_first() {
        let mut archive = AuditArchive::new();
        let e1 = AssessmentFixtures::entry(10, HumanDecision::Accepted);
        let e2 = AssessmentFixtures::entry(80, HumanDecision::Rejected);

        archive.append(e1.clone());
        archive.append(e2.clone());

        assert_eq!(archive.list(), vec![&e2, &e1]);
        assert_eq!(archive.latest(), Some(&e2));
        assert_newest_first(archive.history().entries());
    }

    #[test]
    fn test_empty_archive_reports_no_history() {
        let archive = AuditArchive::new();
        let history = archive.history();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(archive.list().is_empty());

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["status"], "empty");
    }

    #[test]
    fn test_entry_keeps_scorer_features() {
        let entry = AssessmentBuilder::new()
            .with_percent(62)
            .with_feature("Claim Velocity", dec!(0.31))
            .with_feature("Authority Reporting", dec!(-0.12))
            .finalized(HumanDecision::Rejected);

        let mut archive = AuditArchive::new();
        archive.append(entry);

        let json = serde_json::to_value(archive.history()).unwrap();
        let features = json["entries"][0]["top_features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["feature"], "Claim Velocity");
    }

    #[test]
    fn test_history_serializes_entries() {
        let mut archive = AuditArchive::new();
        archive.append(AssessmentFixtures::entry(55, HumanDecision::Rejected));

        let json = serde_json::to_value(archive.history()).unwrap();
        assert_eq!(json["status"], "entries");
        assert_eq!(json["entries"][0]["final_decision"], "REJECTED");
        assert_eq!(json["entries"][0]["ai_recommendation"], "REJECT");
        assert_eq!(json["entries"][0]["risk_level"], "Medium");
    }
}

// ============================================================================
// Session Scenarios
// ============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_vehicle_defaults_end_to_end() {
        let scorer = RandomScorer::with_seed(2024);
        let claim = ClaimFixtures::vehicle_default();
        let assessment = scorer.score(&claim).await.unwrap();

        assert_eq!(assessment.policy_type(), domain_claims::PolicyCategory::Vehicle);
        assert_eq!(assessment.top_features().len(), 3);
        assert_assessment_consistent(&assessment);
        let recommendation = assessment.ai_recommendation();

        let mut session = EvaluationSession::new();
        session.present(assessment);
        session.finalize(HumanDecision::Accepted);

        let list = session.archive().list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].final_decision(), HumanDecision::Accepted);
        assert_eq!(list[0].ai_recommendation(), recommendation);
    }

    #[test]
    fn test_metrics_follow_archive() {
        let mut session = EvaluationSession::new();
        session.present(AssessmentFixtures::high_risk());
        session.finalize(HumanDecision::Rejected);
        session.present(AssessmentFixtures::low_risk());
        session.finalize(HumanDecision::Rejected);

        let metrics: ReviewMetrics = session.metrics();
        assert_eq!(metrics.reviewed, 2);
        assert_eq!(metrics.rejected, 2);
        assert_eq!(metrics.confusion.true_positive, 1);
        assert_eq!(metrics.confusion.false_negative, 1);
        assert_eq!(metrics.overrides, 1);
        assert!(metrics.precision.is_some());
    }

    #[test]
    fn test_medium_risk_still_recommends_reject() {
        let assessment = AssessmentFixtures::medium_risk();
        assert_eq!(assessment.risk_level(), RiskTier::Medium);
        assert_eq!(assessment.ai_recommendation(), Recommendation::Reject);

        let mut session = EvaluationSession::new();
        session.present(assessment);
        session.finalize(HumanDecision::Accepted);

        let metrics = session.metrics();
        assert_eq!(metrics.confusion.false_positive, 1);
        assert_eq!(metrics.agreement_rate, Some(dec!(0)));
    }

    proptest! {
        #[test]
        fn prop_metrics_account_for_every_decision(
            reviews in prop::collection::vec((0u32..=100u32, decision_strategy()), 0..20),
        ) {
            let mut session = EvaluationSession::new();
            for (percent, decision) in &reviews {
                session.present(AssessmentBuilder::new().with_percent(*percent).build());
                session.finalize(*decision);
            }

            let metrics = session.metrics();
            prop_assert_eq!(metrics.reviewed as usize, reviews.len());
            prop_assert_eq!(metrics.accepted + metrics.rejected, metrics.reviewed);
            prop_assert_eq!(metrics.confusion.total(), metrics.reviewed);
            prop_assert_eq!(
                metrics.overrides,
                metrics.confusion.false_positive + metrics.confusion.false_negative
            );
            prop_assert_eq!(session.archive().len(), reviews.len());
        }
    }
}

// ============================================================================
// Application Service
// ============================================================================

mod service_tests {
    use super::*;

    fn service(percent: u32) -> ClaimEvaluationService {
        ClaimEvaluationService::new(Arc::new(FixedScorer::new(percent)))
    }

    #[tokio::test]
    async fn test_submit_twice_only_second_finalizable() {
        let service = service(40);
        let _first = service.submit(ClaimFixtures::vehicle_default()).await.unwrap();
        let second = service.submit(ClaimFixtures::medical_default()).await.unwrap();

        let entry = service.finalize(HumanDecision::Rejected).await.unwrap();
        assert_eq!(entry.assessment().id(), second.id());

        let err = service.finalize(HumanDecision::Rejected).await.unwrap_err();
        assert!(matches!(err, AssessmentError::NoPendingAssessment));
        assert_eq!(service.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_pending_and_summary() {
        let service = service(75);
        assert!(service.pending().await.is_none());
        assert_eq!(service.summary().await.phase, ReviewPhase::Idle);

        let assessment = service.submit(ClaimFixtures::vehicle_default()).await.unwrap();
        let summary = service.summary().await;

        assert_eq!(summary.phase, ReviewPhase::Pending);
        assert_eq!(summary.pending_assessment, Some(assessment.id()));
        assert_eq!(summary.pending_reference, Some(assessment.reference()));
        assert_eq!(summary.scoring_provider, "fixed");
        assert!(!summary.submission_in_flight);
    }

    #[tokio::test]
    async fn test_concurrent_submission_refused() {
        let scorer = SimulatedLatency::new(FixedScorer::new(10), Duration::from_millis(100));
        let service = ClaimEvaluationService::new(Arc::new(scorer));

        let (first, second) = tokio::join!(
            service.submit(ClaimFixtures::vehicle_default()),
            service.submit(ClaimFixtures::medical_default()),
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(AssessmentError::SubmissionInFlight)));
        assert!(!service.is_scoring());

        // The guard is released, so a later submission goes through
        assert!(service.submit(ClaimFixtures::medical_default()).await.is_ok());
    }

    #[tokio::test]
    async fn test_reads_not_blocked_while_scoring() {
        let scorer = SimulatedLatency::new(FixedScorer::new(10), Duration::from_millis(150));
        let service = ClaimEvaluationService::new(Arc::new(scorer));

        let (submitted, summary) = tokio::join!(
            service.submit(ClaimFixtures::vehicle_default()),
            async {
                tokio::time::sleep(Duration::from_millis(30)).await;
                service.summary().await
            },
        );

        assert!(submitted.is_ok());
        assert!(summary.submission_in_flight);
        assert_eq!(summary.phase, ReviewPhase::Idle);
    }

    #[tokio::test]
    async fn test_dropped_submission_releases_guard() {
        let scorer = SimulatedLatency::new(FixedScorer::new(10), Duration::from_secs(5));
        let service = ClaimEvaluationService::new(Arc::new(scorer));

        let timed_out = tokio::time::timeout(
            Duration::from_millis(20),
            service.submit(ClaimFixtures::vehicle_default()),
        )
        .await;

        assert!(timed_out.is_err());
        assert!(!service.is_scoring());
        assert!(service.pending().await.is_none());
    }

    #[tokio::test]
    async fn test_scoring_failure_leaves_slot_untouched() {
        let service = ClaimEvaluationService::new(Arc::new(UnavailableScorer));

        let err = service.submit(ClaimFixtures::vehicle_default()).await.unwrap_err();
        assert!(matches!(err, AssessmentError::Scoring(ref e) if e.is_transient()));
        assert!(service.pending().await.is_none());
        assert!(!service.is_scoring());
    }

    #[tokio::test]
    async fn test_finalized_entries_are_broadcast() {
        let service = service(90);
        let mut rx = service.subscribe_finalized();

        service.submit(ClaimFixtures::vehicle_default()).await.unwrap();
        let entry = service.finalize(HumanDecision::Accepted).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received, entry);
        assert!(!received.reviewer_agreed());
    }
}
