//! Claim evaluation application service
//!
//! Coordinates the scoring port with the evaluation session. The session sits
//! behind a `RwLock`; scoring runs before the lock is taken so reviewers can
//! read the pending item and the archive while a claim is being scored.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, instrument, warn};

use core_kernel::{AssessmentId, HealthCheckResult};
use domain_claims::ClaimRecord;
use crate::archive::History;
use crate::assessment::{AssessmentResult, AuditEntry, HumanDecision};
use crate::error::AssessmentError;
use crate::metrics::ReviewMetrics;
use crate::scoring::ScoringProvider;
use crate::session::{EvaluationSession, ReviewPhase, SessionEvent};

const FINALIZED_CHANNEL_CAPACITY: usize = 64;

/// Snapshot of the session for status displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub phase: ReviewPhase,
    pub pending_assessment: Option<AssessmentId>,
    pub pending_reference: Option<String>,
    pub submission_in_flight: bool,
    pub archived: usize,
    pub scoring_provider: String,
}

/// Releases the in-flight flag when scoring ends, even if the future is dropped
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Submit, review, and audit operations for one session
pub struct ClaimEvaluationService {
    scorer: Arc<dyn ScoringProvider>,
    session: RwLock<EvaluationSession>,
    in_flight: AtomicBool,
    finalized_tx: broadcast::Sender<AuditEntry>,
}

impl ClaimEvaluationService {
    pub fn new(scorer: Arc<dyn ScoringProvider>) -> Self {
        let (finalized_tx, _) = broadcast::channel(FINALIZED_CHANNEL_CAPACITY);
        Self {
            scorer,
            session: RwLock::new(EvaluationSession::new()),
            in_flight: AtomicBool::new(false),
            finalized_tx,
        }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Scores a claim and makes the result the pending assessment
    ///
    /// # Errors
    ///
    /// - `SubmissionInFlight` if another claim is still being scored
    /// - `Scoring` if the provider fails; the pending slot is left as it was
    #[instrument(skip(self, claim), fields(claim_id = %claim.id, category = %claim.category()))]
    pub async fn submit(&self, claim: ClaimRecord) -> Result<AssessmentResult, AssessmentError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or_else(|| {
            warn!("Submission refused, scoring already in progress");
            AssessmentError::SubmissionInFlight
        })?;

        let assessment = self.scorer.score(&claim).await?;
        info!(
            assessment_id = %assessment.id(),
            probability = %assessment.fraud_probability(),
            recommendation = %assessment.ai_recommendation(),
            risk = %assessment.risk_level(),
            "Claim scored"
        );

        let mut session = self.session.write().await;
        session.present(assessment.clone());
        log_events(session.take_events());

        Ok(assessment)
    }

    /// Records the reviewer's decision on the pending assessment
    ///
    /// # Errors
    ///
    /// Returns `NoPendingAssessment` when nothing is awaiting review; the
    /// archive is unchanged in that case.
    #[instrument(skip(self))]
    pub async fn finalize(&self, decision: HumanDecision) -> Result<AuditEntry, AssessmentError> {
        let mut session = self.session.write().await;
        let entry = session.finalize(decision);
        log_events(session.take_events());
        drop(session);

        let entry = entry.ok_or(AssessmentError::NoPendingAssessment)?;
        // No subscribers is fine
        let _ = self.finalized_tx.send(entry.clone());
        Ok(entry)
    }

    pub async fn pending(&self) -> Option<AssessmentResult> {
        self.session.read().await.pending().cloned()
    }

    pub async fn history(&self) -> History {
        self.session.read().await.history()
    }

    pub async fn metrics(&self) -> ReviewMetrics {
        self.session.read().await.metrics()
    }

    pub async fn summary(&self) -> SessionSummary {
        let session = self.session.read().await;
        let pending = session.pending();
        SessionSummary {
            phase: session.phase(),
            pending_assessment: pending.map(|a| a.id()),
            pending_reference: pending.map(|a| a.reference()),
            submission_in_flight: self.is_scoring(),
            archived: session.archive().len(),
            scoring_provider: self.scorer.name().to_string(),
        }
    }

    pub fn is_scoring(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn health(&self) -> HealthCheckResult {
        self.scorer.health_check().await
    }

    /// Receives every entry as it is archived
    pub fn subscribe_finalized(&self) -> broadcast::Receiver<AuditEntry> {
        self.finalized_tx.subscribe()
    }
}

fn log_events(events: Vec<SessionEvent>) {
    for event in events {
        match event {
            SessionEvent::AssessmentPresented { assessment_id, .. } => {
                info!(%assessment_id, "Assessment awaiting review");
            }
            SessionEvent::AssessmentSuperseded { assessment_id, replaced_by, .. } => {
                warn!(%assessment_id, %replaced_by, "Pending assessment discarded");
            }
            SessionEvent::AssessmentFinalized { assessment_id, decision, .. } => {
                info!(%assessment_id, %decision, "Assessment finalized and archived");
            }
            SessionEvent::FinalizeIgnored { decision, .. } => {
                warn!(%decision, "Decision received with no assessment pending");
            }
        }
    }
}
