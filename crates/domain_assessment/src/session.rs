//! Evaluation session
//!
//! Owns the reviewer and the archive for one running process. Every state
//! change is recorded as a [`SessionEvent`] that callers drain with
//! [`EvaluationSession::take_events`], following the same pattern the
//! aggregates use for domain events.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use core_kernel::AssessmentId;
use crate::archive::{AuditArchive, History};
use crate::assessment::{AssessmentResult, AuditEntry, HumanDecision};
use crate::metrics::ReviewMetrics;
use crate::review::Reviewer;

/// Whether the session is waiting for a human decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPhase {
    Idle,
    Pending,
}

/// Events raised by the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    AssessmentPresented {
        assessment_id: AssessmentId,
        occurred_at: DateTime<Utc>,
    },
    /// A pending assessment was replaced before anyone decided on it
    AssessmentSuperseded {
        assessment_id: AssessmentId,
        replaced_by: AssessmentId,
        occurred_at: DateTime<Utc>,
    },
    AssessmentFinalized {
        assessment_id: AssessmentId,
        decision: HumanDecision,
        occurred_at: DateTime<Utc>,
    },
    FinalizeIgnored {
        decision: HumanDecision,
        occurred_at: DateTime<Utc>,
    },
}

/// One reviewer, one archive
#[derive(Debug, Default)]
pub struct EvaluationSession {
    reviewer: Reviewer,
    archive: AuditArchive,
    events: Vec<SessionEvent>,
}

impl EvaluationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts an assessment in front of the reviewer
    pub fn present(&mut self, assessment: AssessmentResult) {
        let assessment_id = assessment.id();
        let now = Utc::now();

        if let Some(previous) = self.reviewer.present(assessment) {
            info!(
                superseded = %previous.id(),
                replaced_by = %assessment_id,
                "Pending assessment replaced before review"
            );
            self.events.push(SessionEvent::AssessmentSuperseded {
                assessment_id: previous.id(),
                replaced_by: assessment_id,
                occurred_at: now,
            });
        }

        self.events.push(SessionEvent::AssessmentPresented {
            assessment_id,
            occurred_at: now,
        });
    }

    /// Finalizes the pending assessment and archives it
    ///
    /// With nothing pending this changes nothing and returns `None`.
    pub fn finalize(&mut self, decision: HumanDecision) -> Option<AuditEntry> {
        let now = Utc::now();
        match self.reviewer.finalize(decision) {
            Some(entry) => {
                self.archive.append(entry.clone());
                self.events.push(SessionEvent::AssessmentFinalized {
                    assessment_id: entry.assessment().id(),
                    decision,
                    occurred_at: now,
                });
                Some(entry)
            }
            None => {
                debug!(%decision, "Finalize ignored, nothing pending");
                self.events.push(SessionEvent::FinalizeIgnored {
                    decision,
                    occurred_at: now,
                });
                None
            }
        }
    }

    pub fn pending(&self) -> Option<&AssessmentResult> {
        self.reviewer.pending()
    }

    pub fn phase(&self) -> ReviewPhase {
        if self.reviewer.pending().is_some() {
            ReviewPhase::Pending
        } else {
            ReviewPhase::Idle
        }
    }

    pub fn archive(&self) -> &AuditArchive {
        &self.archive
    }

    pub fn history(&self) -> History {
        self.archive.history()
    }

    pub fn metrics(&self) -> ReviewMetrics {
        ReviewMetrics::from_archive(&self.archive)
    }

    /// Drains the events recorded since the last call
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
