//! Assessment reviewer
//!
//! The reviewer holds at most one pending assessment. The transition rules
//! live in [`ReviewState::apply`], a pure function from state and event to
//! the next state and its outcome; [`Reviewer`] is a thin mutable holder
//! around it.

use tracing::debug;

use crate::assessment::{AssessmentResult, AuditEntry, HumanDecision};

/// Review slot state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReviewState {
    /// Nothing awaiting review
    #[default]
    Idle,
    /// One assessment awaiting a human decision
    Pending(AssessmentResult),
}

/// Input to the review state machine
#[derive(Debug, Clone)]
pub enum ReviewEvent {
    /// A new assessment arrived from intake
    Present(AssessmentResult),
    /// The reviewer decided on the pending assessment
    Finalize(HumanDecision),
}

/// What a transition produced
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    /// The assessment is now pending; any previous one was discarded
    Presented { superseded: Option<AssessmentResult> },
    /// The pending assessment was finalized and must be archived
    Finalized(AuditEntry),
    /// Finalize arrived with nothing pending
    Ignored,
}

impl ReviewState {
    /// Applies an event, returning the next state and the outcome
    pub fn apply(self, event: ReviewEvent) -> (ReviewState, ReviewOutcome) {
        match (self, event) {
            (ReviewState::Idle, ReviewEvent::Present(next)) => (
                ReviewState::Pending(next),
                ReviewOutcome::Presented { superseded: None },
            ),
            (ReviewState::Pending(previous), ReviewEvent::Present(next)) => (
                ReviewState::Pending(next),
                ReviewOutcome::Presented { superseded: Some(previous) },
            ),
            (ReviewState::Pending(pending), ReviewEvent::Finalize(decision)) => (
                ReviewState::Idle,
                ReviewOutcome::Finalized(pending.finalize(decision)),
            ),
            (ReviewState::Idle, ReviewEvent::Finalize(_)) => (ReviewState::Idle, ReviewOutcome::Ignored),
        }
    }

    pub fn pending(&self) -> Option<&AssessmentResult> {
        match self {
            ReviewState::Pending(assessment) => Some(assessment),
            ReviewState::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ReviewState::Idle)
    }
}

/// Holder of the single pending assessment
#[derive(Debug, Default)]
pub struct Reviewer {
    state: ReviewState,
}

impl Reviewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `assessment` the pending item
    ///
    /// Returns the assessment it displaced, which is dropped from the
    /// workflow and never archived.
    pub fn present(&mut self, assessment: AssessmentResult) -> Option<AssessmentResult> {
        match self.transition(ReviewEvent::Present(assessment)) {
            ReviewOutcome::Presented { superseded } => superseded,
            _ => None,
        }
    }

    /// Attaches a decision to the pending assessment
    ///
    /// Returns `None` and changes nothing when no assessment is pending.
    pub fn finalize(&mut self, decision: HumanDecision) -> Option<AuditEntry> {
        match self.transition(ReviewEvent::Finalize(decision)) {
            ReviewOutcome::Finalized(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&AssessmentResult> {
        self.state.pending()
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    fn transition(&mut self, event: ReviewEvent) -> ReviewOutcome {
        let (next, outcome) = std::mem::take(&mut self.state).apply(event);
        debug!(idle = next.is_idle(), "Review state transition");
        self.state = next;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::FraudProbability;
    use domain_claims::ClaimForm;

    fn assessment(percent: u32) -> AssessmentResult {
        let claim = ClaimForm::new().build();
        AssessmentResult::new(&claim, FraudProbability::from_percent(percent), vec![], "", "unit")
    }

    #[test]
    fn test_idle_finalize_is_ignored() {
        let (state, outcome) = ReviewState::Idle.apply(ReviewEvent::Finalize(HumanDecision::Accepted));
        assert!(state.is_idle());
        assert_eq!(outcome, ReviewOutcome::Ignored);
    }

    #[test]
    fn test_present_overwrites_pending() {
        let first = assessment(10);
        let second = assessment(80);

        let (state, _) = ReviewState::Idle.apply(ReviewEvent::Present(first.clone()));
        let (state, outcome) = state.apply(ReviewEvent::Present(second.clone()));

        assert_eq!(state.pending(), Some(&second));
        assert_eq!(outcome, ReviewOutcome::Presented { superseded: Some(first) });
    }

    #[test]
    fn test_reviewer_finalize_clears_slot() {
        let mut reviewer = Reviewer::new();
        let pending = assessment(50);
        let id = pending.id();
        assert!(reviewer.present(pending).is_none());

        let entry = reviewer.finalize(HumanDecision::Rejected).unwrap();
        assert_eq!(entry.assessment().id(), id);
        assert!(reviewer.pending().is_none());
        assert!(reviewer.finalize(HumanDecision::Rejected).is_none());
    }
}
