//! Review metrics computed from the audit archive
//!
//! The human decision is treated as ground truth and the AI recommendation as
//! the prediction. The positive class is fraud, so `REJECT`/`REJECTED` is
//! positive. Ratios with an empty denominator are `None` rather than zero.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::archive::AuditArchive;
use crate::assessment::{AuditEntry, HumanDecision};
use crate::probability::Recommendation;

const RATIO_SCALE: u32 = 4;

/// Counts of prediction against decision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positive: u32,
    pub false_positive: u32,
    pub true_negative: u32,
    pub false_negative: u32,
}

impl ConfusionMatrix {
    pub fn record(&mut self, entry: &AuditEntry) {
        match (entry.ai_recommendation(), entry.final_decision()) {
            (Recommendation::Reject, HumanDecision::Rejected) => self.true_positive += 1,
            (Recommendation::Reject, HumanDecision::Accepted) => self.false_positive += 1,
            (Recommendation::Accept, HumanDecision::Accepted) => self.true_negative += 1,
            (Recommendation::Accept, HumanDecision::Rejected) => self.false_negative += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }

    pub fn accuracy(&self) -> Option<Decimal> {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    pub fn precision(&self) -> Option<Decimal> {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn recall(&self) -> Option<Decimal> {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// Harmonic mean of precision and recall, from the raw counts
    pub fn f1(&self) -> Option<Decimal> {
        let tp = self.true_positive;
        ratio(2 * tp, 2 * tp + self.false_positive + self.false_negative)
    }
}

fn ratio(numerator: u32, denominator: u32) -> Option<Decimal> {
    if denominator == 0 {
        return None;
    }
    let value = Decimal::from(numerator) / Decimal::from(denominator);
    Some(value.round_dp(RATIO_SCALE))
}

/// Aggregate view of every finalized assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewMetrics {
    pub reviewed: u32,
    pub accepted: u32,
    pub rejected: u32,
    /// Decisions that went against the AI recommendation
    pub overrides: u32,
    pub confusion: ConfusionMatrix,
    pub accuracy: Option<Decimal>,
    pub precision: Option<Decimal>,
    pub recall: Option<Decimal>,
    pub f1: Option<Decimal>,
    /// Share of decisions that followed the recommendation; equals accuracy
    pub agreement_rate: Option<Decimal>,
}

impl ReviewMetrics {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a AuditEntry>) -> Self {
        let mut confusion = ConfusionMatrix::default();
        let mut accepted = 0;
        let mut rejected = 0;

        for entry in entries {
            confusion.record(entry);
            match entry.final_decision() {
                HumanDecision::Accepted => accepted += 1,
                HumanDecision::Rejected => rejected += 1,
            }
        }

        let reviewed = confusion.total();
        let overrides = confusion.false_positive + confusion.false_negative;

        Self {
            reviewed,
            accepted,
            rejected,
            overrides,
            confusion,
            accuracy: confusion.accuracy(),
            precision: confusion.precision(),
            recall: confusion.recall(),
            f1: confusion.f1(),
            agreement_rate: ratio(reviewed - overrides, reviewed),
        }
    }

    pub fn from_archive(archive: &AuditArchive) -> Self {
        Self::from_entries(archive.iter_chronological())
    }
}
