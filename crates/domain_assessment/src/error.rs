//! Assessment domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the assessment workflow
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("No assessment is pending review")]
    NoPendingAssessment,

    #[error("A claim submission is already being scored")]
    SubmissionInFlight,

    #[error("Fraud probability {0} is outside 0..=100")]
    InvalidProbability(Decimal),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] PortError),
}
