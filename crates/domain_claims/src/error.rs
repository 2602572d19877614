//! Claim intake errors

use thiserror::Error;

use crate::claim::PolicyCategory;

/// Errors that can occur while collecting a claim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Field {field} expects a number, got {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("Field {field} does not accept {value:?}")]
    InvalidChoice { field: String, value: String },

    #[error("Field {field} is out of range: {reason}")]
    OutOfRange { field: String, reason: String },

    #[error("Field {field} must not be empty")]
    EmptyValue { field: String },

    #[error("Field {field} is required for {category} claims")]
    MissingField { field: String, category: PolicyCategory },
}

impl IntakeError {
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        IntakeError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_choice(field: impl Into<String>, value: impl Into<String>) -> Self {
        IntakeError::InvalidChoice {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, reason: impl Into<String>) -> Self {
        IntakeError::OutOfRange {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>, category: PolicyCategory) -> Self {
        IntakeError::MissingField {
            field: field.into(),
            category,
        }
    }

    /// Name of the offending field, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            IntakeError::UnknownField(name) => Some(name),
            IntakeError::InvalidNumber { field, .. }
            | IntakeError::InvalidChoice { field, .. }
            | IntakeError::OutOfRange { field, .. }
            | IntakeError::EmptyValue { field }
            | IntakeError::MissingField { field, .. } => Some(field),
        }
    }
}
