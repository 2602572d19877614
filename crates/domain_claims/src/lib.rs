//! Claim Intake Domain
//!
//! This crate models the claim an operator submits for fraud review and the
//! intake form used to collect it.
//!
//! # Categories
//!
//! ```text
//! Vehicle -> collision, vehicle count, injuries, vehicle damage amount
//! Medical -> BMI, smoker, dependents, treatment
//! ```
//!
//! The category-specific attributes live in a tagged union, so a record can
//! never carry medical fields for a vehicle claim or the other way round.

pub mod claim;
pub mod intake;
pub mod error;

pub use claim::{
    ClaimRecord, PolicyCategory, PolicyProfile, IncidentDetails, CategoryDetails,
    VehicleDetails, MedicalDetails, ClaimFinancials,
};
pub use intake::{parse_text, ClaimForm, FormField};
pub use error::IntakeError;
