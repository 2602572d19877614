//! Claim record submitted for fraud review

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::ClaimId;
use crate::error::IntakeError;

/// Severities that count as a major loss for vehicle claims
const MAJOR_LOSS_SEVERITIES: [&str; 2] = ["Major Damage", "Total Loss"];

/// Policy category of a claim
///
/// The two categories are mutually exclusive and exhaustive. Older clients
/// send `Auto` and `Health`; both spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyCategory {
    #[serde(alias = "Auto", alias = "AUTO", alias = "VEHICLE")]
    Vehicle,
    #[serde(alias = "Health", alias = "HEALTH", alias = "MEDICAL")]
    Medical,
}

impl PolicyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyCategory::Vehicle => "Vehicle",
            PolicyCategory::Medical => "Medical",
        }
    }
}

impl fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyCategory {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vehicle" | "auto" | "automobile" => Ok(PolicyCategory::Vehicle),
            "medical" | "health" => Ok(PolicyCategory::Medical),
            _ => Err(IntakeError::invalid_choice("policy_type", s)),
        }
    }
}

/// Policyholder and policy terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyProfile {
    /// Tenure with the insurer in months
    pub months_as_customer: u32,
    /// Applicant age in years
    pub age: u32,
    /// Jurisdiction the policy was written in
    pub policy_state: String,
    pub policy_deductible: Decimal,
    pub policy_annual_premium: Decimal,
    pub umbrella_limit: Decimal,
}

/// Incident attributes shared by both categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentDetails {
    /// Free-text severity, e.g. "Minor Damage" or "Critical Care"
    pub severity: String,
    /// Authority contacted, "None" when nobody was
    pub authorities_contacted: String,
    /// Jurisdiction the incident occurred in
    pub incident_state: String,
    /// Hour of day, 0-23
    pub hour_of_day: u8,
    pub witnesses: u32,
    pub police_report_available: bool,
}

impl IncidentDetails {
    /// Whether any authority was contacted
    pub fn authorities_were_contacted(&self) -> bool {
        let contacted = self.authorities_contacted.trim();
        !contacted.is_empty() && !contacted.eq_ignore_ascii_case("none")
    }

    /// Whether the severity is a major vehicle loss
    pub fn is_major_loss(&self) -> bool {
        MAJOR_LOSS_SEVERITIES
            .iter()
            .any(|s| s.eq_ignore_ascii_case(self.severity.trim()))
    }
}

/// Vehicle-only attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub incident_type: String,
    pub collision_type: String,
    pub vehicles_involved: u32,
    pub property_damage: bool,
    pub bodily_injuries: u32,
    /// Portion of the claim for vehicle damage
    pub vehicle_claim: Decimal,
}

/// Medical-only attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalDetails {
    pub bmi: Decimal,
    pub smoker: bool,
    /// Number of dependent children
    pub dependents: u32,
    pub treatment_type: String,
}

/// Category-specific attributes, tagged by policy category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy_type")]
pub enum CategoryDetails {
    Vehicle(VehicleDetails),
    Medical(MedicalDetails),
}

impl CategoryDetails {
    pub fn category(&self) -> PolicyCategory {
        match self {
            CategoryDetails::Vehicle(_) => PolicyCategory::Vehicle,
            CategoryDetails::Medical(_) => PolicyCategory::Medical,
        }
    }
}

/// Claim amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimFinancials {
    pub total_claim_amount: Decimal,
    pub injury_claim: Decimal,
    pub property_claim: Decimal,
    pub capital_gains: Decimal,
    /// Reported as a negative amount in source data
    pub capital_loss: Decimal,
}

/// A claim submitted for fraud review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Unique identifier
    pub id: ClaimId,
    pub profile: PolicyProfile,
    pub incident: IncidentDetails,
    /// Category-specific attributes
    pub details: CategoryDetails,
    pub financials: ClaimFinancials,
    /// When the claim was submitted
    pub submitted_at: DateTime<Utc>,
}

impl ClaimRecord {
    /// Creates a newly submitted claim
    pub fn new(
        profile: PolicyProfile,
        incident: IncidentDetails,
        details: CategoryDetails,
        financials: ClaimFinancials,
    ) -> Self {
        Self {
            id: ClaimId::new(),
            profile,
            incident,
            details,
            financials,
            submitted_at: Utc::now(),
        }
    }

    /// The policy category, derived from the category payload
    pub fn category(&self) -> PolicyCategory {
        self.details.category()
    }

    /// Vehicle attributes, if this is a vehicle claim
    pub fn vehicle(&self) -> Option<&VehicleDetails> {
        match &self.details {
            CategoryDetails::Vehicle(vehicle) => Some(vehicle),
            CategoryDetails::Medical(_) => None,
        }
    }

    /// Medical attributes, if this is a medical claim
    pub fn medical(&self) -> Option<&MedicalDetails> {
        match &self.details {
            CategoryDetails::Medical(medical) => Some(medical),
            CategoryDetails::Vehicle(_) => None,
        }
    }

    pub fn age(&self) -> u32 {
        self.profile.age
    }

    pub fn months_as_customer(&self) -> u32 {
        self.profile.months_as_customer
    }

    pub fn total_claim_amount(&self) -> Decimal {
        self.financials.total_claim_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn incident(severity: &str, authorities: &str) -> IncidentDetails {
        IncidentDetails {
            severity: severity.to_string(),
            authorities_contacted: authorities.to_string(),
            incident_state: "NY".to_string(),
            hour_of_day: 14,
            witnesses: 1,
            police_report_available: true,
        }
    }

    #[test]
    fn test_category_parsing_accepts_legacy_names() {
        assert_eq!("Auto".parse::<PolicyCategory>().unwrap(), PolicyCategory::Vehicle);
        assert_eq!("health".parse::<PolicyCategory>().unwrap(), PolicyCategory::Medical);
        assert_eq!(" Medical ".parse::<PolicyCategory>().unwrap(), PolicyCategory::Medical);
        assert!("Travel".parse::<PolicyCategory>().is_err());
    }

    #[test]
    fn test_major_loss_detection() {
        assert!(incident("Major Damage", "Police").is_major_loss());
        assert!(incident("total loss", "Police").is_major_loss());
        assert!(!incident("Minor Damage", "Police").is_major_loss());
    }

    #[test]
    fn test_authorities_contacted() {
        assert!(incident("Minor Damage", "Police").authorities_were_contacted());
        assert!(!incident("Minor Damage", "None").authorities_were_contacted());
        assert!(!incident("Minor Damage", "  ").authorities_were_contacted());
    }

    #[test]
    fn test_details_accessors_follow_variant() {
        let details = CategoryDetails::Medical(MedicalDetails {
            bmi: dec!(25.5),
            smoker: false,
            dependents: 0,
            treatment_type: "Outpatient".to_string(),
        });
        assert_eq!(details.category(), PolicyCategory::Medical);
    }
}
