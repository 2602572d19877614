//! Claim intake form
//!
//! `ClaimForm` is the operator's draft. It holds every field of both
//! categories, so switching the policy category keeps values already typed
//! for the other category. Only the active category's attributes are copied
//! into the `ClaimRecord` produced by [`ClaimForm::build`].
//!
//! Raw text is coerced field by field. A value that does not coerce is
//! rejected and the draft keeps its previous value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::claim::{
    CategoryDetails, ClaimFinancials, ClaimRecord, IncidentDetails, MedicalDetails,
    PolicyCategory, PolicyProfile, VehicleDetails,
};
use crate::error::IntakeError;

/// A named field of the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    // Policy & profile
    PolicyType,
    MonthsAsCustomer,
    Age,
    PolicyState,
    PolicyDeductible,
    PolicyAnnualPremium,
    UmbrellaLimit,
    // Incident
    IncidentSeverity,
    AuthoritiesContacted,
    IncidentState,
    IncidentHour,
    Witnesses,
    PoliceReportAvailable,
    // Vehicle
    IncidentType,
    CollisionType,
    VehiclesInvolved,
    PropertyDamage,
    BodilyInjuries,
    VehicleClaim,
    // Medical
    Bmi,
    Smoker,
    Children,
    TreatmentType,
    // Financials
    TotalClaimAmount,
    InjuryClaim,
    PropertyClaim,
    CapitalGains,
    CapitalLoss,
}

impl FormField {
    pub const ALL: [FormField; 28] = [
        FormField::PolicyType,
        FormField::MonthsAsCustomer,
        FormField::Age,
        FormField::PolicyState,
        FormField::PolicyDeductible,
        FormField::PolicyAnnualPremium,
        FormField::UmbrellaLimit,
        FormField::IncidentSeverity,
        FormField::AuthoritiesContacted,
        FormField::IncidentState,
        FormField::IncidentHour,
        FormField::Witnesses,
        FormField::PoliceReportAvailable,
        FormField::IncidentType,
        FormField::CollisionType,
        FormField::VehiclesInvolved,
        FormField::PropertyDamage,
        FormField::BodilyInjuries,
        FormField::VehicleClaim,
        FormField::Bmi,
        FormField::Smoker,
        FormField::Children,
        FormField::TreatmentType,
        FormField::TotalClaimAmount,
        FormField::InjuryClaim,
        FormField::PropertyClaim,
        FormField::CapitalGains,
        FormField::CapitalLoss,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            FormField::PolicyType => "policy_type",
            FormField::MonthsAsCustomer => "months_as_customer",
            FormField::Age => "age",
            FormField::PolicyState => "policy_state",
            FormField::PolicyDeductible => "policy_deductible",
            FormField::PolicyAnnualPremium => "policy_annual_premium",
            FormField::UmbrellaLimit => "umbrella_limit",
            FormField::IncidentSeverity => "incident_severity",
            FormField::AuthoritiesContacted => "authorities_contacted",
            FormField::IncidentState => "incident_state",
            FormField::IncidentHour => "incident_hour_of_the_day",
            FormField::Witnesses => "witnesses",
            FormField::PoliceReportAvailable => "police_report_available",
            FormField::IncidentType => "incident_type",
            FormField::CollisionType => "collision_type",
            FormField::VehiclesInvolved => "number_of_vehicles_involved",
            FormField::PropertyDamage => "property_damage",
            FormField::BodilyInjuries => "bodily_injuries",
            FormField::VehicleClaim => "vehicle_claim",
            FormField::Bmi => "bmi",
            FormField::Smoker => "smoker",
            FormField::Children => "children",
            FormField::TreatmentType => "treatment_type",
            FormField::TotalClaimAmount => "total_claim_amount",
            FormField::InjuryClaim => "injury_claim",
            FormField::PropertyClaim => "property_claim",
            FormField::CapitalGains => "capital_gains",
            FormField::CapitalLoss => "capital_loss",
        }
    }

    /// The category this field belongs to; `None` for shared fields
    pub fn category(&self) -> Option<PolicyCategory> {
        match self {
            FormField::IncidentType
            | FormField::CollisionType
            | FormField::VehiclesInvolved
            | FormField::PropertyDamage
            | FormField::BodilyInjuries
            | FormField::VehicleClaim => Some(PolicyCategory::Vehicle),
            FormField::Bmi | FormField::Smoker | FormField::Children | FormField::TreatmentType => {
                Some(PolicyCategory::Medical)
            }
            _ => None,
        }
    }

    /// Whether the field is collected for claims of `category`
    pub fn applies_to(&self, category: PolicyCategory) -> bool {
        self.category().map_or(true, |c| c == category)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        // The legacy form misspelled deductible and hyphenated capital fields
        let canonical = match name {
            "policy_deductable" => "policy_deductible",
            "capital-gains" => "capital_gains",
            "capital-loss" => "capital_loss",
            other => other,
        };
        FormField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == canonical)
            .ok_or_else(|| IntakeError::UnknownField(name.to_string()))
    }
}

/// Operator's draft of a claim
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimForm {
    category: PolicyCategory,
    profile: PolicyProfile,
    incident: IncidentDetails,
    vehicle: VehicleDetails,
    medical: MedicalDetails,
    financials: ClaimFinancials,
}

impl Default for ClaimForm {
    fn default() -> Self {
        Self {
            category: PolicyCategory::Vehicle,
            profile: PolicyProfile {
                months_as_customer: 120,
                age: 35,
                policy_state: "NY".to_string(),
                policy_deductible: dec!(1000),
                policy_annual_premium: dec!(1200),
                umbrella_limit: dec!(0),
            },
            incident: IncidentDetails {
                severity: "Minor Damage".to_string(),
                authorities_contacted: "Police".to_string(),
                incident_state: "NY".to_string(),
                hour_of_day: 14,
                witnesses: 1,
                police_report_available: true,
            },
            vehicle: VehicleDetails {
                incident_type: "Single Vehicle Collision".to_string(),
                collision_type: "Front Collision".to_string(),
                vehicles_involved: 1,
                property_damage: false,
                bodily_injuries: 0,
                vehicle_claim: dec!(4000),
            },
            medical: MedicalDetails {
                bmi: dec!(25.5),
                smoker: false,
                dependents: 0,
                treatment_type: "Outpatient".to_string(),
            },
            financials: ClaimFinancials {
                total_claim_amount: dec!(5000),
                injury_claim: dec!(500),
                property_claim: dec!(500),
                capital_gains: dec!(0),
                capital_loss: dec!(0),
            },
        }
    }
}

impl ClaimForm {
    /// Creates a form seeded with the default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> PolicyCategory {
        self.category
    }

    /// Switches the policy category
    ///
    /// Values entered for the other category are retained in the draft but
    /// are not part of the claim built from it.
    pub fn switch_category(&mut self, category: PolicyCategory) {
        if self.category != category {
            debug!(from = %self.category, to = %category, "Switching claim category");
            self.category = category;
        }
    }

    /// Fields collected for the active category
    pub fn active_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|field| field.applies_to(self.category))
            .collect()
    }

    /// Draft vehicle attributes, kept even while the form is on Medical
    pub fn vehicle_draft(&self) -> &VehicleDetails {
        &self.vehicle
    }

    /// Draft medical attributes, kept even while the form is on Vehicle
    pub fn medical_draft(&self) -> &MedicalDetails {
        &self.medical
    }

    /// Sets a field from raw text input
    ///
    /// # Errors
    ///
    /// Returns an `IntakeError` if the text cannot be coerced into the
    /// field's type. The draft is unchanged in that case.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), IntakeError> {
        let name = field.name();
        match field {
            FormField::PolicyType => self.switch_category(raw.parse()?),
            FormField::MonthsAsCustomer => self.profile.months_as_customer = parse_count(name, raw)?,
            FormField::Age => self.profile.age = parse_age(name, raw)?,
            FormField::PolicyState => self.profile.policy_state = parse_text(name, raw)?,
            FormField::PolicyDeductible => self.profile.policy_deductible = parse_amount(name, raw)?,
            FormField::PolicyAnnualPremium => {
                self.profile.policy_annual_premium = parse_amount(name, raw)?
            }
            FormField::UmbrellaLimit => self.profile.umbrella_limit = parse_amount(name, raw)?,
            FormField::IncidentSeverity => self.incident.severity = parse_text(name, raw)?,
            FormField::AuthoritiesContacted => {
                self.incident.authorities_contacted = parse_text(name, raw)?
            }
            FormField::IncidentState => self.incident.incident_state = parse_text(name, raw)?,
            FormField::IncidentHour => self.incident.hour_of_day = parse_hour(name, raw)?,
            FormField::Witnesses => self.incident.witnesses = parse_count(name, raw)?,
            FormField::PoliceReportAvailable => {
                self.incident.police_report_available = parse_flag(name, raw)?
            }
            FormField::IncidentType => self.vehicle.incident_type = parse_text(name, raw)?,
            FormField::CollisionType => self.vehicle.collision_type = parse_text(name, raw)?,
            FormField::VehiclesInvolved => self.vehicle.vehicles_involved = parse_count(name, raw)?,
            FormField::PropertyDamage => self.vehicle.property_damage = parse_flag(name, raw)?,
            FormField::BodilyInjuries => self.vehicle.bodily_injuries = parse_count(name, raw)?,
            FormField::VehicleClaim => self.vehicle.vehicle_claim = parse_amount(name, raw)?,
            FormField::Bmi => self.medical.bmi = parse_bmi(name, raw)?,
            FormField::Smoker => self.medical.smoker = parse_flag(name, raw)?,
            FormField::Children => self.medical.dependents = parse_count(name, raw)?,
            FormField::TreatmentType => self.medical.treatment_type = parse_text(name, raw)?,
            FormField::TotalClaimAmount => {
                self.financials.total_claim_amount = parse_amount(name, raw)?
            }
            FormField::InjuryClaim => self.financials.injury_claim = parse_amount(name, raw)?,
            FormField::PropertyClaim => self.financials.property_claim = parse_amount(name, raw)?,
            FormField::CapitalGains => self.financials.capital_gains = parse_signed(name, raw)?,
            FormField::CapitalLoss => self.financials.capital_loss = parse_signed(name, raw)?,
        }
        Ok(())
    }

    /// Sets a field by its wire name
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), IntakeError> {
        let field: FormField = name.parse()?;
        self.set_field(field, raw)
    }

    /// Applies a batch of raw fields, all or nothing
    ///
    /// `policy_type` is applied first so that the batch is interpreted
    /// against the category it selects, whatever order the fields arrive in.
    pub fn apply<I, K, V>(&mut self, fields: I) -> Result<(), IntakeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut parsed = fields
            .into_iter()
            .map(|(name, value)| {
                let field: FormField = name.as_ref().parse()?;
                Ok((field, value.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, IntakeError>>()?;
        parsed.sort_by_key(|(field, _)| *field != FormField::PolicyType);

        let mut draft = self.clone();
        for (field, value) in &parsed {
            draft.set_field(*field, value)?;
        }
        *self = draft;
        Ok(())
    }

    /// Builds the claim record for the active category
    pub fn build(&self) -> ClaimRecord {
        let details = match self.category {
            PolicyCategory::Vehicle => CategoryDetails::Vehicle(self.vehicle.clone()),
            PolicyCategory::Medical => CategoryDetails::Medical(self.medical.clone()),
        };
        ClaimRecord::new(
            self.profile.clone(),
            self.incident.clone(),
            details,
            self.financials.clone(),
        )
    }
}

/// Trims free text, rejecting values that are empty once trimmed
pub fn parse_text(field: &str, raw: &str) -> Result<String, IntakeError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(IntakeError::EmptyValue { field: field.to_string() });
    }
    Ok(value.to_string())
}

fn parse_count(field: &str, raw: &str) -> Result<u32, IntakeError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| IntakeError::invalid_number(field, raw))
}

fn parse_age(field: &str, raw: &str) -> Result<u32, IntakeError> {
    let age = parse_count(field, raw)?;
    if age > 120 {
        return Err(IntakeError::out_of_range(field, "age must be at most 120"));
    }
    Ok(age)
}

fn parse_hour(field: &str, raw: &str) -> Result<u8, IntakeError> {
    let hour = raw
        .trim()
        .parse::<u8>()
        .map_err(|_| IntakeError::invalid_number(field, raw))?;
    if hour > 23 {
        return Err(IntakeError::out_of_range(field, "hour must be between 0 and 23"));
    }
    Ok(hour)
}

fn parse_signed(field: &str, raw: &str) -> Result<Decimal, IntakeError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| IntakeError::invalid_number(field, raw))
}

fn parse_amount(field: &str, raw: &str) -> Result<Decimal, IntakeError> {
    let amount = parse_signed(field, raw)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(IntakeError::out_of_range(field, "amount must not be negative"));
    }
    Ok(amount)
}

fn parse_bmi(field: &str, raw: &str) -> Result<Decimal, IntakeError> {
    let bmi = parse_signed(field, raw)?;
    if bmi <= Decimal::ZERO || bmi > dec!(100) {
        return Err(IntakeError::out_of_range(field, "BMI must be between 0 and 100"));
    }
    Ok(bmi)
}

fn parse_flag(field: &str, raw: &str) -> Result<bool, IntakeError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "YES" | "Y" | "TRUE" => Ok(true),
        "NO" | "N" | "FALSE" => Ok(false),
        _ => Err(IntakeError::invalid_choice(field, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_builds_vehicle_claim() {
        let claim = ClaimForm::new().build();
        assert_eq!(claim.category(), PolicyCategory::Vehicle);
        assert_eq!(claim.vehicle().map(|v| v.vehicle_claim), Some(dec!(4000)));
        assert!(claim.medical().is_none());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
    }

    #[test]
    fn test_legacy_field_names() {
        assert_eq!("policy_deductable".parse::<FormField>().unwrap(), FormField::PolicyDeductible);
        assert_eq!("capital-loss".parse::<FormField>().unwrap(), FormField::CapitalLoss);
    }

    #[test]
    fn test_parse_flag_variants() {
        assert!(parse_flag("smoker", "yes").unwrap());
        assert!(!parse_flag("smoker", " NO ").unwrap());
        assert!(parse_flag("smoker", "?").is_err());
    }

    #[test]
    fn test_negative_amount_rejected_but_capital_loss_allowed() {
        assert!(parse_amount("total_claim_amount", "-5").is_err());
        assert_eq!(parse_signed("capital_loss", "-62400").unwrap(), dec!(-62400));
    }
}
