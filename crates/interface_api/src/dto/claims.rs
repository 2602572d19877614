//! Claims DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use validator::{Validate, ValidationError};

use domain_claims::{
    parse_text, CategoryDetails, ClaimFinancials, ClaimRecord, IncidentDetails, IntakeError, MedicalDetails,
    PolicyCategory, PolicyProfile, VehicleDetails,
};

/// Structured claim submission
///
/// Field names match the intake form. Every shared field is required.
/// Vehicle and medical fields are optional on the wire; only those of
/// `policy_type` are required, and the others are ignored. Text is trimmed
/// and must not be blank, as on the form.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitClaimRequest {
    pub policy_type: PolicyCategory,

    pub months_as_customer: u32,
    #[validate(range(max = 120))]
    pub age: u32,
    #[validate(custom(function = "not_blank"))]
    pub policy_state: String,
    #[validate(custom(function = "non_negative"))]
    #[serde(alias = "policy_deductable")]
    pub policy_deductible: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub policy_annual_premium: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub umbrella_limit: Decimal,

    #[validate(custom(function = "not_blank"))]
    pub incident_severity: String,
    #[validate(custom(function = "not_blank"))]
    pub authorities_contacted: String,
    #[validate(custom(function = "not_blank"))]
    pub incident_state: String,
    #[validate(range(max = 23))]
    pub incident_hour_of_the_day: u8,
    pub witnesses: u32,
    pub police_report_available: bool,

    pub incident_type: Option<String>,
    pub collision_type: Option<String>,
    pub number_of_vehicles_involved: Option<u32>,
    pub property_damage: Option<bool>,
    pub bodily_injuries: Option<u32>,
    pub vehicle_claim: Option<Decimal>,

    pub bmi: Option<Decimal>,
    pub smoker: Option<bool>,
    pub children: Option<u32>,
    pub treatment_type: Option<String>,

    #[validate(custom(function = "non_negative"))]
    pub total_claim_amount: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub injury_claim: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub property_claim: Decimal,
    #[serde(alias = "capital-gains")]
    pub capital_gains: Decimal,
    #[serde(alias = "capital-loss")]
    pub capital_loss: Decimal,
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank_text"));
    }
    Ok(())
}

fn required<T>(value: Option<T>, field: &str, category: PolicyCategory) -> Result<T, IntakeError> {
    value.ok_or_else(|| IntakeError::missing(field, category))
}

fn required_text(
    value: Option<String>,
    field: &str,
    category: PolicyCategory,
) -> Result<String, IntakeError> {
    parse_text(field, &required(value, field, category)?)
}

impl SubmitClaimRequest {
    /// Takes the payload of the selected category, leaving the rest behind
    fn take_details(&mut self) -> Result<CategoryDetails, IntakeError> {
        let category = self.policy_type;
        match category {
            PolicyCategory::Vehicle => {
                let vehicle_claim = required(self.vehicle_claim, "vehicle_claim", category)?;
                if non_negative(&vehicle_claim).is_err() {
                    return Err(IntakeError::out_of_range("vehicle_claim", "amount must not be negative"));
                }
                Ok(CategoryDetails::Vehicle(VehicleDetails {
                    incident_type: required_text(self.incident_type.take(), "incident_type", category)?,
                    collision_type: required_text(self.collision_type.take(), "collision_type", category)?,
                    vehicles_involved: required(
                        self.number_of_vehicles_involved,
                        "number_of_vehicles_involved",
                        category,
                    )?,
                    property_damage: required(self.property_damage, "property_damage", category)?,
                    bodily_injuries: required(self.bodily_injuries, "bodily_injuries", category)?,
                    vehicle_claim,
                }))
            }
            PolicyCategory::Medical => {
                let bmi = required(self.bmi, "bmi", category)?;
                if bmi <= Decimal::ZERO || bmi > Decimal::ONE_HUNDRED {
                    return Err(IntakeError::out_of_range("bmi", "BMI must be between 0 and 100"));
                }
                Ok(CategoryDetails::Medical(MedicalDetails {
                    bmi,
                    smoker: required(self.smoker, "smoker", category)?,
                    dependents: required(self.children, "children", category)?,
                    treatment_type: required_text(self.treatment_type.take(), "treatment_type", category)?,
                }))
            }
        }
    }
}

impl TryFrom<SubmitClaimRequest> for ClaimRecord {
    type Error = IntakeError;

    fn try_from(mut request: SubmitClaimRequest) -> Result<Self, Self::Error> {
        let details = request.take_details()?;

        let profile = PolicyProfile {
            months_as_customer: request.months_as_customer,
            age: request.age,
            policy_state: parse_text("policy_state", &request.policy_state)?,
            policy_deductible: request.policy_deductible,
            policy_annual_premium: request.policy_annual_premium,
            umbrella_limit: request.umbrella_limit,
        };
        let incident = IncidentDetails {
            severity: parse_text("incident_severity", &request.incident_severity)?,
            authorities_contacted: parse_text(
                "authorities_contacted",
                &request.authorities_contacted,
            )?,
            incident_state: parse_text("incident_state", &request.incident_state)?,
            hour_of_day: request.incident_hour_of_the_day,
            witnesses: request.witnesses,
            police_report_available: request.police_report_available,
        };
        let financials = ClaimFinancials {
            total_claim_amount: request.total_claim_amount,
            injury_claim: request.injury_claim,
            property_claim: request.property_claim,
            capital_gains: request.capital_gains,
            capital_loss: request.capital_loss,
        };

        Ok(ClaimRecord::new(profile, incident, details, financials))
    }
}

/// Raw form submission applied over the form defaults
///
/// Values are coerced the same way typed text is; JSON numbers and booleans
/// are accepted and treated as their text form.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitFormRequest {
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl SubmitFormRequest {
    /// Field name and raw text pairs
    pub fn into_text_fields(self) -> Result<Vec<(String, String)>, IntakeError> {
        self.fields
            .into_iter()
            .map(|(name, value)| {
                let text = match value {
                    Value::String(text) => text,
                    Value::Number(number) => number.to_string(),
                    Value::Bool(true) => "YES".to_string(),
                    Value::Bool(false) => "NO".to_string(),
                    other => return Err(IntakeError::invalid_choice(name, other.to_string())),
                };
                Ok((name, text))
            })
            .collect()
    }
}
