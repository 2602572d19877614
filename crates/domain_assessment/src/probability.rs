//! Fraud probability and the rules derived from it
//!
//! Recommendation and risk tier are both pure functions of the probability:
//!
//! | probability | recommendation | tier   |
//! |-------------|----------------|--------|
//! | `< 35`      | ACCEPT         | Low    |
//! | `35..70`    | REJECT         | Medium |
//! | `>= 70`     | REJECT         | High   |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AssessmentError;

/// Probabilities below this are recommended for acceptance
pub const ACCEPT_THRESHOLD: Decimal = dec!(35);

/// Probabilities at or above this are high risk
pub const HIGH_RISK_THRESHOLD: Decimal = dec!(70);

const MAX_PROBABILITY: Decimal = dec!(100);

/// Fraud probability as a percentage in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct FraudProbability(Decimal);

impl FraudProbability {
    /// Creates a probability, rejecting values outside `[0, 100]`
    pub fn new(value: Decimal) -> Result<Self, AssessmentError> {
        if value < Decimal::ZERO || value > MAX_PROBABILITY {
            return Err(AssessmentError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    /// Creates a probability from a whole percentage, clamped to 100
    pub fn from_percent(percent: u32) -> Self {
        Self(Decimal::from(percent.min(100)))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_probability(*self)
    }

    pub fn risk_tier(&self) -> RiskTier {
        RiskTier::from_probability(*self)
    }

    /// Whether the probability falls below the acceptance threshold
    pub fn is_low(&self) -> bool {
        self.0 < ACCEPT_THRESHOLD
    }
}

impl TryFrom<Decimal> for FraudProbability {
    type Error = AssessmentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FraudProbability> for Decimal {
    fn from(probability: FraudProbability) -> Decimal {
        probability.0
    }
}

impl fmt::Display for FraudProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

/// The model's suggested outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "ACCEPT")]
    Accept,
    #[serde(rename = "REJECT")]
    Reject,
}

impl Recommendation {
    pub fn from_probability(probability: FraudProbability) -> Self {
        if probability.is_low() {
            Recommendation::Accept
        } else {
            Recommendation::Reject
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Accept => "ACCEPT",
            Recommendation::Reject => "REJECT",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk tier shown to the reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_probability(probability: FraudProbability) -> Self {
        let value = probability.value();
        if value < ACCEPT_THRESHOLD {
            RiskTier::Low
        } else if value < HIGH_RISK_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(value: Decimal) -> FraudProbability {
        FraudProbability::new(value).unwrap()
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(p(dec!(0)).risk_tier(), RiskTier::Low);
        assert_eq!(p(dec!(34.99)).risk_tier(), RiskTier::Low);
        assert_eq!(p(dec!(35)).risk_tier(), RiskTier::Medium);
        assert_eq!(p(dec!(69.99)).risk_tier(), RiskTier::Medium);
        assert_eq!(p(dec!(70)).risk_tier(), RiskTier::High);
        assert_eq!(p(dec!(100)).risk_tier(), RiskTier::High);
    }

    #[test]
    fn test_recommendation_threshold() {
        assert_eq!(p(dec!(34)).recommendation(), Recommendation::Accept);
        assert_eq!(p(dec!(35)).recommendation(), Recommendation::Reject);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(FraudProbability::new(dec!(-0.01)).is_err());
        assert!(FraudProbability::new(dec!(100.01)).is_err());
    }

    #[test]
    fn test_from_percent_clamps() {
        assert_eq!(FraudProbability::from_percent(250).value(), dec!(100));
    }

    #[test]
    fn test_display() {
        assert_eq!(p(dec!(42.50)).to_string(), "42.5%");
        assert_eq!(Recommendation::Reject.to_string(), "REJECT");
    }
}
