//! Strongly-typed identifiers for domain entities
//!
//! Claims and assessments are both keyed by UUIDs. Wrapping them in distinct
//! newtypes keeps an assessment id from being passed where a claim id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the short human-facing reference shown to reviewers
const REFERENCE_LEN: usize = 8;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered identifier (v7)
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }

            /// Short uppercase reference, e.g. `ASM-3F9A0C1B`
            ///
            /// Taken from the random tail of the UUID so that two ids minted
            /// in the same millisecond still get different references.
            pub fn reference(&self) -> String {
                let simple = self.0.simple().to_string();
                let tail = &simple[simple.len() - REFERENCE_LEN..];
                format!("{}-{}", $prefix, tail.to_uppercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(ClaimId, "CLM");
define_id!(AssessmentId, "ASM");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_display() {
        let id = ClaimId::new();
        assert!(id.to_string().starts_with("CLM-"));
    }

    #[test]
    fn test_id_parsing_with_and_without_prefix() {
        let id = AssessmentId::new();
        let parsed: AssessmentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);

        let bare: AssessmentId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, bare);
    }

    #[test]
    fn test_reference_format() {
        let id = AssessmentId::new();
        let reference = id.reference();
        assert!(reference.starts_with("ASM-"));
        assert_eq!(reference.len(), "ASM-".len() + REFERENCE_LEN);
        assert_eq!(reference, reference.to_uppercase());
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        let first = ClaimId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = ClaimId::new();
        assert!(first < second);
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let claim_id = ClaimId::from(uuid);
        let back: Uuid = claim_id.into();
        assert_eq!(uuid, back);
    }
}
