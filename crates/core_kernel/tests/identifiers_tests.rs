//! Tests for the claim and assessment identifiers

use core_kernel::{AssessmentId, ClaimId};
use proptest::prelude::*;
use uuid::Uuid;

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(ClaimId::new(), ClaimId::new());
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
    }

    #[test]
    fn test_invalid_string_is_rejected() {
        assert!("CLM-not-a-uuid".parse::<ClaimId>().is_err());
    }
}

mod assessment_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(AssessmentId::prefix(), "ASM");
    }

    #[test]
    fn test_display_format() {
        assert!(AssessmentId::new().to_string().starts_with("ASM-"));
    }

    #[test]
    fn test_references_differ_between_ids() {
        let first = AssessmentId::new();
        let second = AssessmentId::new();
        assert_ne!(first.reference(), second.reference());
    }
}

proptest! {
    #[test]
    fn any_uuid_round_trips_through_display(bytes in any::<[u8; 16]>()) {
        let id = AssessmentId::from_uuid(Uuid::from_bytes(bytes));
        let parsed: AssessmentId = id.to_string().parse().unwrap();
        prop_assert_eq!(id, parsed);
    }
}
