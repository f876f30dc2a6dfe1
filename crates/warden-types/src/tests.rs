//! Unit tests for warden-types

use proptest::prelude::*;
use test_case::test_case;

use crate::{AccessModel, Clearance, Device, FileId, Outcome, ParseModelError, Role, UserId};

// ============================================================================
// UserId
// ============================================================================

#[test]
fn user_id_is_case_normalized() {
    assert_eq!(UserId::new("DENG"), UserId::new("deng"));
    assert_eq!(UserId::new("  Luna\n").as_str(), "luna");
}

#[test]
fn user_id_serializes_as_plain_string() {
    let json = serde_json::to_string(&UserId::new("Keng")).unwrap();
    assert_eq!(json, "\"keng\"");

    let back: UserId = serde_json::from_str("\"RED\"").unwrap();
    assert_eq!(back, UserId::new("red"));
}

// ============================================================================
// Role / Clearance
// ============================================================================

#[test_case("doctor", Role::Doctor; "doctor")]
#[test_case("admin", Role::Admin; "admin")]
#[test_case("nurse", Role::Nurse; "nurse")]
#[test_case("assistant", Role::Assistant; "assistant")]
fn builtin_roles_parse(text: &str, expected: Role) {
    let role: Role = text.parse().unwrap();
    assert_eq!(role, expected);
    assert_eq!(role.to_string(), text);
}

#[test]
fn unknown_role_is_kept_verbatim() {
    let role = Role::from("janitor");
    assert_eq!(role, Role::custom("janitor"));
    assert_eq!(role.as_str(), "janitor");
}

#[test]
fn role_match_is_case_sensitive() {
    assert_ne!(Role::from("Admin"), Role::Admin);
}

#[test]
fn custom_role_with_builtin_label_equals_builtin() {
    assert_eq!(Role::custom("admin"), Role::Admin);

    let mut set = std::collections::HashSet::new();
    set.insert(Role::Admin);
    assert!(set.contains(&Role::custom("admin")));
}

#[test_case("top-secret", Clearance::TopSecret; "top secret")]
#[test_case("secret", Clearance::Secret; "secret")]
#[test_case("confidential", Clearance::Confidential; "confidential")]
fn builtin_clearances_parse(text: &str, expected: Clearance) {
    assert_eq!(Clearance::from(text), expected);
    assert_eq!(expected.to_string(), text);
}

#[test]
fn clearances_are_flat_tags() {
    // No dominance: top-secret is simply a different label from secret.
    assert_ne!(Clearance::TopSecret, Clearance::Secret);
    assert_ne!(Clearance::Secret, Clearance::Confidential);
    assert_eq!(Clearance::custom("top-secret"), Clearance::TopSecret);
}

#[test]
fn role_and_clearance_round_trip_through_serde() {
    let json = serde_json::to_string(&Role::Assistant).unwrap();
    assert_eq!(json, "\"assistant\"");
    let back: Clearance = serde_json::from_str("\"top-secret\"").unwrap();
    assert_eq!(back, Clearance::TopSecret);
}

// ============================================================================
// Device / FileId
// ============================================================================

#[test]
fn file_ids_are_case_sensitive() {
    assert_ne!(FileId::new("File1"), FileId::new("file1"));
}

#[test]
fn device_display_is_raw_label() {
    assert_eq!(Device::new("company-laptop").to_string(), "company-laptop");
}

// ============================================================================
// AccessModel
// ============================================================================

#[test_case("1", AccessModel::Mac; "menu one")]
#[test_case("2", AccessModel::Dac; "menu two")]
#[test_case("3", AccessModel::Rbac; "menu three")]
#[test_case("4", AccessModel::Abac; "menu four")]
#[test_case("mac", AccessModel::Mac; "lower name")]
#[test_case("RBAC", AccessModel::Rbac; "upper name")]
#[test_case(" abac ", AccessModel::Abac; "padded name")]
fn access_model_parses(text: &str, expected: AccessModel) {
    assert_eq!(text.parse::<AccessModel>(), Ok(expected));
}

#[test]
fn access_model_rejects_unknown_choice() {
    assert_eq!(
        "5".parse::<AccessModel>(),
        Err(ParseModelError("5".to_string()))
    );
    assert!("pbac".parse::<AccessModel>().is_err());
}

#[test]
fn access_model_menu_numbers_follow_all_order() {
    for (index, model) in AccessModel::ALL.iter().enumerate() {
        assert_eq!(usize::from(model.menu_number()), index + 1);
        assert_eq!(
            model.menu_number().to_string().parse::<AccessModel>(),
            Ok(*model)
        );
    }
}

#[test]
fn access_model_tags() {
    assert_eq!(AccessModel::Mac.to_string(), "MAC");
    assert_eq!(AccessModel::Dac.to_string(), "DAC");
    assert_eq!(AccessModel::Rbac.to_string(), "RBAC");
    assert_eq!(AccessModel::Abac.to_string(), "ABAC");
}

// ============================================================================
// Outcome
// ============================================================================

#[test]
fn outcome_display_matches_log_wording() {
    assert_eq!(Outcome::Granted.to_string(), "Access Granted");
    assert_eq!(Outcome::Denied.to_string(), "Access Denied");
}

#[test]
fn outcome_converts_from_bool() {
    assert_eq!(Outcome::from(true), Outcome::Granted);
    assert_eq!(Outcome::from(false), Outcome::Denied);
    assert!(bool::from(Outcome::Granted));
    assert!(!Outcome::Denied.is_granted());
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_user_id_normalization_is_idempotent(name in "[A-Za-z ]{0,16}") {
        let once = UserId::new(&name);
        let twice = UserId::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_role_text_round_trips(label in "[a-z-]{1,12}") {
        let role = Role::from(label.as_str());
        prop_assert_eq!(role.as_str(), label.as_str());
    }
}
