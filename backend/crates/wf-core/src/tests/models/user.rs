use crate::{CoreError, NewUser, TIMESTAMP_PRECISION, User};

use chrono::{Duration, SubsecRound, Utc};
use serde_json::json;

fn new_user() -> NewUser {
    NewUser {
        email: "a@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "$argon2id$v=19$m=65536,t=3,p=4$c2FsdA$aGFzaA".to_string(),
        personalization_answers: None,
        global_role_id: 1,
    }
}

fn validation_message(result: crate::Result<User>) -> String {
    match result {
        Err(CoreError::Validation { message, .. }) => message,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_from_new_generates_id_and_equal_timestamps() {
    let user = User::from_new(new_user()).unwrap();

    assert!(!user.id.is_nil());
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(user.created_at, user.created_at.trunc_subsecs(TIMESTAMP_PRECISION));
    assert_eq!(user.reset_password_token, None);
}

#[test]
fn test_from_new_ids_are_unique() {
    let a = User::from_new(new_user()).unwrap();
    let b = User::from_new(new_user()).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_first_name_empty_fails() {
    let mut input = new_user();
    input.first_name = String::new();

    let message = validation_message(User::from_new(input));
    assert!(message.contains("First name must be 1 to 32 characters long."));
}

#[test]
fn test_first_name_length_bounds() {
    let mut exact = new_user();
    exact.first_name = "a".repeat(32);
    assert!(User::from_new(exact).is_ok());

    let mut over = new_user();
    over.first_name = "a".repeat(33);
    let message = validation_message(User::from_new(over));
    assert!(message.contains("First name must be 1 to 32 characters long."));
}

#[test]
fn test_name_length_counts_characters_not_bytes() {
    let mut input = new_user();
    input.last_name = "é".repeat(32);
    assert!(User::from_new(input).is_ok());
}

#[test]
fn test_last_name_out_of_range_fails() {
    let mut input = new_user();
    input.last_name = "b".repeat(33);

    let message = validation_message(User::from_new(input));
    assert!(message.contains("Last name must be 1 to 32 characters long."));
}

#[test]
fn test_malformed_email_fails() {
    for email in ["", "not-an-email", "a@", "@example.com", "a b@example.com"] {
        let mut input = new_user();
        input.email = email.to_string();
        let message = validation_message(User::from_new(input));
        assert!(message.contains("Email must be a valid email address."), "{email}");
    }
}

#[test]
fn test_email_over_254_characters_fails() {
    let mut input = new_user();
    input.email = format!("{}@{}.com", "a".repeat(64), "b".repeat(200));
    assert!(input.email.chars().count() > 254);

    assert!(matches!(
        User::from_new(input),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn test_missing_global_role_fails() {
    let mut input = new_user();
    input.global_role_id = 0;

    let message = validation_message(User::from_new(input));
    assert!(message.contains("A global role is required."));
}

#[test]
fn test_multiple_failures_are_reported_together() {
    let mut input = new_user();
    input.first_name = String::new();
    input.last_name = String::new();

    match User::from_new(input) {
        Err(CoreError::Validation { field, message, .. }) => {
            let field = field.to_lowercase();
            assert!(field.contains("first"));
            assert!(field.contains("last"));
            assert!(message.contains("First name"));
            assert!(message.contains("Last name"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_before_update_overrides_caller_supplied_value() {
    let mut user = User::from_new(new_user()).unwrap();
    let created_at = user.created_at;

    // Caller tries to pin updated_at to the past
    user.updated_at = created_at - Duration::days(1);
    user.before_update();

    assert!(user.updated_at >= created_at);
    assert_eq!(user.created_at, created_at);
    assert_eq!(user.updated_at, user.updated_at.trunc_subsecs(TIMESTAMP_PRECISION));
}

#[test]
fn test_touch_at_later_time_moves_updated_at_past_created_at() {
    let mut user = User::from_new(new_user()).unwrap();
    let later = user.created_at + Duration::milliseconds(250);

    user.touch(later);

    assert!(user.updated_at > user.created_at);
    assert_eq!(user.updated_at, later);
}

#[test]
fn test_touch_truncates_to_milliseconds() {
    let mut user = User::from_new(new_user()).unwrap();
    let now = Utc::now();

    user.touch(now);

    assert_eq!(user.updated_at, now.trunc_subsecs(TIMESTAMP_PRECISION));
}

#[test]
fn test_serialization_uses_camel_case_and_hides_password() {
    let mut input = new_user();
    input.personalization_answers = Some(
        json!({ "codingSkill": "5", "companySize": "<20" })
            .as_object()
            .unwrap()
            .clone(),
    );
    let user = User::from_new(input).unwrap();

    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["globalRoleId"], 1);
    assert_eq!(value["personalizationAnswers"]["companySize"], "<20");
    assert!(value.get("password").is_none());
}

#[test]
fn test_registration_input_carries_password_into_user() {
    let input: NewUser = serde_json::from_value(json!({
        "email": "a@example.com",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "password": "$2a$10$hash",
        "personalizationAnswers": null,
        "globalRoleId": 1
    }))
    .unwrap();

    let user = User::from_new(input).unwrap();

    assert_eq!(user.password, "$2a$10$hash");
}
