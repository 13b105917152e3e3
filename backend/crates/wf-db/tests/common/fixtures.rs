#![allow(dead_code)]

use wf_core::NewUser;

use serde_json::json;

/// Registration input with sensible defaults
pub fn create_new_user(email: &str, global_role_id: i64) -> NewUser {
    NewUser {
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "$2a$10$abcdefghijklmnopqrstuv".to_string(),
        personalization_answers: None,
        global_role_id,
    }
}

/// Registration input carrying onboarding answers
pub fn create_new_user_with_answers(email: &str, global_role_id: i64) -> NewUser {
    let answers = json!({
        "codingSkill": "5",
        "companySize": "<20",
        "workArea": ["engineering", "ops"],
    });

    NewUser {
        personalization_answers: answers.as_object().cloned(),
        ..create_new_user(email, global_role_id)
    }
}

/// Wait long enough that the next millisecond-precision timestamp differs
pub async fn wait_past_current_millisecond() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}
