use crate::CoreError;
use crate::models::personalization_answers::{from_column_text, to_column_text};

use serde_json::json;

#[test]
fn test_column_text_preserves_nested_values() {
    let answers = json!({
        "workArea": ["finance", "ops"],
        "otherWorkArea": null,
        "automationGoal": { "primary": "sync", "count": 3 }
    })
    .as_object()
    .unwrap()
    .clone();

    let text = to_column_text(&answers).unwrap();
    let parsed = from_column_text(&text).unwrap();

    assert_eq!(parsed, answers);
}

#[test]
fn test_non_object_column_text_is_rejected() {
    for text in ["[]", "\"answers\"", "42", "null"] {
        assert!(matches!(
            from_column_text(text),
            Err(CoreError::Validation { .. })
        ));
    }
}

#[test]
fn test_malformed_column_text_is_rejected() {
    assert!(matches!(
        from_column_text("{not json"),
        Err(CoreError::Json { .. })
    ));
}
