use super::*;
use crate::error::ValidationError;
use serde_json::json;

fn parse(value: serde_json::Value) -> Result<Requirement, ValidationError> {
    RequirementParser::parse_value(&value)
}

#[test]
fn parse_full_input() {
    let requirement = parse(json!({
        "title": "Chatbot",
        "description": "Build a support chatbot",
        "constraints": ["respond within 2s", "mind personal data"],
        "goals": ["raise satisfaction", "cut support cost"],
        "context": "e-commerce support desk",
    }))
    .unwrap();

    assert_eq!(requirement.title, "Chatbot");
    assert_eq!(requirement.description, "Build a support chatbot");
    assert_eq!(
        requirement.constraints,
        vec!["respond within 2s", "mind personal data"]
    );
    assert_eq!(
        requirement.goals,
        vec!["raise satisfaction", "cut support cost"]
    );
    assert_eq!(
        requirement.context,
        Some("e-commerce support desk".to_string())
    );
}

#[test]
fn parse_minimal_input_defaults_sequences() {
    let requirement = parse(json!({
        "title": "Test Title",
        "description": "Test Description",
    }))
    .unwrap();

    assert_eq!(requirement.title, "Test Title");
    assert_eq!(requirement.description, "Test Description");
    assert!(requirement.constraints.is_empty());
    assert!(requirement.goals.is_empty());
    assert_eq!(requirement.context, None);
}

#[test]
fn parse_preserves_title_and_description_verbatim() {
    let requirement = parse(json!({
        "title": "  spaced  title  ",
        "description": "multi\nline\ndescription",
    }))
    .unwrap();

    assert_eq!(requirement.title, "  spaced  title  ");
    assert_eq!(requirement.description, "multi\nline\ndescription");
}

#[test]
fn parse_missing_title_fails() {
    let err = parse(json!({"description": "only a description"})).unwrap_err();
    assert_eq!(err, ValidationError::MissingField { field: "title" });
}

#[test]
fn parse_missing_description_fails() {
    let err = parse(json!({"title": "only a title"})).unwrap_err();
    assert_eq!(err, ValidationError::MissingField { field: "description" });
}

#[test]
fn parse_null_title_fails() {
    let err = parse(json!({"title": null, "description": "d"})).unwrap_err();
    assert_eq!(err, ValidationError::NullField { field: "title" });
}

#[test]
fn parse_non_text_title_fails() {
    let err = parse(json!({"title": 7, "description": "d"})).unwrap_err();
    assert_eq!(err, ValidationError::ExpectedText { field: "title" });
}

#[test]
fn parse_empty_title_fails() {
    let err = parse(json!({"title": "", "description": "d"})).unwrap_err();
    assert_eq!(err, ValidationError::EmptyText { field: "title" });
}

#[test]
fn parse_non_text_constraint_element_fails() {
    let err = parse(json!({
        "title": "t",
        "description": "d",
        "constraints": ["fine", {"not": "text"}],
    }))
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::NonTextElement {
            field: "constraints",
            index: 1
        }
    );
}

#[test]
fn parse_non_sequence_goals_fails() {
    let err = parse(json!({
        "title": "t",
        "description": "d",
        "goals": "not a sequence",
    }))
    .unwrap_err();
    assert_eq!(err, ValidationError::ExpectedTextSequence { field: "goals" });
}

#[test]
fn parse_null_context_is_absent() {
    let requirement = parse(json!({
        "title": "t",
        "description": "d",
        "context": null,
    }))
    .unwrap();
    assert_eq!(requirement.context, None);
}

#[test]
fn parse_empty_context_is_present() {
    // Empty string and absent are distinct states for context.
    let requirement = parse(json!({
        "title": "t",
        "description": "d",
        "context": "",
    }))
    .unwrap();
    assert_eq!(requirement.context, Some(String::new()));
}

#[test]
fn parse_ignores_unknown_fields() {
    let requirement = parse(json!({
        "title": "t",
        "description": "d",
        "priority": "high",
        "owner": {"name": "someone"},
    }))
    .unwrap();
    assert_eq!(requirement.title, "t");
}

#[test]
fn parse_rejects_non_mapping_input() {
    let err = parse(json!(["title", "description"])).unwrap_err();
    assert_eq!(err, ValidationError::NotAMapping { found: "sequence" });
}

#[test]
fn requirement_round_trips_through_serde() {
    let requirement = parse(json!({
        "title": "t",
        "description": "d",
        "constraints": ["c"],
        "goals": ["g"],
        "context": "x",
    }))
    .unwrap();

    let serialized = serde_json::to_value(&requirement).unwrap();
    let reparsed = RequirementParser::parse_value(&serialized).unwrap();
    assert_eq!(requirement, reparsed);
}

#[test]
fn requirement_without_context_serializes_without_the_key() {
    let requirement = parse(json!({"title": "t", "description": "d"})).unwrap();
    let serialized = serde_json::to_value(&requirement).unwrap();
    assert!(serialized.as_object().unwrap().get("context").is_none());
}
