//! Integration tests for the serde representation of outcomes.

#![cfg(feature = "serde")]

use nebula_validated::prelude::*;
use serde_json::json;

#[test]
fn valid_serializes_as_tagged_value() {
    let outcome: Validated<u32, String> = Validated::valid(7);
    assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({ "valid": 7 }));
}

#[test]
fn invalid_serializes_errors_in_order() {
    let outcome: Validated<u32, Violation> = Validated::invalid_all(errors![
        Violation::required().with_field("name"),
        Violation::min_length(3),
    ]);

    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({
            "invalid": [
                { "code": "required", "message": "value is required", "field": "name" },
                { "code": "min_length", "message": "must be at least 3 characters" }
            ]
        })
    );
}

#[test]
fn outcome_survives_json() {
    let outcome = zip(
        non_blank_string(Violation::required),
        non_blank_string(|| Violation::blank().with_field("alias")),
    )
    .parse(None);

    let text = serde_json::to_string(&outcome).unwrap();
    let back: Validated<(String, String), Violation> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn empty_error_list_is_rejected() {
    let err = serde_json::from_value::<Validated<u32, String>>(json!({ "invalid": [] }))
        .unwrap_err();
    assert!(err.to_string().contains("at least one error"));
}

#[test]
fn errors_deserialize_from_plain_array() {
    let errors: Errors<String> = serde_json::from_value(json!(["a", "b"])).unwrap();
    assert_eq!(errors.into_vec(), vec!["a".to_string(), "b".to_string()]);
}
