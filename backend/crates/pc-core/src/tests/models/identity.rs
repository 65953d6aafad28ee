use crate::{CoreError, Identity, MAX_IDENTITY_LENGTH};

use googletest::prelude::*;

#[test]
fn given_email_when_parsed_then_ok_and_unchanged() {
    let identity = Identity::parse("jane@example.com").unwrap();

    assert_that!(identity.as_str(), eq("jane@example.com"));
}

#[test]
fn given_surrounding_whitespace_when_parsed_then_trimmed() {
    let identity = Identity::parse("  jane@example.com \n").unwrap();

    assert_eq!(identity.to_string(), "jane@example.com");
}

#[test]
fn given_empty_or_blank_when_parsed_then_rejected() {
    assert!(matches!(
        Identity::parse(""),
        Err(CoreError::InvalidIdentity { .. })
    ));
    assert!(matches!(
        Identity::parse("   "),
        Err(CoreError::InvalidIdentity { .. })
    ));
}

#[test]
fn given_path_traversal_when_parsed_then_rejected() {
    for raw in [
        "../../etc/passwd",
        "..",
        "a..b@example.com",
        "users/jane@example.com",
        "users\\jane@example.com",
        ".hidden@example.com",
    ] {
        let result = Identity::parse(raw);
        assert!(
            matches!(result, Err(CoreError::InvalidIdentity { .. })),
            "expected {raw:?} to be rejected"
        );
    }
}

#[test]
fn given_control_character_when_parsed_then_rejected() {
    let result = Identity::parse("jane\0@example.com");

    assert!(matches!(result, Err(CoreError::InvalidIdentity { .. })));
}

#[test]
fn given_identity_at_length_limit_when_parsed_then_ok() {
    let raw = "a".repeat(MAX_IDENTITY_LENGTH);

    assert_that!(Identity::parse(&raw), ok(anything()));
}

#[test]
fn given_identity_over_length_limit_when_parsed_then_rejected() {
    let raw = "a".repeat(MAX_IDENTITY_LENGTH + 1);
    let err = Identity::parse(&raw).unwrap_err();

    assert_that!(err.message(), contains_substring(MAX_IDENTITY_LENGTH.to_string()));
}

#[test]
fn given_invalid_identity_in_json_when_deserialized_then_error() {
    let result = serde_json::from_str::<Identity>("\"../secret\"");

    assert_that!(result, err(anything()));
}

#[test]
fn given_identity_when_serialized_then_plain_string() {
    let identity = Identity::parse("jane@example.com").unwrap();

    let json = serde_json::to_string(&identity).unwrap();

    assert_eq!(json, "\"jane@example.com\"");
}
