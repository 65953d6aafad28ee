use crate::{CoreError, MAX_COOKIE_PREFERENCE_LENGTH, UserPreferences};

use googletest::prelude::*;

#[test]
fn given_defaults_then_only_operational_messages_and_essential_cookies_are_on() {
    let prefs = UserPreferences::default();

    assert_that!(prefs.marketing_emails, eq(false));
    assert_that!(prefs.product_updates, eq(true));
    assert_that!(prefs.security_alerts, eq(true));
    assert_that!(prefs.analytics_consent, eq(false));
    assert_that!(prefs.personalization, eq(false));
    assert_that!(prefs.cookie_preference.as_str(), eq("essential"));
    assert_that!(prefs.essential_cookies, eq(true));
    assert_that!(prefs.analytics_cookies, eq(false));
    assert_that!(prefs.marketing_cookies, eq(false));
    assert_that!(prefs.functional_cookies, eq(false));
}

#[test]
fn given_partial_json_when_deserialized_then_missing_fields_take_defaults() {
    let prefs: UserPreferences =
        serde_json::from_str(r#"{"marketing_emails": true, "cookie_preference": "all"}"#)
            .unwrap();

    assert_that!(prefs.marketing_emails, eq(true));
    assert_that!(prefs.cookie_preference.as_str(), eq("all"));
    assert_that!(prefs.product_updates, eq(true));
}

#[test]
fn given_defaults_when_validated_then_ok() {
    assert_that!(UserPreferences::default().validate(), ok(anything()));
}

#[test]
fn given_empty_cookie_preference_when_validated_then_error_names_field() {
    let prefs = UserPreferences {
        cookie_preference: " ".to_string(),
        ..UserPreferences::default()
    };

    let err = prefs.validate().unwrap_err();

    assert!(matches!(err, CoreError::Validation { .. }));
    assert_that!(err.field(), some(eq("cookie_preference")));
}

#[test]
fn given_overlong_cookie_preference_when_validated_then_error() {
    let prefs = UserPreferences {
        cookie_preference: "x".repeat(MAX_COOKIE_PREFERENCE_LENGTH + 1),
        ..UserPreferences::default()
    };

    assert_that!(prefs.validate(), err(anything()));
}
