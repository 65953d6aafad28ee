use crate::{Identity, UserData, UserPreferences};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_new_record_then_both_timestamps_match_and_no_sessions() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let identity = Identity::parse("jane@example.com").unwrap();

    let data = UserData::new(identity, UserPreferences::default(), now);

    assert_that!(data.last_access, eq(now));
    assert_that!(data.last_consent_update, eq(now));
    assert!(data.active_sessions.is_empty());
}

#[test]
fn given_record_when_serialized_then_exposes_export_shape() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
    let identity = Identity::parse("jane@example.com").unwrap();
    let data = UserData::new(identity, UserPreferences::default(), now);

    let json = serde_json::to_value(&data).unwrap();

    assert_that!(json["email"].as_str(), some(eq("jane@example.com")));
    assert_that!(json["preferences"]["cookie_preference"].as_str(), some(eq("essential")));
    assert_that!(
        json["last_access"].as_str(),
        some(eq("2026-10-16T09:30:00Z"))
    );
    assert_that!(json["active_sessions"].as_array().map(Vec::len), some(eq(0)));
}

#[test]
fn given_record_without_sessions_field_when_deserialized_then_sessions_empty() {
    let json = r#"{
        "email": "jane@example.com",
        "preferences": {},
        "last_access": "2026-10-16T09:30:00Z",
        "last_consent_update": "2026-10-16T09:30:00Z"
    }"#;

    let data: UserData = serde_json::from_str(json).unwrap();

    assert!(data.active_sessions.is_empty());
    assert_eq!(data.preferences, UserPreferences::default());
}
