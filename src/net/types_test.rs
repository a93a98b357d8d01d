use super::*;
use serde_json::json;

#[test]
fn token_response_deserializes() {
    let parsed: TokenResponse = serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    assert_eq!(parsed.access_token, "abc");
}

#[test]
fn application_record_tolerates_null_optionals() {
    let parsed: ApplicationRecord = serde_json::from_value(json!({
        "id": 4,
        "user_id": 9,
        "full_name": "Ada Quinn",
        "birth_date": "1995-03-02",
        "country": "Ireland",
        "city": "Dublin",
        "gender": "female",
        "education": "Trinity College, Dublin",
        "profile_picture": null,
        "cv_files": null
    }))
    .unwrap();
    assert_eq!(parsed.profile_picture, None);
    assert!(parsed.cv_files.is_empty());
    assert_eq!(parsed.user, None);
}

#[test]
fn application_record_carries_the_owning_account() {
    let parsed: ApplicationRecord = serde_json::from_value(json!({
        "id": 4,
        "user_id": 9,
        "full_name": "Ada Quinn",
        "birth_date": "1995-03-02",
        "country": "Ireland",
        "city": "Dublin",
        "gender": "female",
        "education": "Trinity College, Dublin",
        "cv_files": ["static/cv/1.pdf"],
        "user": { "id": 9, "email": "ada@example.com" }
    }))
    .unwrap();
    let user = parsed.user.unwrap();
    assert_eq!(user.id, 9);
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(user.full_name, None);
    assert_eq!(parsed.cv_files, vec!["static/cv/1.pdf".to_owned()]);
}

#[test]
fn listing_fills_missing_totals() {
    let parsed: Listing<UserAccount> = serde_json::from_value(json!({
        "items": [{ "id": 1, "full_name": "Ada Quinn" }]
    }))
    .unwrap();
    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.total_count, 0);
    assert_eq!(parsed.total_pages, 0);
}

#[test]
fn profile_info_defaults_to_empty() {
    let parsed: ProfileInfo = serde_json::from_value(json!({})).unwrap();
    assert_eq!(parsed, ProfileInfo::default());
}
