use super::*;
use crate::net::types::ApplicationRecord;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn complete_fields() -> FormFields {
    FormFields {
        full_name: "Ada Quinn".to_owned(),
        birth_date: "1995-03-02".to_owned(),
        country: "Ireland".to_owned(),
        city: "Dublin".to_owned(),
        gender: "female".to_owned(),
        education: "Trinity College, Dublin".to_owned(),
        profile_picture: "aGk=".to_owned(),
        cv_files: vec!["aGk=".to_owned()],
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn complete_adult_input_passes() {
    assert!(validate(&complete_fields(), date(2020, 1, 1)).is_empty());
}

#[test]
fn exactly_eighteen_passes_one_day_short_fails() {
    let mut fields = complete_fields();
    fields.birth_date = "2000-06-15".to_owned();
    assert!(validate(&fields, date(2018, 6, 15)).is_empty());
    let errors = validate(&fields, date(2018, 6, 14));
    assert_eq!(errors.get("birth_date"), Some(&"You must be at least 18 years old."));
}

#[test]
fn empty_required_fields_are_flagged() {
    let errors = validate(&FormFields::default(), date(2020, 1, 1));
    for key in ["full_name", "birth_date", "country", "city", "gender", "education", "profile_picture", "cv_files"] {
        assert!(errors.contains_key(key), "missing error for {key}");
    }
}

#[test]
fn missing_cv_is_flagged_alone() {
    let mut fields = complete_fields();
    fields.cv_files.clear();
    let errors = validate(&fields, date(2020, 1, 1));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("cv_files"), Some(&"At least one CV file is required"));
}

#[test]
fn unparseable_birth_date_reads_as_underage() {
    let mut fields = complete_fields();
    fields.birth_date = "junk".to_owned();
    let errors = validate(&fields, date(2020, 1, 1));
    assert_eq!(errors.get("birth_date"), Some(&"You must be at least 18 years old."));
}

// =============================================================
// Record mapping
// =============================================================

#[test]
fn missing_record_prefills_only_the_name() {
    let fields = FormFields::from_record(None, "Ada Quinn");
    assert_eq!(fields.full_name, "Ada Quinn");
    assert_eq!(fields, FormFields { full_name: "Ada Quinn".to_owned(), ..FormFields::default() });
}

#[test]
fn stored_record_maps_onto_the_form() {
    let record = ApplicationRecord {
        full_name: "Ada Quinn".to_owned(),
        birth_date: "1995-03-02".to_owned(),
        country: "Ireland".to_owned(),
        city: "Dublin".to_owned(),
        gender: "female".to_owned(),
        education: "Trinity College, Dublin".to_owned(),
        profile_picture: None,
        cv_files: vec!["static/cv/1.pdf".to_owned()],
        ..ApplicationRecord::default()
    };
    let fields = FormFields::from_record(Some(&record), "ignored");
    assert_eq!(fields.full_name, "Ada Quinn");
    assert_eq!(fields.profile_picture, "");
    assert_eq!(fields.cv_files, vec!["static/cv/1.pdf".to_owned()]);
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_nulls_a_missing_picture() {
    let mut fields = complete_fields();
    fields.profile_picture.clear();
    let payload = fields.payload();
    assert_eq!(payload["profile_picture"], serde_json::Value::Null);
    assert_eq!(payload["cv_files"], serde_json::json!(["aGk="]));
}

#[test]
fn payload_trims_text_fields() {
    let mut fields = complete_fields();
    fields.full_name = "  Ada Quinn  ".to_owned();
    fields.city = " Dublin ".to_owned();
    let payload = fields.payload();
    assert_eq!(payload["full_name"], "Ada Quinn");
    assert_eq!(payload["city"], "Dublin");
}
