use super::*;

fn loaded() -> ProfileForm {
    ProfileForm {
        full_name: "Ada Quinn".to_owned(),
        photo: "static/photo.png".to_owned(),
        ..ProfileForm::default()
    }
}

#[test]
fn an_unchanged_form_is_refused() {
    assert_eq!(validate_profile(&loaded(), &loaded()), Err(ProfileIssue::Unchanged));
}

#[test]
fn mismatched_passwords_are_refused() {
    let mut form = loaded();
    form.password = "secret1".to_owned();
    form.confirm_password = "secret2".to_owned();
    assert_eq!(validate_profile(&form, &loaded()), Err(ProfileIssue::PasswordMismatch));
}

#[test]
fn short_passwords_are_refused() {
    let mut form = loaded();
    form.password = "abc".to_owned();
    form.confirm_password = "abc".to_owned();
    assert_eq!(validate_profile(&form, &loaded()), Err(ProfileIssue::PasswordTooShort));
}

#[test]
fn a_name_change_alone_passes() {
    let mut form = loaded();
    form.full_name = "Ada Q. Quinn".to_owned();
    assert_eq!(validate_profile(&form, &loaded()), Ok(()));
}

#[test]
fn a_valid_password_change_passes() {
    let mut form = loaded();
    form.password = "secret".to_owned();
    form.confirm_password = "secret".to_owned();
    assert_eq!(validate_profile(&form, &loaded()), Ok(()));
}

#[test]
fn update_payload_nulls_blank_fields() {
    let form = ProfileForm { full_name: "Ada".to_owned(), ..ProfileForm::default() };
    let payload = update_payload(&form);
    assert_eq!(payload["full_name"], "Ada");
    assert_eq!(payload["password"], serde_json::Value::Null);
    assert_eq!(payload["photo"], serde_json::Value::Null);
}

#[test]
fn update_payload_carries_entered_values() {
    let form = ProfileForm {
        full_name: "Ada".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        photo: "aGk=".to_owned(),
    };
    let payload = update_payload(&form);
    assert_eq!(payload["password"], "secret");
    assert_eq!(payload["photo"], "aGk=");
}
