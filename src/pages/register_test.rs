use super::*;

#[test]
fn all_fields_missing_flags_every_rule() {
    let errors = validate_registration("", "", "");
    assert_eq!(errors.email, Some("Email is required."));
    assert_eq!(errors.password, Some("Password is required."));
    assert_eq!(errors.repeat, Some("Please repeat your password."));
    assert!(!errors.is_empty());
}

#[test]
fn mismatched_passwords_are_rejected() {
    let errors = validate_registration("ada@example.com", "secret", "other");
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, None);
    assert_eq!(errors.repeat, Some("Passwords do not match."));
}

#[test]
fn malformed_email_is_rejected() {
    let errors = validate_registration("ada.example.com", "secret", "secret");
    assert_eq!(errors.email, Some("Please enter a valid email address."));
    assert_eq!(errors.repeat, None);
}

#[test]
fn complete_input_passes() {
    assert!(validate_registration("ada@example.com", "secret", "secret").is_empty());
}
