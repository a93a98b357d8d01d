use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last-x_1@mail.example.org"));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_valid_email("userexample.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@example"));
}

#[test]
fn rejects_bad_tlds() {
    assert!(!is_valid_email("user@example.c"));
    assert!(!is_valid_email("user@example.abcdefg"));
    assert!(!is_valid_email("user@example.c0m"));
}

#[test]
fn rejects_disallowed_characters() {
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("user@exa mple.com"));
}

// =============================================================
// Credential pairs
// =============================================================

#[test]
fn credentials_require_both_fields() {
    let errors = check_credentials("", "");
    assert_eq!(errors.email, Some("Email is required."));
    assert_eq!(errors.password, Some("Password is required."));
    assert!(!errors.is_empty());
}

#[test]
fn credentials_flag_malformed_email() {
    let errors = check_credentials("not-an-email", "secret");
    assert_eq!(errors.email, Some("Please enter a valid email address."));
    assert_eq!(errors.password, None);
}

#[test]
fn credentials_pass_when_well_formed() {
    assert!(check_credentials("user@example.com", "secret").is_empty());
}

#[test]
fn repeat_password_rules() {
    assert_eq!(check_password_repeat("secret", ""), Some("Please repeat your password."));
    assert_eq!(check_password_repeat("secret", "other"), Some("Passwords do not match."));
    assert_eq!(check_password_repeat("secret", "secret"), None);
}

// =============================================================
// Birth date and age
// =============================================================

#[test]
fn parses_iso_dates() {
    assert_eq!(parse_birth_date("2000-06-15"), Some(date(2000, 6, 15)));
    assert_eq!(parse_birth_date(" 2000-06-15 "), Some(date(2000, 6, 15)));
    assert_eq!(parse_birth_date("15/06/2000"), None);
    assert_eq!(parse_birth_date(""), None);
}

#[test]
fn age_counts_whole_years() {
    assert_eq!(age_on(date(2000, 6, 15), date(2018, 6, 15)), 18);
    assert_eq!(age_on(date(2000, 6, 15), date(2018, 6, 14)), 17);
    assert_eq!(age_on(date(2000, 6, 15), date(2019, 1, 1)), 18);
}

#[test]
fn exactly_eighteen_today_is_adult() {
    assert!(is_adult(date(2000, 6, 15), date(2018, 6, 15)));
}

#[test]
fn one_day_short_of_eighteen_is_not_adult() {
    assert!(!is_adult(date(2000, 6, 15), date(2018, 6, 14)));
}

#[test]
fn leap_day_birthdays_roll_over_on_march_first() {
    // Born Feb 29; in a non-leap year the birthday lands on Mar 1.
    assert!(!is_adult(date(2000, 2, 29), date(2018, 2, 28)));
    assert!(is_adult(date(2000, 2, 29), date(2018, 3, 1)));
}
