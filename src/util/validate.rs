//! Field validation shared by the credential and application forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use chrono::{Datelike, NaiveDate};

/// Minimum age to submit an application.
pub const MIN_AGE_YEARS: i32 = 18;

/// Minimum password length on profile updates.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Email shape check: a restricted local part, a host, and a 2-6 letter TLD.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty() || !host.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-')) {
        return false;
    }
    (2..=6).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Per-field errors for an email + password pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate an email + password pair the way the login and user-creation
/// forms require.
pub fn check_credentials(email: &str, password: &str) -> CredentialErrors {
    let mut errors = CredentialErrors::default();
    if email.trim().is_empty() {
        errors.email = Some("Email is required.");
    } else if !is_valid_email(email.trim()) {
        errors.email = Some("Please enter a valid email address.");
    }
    if password.is_empty() {
        errors.password = Some("Password is required.");
    }
    errors
}

/// Repeat-password rule applied on registration.
pub fn check_password_repeat(password: &str, repeat: &str) -> Option<&'static str> {
    if repeat.is_empty() {
        Some("Please repeat your password.")
    } else if password != repeat {
        Some("Passwords do not match.")
    } else {
        None
    }
}

/// Parse a form birth date (`YYYY-MM-DD`).
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Whole years elapsed between `birth` and `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Whether the applicant is at least 18 on `today`.
pub fn is_adult(birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(birth, today) >= MIN_AGE_YEARS
}

/// Today's date as the browser reports it. Outside the browser this falls
/// back to the epoch, which only ever happens in native builds.
pub fn browser_today() -> NaiveDate {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (year, month, day) = (
            now.get_full_year() as i32,
            now.get_month() as u32 + 1,
            now.get_date() as u32,
        );
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        NaiveDate::default()
    }
}
