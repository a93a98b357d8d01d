//! REST service functions, one per endpoint.
//!
//! Thin by design: pages own state and rendering; each function here maps a
//! UI action onto a single HTTP call and the shared error taxonomy. Login
//! variants also persist the issued token so the caller only has to refresh
//! the auth snapshot.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::http::{self, ApiError};
use super::types::{ApplicationRecord, Listing, ProfileInfo, TokenResponse, UserAccount};
use crate::session::token;

/// Free-text filters accepted by the admin application listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationFilters {
    pub full_name: String,
    pub city: String,
    pub education: String,
}

/// Query parameters for the application listing. Blank filters are omitted.
fn application_params(page: u64, limit: u64, filters: &ApplicationFilters) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
    for (key, value) in [
        ("full_name", &filters.full_name),
        ("city", &filters.city),
        ("education", &filters.education),
    ] {
        if !value.trim().is_empty() {
            params.push((key, value.trim().to_owned()));
        }
    }
    params
}

/// Query parameters for the unfinished-user listing.
fn unfinished_params(page: u64, limit: u64, full_name: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", page.to_string()), ("limit", limit.to_string())];
    if !full_name.trim().is_empty() {
        params.push(("full_name", full_name.trim().to_owned()));
    }
    params
}

fn delete_user_path(id: i64) -> String {
    format!("/users/{id}/delete")
}

fn delete_unfinished_path(id: i64) -> String {
    format!("/authenticate/{id}/delete")
}

/// `null` for blank text, the trimmed text otherwise.
pub(crate) fn opt_text(value: &str) -> serde_json::Value {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::Value::String(trimmed.to_owned())
    }
}

/// Payload shared by self-registration and admin-created accounts.
fn registration_body(email: &str, password: &str, full_name: &str, photo: Option<&str>) -> serde_json::Value {
    json!({
        "email": email.trim(),
        "password": password,
        "full_name": opt_text(full_name),
        "photo": photo,
    })
}

/// Exchange credentials for a bearer token and persist it.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    let body = json!({ "email": email, "password": password });
    let response: TokenResponse = http::post_json("/authenticate/login", &body).await?;
    token::store(&response.access_token);
    Ok(())
}

/// Exchange a Google credential for a bearer token and persist it.
pub async fn google_login(credential: &str) -> Result<(), ApiError> {
    let body = json!({ "token": credential });
    let response: TokenResponse = http::post_json("/authenticate/google-login", &body).await?;
    token::store(&response.access_token);
    Ok(())
}

/// Self-service registration.
pub async fn register(email: &str, password: &str, full_name: &str, photo: Option<&str>) -> Result<(), ApiError> {
    let body = registration_body(email, password, full_name, photo);
    let _: UserAccount = http::post_json("/authenticate/register", &body).await?;
    Ok(())
}

/// Create an account on behalf of an applicant. Admin only.
pub async fn create_user_by_admin(email: &str, password: &str, full_name: &str, photo: Option<&str>) -> Result<(), ApiError> {
    let body = registration_body(email, password, full_name, photo);
    let _: UserAccount = http::post_json("/authenticate/admin/create-user", &body).await?;
    Ok(())
}

/// The current user's submitted application, if any.
pub async fn single_application() -> Result<Option<ApplicationRecord>, ApiError> {
    http::get_json("/application-form/single-application", &[]).await
}

/// Create or replace the current user's application.
pub async fn upsert_application(payload: &serde_json::Value) -> Result<ApplicationRecord, ApiError> {
    http::put_json("/application-form", payload).await
}

/// Admin listing of submitted applications.
pub async fn applications(
    page: u64,
    limit: u64,
    filters: &ApplicationFilters,
) -> Result<Listing<ApplicationRecord>, ApiError> {
    http::get_json("/application-form/", &application_params(page, limit, filters)).await
}

/// Admin listing of registered users without a submission.
pub async fn unfinished_users(page: u64, limit: u64, full_name: &str) -> Result<Listing<UserAccount>, ApiError> {
    http::get_json("/authenticate", &unfinished_params(page, limit, full_name)).await
}

/// Remove an applicant and their submission. Admin only.
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    http::delete(&delete_user_path(id)).await
}

/// Remove a registered user who has no submission. Admin only.
pub async fn delete_unfinished_user(id: i64) -> Result<(), ApiError> {
    http::delete(&delete_unfinished_path(id)).await
}

/// The current user's full name, for prefilling the application form.
pub async fn full_name() -> Result<String, ApiError> {
    http::get_json("/users/name", &[]).await
}

/// The current user's profile (name + photo reference).
pub async fn profile() -> Result<ProfileInfo, ApiError> {
    http::get_json("/users/user", &[]).await
}

/// Update the current user's profile fields.
pub async fn update_profile(payload: &serde_json::Value) -> Result<ProfileInfo, ApiError> {
    http::put_json("/users/update-user", payload).await
}
