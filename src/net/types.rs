//! Wire DTOs for the application-service REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON. Optional and nullable fields
//! deserialize to defaults so partially filled records never need special
//! cases at the call sites.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Access token issued on a successful login.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// A user account as the auth and admin endpoints return it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// A submitted application, as read back from the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub full_name: String,
    pub birth_date: String,
    pub country: String,
    pub city: String,
    pub gender: String,
    pub education: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// The server serializes a missing list as `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cv_files: Vec<String>,
    /// Owning account, present in the admin listing only.
    #[serde(default)]
    pub user: Option<UserAccount>,
}

/// One page of a server-side listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Listing<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub total_pages: u64,
}

/// Profile fields for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileInfo {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Treat an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
