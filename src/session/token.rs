//! Bearer-token persistence with a fixed expiry window.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is written once on login and consulted on every outbound
//! request. Expiry is enforced locally: a stale token is indistinguishable
//! from no token at all, and reading one removes the stored entries.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

const TOKEN_KEY: &str = "accessToken";
const EXPIRY_KEY: &str = "expirationTime";

/// How long a stored token stays usable, in milliseconds.
pub const TOKEN_TTL_MS: i64 = 30 * 60 * 1000;

/// Absolute expiry timestamp for a token stored at `now_ms`.
pub fn expiry_at(now_ms: i64) -> i64 {
    now_ms + TOKEN_TTL_MS
}

/// Outcome of checking a stored expiry stamp against the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Expired,
    Missing,
}

/// Classify a raw expiry entry. A missing or unparseable stamp counts as
/// `Missing`; a stamp strictly before `now_ms` is `Expired`.
pub fn classify_expiry(raw: Option<&str>, now_ms: i64) -> TokenStatus {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        None => TokenStatus::Missing,
        Some(at) if at < now_ms => TokenStatus::Expired,
        Some(_) => TokenStatus::Valid,
    }
}

/// Persist `token` and stamp its expiry 30 minutes out.
pub fn store(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(EXPIRY_KEY, &expiry_at(now_ms()).to_string());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Current unexpired token, if any. Reading an expired entry clears both
/// stored keys.
pub fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = storage()?;
        let raw = storage.get_item(EXPIRY_KEY).ok()?;
        match classify_expiry(raw.as_deref(), now_ms()) {
            TokenStatus::Valid => storage.get_item(TOKEN_KEY).ok()?,
            TokenStatus::Expired => {
                log::info!("stored token expired, clearing session");
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(EXPIRY_KEY);
                None
            }
            TokenStatus::Missing => None,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether an unexpired token is currently stored.
pub fn is_authenticated() -> bool {
    read().is_some()
}

/// Remove the stored token and its expiry stamp.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(EXPIRY_KEY);
        }
    }
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation)]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}
