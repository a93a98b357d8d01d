//! Claim extraction for the stored access token.
//!
//! The token is treated as opaque except for its payload segment, which is
//! base64url-decoded and parsed as JSON to read the numeric `role` claim.
//! Malformed input decodes to no claims rather than an error so a corrupt
//! token never breaks rendering.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decoded JSON payload of a JWT, if the token parses.
pub fn decode_payload(token: &str) -> Option<serde_json::Value> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Numeric `role` claim embedded in the token, if present.
pub fn role_claim(token: &str) -> Option<u64> {
    decode_payload(token)?.get("role")?.as_u64()
}
