//! HTTP plumbing shared by every service call.
//!
//! Scopes paths under the `/api` base, attaches the stored bearer token, and
//! maps responses onto `ApiError`. A 401 tears down the stored session and
//! hard-redirects to the login page; callers with requests still in flight
//! see `Unauthorized` and are not retried.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use thiserror::Error;

#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
use crate::session::token;

/// Failure modes for a service call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered outside the 200-204 success window.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The session was rejected; the client redirects to login.
    #[error("session rejected")]
    Unauthorized,
    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No browser runtime is available (native builds).
    #[error("not available outside the browser")]
    Unavailable,
}

/// Origin the API is served from, baked in at build time. Empty means
/// same-origin.
fn origin() -> &'static str {
    option_env!("APP_API_URL").unwrap_or("")
}

/// Absolute URL for an `/api`-scoped path.
pub fn endpoint(path: &str) -> String {
    format!("{}/api{path}", origin().trim_end_matches('/'))
}

/// URL for a server-hosted asset reference (photos, CV files).
pub fn asset_url(reference: &str) -> String {
    format!("{}/{}", origin().trim_end_matches('/'), reference.trim_start_matches('/'))
}

/// Authorization header value for a bearer token.
#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a status code onto the error taxonomy. 200-204 succeed.
#[cfg(any(test, feature = "csr"))]
fn classify_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=204 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        other => Err(ApiError::Status(other)),
    }
}

#[cfg(feature = "csr")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token::read() {
        Some(tok) => builder.header("Authorization", &bearer(&tok)),
        None => builder,
    }
}

/// Drop the session and bounce to the login page. In-flight requests from
/// other components fail on their own; nothing retries.
#[cfg(feature = "csr")]
fn handle_unauthorized() {
    log::warn!("request rejected with 401, dropping session");
    token::clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(feature = "csr")]
async fn dispatch(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    match classify_status(response.status()) {
        Ok(()) => Ok(response),
        Err(ApiError::Unauthorized) => {
            handle_unauthorized();
            Err(ApiError::Unauthorized)
        }
        Err(err) => Err(err),
    }
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET a JSON body from `path` with the given query parameters.
pub async fn get_json<T>(path: &str, query: &[(&str, String)]) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::get(&endpoint(path))
            .query(query.iter().map(|(k, v)| (*k, v.as_str())));
        let request = with_auth(builder).build().map_err(|e| ApiError::Network(e.to_string()))?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, query);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body to `path` and decode the JSON response.
pub async fn post_json<T>(path: &str, body: &serde_json::Value) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let request = with_auth(gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// PUT a JSON body to `path` and decode the JSON response.
pub async fn put_json<T>(path: &str, body: &serde_json::Value) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let request = with_auth(gloo_net::http::Request::put(&endpoint(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// DELETE `path`, ignoring any response body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = with_auth(gloo_net::http::Request::delete(&endpoint(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        dispatch(request).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
