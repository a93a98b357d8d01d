//! Networking: HTTP plumbing, REST services, and wire DTOs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the base URL, bearer injection, and the global 401 redirect;
//! `api` maps UI actions onto endpoints; `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
