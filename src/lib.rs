//! Applicant Portal — Leptos/WASM client for a job application service.
//!
//! End users register, sign in, and submit an application with documents;
//! administrators review, search, paginate, and delete applicant records.
//! The client is a thin presentation layer over a remote HTTP API: routing
//! gated by the token's role claim, form validation, local token storage,
//! and table rendering.
//!
//! Browser-only code sits behind the `csr` feature with native stubs, so
//! `cargo test` exercises the pure logic on the host without a browser.

pub mod app;
pub mod components;
pub mod data;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

pub use app::App;
