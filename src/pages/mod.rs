//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates shared rendering to
//! `components`. Validation rules live in pure functions next to the page
//! that applies them, or in `util::validate` when shared.

pub mod admin_dashboard;
pub mod application_form;
pub mod login;
pub mod profile;
pub mod register;
