//! Auth snapshot shared through the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the header navigation, and the home-route dispatch all read
//! this state. Updates never mutate in place: `refresh` recomputes a whole
//! snapshot from the token store and replaces the previous one.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::{claims, token};

/// Role discriminator embedded in the token claims.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Applicant,
}

impl Role {
    /// Map the numeric claim onto a role. Unknown values carry no role.
    pub fn from_claim(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::Admin),
            2 => Some(Self::Applicant),
            _ => None,
        }
    }
}

/// Immutable snapshot of the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl AuthState {
    /// Access level derived from the snapshot. An authenticated session with
    /// no readable role is treated as signed out.
    pub fn access(&self) -> Access {
        match (self.authenticated, self.role) {
            (true, Some(Role::Admin)) => Access::Admin,
            (true, Some(Role::Applicant)) => Access::Applicant,
            _ => Access::Unauthenticated,
        }
    }
}

/// What the current session may see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Unauthenticated,
    Admin,
    Applicant,
}

/// Recompute a snapshot from the token store.
pub fn snapshot() -> AuthState {
    match token::read() {
        Some(tok) => AuthState {
            authenticated: true,
            role: claims::role_claim(&tok).and_then(Role::from_claim),
        },
        None => AuthState::default(),
    }
}

/// Replace the shared snapshot with a freshly computed one.
pub fn refresh(auth: RwSignal<AuthState>) {
    auth.set(snapshot());
}

/// Drop the stored session and publish the resulting snapshot.
pub fn logout(auth: RwSignal<AuthState>) {
    token::clear();
    refresh(auth);
}

/// Whether a protected route must bounce the visitor to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.authenticated
}

/// Redirect to `/login` whenever the session is not authenticated.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
