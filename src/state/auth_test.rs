use super::*;

// =============================================================
// Role claim mapping
// =============================================================

#[test]
fn role_one_is_admin() {
    assert_eq!(Role::from_claim(1), Some(Role::Admin));
}

#[test]
fn role_two_is_applicant() {
    assert_eq!(Role::from_claim(2), Some(Role::Applicant));
}

#[test]
fn unknown_roles_map_to_none() {
    assert_eq!(Role::from_claim(0), None);
    assert_eq!(Role::from_claim(3), None);
    assert_eq!(Role::from_claim(u64::MAX), None);
}

// =============================================================
// Access derivation
// =============================================================

#[test]
fn admin_session_gets_admin_access() {
    let state = AuthState { authenticated: true, role: Some(Role::Admin) };
    assert_eq!(state.access(), Access::Admin);
}

#[test]
fn applicant_session_gets_applicant_access() {
    let state = AuthState { authenticated: true, role: Some(Role::Applicant) };
    assert_eq!(state.access(), Access::Applicant);
}

#[test]
fn signed_out_session_is_unauthenticated() {
    assert_eq!(AuthState::default().access(), Access::Unauthenticated);
}

#[test]
fn authenticated_session_without_role_is_unauthenticated() {
    let state = AuthState { authenticated: true, role: None };
    assert_eq!(state.access(), Access::Unauthenticated);
}

// =============================================================
// Redirect guard
// =============================================================

#[test]
fn unauthenticated_sessions_redirect() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn authenticated_sessions_stay_put() {
    let state = AuthState { authenticated: true, role: Some(Role::Applicant) };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn snapshot_without_a_browser_is_signed_out() {
    assert_eq!(snapshot(), AuthState::default());
}
