use super::*;

#[test]
fn admins_see_the_dashboard_item() {
    let items = nav_items(Some(Role::Admin));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "Dashboard");
}

#[test]
fn applicants_see_the_application_item() {
    let items = nav_items(Some(Role::Applicant));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "Application");
}

#[test]
fn signed_out_sessions_see_no_items() {
    assert!(nav_items(None).is_empty());
}

#[test]
fn profile_entry_is_applicant_only() {
    assert!(offers_profile(Some(Role::Applicant)));
    assert!(!offers_profile(Some(Role::Admin)));
    assert!(!offers_profile(None));
}

#[test]
fn avatar_falls_back_to_a_neutral_image() {
    assert!(avatar_src(None).contains("gravatar.com"));
    assert_eq!(avatar_src(Some("static/photo.png")), "/static/photo.png");
}
