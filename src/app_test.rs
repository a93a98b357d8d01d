use super::*;

#[test]
fn admins_route_to_the_dashboard() {
    assert_eq!(home_screen(Access::Admin), HomeScreen::AdminDashboard);
}

#[test]
fn applicants_route_to_the_application_form() {
    assert_eq!(home_screen(Access::Applicant), HomeScreen::ApplicationForm);
}

#[test]
fn everyone_else_routes_to_login() {
    assert_eq!(home_screen(Access::Unauthenticated), HomeScreen::Login);
}
