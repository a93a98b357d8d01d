use super::*;

#[test]
fn endpoints_are_scoped_under_api() {
    assert_eq!(endpoint("/authenticate/login"), "/api/authenticate/login");
    assert_eq!(endpoint("/users/name"), "/api/users/name");
}

#[test]
fn asset_urls_join_without_double_slashes() {
    assert_eq!(asset_url("static/photo.png"), "/static/photo.png");
    assert_eq!(asset_url("/static/photo.png"), "/static/photo.png");
}

#[test]
fn bearer_header_shape() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn success_statuses_pass() {
    assert_eq!(classify_status(200), Ok(()));
    assert_eq!(classify_status(201), Ok(()));
    assert_eq!(classify_status(204), Ok(()));
}

#[test]
fn unauthorized_is_its_own_category() {
    assert_eq!(classify_status(401), Err(ApiError::Unauthorized));
}

#[test]
fn other_statuses_surface_as_status_errors() {
    assert_eq!(classify_status(205), Err(ApiError::Status(205)));
    assert_eq!(classify_status(404), Err(ApiError::Status(404)));
    assert_eq!(classify_status(500), Err(ApiError::Status(500)));
}
