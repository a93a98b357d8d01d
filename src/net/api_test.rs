use super::*;

#[test]
fn application_params_always_carry_page_and_limit() {
    let params = application_params(2, 5, &ApplicationFilters::default());
    assert_eq!(params, vec![("page", "2".to_owned()), ("limit", "5".to_owned())]);
}

#[test]
fn application_params_include_only_non_blank_filters() {
    let filters = ApplicationFilters {
        full_name: " Ada ".to_owned(),
        city: String::new(),
        education: "   ".to_owned(),
    };
    let params = application_params(1, 5, &filters);
    assert_eq!(
        params,
        vec![
            ("page", "1".to_owned()),
            ("limit", "5".to_owned()),
            ("full_name", "Ada".to_owned()),
        ]
    );
}

#[test]
fn unfinished_params_filter_by_name_only() {
    assert_eq!(
        unfinished_params(3, 5, "quinn"),
        vec![
            ("page", "3".to_owned()),
            ("limit", "5".to_owned()),
            ("full_name", "quinn".to_owned()),
        ]
    );
    assert_eq!(
        unfinished_params(3, 5, ""),
        vec![("page", "3".to_owned()), ("limit", "5".to_owned())]
    );
}

#[test]
fn delete_paths_embed_the_id() {
    assert_eq!(delete_user_path(12), "/users/12/delete");
    assert_eq!(delete_unfinished_path(7), "/authenticate/7/delete");
}

#[test]
fn opt_text_nulls_blank_input() {
    assert_eq!(opt_text(""), serde_json::Value::Null);
    assert_eq!(opt_text("   "), serde_json::Value::Null);
    assert_eq!(opt_text(" Ada "), serde_json::Value::String("Ada".to_owned()));
}

#[test]
fn registration_body_shape() {
    let body = registration_body(" ada@example.com ", "secret", "", None);
    assert_eq!(
        body,
        serde_json::json!({
            "email": "ada@example.com",
            "password": "secret",
            "full_name": null,
            "photo": null,
        })
    );
}
