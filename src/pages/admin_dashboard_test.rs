use super::*;

#[test]
fn applications_is_the_default_view() {
    assert_eq!(DashboardView::default(), DashboardView::Applications);
}

#[test]
fn delete_targets_the_owning_account() {
    let record = ApplicationRecord { id: 3, user_id: 9, ..ApplicationRecord::default() };
    assert_eq!(delete_id_for(&record), 9);
}

#[test]
fn delete_falls_back_to_the_record_id() {
    let record = ApplicationRecord { id: 3, user_id: 0, ..ApplicationRecord::default() };
    assert_eq!(delete_id_for(&record), 3);
}

#[test]
fn blank_table_text_shows_a_placeholder() {
    assert_eq!(text_or_na(""), "N/A");
    assert_eq!(text_or_na("   "), "N/A");
    assert_eq!(text_or_na("male"), "male");
}
