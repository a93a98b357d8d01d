use super::*;

#[test]
fn known_countries_offer_schools() {
    assert!(!schools_for("Ireland").is_empty());
    assert!(!schools_for("Poland").is_empty());
}

#[test]
fn unknown_countries_offer_none() {
    assert!(schools_for("Atlantis").is_empty());
    assert!(schools_for("").is_empty());
}

#[test]
fn labels_join_name_and_city() {
    let school = School { name: "Trinity College", city: "Dublin" };
    assert_eq!(school.label(), "Trinity College, Dublin");
}

#[test]
fn every_country_has_at_least_one_school() {
    for country in COUNTRIES {
        assert!(!country.schools.is_empty(), "{} has no schools", country.name);
    }
}
