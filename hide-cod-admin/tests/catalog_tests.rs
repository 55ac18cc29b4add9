use hide_cod_admin::catalog::{self, CityEntry};

#[test]
fn test_suggestions_are_case_insensitive() {
    let hits = catalog::suggestions("lah");
    assert!(hits.contains(&"Lahore"));
}

#[test]
fn test_suggestions_match_substrings() {
    let hits = catalog::suggestions("ghazi");
    assert_eq!(hits, vec!["Dera Ghazi Khan"]);
}

#[test]
fn test_empty_query_returns_whole_catalog() {
    assert_eq!(catalog::suggestions("").len(), catalog::CITIES.len());
}

#[test]
fn test_extra_cities_extend_the_catalog() {
    let extras = vec!["Kotli Sattian".to_string()];
    let hits = catalog::suggestions_with(&extras, "kotli");
    assert_eq!(hits, vec!["Kotli (AJK)", "Kotli Sattian"]);
}

#[test]
fn test_extras_do_not_duplicate_catalog_entries() {
    let extras = vec!["lahore".to_string()];
    let hits = catalog::suggestions_with(&extras, "lahore");
    assert_eq!(hits, vec!["Lahore"]);
}

#[test]
fn test_resolve_known_city_keeps_catalog_spelling() {
    assert_eq!(catalog::resolve("karachi"), Some(CityEntry::Known("Karachi")));
}

#[test]
fn test_resolve_unknown_city_title_cases() {
    assert_eq!(
        catalog::resolve("  kotli sattian "),
        Some(CityEntry::New("Kotli Sattian".to_string()))
    );
}

#[test]
fn test_resolve_blank_is_nothing() {
    assert_eq!(catalog::resolve("   "), None);
}
