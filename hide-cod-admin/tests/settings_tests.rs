use hide_cod_admin::{title_case, AllowList};
use serde_json::json;

#[test]
fn test_title_case_entries() {
    assert_eq!(title_case("lahore"), "Lahore");
    assert_eq!(title_case("  dera  ghazi khan "), "Dera Ghazi Khan");
    assert_eq!(title_case("KARACHI"), "Karachi");
    assert_eq!(title_case(""), "");
}

#[test]
fn test_from_cities_canonicalizes_and_dedupes() {
    let list = AllowList::from_cities(["lahore", "LAHORE", " multan ", "", "  "]);
    assert_eq!(list.cities(), ["Lahore", "Multan"]);
}

#[test]
fn test_submission_prefers_json_field() {
    let list = AllowList::from_submission(Some(r#"["lahore","karachi"]"#), Some("Multan"));
    assert_eq!(list.cities(), ["Lahore", "Karachi"]);
}

#[test]
fn test_submission_falls_back_to_csv_on_bad_json() {
    let list = AllowList::from_submission(Some("{not json"), Some("Lahore, Multan ,"));
    assert_eq!(list.cities(), ["Lahore", "Multan"]);
}

#[test]
fn test_submission_falls_back_to_csv_on_empty_json_array() {
    let list = AllowList::from_submission(Some("[]"), Some("Karachi"));
    assert_eq!(list.cities(), ["Karachi"]);
}

#[test]
fn test_submission_with_nothing_is_empty() {
    let list = AllowList::from_submission(None, None);
    assert!(list.is_empty());
}

#[test]
fn test_add_and_remove() {
    let mut list = AllowList::new();
    assert!(list.add("lahore"));
    assert!(!list.add("LAHORE"), "case-folded duplicate must be rejected");
    assert!(!list.add("   "));
    assert!(list.add("kotli (ajk)"));
    assert_eq!(list.cities(), ["Lahore", "Kotli (ajk)"]);

    assert!(list.remove("Lahore"));
    assert!(!list.remove("Lahore"));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_contains_ignore_case() {
    let list = AllowList::from_cities(["Lahore"]);
    assert!(list.contains_ignore_case(" lahore "));
    assert!(!list.contains_ignore_case("Karachi"));
}

#[test]
fn test_metafield_value_roundtrip() {
    let list = AllowList::from_cities(["Lahore", "Multan"]);
    let value = list.to_metafield_value();
    let doc: serde_json::Value = serde_json::from_str(&value).unwrap();
    assert_eq!(doc, json!({ "allowedCities": ["Lahore", "Multan"] }));

    let read_back = AllowList::from_metafield(Some(&doc), None);
    assert_eq!(read_back, list);
}

#[test]
fn test_from_metafield_raw_value_fallback() {
    let list = AllowList::from_metafield(None, Some(r#"{"allowedCities":["Lahore"]}"#));
    assert_eq!(list.cities(), ["Lahore"]);
}

#[test]
fn test_from_metafield_accepts_legacy_csv_encoding() {
    let doc = json!({ "allowedCities": "Lahore, Multan" });
    let list = AllowList::from_metafield(Some(&doc), None);
    assert_eq!(list.cities(), ["Lahore", "Multan"]);
}

#[test]
fn test_from_metafield_unreadable_degrades_to_empty() {
    assert!(AllowList::from_metafield(None, Some("not json")).is_empty());
    assert!(AllowList::from_metafield(None, None).is_empty());
}

#[test]
fn test_reads_preserve_stored_spelling() {
    // Reads do not re-case; only edits canonicalize.
    let doc = json!({ "allowedCities": ["lahore cantt"] });
    let list = AllowList::from_metafield(Some(&doc), None);
    assert_eq!(list.cities(), ["lahore cantt"]);
}

#[test]
fn test_dedup_preserves_first_occurrence() {
    let doc = json!({ "allowedCities": ["Lahore", "Multan", "Lahore"] });
    let mut list = AllowList::from_metafield(Some(&doc), None);
    list.dedup();
    assert_eq!(list.cities(), ["Lahore", "Multan"]);
}
