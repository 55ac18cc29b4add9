//! Allow-list editing semantics for the admin surface.
//!
//! Cities are title-cased on entry and deduplicated order-preserving, then
//! persisted as the metafield JSON document the function reads. Reads keep
//! the stored spelling untouched; only edits canonicalize.

use std::collections::HashSet;

use serde_json::{json, Value};

use hide_cod_function::normalize::parse_list_field;

/// Title-case a merchant-entered city: `" dera  ghazi khan "` becomes
/// `"Dera Ghazi Khan"`.
pub fn title_case(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The merchant's allow-list as edited in the admin surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    cities: Vec<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from free-text entries: title-cased, blanks dropped, first
    /// occurrence wins, order preserved.
    pub fn from_cities<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for city in cities {
            list.add(city.as_ref());
        }
        list
    }

    /// Decode a form submission: a JSON array field first, falling back to a
    /// comma-separated field when the JSON is absent, unreadable, or empty.
    pub fn from_submission(json_field: Option<&str>, csv_field: Option<&str>) -> Self {
        if let Some(raw) = json_field {
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
                let list = Self::from_cities(items.iter().filter_map(|v| v.as_str()));
                if !list.is_empty() {
                    return list;
                }
            }
        }
        Self::from_cities(csv_field.unwrap_or("").split(','))
    }

    /// Decode a configuration read from the customization metafield,
    /// preferring the deserialized `jsonValue` and falling back to parsing
    /// the raw `value` string. Anything unreadable degrades to an empty
    /// list, mirroring the function's own fail-open reads.
    pub fn from_metafield(json_value: Option<&Value>, raw_value: Option<&str>) -> Self {
        let doc = match json_value {
            Some(v) => v.clone(),
            None => raw_value
                .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
                .unwrap_or(Value::Null),
        };
        // Stored spelling is preserved as-is; parse_list_field accepts both
        // the array and the legacy CSV-string encodings.
        Self {
            cities: parse_list_field(&doc["allowedCities"]),
        }
    }

    /// Add one city, title-cased. Returns false when the entry is blank or
    /// already present.
    pub fn add(&mut self, city: &str) -> bool {
        let canonical = title_case(city);
        if canonical.is_empty() || self.cities.contains(&canonical) {
            return false;
        }
        self.cities.push(canonical);
        true
    }

    /// Remove a city by exact spelling. Returns whether anything was removed.
    pub fn remove(&mut self, city: &str) -> bool {
        let before = self.cities.len();
        self.cities.retain(|c| c != city);
        self.cities.len() != before
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether a candidate entry is already covered, compared case-insensitively
    /// the way the editor decides to offer its "add" affordance.
    pub fn contains_ignore_case(&self, city: &str) -> bool {
        let lower = city.trim().to_lowercase();
        self.cities.iter().any(|c| c.to_lowercase() == lower)
    }

    /// The JSON document stored in the metafield value.
    pub fn to_config_document(&self) -> Value {
        json!({ "allowedCities": self.cities })
    }

    /// The metafield's string value (`type = "json"` stores a serialized
    /// document, not a JSON scalar).
    pub fn to_metafield_value(&self) -> String {
        self.to_config_document().to_string()
    }

    /// Drop duplicates that may have crept into stored data, preserving the
    /// first occurrence of each spelling.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.cities.retain(|c| seen.insert(c.clone()));
    }
}
