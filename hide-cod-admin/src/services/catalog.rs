//! Searchable city catalog backing the allow-list editor.
//!
//! The built-in list covers the cities the original deployment ships with;
//! merchants extend it per-shop via `[catalog] extra_cities` in config.toml.

use once_cell::sync::Lazy;

use crate::services::settings::title_case;

/// Built-in searchable list of Pakistani cities (extend via config).
pub const CITIES: &[&str] = &[
    "Islamabad",
    "Karachi",
    "Lahore",
    "Rawalpindi",
    "Faisalabad",
    "Multan",
    "Peshawar",
    "Quetta",
    "Hyderabad",
    "Gujranwala",
    "Sialkot",
    "Sargodha",
    "Bahawalpur",
    "Sukkur",
    "Larkana",
    "Sheikhupura",
    "Rahim Yar Khan",
    "Jhang",
    "Gujrat",
    "Mardan",
    "Kasur",
    "Sahiwal",
    "Okara",
    "Wah Cantonment",
    "Mingora (Swat)",
    "Dera Ghazi Khan",
    "Nawabshah (Shaheed Benazirabad)",
    "Mirpur Khas",
    "Chiniot",
    "Khanewal",
    "Hafizabad",
    "Dera Ismail Khan",
    "Turbat",
    "Muridke",
    "Muzaffargarh",
    "Kohat",
    "Abbottabad",
    "Burewala",
    "Jhelum",
    "Bahawalnagar",
    "Kamoke",
    "Mandi Bahauddin",
    "Sadiqabad",
    "Gojra",
    "Nowshera",
    "Charsadda",
    "Tando Allahyar",
    "Tando Muhammad Khan",
    "Matiari",
    "Sanghar",
    "Shikarpur",
    "Jacobabad",
    "Khairpur",
    "Thatta",
    "Badin",
    "Umerkot",
    "Daska",
    "Pakpattan",
    "Layyah",
    "Vehari",
    "Kot Addu",
    "Jaranwala",
    "Chakwal",
    "Attock",
    "Kotri",
    "Hala",
    "Jamshoro",
    "Sehwan",
    "Hub",
    "Mastung",
    "Ziarat",
    "Kalat",
    "Khuzdar",
    "Gwadar",
    "Kharian",
    "Mianwali",
    "Bhakkar",
    "Narowal",
    "Toba Tek Singh",
    "Haripur",
    "Swabi",
    "Mansehra",
    "Bannu",
    "Chaman",
    "Gilgit",
    "Skardu",
    "Hunza",
    "Ghizer",
    "Muzaffarabad (AJK)",
    "Mirpur (AJK)",
    "Kotli (AJK)",
];

// Lowercased view computed once so queries don't re-fold the whole catalog.
static CITIES_LOWER: Lazy<Vec<(String, &'static str)>> =
    Lazy::new(|| CITIES.iter().map(|c| (c.to_lowercase(), *c)).collect());

/// Case-insensitive substring search over the catalog, in catalog order.
/// An empty query returns the whole catalog, matching the editor's
/// unfiltered dropdown.
pub fn suggestions(query: &str) -> Vec<&'static str> {
    let q = query.trim().to_lowercase();
    CITIES_LOWER
        .iter()
        .filter(|(lower, _)| q.is_empty() || lower.contains(&q))
        .map(|(_, original)| *original)
        .collect()
}

/// Catalog search extended with a shop's `extra_cities`. Extras come after
/// the built-in hits and are matched the same way.
pub fn suggestions_with(extras: &[String], query: &str) -> Vec<String> {
    let q = query.trim().to_lowercase();
    let mut hits: Vec<String> = suggestions(query).iter().map(|c| c.to_string()).collect();
    for extra in extras {
        if q.is_empty() || extra.to_lowercase().contains(&q) {
            if !hits.iter().any(|h| h.eq_ignore_ascii_case(extra)) {
                hits.push(extra.clone());
            }
        }
    }
    hits
}

/// Resolution of a free-text entry: the catalog spelling when the query is a
/// known city, otherwise a title-cased new addition (the editor's
/// `Add "..."` affordance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityEntry {
    Known(&'static str),
    New(String),
}

impl CityEntry {
    pub fn as_str(&self) -> &str {
        match self {
            CityEntry::Known(c) => c,
            CityEntry::New(c) => c,
        }
    }
}

/// Resolve a free-text query. Blank input resolves to nothing.
pub fn resolve(query: &str) -> Option<CityEntry> {
    let q = query.trim();
    if q.is_empty() {
        return None;
    }
    let lower = q.to_lowercase();
    for (lc, original) in CITIES_LOWER.iter() {
        if *lc == lower {
            return Some(CityEntry::Known(original));
        }
    }
    Some(CityEntry::New(title_case(q)))
}
