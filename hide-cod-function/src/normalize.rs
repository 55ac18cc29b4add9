//! Text normalization used for city and payment-method matching.
//!
//! Policy:
//! - Trim leading/trailing whitespace.
//! - Lowercase (char::to_lowercase(); some chars expand to multiple codepoints).
//! - Collapse every maximal run of characters that are not ASCII letters or
//!   digits into a single space, so punctuation, hyphens, and ragged spacing
//!   cannot defeat a match.
//! - Empty input normalizes to the empty string; the function never fails.
//!
//! Keep this logic single-sourced so the evaluator and the admin tooling
//! never drift on what counts as "the same city".

use serde_json::Value;

/// Normalize free text for containment matching.
///
/// "Dera Ghazi Khan", "dera-ghazi khan", and "DERA   GHAZI KHAN!" all
/// normalize to `"dera ghazi khan"`.
pub fn for_matching(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut gap = false;
    for ch in s.chars() {
        for lc in ch.to_lowercase() {
            if lc.is_ascii_alphanumeric() {
                // A pending gap only becomes a space between two kept runs,
                // which trims the ends for free.
                if gap && !out.is_empty() {
                    out.push(' ');
                }
                gap = false;
                out.push(lc);
            } else {
                gap = true;
            }
        }
    }
    out
}

/// Coerce a loosely-typed config field into an ordered list of strings.
///
/// Two historical encodings are accepted: a JSON array (elements stringified,
/// trimmed, blanks dropped) or a single comma-separated string. Any other
/// shape yields an empty list. Order is preserved and duplicates are kept;
/// they are harmless to matching.
pub fn parse_list_field(v: &Value) -> Vec<String> {
    match v {
        Value::Array(items) => items
            .iter()
            .filter_map(scalar_to_string)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn scalar_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Nested arrays/objects have no sensible string form here.
        _ => None,
    }
}
