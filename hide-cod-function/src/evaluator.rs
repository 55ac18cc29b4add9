use crate::normalize::for_matching;
use crate::types::{
    CheckoutContext, FunctionRunResult, HideOperation, Operation, PaymentMethod, PolicyConfig,
};

// ----------------- Defaults -----------------

/// Keywords used to recognize COD-style payment methods when the merchant
/// has not configured an explicit list. Substituted per invocation, never
/// persisted.
pub const DEFAULT_COD_KEYWORDS: &[&str] = &["cash on delivery", "cod", "cash"];

// ----------------- Helpers -----------------

/// Symmetric containment test between the normalized checkout city and one
/// configured city: exact match, or either name contains the other. This
/// tolerates partial entries ("Lahore" vs "Lahore Cantt") at the cost of
/// false positives on short names; that trade-off is deliberate, since
/// merchant-entered and buyer-typed city names are free text. A configured
/// entry that normalizes to "" is contained in every city, so a degenerate
/// allow-list entry keeps COD visible everywhere, never the reverse.
fn city_allowed(checkout_city: &str, allowed: &str) -> bool {
    let a = for_matching(allowed);
    checkout_city == a || checkout_city.contains(a.as_str()) || a.contains(checkout_city)
}

fn is_cod_method(method: &PaymentMethod, keywords: &[String]) -> bool {
    let name = for_matching(&method.name);
    keywords
        .iter()
        .any(|kw| name.contains(for_matching(kw).as_str()))
}

// ----------------- Core -----------------

/// Decide which payment methods to hide for one checkout.
///
/// Single pass, referentially transparent, linear in the number of
/// configured cities, keywords, and candidates. Every guard fails open:
/// the worst outcome of missing or degenerate input is "no change".
///
/// 1. Resolve the effective keyword set (merchant list verbatim, defaults
///    otherwise).
/// 2. No city entered yet, or city normalizes to "" -> no change.
/// 3. No allowed cities configured -> no change (an unconfigured rule is a
///    no-op, never a hide-everything default).
/// 4. Any configured city matches the checkout city -> no change.
/// 5. Otherwise hide every candidate whose name contains a keyword,
///    preserving candidate order.
pub fn evaluate(
    config: &PolicyConfig,
    context: &CheckoutContext,
    candidates: &[PaymentMethod],
) -> FunctionRunResult {
    let keywords: Vec<String> = if config.cod_keywords.is_empty() {
        DEFAULT_COD_KEYWORDS.iter().map(|k| k.to_string()).collect()
    } else {
        config.cod_keywords.clone()
    };

    // COD visibility is never altered before the buyer has entered a city.
    let checkout_city = match &context.delivery_city {
        Some(raw) => for_matching(raw),
        None => return FunctionRunResult::no_changes(),
    };
    if checkout_city.is_empty() {
        return FunctionRunResult::no_changes();
    }

    if config.allowed_cities.is_empty() {
        return FunctionRunResult::no_changes();
    }

    if config
        .allowed_cities
        .iter()
        .any(|allowed| city_allowed(&checkout_city, allowed))
    {
        return FunctionRunResult::no_changes();
    }

    // City not allowed: collect the COD-looking candidates, input order.
    let operations: Vec<Operation> = candidates
        .iter()
        .filter(|m| is_cod_method(m, &keywords))
        .map(|m| Operation {
            hide: HideOperation {
                payment_method_id: m.id.clone(),
            },
        })
        .collect();

    FunctionRunResult { operations }
}
