//! Input/output shapes for one checkout evaluation.
//!
//! Input is projected defensively out of the raw JSON document the host
//! supplies: any absent or mis-typed field degrades to its empty value
//! instead of failing, so a malformed input can never abort checkout.
//! Everything here is single-use per invocation; nothing is mutated after
//! construction.

use serde::Serialize;
use serde_json::Value;

use crate::normalize::parse_list_field;

// ----------------- Merchant configuration -----------------

/// Merchant configuration after boundary canonicalization: both list fields
/// are trimmed, de-blanked, order-preserving sequences, whatever shape
/// (array or comma-separated string) they were stored in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub allowed_cities: Vec<String>,
    pub cod_keywords: Vec<String>,
}

impl PolicyConfig {
    /// Decode a raw configuration document.
    ///
    /// Tolerates one level of string wrapping: some hosts hand the metafield
    /// document through as an embedded JSON string rather than an object.
    /// Anything unreadable degrades to the empty config.
    pub fn from_value(v: &Value) -> Self {
        let parsed;
        let doc = match v {
            Value::String(raw) => {
                parsed = serde_json::from_str::<Value>(raw).unwrap_or(Value::Null);
                &parsed
            }
            other => other,
        };
        Self {
            allowed_cities: parse_list_field(&doc["allowedCities"]),
            cod_keywords: parse_list_field(&doc["codKeywords"]),
        }
    }
}

// ----------------- Checkout context -----------------

/// Checkout-side facts the evaluator needs: just the buyer's city, taken
/// from the first delivery group's address when one has been entered.
#[derive(Debug, Clone, Default)]
pub struct CheckoutContext {
    pub delivery_city: Option<String>,
}

/// Candidate payment method as offered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
}

// ----------------- Host input -----------------

/// One evaluation's worth of input: configuration, cart context, and the
/// candidate payment methods, already canonicalized at the boundary.
#[derive(Debug, Clone, Default)]
pub struct RunInput {
    pub config: PolicyConfig,
    pub context: CheckoutContext,
    pub payment_methods: Vec<PaymentMethod>,
}

impl RunInput {
    /// Project the host's structured input document into canonical form.
    ///
    /// Indexing into `Value` yields `Null` for anything missing or of the
    /// wrong shape, so every field degrades to "unset" rather than erroring.
    pub fn from_value(v: &Value) -> Self {
        Self {
            config: metafield_config(v),
            context: CheckoutContext {
                delivery_city: v["cart"]["deliveryGroups"][0]["deliveryAddress"]["city"]
                    .as_str()
                    .map(str::to_string),
            },
            payment_methods: payment_methods(v),
        }
    }
}

/// Pull the policy config out of the customization metafield, preferring the
/// deserialized `jsonValue` and falling back to parsing the raw `value`
/// string form.
fn metafield_config(v: &Value) -> PolicyConfig {
    let mf = &v["paymentCustomization"]["metafield"];
    match &mf["jsonValue"] {
        Value::Null => match mf["value"].as_str() {
            Some(raw) => {
                let doc = serde_json::from_str::<Value>(raw).unwrap_or(Value::Null);
                PolicyConfig::from_value(&doc)
            }
            None => PolicyConfig::default(),
        },
        doc => PolicyConfig::from_value(doc),
    }
}

fn payment_methods(v: &Value) -> Vec<PaymentMethod> {
    match v["paymentMethods"].as_array() {
        Some(items) => items
            .iter()
            .map(|m| PaymentMethod {
                id: m["id"].as_str().unwrap_or_default().to_string(),
                name: m["name"].as_str().unwrap_or_default().to_string(),
            })
            .collect(),
        None => Vec::new(),
    }
}

// ----------------- Function output -----------------

/// Result returned to the host. An empty `operations` list is the explicit
/// "leave every payment method as offered" signal.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FunctionRunResult {
    pub operations: Vec<Operation>,
}

impl FunctionRunResult {
    pub fn no_changes() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Operation {
    pub hide: HideOperation,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HideOperation {
    pub payment_method_id: String,
}
