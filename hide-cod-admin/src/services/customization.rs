//! GraphQL documents and response decoding for the payment-customization
//! admin operations: dashboard listing, function discovery + rule creation,
//! and configuration metafield reads/writes.
//!
//! This module only builds requests and interprets responses. Transport,
//! authentication, and session embedding belong to the hosting app; hand the
//! produced [`GraphqlRequest`] to whatever client it uses and feed the JSON
//! body back into the decoders.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::{CustomizationConfig, MetafieldConfig};
use crate::services::settings::AllowList;

pub const CUSTOMIZATION_GID_PREFIX: &str = "gid://shopify/PaymentCustomization/";

// ----------------- Request/response envelopes -----------------

/// A ready-to-send GraphQL request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Value,
}

/// One entry of a mutation's `userErrors` payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AdminError {
    /// There is no deployed function to back the customization; the merchant
    /// has to build and deploy it first.
    #[error("no payment customization function found; deploy the function, then try again")]
    NoEligibleFunction,
    #[error("admin API returned user errors: {}", format_user_errors(.0))]
    UserErrors(Vec<UserError>),
    #[error("unexpected admin API response shape: {0}")]
    Shape(String),
}

fn format_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Expand a bare numeric handle into the full customization gid; full gids
/// pass through unchanged.
pub fn customization_gid(id_or_handle: &str) -> String {
    if id_or_handle.starts_with(CUSTOMIZATION_GID_PREFIX) {
        id_or_handle.to_string()
    } else {
        format!("{CUSTOMIZATION_GID_PREFIX}{id_or_handle}")
    }
}

// ----------------- Dashboard listing -----------------

/// A rule as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationSummary {
    pub id: String,
    pub title: String,
    pub enabled: bool,
}

impl CustomizationSummary {
    /// The short handle used in admin routes (trailing gid segment).
    pub fn handle(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }
}

pub fn list_customizations_request(cfg: &CustomizationConfig) -> GraphqlRequest {
    GraphqlRequest {
        query: format!(
            "query {{\n  paymentCustomizations(first: {}) {{\n    edges {{\n      node {{\n        id\n        title\n        enabled\n      }}\n    }}\n  }}\n}}",
            cfg.list_page_size
        ),
        variables: json!({}),
    }
}

pub fn decode_customization_list(resp: &Value) -> Result<Vec<CustomizationSummary>, AdminError> {
    let edges = resp["data"]["paymentCustomizations"]["edges"]
        .as_array()
        .ok_or_else(|| AdminError::Shape("paymentCustomizations.edges missing".into()))?;
    Ok(edges
        .iter()
        .filter_map(|edge| {
            let node = &edge["node"];
            let id = node["id"].as_str()?;
            Some(CustomizationSummary {
                id: id.to_string(),
                title: node["title"].as_str().unwrap_or_default().to_string(),
                enabled: node["enabled"].as_bool().unwrap_or(false),
            })
        })
        .collect())
}

// ----------------- Function discovery + creation -----------------

/// A deployed function eligible to back the customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionHandle {
    pub id: String,
    pub title: String,
    pub api_type: String,
}

pub fn list_functions_request(cfg: &CustomizationConfig) -> GraphqlRequest {
    GraphqlRequest {
        query: format!(
            "query PaymentFunctions {{\n  shopifyFunctions(first: {}) {{\n    nodes {{\n      id\n      title\n      apiType\n    }}\n  }}\n}}",
            cfg.functions_page_size
        ),
        variables: json!({}),
    }
}

/// Pick the function to back the customization: prefer one whose apiType
/// contains the configured hint (the exact string varies by API version),
/// otherwise fall back to the first listed. No functions at all is the one
/// merchant-visible error of this flow.
pub fn pick_payment_function(
    resp: &Value,
    cfg: &CustomizationConfig,
) -> Result<FunctionHandle, AdminError> {
    let nodes = match resp["data"]["shopifyFunctions"]["nodes"].as_array() {
        Some(nodes) => nodes,
        None => return Err(AdminError::NoEligibleFunction),
    };
    let hint = cfg.function_api_hint.to_uppercase();
    let decode = |node: &Value| -> Option<FunctionHandle> {
        Some(FunctionHandle {
            id: node["id"].as_str()?.to_string(),
            title: node["title"].as_str().unwrap_or_default().to_string(),
            api_type: node["apiType"].as_str().unwrap_or_default().to_string(),
        })
    };
    let preferred = nodes
        .iter()
        .filter_map(decode)
        .find(|f| f.api_type.to_uppercase().contains(&hint));
    preferred
        .or_else(|| nodes.first().and_then(decode))
        .ok_or(AdminError::NoEligibleFunction)
}

pub fn create_customization_request(
    cfg: &CustomizationConfig,
    function_id: &str,
) -> GraphqlRequest {
    GraphqlRequest {
        query: "mutation paymentCustomizationCreate($paymentCustomization: PaymentCustomizationInput!) {\n  paymentCustomizationCreate(paymentCustomization: $paymentCustomization) {\n    paymentCustomization {\n      id\n    }\n    userErrors {\n      field\n      message\n    }\n  }\n}".to_string(),
        variables: json!({
            "paymentCustomization": {
                "title": cfg.title,
                "enabled": cfg.enabled_on_create,
                "functionId": function_id,
            }
        }),
    }
}

/// Returns the created customization's gid.
pub fn decode_create_response(resp: &Value) -> Result<String, AdminError> {
    let payload = &resp["data"]["paymentCustomizationCreate"];
    check_user_errors(&payload["userErrors"])?;
    payload["paymentCustomization"]["id"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AdminError::Shape("paymentCustomizationCreate.paymentCustomization.id missing".into()))
}

// ----------------- Configuration metafield -----------------

pub fn get_configuration_request(mcfg: &MetafieldConfig, id_or_handle: &str) -> GraphqlRequest {
    GraphqlRequest {
        query: format!(
            "query getCustomization($id: ID!) {{\n  paymentCustomization(id: $id) {{\n    id\n    title\n    enabled\n    metafield(namespace: \"{}\", key: \"{}\") {{\n      type\n      value\n      jsonValue\n    }}\n  }}\n}}",
            mcfg.namespace, mcfg.key
        ),
        variables: json!({ "id": customization_gid(id_or_handle) }),
    }
}

/// Decode a configuration read. Like the function itself, this degrades to
/// an empty allow-list on anything unreadable rather than failing the page.
pub fn decode_configuration(resp: &Value) -> AllowList {
    let mf = &resp["data"]["paymentCustomization"]["metafield"];
    let json_value = match &mf["jsonValue"] {
        Value::Null => None,
        v => Some(v),
    };
    AllowList::from_metafield(json_value, mf["value"].as_str())
}

pub fn update_configuration_request(
    mcfg: &MetafieldConfig,
    id_or_handle: &str,
    allow_list: &AllowList,
) -> GraphqlRequest {
    GraphqlRequest {
        query: "mutation updateCustomization($id: ID!, $metafield: MetafieldInput!) {\n  paymentCustomizationUpdate(\n    id: $id,\n    paymentCustomization: { metafields: [$metafield] }\n  ) {\n    userErrors {\n      field\n      message\n    }\n  }\n}".to_string(),
        variables: json!({
            "id": customization_gid(id_or_handle),
            "metafield": {
                "namespace": mcfg.namespace,
                "key": mcfg.key,
                "type": mcfg.value_type,
                "value": allow_list.to_metafield_value(),
            }
        }),
    }
}

pub fn decode_update_response(resp: &Value) -> Result<(), AdminError> {
    check_user_errors(&resp["data"]["paymentCustomizationUpdate"]["userErrors"])
}

fn check_user_errors(errors: &Value) -> Result<(), AdminError> {
    let errors: Vec<UserError> = match errors.as_array() {
        Some(list) => list
            .iter()
            .filter_map(|e| serde_json::from_value(e.clone()).ok())
            .collect(),
        None => Vec::new(),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AdminError::UserErrors(errors))
    }
}
