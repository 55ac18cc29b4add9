use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing;

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub metafield: MetafieldConfig,
    #[serde(default)]
    pub customization: CustomizationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AdminConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("config.toml");
        if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str::<AdminConfig>(&text)
                .with_context(|| format!("parsing config file {}", path.display()))
        } else {
            tracing::info!(
                "No config file found at {}. Using AdminConfig::default().",
                path.display()
            );
            Ok(AdminConfig::default())
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            metafield: MetafieldConfig::default(),
            customization: CustomizationConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Where the function configuration lives on the customization object.
/// These values are part of the function's contract; change them only
/// together with the deployed function.
#[derive(Debug, Clone, Deserialize)]
pub struct MetafieldConfig {
    #[serde(default = "MetafieldConfig::default_namespace")]
    pub namespace: String,
    #[serde(default = "MetafieldConfig::default_key")]
    pub key: String,
    #[serde(default = "MetafieldConfig::default_value_type")]
    pub value_type: String,
}

impl MetafieldConfig {
    fn default_namespace() -> String {
        "$app:hide-cod".to_string()
    }

    fn default_key() -> String {
        "function-configuration".to_string()
    }

    fn default_value_type() -> String {
        "json".to_string()
    }
}

impl Default for MetafieldConfig {
    fn default() -> Self {
        Self {
            namespace: Self::default_namespace(),
            key: Self::default_key(),
            value_type: Self::default_value_type(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomizationConfig {
    #[serde(default = "CustomizationConfig::default_title")]
    pub title: String,
    #[serde(default = "CustomizationConfig::default_enabled_on_create")]
    pub enabled_on_create: bool,
    /// Case-insensitive fragment used to pick a payment function among the
    /// deployed functions; the apiType string varies by API version.
    #[serde(default = "CustomizationConfig::default_function_api_hint")]
    pub function_api_hint: String,
    #[serde(default = "CustomizationConfig::default_functions_page_size")]
    pub functions_page_size: u32,
    #[serde(default = "CustomizationConfig::default_list_page_size")]
    pub list_page_size: u32,
}

impl CustomizationConfig {
    fn default_title() -> String {
        "Hide COD by City".to_string()
    }

    fn default_enabled_on_create() -> bool {
        true
    }

    fn default_function_api_hint() -> String {
        "PAYMENT".to_string()
    }

    fn default_functions_page_size() -> u32 {
        25
    }

    fn default_list_page_size() -> u32 {
        10
    }
}

impl Default for CustomizationConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            enabled_on_create: Self::default_enabled_on_create(),
            function_api_hint: Self::default_function_api_hint(),
            functions_page_size: Self::default_functions_page_size(),
            list_page_size: Self::default_list_page_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// Merchant-specific cities offered alongside the built-in catalog.
    #[serde(default)]
    pub extra_cities: Vec<String>,
}
