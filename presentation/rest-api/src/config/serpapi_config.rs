use std::env;

use super::non_blank;

/// Configuration for SerpApi product search.
///
/// A missing key is not an error: barcode lookups then degrade to placeholders.
#[derive(Debug, Clone, Default)]
pub struct SerpApiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl SerpApiConfig {
    /// Environment variables:
    /// - SERPAPI_KEY: API key (optional)
    /// - SERPAPI_BASE_URL: override of the SerpApi host (optional)
    pub fn from_env() -> Self {
        Self::from_lookup(&|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: non_blank(lookup, "SERPAPI_KEY"),
            base_url: non_blank(lookup, "SERPAPI_BASE_URL"),
        }
    }
}
