use std::env;

use super::non_blank;

/// Configuration for Veryfi receipt extraction.
#[derive(Debug, Clone, Default)]
pub struct VeryfiConfig {
    pub client_id: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl VeryfiConfig {
    /// Environment variables:
    /// - VERYFI_CLIENT_ID: client id (optional)
    /// - VERYFI_API_KEY: API key (optional)
    /// - VERYFI_BASE_URL: override of the Veryfi host (optional)
    pub fn from_env() -> Self {
        Self::from_lookup(&|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        Self {
            client_id: non_blank(lookup, "VERYFI_CLIENT_ID"),
            api_key: non_blank(lookup, "VERYFI_API_KEY"),
            base_url: non_blank(lookup, "VERYFI_BASE_URL"),
        }
    }
}
