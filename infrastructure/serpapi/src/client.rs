use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";
const HOME_DEPOT_ENGINE: &str = "home_depot";
const HOME_DEPOT_SUPPLIER: &str = "Home Depot";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared SerpApi HTTP client configuration.
pub struct SerpApiClient {
    pub client: Client,
    pub api_key: Option<String>,
    pub base_url: String,
    pub engine: String,
    pub supplier: String,
}

impl SerpApiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            engine: HOME_DEPOT_ENGINE.to_string(),
            supplier: HOME_DEPOT_SUPPLIER.to_string(),
        }
    }

    /// Returns the search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}
