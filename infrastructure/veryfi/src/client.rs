use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.veryfi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client id and API key issued by Veryfi.
#[derive(Debug, Clone)]
pub struct VeryfiCredentials {
    pub client_id: String,
    pub api_key: String,
}

impl VeryfiCredentials {
    /// Both halves are required; a blank or missing one disables the adapter.
    pub fn from_parts(client_id: Option<String>, api_key: Option<String>) -> Option<Self> {
        match (client_id, api_key) {
            (Some(client_id), Some(api_key)) if !client_id.is_empty() && !api_key.is_empty() => {
                Some(Self { client_id, api_key })
            }
            _ => None,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("apikey {}", self.api_key)
    }
}

/// Shared Veryfi HTTP client configuration.
pub struct VeryfiClient {
    pub client: Client,
    pub credentials: Option<VeryfiCredentials>,
    pub base_url: String,
}

impl VeryfiClient {
    pub fn new(credentials: Option<VeryfiCredentials>) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        credentials: Option<VeryfiCredentials>,
        base_url: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the partner documents endpoint URL.
    pub fn documents_url(&self) -> String {
        format!("{}/api/v8/partner/documents", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_both_credential_parts() {
        assert!(VeryfiCredentials::from_parts(Some("id".into()), None).is_none());
        assert!(VeryfiCredentials::from_parts(None, Some("key".into())).is_none());
        assert!(VeryfiCredentials::from_parts(Some("".into()), Some("key".into())).is_none());
        assert!(VeryfiCredentials::from_parts(Some("id".into()), Some("key".into())).is_some());
    }

    #[test]
    fn should_build_documents_url_and_auth_header() {
        let credentials = VeryfiCredentials {
            client_id: "vrf-client".to_string(),
            api_key: "secret".to_string(),
        };
        let client = VeryfiClient::with_base_url(Some(credentials.clone()), "http://localhost:7000/");

        assert_eq!(
            client.documents_url(),
            "http://localhost:7000/api/v8/partner/documents"
        );
        assert_eq!(credentials.auth_header(), "apikey secret");
    }
}
