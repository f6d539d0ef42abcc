use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::value::RawValue;

use business::domain::receipt::errors::NormalizeError;
use business::domain::receipt::services::ReceiptExtractionService;

use crate::client::VeryfiClient;

pub struct ReceiptExtractorVeryfi {
    client: VeryfiClient,
}

impl ReceiptExtractorVeryfi {
    pub fn new(client: VeryfiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReceiptExtractionService for ReceiptExtractorVeryfi {
    async fn extract(&self, image: &[u8]) -> Result<Box<RawValue>, NormalizeError> {
        let credentials = self
            .client
            .credentials
            .as_ref()
            .ok_or(NormalizeError::ConfigMissing)?;

        // auto_delete: the provider must not keep the user's image after processing.
        let body = json!({
            "file_data": STANDARD.encode(image),
            "auto_delete": true,
        });

        let response = self
            .client
            .client
            .post(self.client.documents_url())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("CLIENT-ID", credentials.client_id.as_str())
            .header("AUTHORIZATION", credentials.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| NormalizeError::Transport)?;

        let status = response.status();
        if status != StatusCode::CREATED {
            return Err(NormalizeError::UnexpectedStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|_| NormalizeError::Transport)?;

        // Whitespace around the document is not kept.
        serde_json::from_str(&text).map_err(|_| NormalizeError::MalformedPayload)
    }
}
