use std::sync::Arc;

use logger::TracingLogger;

use serpapi::client::SerpApiClient;
use serpapi::product_search::SerpApiProductSearch;
use veryfi::client::{VeryfiClient, VeryfiCredentials};
use veryfi::receipt_extractor::ReceiptExtractorVeryfi;

use business::application::barcode::resolve::ResolveBarcodeUseCaseImpl;
use business::application::receipt::normalize::NormalizeReceiptUseCaseImpl;
use business::domain::logger::Logger;

use crate::config::serpapi_config::SerpApiConfig;
use crate::config::veryfi_config::VeryfiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub barcode_api: crate::api::barcode::routes::BarcodeApi,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    pub fn new(serpapi_config: &SerpApiConfig, veryfi_config: &VeryfiConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        if serpapi_config.api_key.is_none() {
            logger.warn("SERPAPI_KEY not set: barcode lookups will return placeholders");
        }
        let veryfi_credentials = VeryfiCredentials::from_parts(
            veryfi_config.client_id.clone(),
            veryfi_config.api_key.clone(),
        );
        if veryfi_credentials.is_none() {
            logger.warn("VERYFI_CLIENT_ID/VERYFI_API_KEY not set: receipts will come back empty");
        }

        // Infrastructure adapters
        let serpapi_client = match &serpapi_config.base_url {
            Some(base_url) => {
                SerpApiClient::with_base_url(serpapi_config.api_key.clone(), base_url.as_str())
            }
            None => SerpApiClient::new(serpapi_config.api_key.clone()),
        };
        let veryfi_client = match &veryfi_config.base_url {
            Some(base_url) => VeryfiClient::with_base_url(veryfi_credentials, base_url.as_str()),
            None => VeryfiClient::new(veryfi_credentials),
        };

        let product_search = Arc::new(SerpApiProductSearch::new(serpapi_client));
        let receipt_extractor = Arc::new(ReceiptExtractorVeryfi::new(veryfi_client));

        // Use cases
        let resolve_barcode_use_case = Arc::new(ResolveBarcodeUseCaseImpl {
            search: product_search,
            logger: logger.clone(),
        });
        let normalize_receipt_use_case = Arc::new(NormalizeReceiptUseCaseImpl {
            extractor: receipt_extractor,
            logger: logger.clone(),
        });

        let barcode_api = crate::api::barcode::routes::BarcodeApi::new(resolve_barcode_use_case);
        let receipt_api =
            crate::api::receipt::routes::ReceiptApi::new(normalize_receipt_use_case, logger);

        Self {
            health_api,
            barcode_api,
            receipt_api,
        }
    }
}
