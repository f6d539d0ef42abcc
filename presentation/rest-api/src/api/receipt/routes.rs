use std::sync::Arc;

use poem_openapi::OpenApi;

use business::domain::logger::Logger;
use business::domain::receipt::model::ReceiptResult;
use business::domain::receipt::use_cases::normalize::{
    NormalizeReceiptParams, NormalizeReceiptUseCase,
};

use crate::api::receipt::dto::{ReceiptJson, ReceiptUploadRequest};
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    normalize_use_case: Arc<dyn NormalizeReceiptUseCase>,
    logger: Arc<dyn Logger>,
}

impl ReceiptApi {
    pub fn new(
        normalize_use_case: Arc<dyn NormalizeReceiptUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            normalize_use_case,
            logger,
        }
    }
}

/// Receipt processing API
#[OpenApi]
impl ReceiptApi {
    /// Process a receipt photo
    ///
    /// Sends the uploaded image to the extraction provider and returns the
    /// normalized receipt. Always answers 200; failures yield an empty receipt.
    /// A request without a `file` part is rejected with 400 before this runs.
    #[oai(path = "/api/receipts/process", method = "post", tag = "ApiTags::Receipts")]
    async fn process_receipt(&self, upload: ReceiptUploadRequest) -> ReceiptJson {
        let image = match upload.file.into_vec().await {
            Ok(image) => image,
            Err(err) => {
                self.logger
                    .warn(&format!("Receipt upload could not be read: {}", err));
                return ReceiptJson(ReceiptResult::empty());
            }
        };

        let receipt = self
            .normalize_use_case
            .execute(NormalizeReceiptParams { image })
            .await;

        ReceiptJson(receipt)
    }
}
