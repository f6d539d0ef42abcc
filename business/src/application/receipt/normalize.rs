use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::NormalizeError;
use crate::domain::receipt::model::ReceiptResult;
use crate::domain::receipt::services::ReceiptExtractionService;
use crate::domain::receipt::use_cases::normalize::{
    NormalizeReceiptParams, NormalizeReceiptUseCase,
};

pub struct NormalizeReceiptUseCaseImpl {
    pub extractor: Arc<dyn ReceiptExtractionService>,
    pub logger: Arc<dyn Logger>,
}

impl NormalizeReceiptUseCaseImpl {
    async fn normalize(&self, image: &[u8]) -> Result<ReceiptResult, NormalizeError> {
        let document = self.extractor.extract(image).await?;
        ReceiptResult::from_provider_document(document)
    }
}

#[async_trait]
impl NormalizeReceiptUseCase for NormalizeReceiptUseCaseImpl {
    async fn execute(&self, params: NormalizeReceiptParams) -> ReceiptResult {
        self.logger.info(&format!(
            "Processing receipt image ({} bytes)",
            params.image.len()
        ));

        match self.normalize(&params.image).await {
            Ok(receipt) => {
                self.logger.info(&format!(
                    "Receipt processed: {} items, total {:.2} {}",
                    receipt.items.len(),
                    receipt.total,
                    receipt.currency
                ));
                receipt
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Receipt could not be processed ({}), returning empty record",
                    err
                ));
                ReceiptResult::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use serde_json::value::RawValue;

    mock! {
        pub ReceiptExtractor {}

        #[async_trait]
        impl ReceiptExtractionService for ReceiptExtractor {
            async fn extract(&self, image: &[u8]) -> Result<Box<RawValue>, NormalizeError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn document(body: &'static str) -> Result<Box<RawValue>, NormalizeError> {
        Ok(RawValue::from_string(body.to_string()).unwrap())
    }

    fn use_case(extractor: MockReceiptExtractor) -> NormalizeReceiptUseCaseImpl {
        NormalizeReceiptUseCaseImpl {
            extractor: Arc::new(extractor),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_normalize_receipt_when_extraction_succeeds() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .withf(|image| image == b"jpeg-bytes")
            .times(1)
            .returning(|_| {
                document(
                    r#"{"vendor":{"name":"Lowe's"},"total":12.5,"line_items":[{"description":"Tape","price":-5,"quantity":-2,"total":-10}]}"#,
                )
            });

        let result = use_case(mock_extractor)
            .execute(NormalizeReceiptParams {
                image: b"jpeg-bytes".to_vec(),
            })
            .await;

        assert_eq!(result.vendor, "Lowe's");
        assert_eq!(result.total, 12.5);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].price, 5.0);
        assert_eq!(result.items[0].quantity, 2.0);
        assert_eq!(result.items[0].total, 10.0);
    }

    #[tokio::test]
    async fn should_return_empty_record_when_provider_rejects_request() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .returning(|_| Err(NormalizeError::UnexpectedStatus(400)));

        let result = use_case(mock_extractor)
            .execute(NormalizeReceiptParams {
                image: b"blurry".to_vec(),
            })
            .await;

        assert_eq!(result, ReceiptResult::empty());
        assert_eq!(result.total, 0.0);
        assert!(result.items.is_empty());
        assert_eq!(result.currency, "USD");
    }

    #[tokio::test]
    async fn should_return_empty_record_when_credentials_missing() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .returning(|_| Err(NormalizeError::ConfigMissing));

        let result = use_case(mock_extractor)
            .execute(NormalizeReceiptParams { image: Vec::new() })
            .await;

        assert_eq!(result, ReceiptResult::empty());
    }

    #[tokio::test]
    async fn should_return_empty_record_when_amounts_are_not_numeric() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .returning(|_| document(r#"{"total":"n/a","line_items":[]}"#));

        let result = use_case(mock_extractor)
            .execute(NormalizeReceiptParams {
                image: b"img".to_vec(),
            })
            .await;

        assert_eq!(result, ReceiptResult::empty());
        assert_eq!(result.raw_provider_data.as_str(), "{}");
    }
}
