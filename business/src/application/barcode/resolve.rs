use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::barcode::errors::ResolveError;
use crate::domain::barcode::model::{BarcodeQueryAttempt, ProductResult};
use crate::domain::barcode::services::ProductSearchService;
use crate::domain::barcode::use_cases::resolve::{ResolveBarcodeParams, ResolveBarcodeUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::attempts::first_success;

pub struct ResolveBarcodeUseCaseImpl {
    pub search: Arc<dyn ProductSearchService>,
    pub logger: Arc<dyn Logger>,
}

impl ResolveBarcodeUseCaseImpl {
    async fn resolve(&self, barcode: &str) -> Result<ProductResult, ResolveError> {
        let attempts = BarcodeQueryAttempt::for_barcode(barcode);

        let found = first_success(attempts, |attempt| {
            let search = self.search.clone();
            let logger = self.logger.clone();
            let query = attempt.query.clone();
            let description = attempt.description.clone();

            async move {
                match search.search(&query).await {
                    Ok(listings) => {
                        if listings.is_empty() {
                            logger.debug(&format!("No products for {}", description));
                        }
                        // Provider ranks its results; only the top match is used.
                        Ok(listings.into_iter().next())
                    }
                    Err(err) => {
                        logger.warn(&format!("Search for {} failed: {}", description, err));
                        Err(err)
                    }
                }
            }
        })
        .await?;

        let (attempt, listing) = found.ok_or(ResolveError::NotFound)?;

        self.logger.info(&format!(
            "Barcode {} resolved via {}",
            barcode, attempt.description
        ));

        Ok(ProductResult::from_listing(listing, barcode))
    }
}

#[async_trait]
impl ResolveBarcodeUseCase for ResolveBarcodeUseCaseImpl {
    async fn execute(&self, params: ResolveBarcodeParams) -> ProductResult {
        self.logger.info(&format!("Resolving barcode: {}", params.barcode));

        match self.resolve(&params.barcode).await {
            Ok(product) => product,
            Err(ResolveError::NotFound) => {
                self.logger.info(&format!(
                    "Barcode {} not found, returning placeholder",
                    params.barcode
                ));
                ProductResult::not_found(&params.barcode)
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Barcode {} could not be resolved ({}), returning placeholder",
                    params.barcode, err
                ));
                ProductResult::not_found(&params.barcode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::barcode::model::ProductListing;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub ProductSearch {}

        #[async_trait]
        impl ProductSearchService for ProductSearch {
            async fn search(&self, query: &str) -> Result<Vec<ProductListing>, ResolveError>;
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

    fn drill_listing() -> ProductListing {
        ProductListing {
            title: Some("Cordless Drill".to_string()),
            price: Some("99.0".to_string()),
            category: Some("Power Tools".to_string()),
            link: Some("https://www.homedepot.com/p/drill".to_string()),
            thumbnail: Some("https://images.example.com/drill.jpg".to_string()),
            description: Some("20V drill".to_string()),
            availability: Some("In Stock".to_string()),
            supplier: "Home Depot".to_string(),
        }
    }

    fn use_case(search: MockProductSearch) -> ResolveBarcodeUseCaseImpl {
        ResolveBarcodeUseCaseImpl {
            search: Arc::new(search),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_first_listing_when_first_attempt_matches() {
        let mut mock_search = MockProductSearch::new();
        mock_search
            .expect_search()
            .withf(|query| query == "012345678905")
            .times(1)
            .returning(|_| {
                let mut second = drill_listing();
                second.title = Some("Other Drill".to_string());
                Ok(vec![drill_listing(), second])
            });
        mock_search
            .expect_search()
            .withf(|query| query == "UPC 012345678905")
            .times(0);

        let result = use_case(mock_search)
            .execute(ResolveBarcodeParams {
                barcode: "012345678905".to_string(),
            })
            .await;

        assert_eq!(result.name, "Cordless Drill");
        assert_eq!(result.price, "99.0");
        assert_eq!(result.sku, "012345678905");
        assert_eq!(result.supplier, "Home Depot");
        assert!(!result.is_degraded());
    }

    #[tokio::test]
    async fn should_fall_back_to_upc_query_when_first_attempt_is_empty() {
        let mut mock_search = MockProductSearch::new();
        mock_search
            .expect_search()
            .withf(|query| query == "012345678905")
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_search
            .expect_search()
            .withf(|query| query == "UPC 012345678905")
            .times(1)
            .returning(|_| Ok(vec![drill_listing()]));

        let result = use_case(mock_search)
            .execute(ResolveBarcodeParams {
                barcode: "012345678905".to_string(),
            })
            .await;

        assert_eq!(result.name, "Cordless Drill");
        assert_eq!(result.sku, "012345678905");
    }

    #[tokio::test]
    async fn should_fall_back_when_first_attempt_returns_bad_status() {
        let mut mock_search = MockProductSearch::new();
        mock_search
            .expect_search()
            .withf(|query| query == "42")
            .times(1)
            .returning(|_| Err(ResolveError::UnexpectedStatus(500)));
        mock_search
            .expect_search()
            .withf(|query| query == "UPC 42")
            .times(1)
            .returning(|_| Ok(vec![drill_listing()]));

        let result = use_case(mock_search)
            .execute(ResolveBarcodeParams {
                barcode: "42".to_string(),
            })
            .await;

        assert_eq!(result.name, "Cordless Drill");
    }

    #[tokio::test]
    async fn should_return_placeholder_when_every_attempt_is_empty() {
        let mut mock_search = MockProductSearch::new();
        mock_search
            .expect_search()
            .times(2)
            .returning(|_| Ok(vec![]));

        let result = use_case(mock_search)
            .execute(ResolveBarcodeParams {
                barcode: "0000000000000".to_string(),
            })
            .await;

        assert_eq!(result, ProductResult::not_found("0000000000000"));
        assert_eq!(result.supplier, "Unknown");
    }

    #[tokio::test]
    async fn should_return_placeholder_without_retrying_when_credentials_missing() {
        let mut mock_search = MockProductSearch::new();
        mock_search
            .expect_search()
            .times(1)
            .returning(|_| Err(ResolveError::ConfigMissing));

        let result = use_case(mock_search)
            .execute(ResolveBarcodeParams {
                barcode: "123".to_string(),
            })
            .await;

        assert!(result.is_degraded());
        assert_eq!(result.sku, "123");
    }

    #[tokio::test]
    async fn should_return_placeholder_on_transport_failure() {
        let mut mock_search = MockProductSearch::new();
        mock_search
            .expect_search()
            .times(1)
            .returning(|_| Err(ResolveError::Transport));

        let result = use_case(mock_search)
            .execute(ResolveBarcodeParams {
                barcode: "123".to_string(),
            })
            .await;

        assert_eq!(result, ProductResult::not_found("123"));
    }

    proptest! {
        #[test]
        fn should_always_echo_barcode_as_sku(barcode in "[0-9A-Za-z]{1,20}", outcome in 0u8..4) {
            let mut mock_search = MockProductSearch::new();
            mock_search.expect_search().returning(move |_| match outcome {
                0 => Ok(vec![drill_listing()]),
                1 => Ok(vec![]),
                2 => Err(ResolveError::Transport),
                _ => Err(ResolveError::MalformedPayload),
            });

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            let result = runtime.block_on(use_case(mock_search).execute(ResolveBarcodeParams {
                barcode: barcode.clone(),
            }));

            prop_assert_eq!(result.sku, barcode);
        }
    }
}
