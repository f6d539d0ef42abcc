use async_trait::async_trait;

use super::errors::ResolveError;
use super::model::ProductListing;

/// Service port for the external product-search provider.
///
/// One call is one search request. An empty vector means the provider
/// answered but matched nothing.
#[async_trait]
pub trait ProductSearchService: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<ProductListing>, ResolveError>;
}
