use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use business::domain::barcode::errors::ResolveError;
use business::domain::barcode::model::ProductListing;
use business::domain::barcode::services::ProductSearchService;

use crate::client::SerpApiClient;

/// Only the provider's top match is ever used.
const RESULT_COUNT_HINT: &str = "1";

#[derive(Deserialize)]
struct SerpApiResponse {
    products: Option<Vec<SerpApiProduct>>,
}

#[derive(Deserialize)]
struct SerpApiProduct {
    title: Option<Value>,
    price: Option<Value>,
    category: Option<Value>,
    link: Option<Value>,
    thumbnail: Option<Value>,
    description: Option<Value>,
    availability: Option<Value>,
}

pub struct SerpApiProductSearch {
    client: SerpApiClient,
}

impl SerpApiProductSearch {
    pub fn new(client: SerpApiClient) -> Self {
        Self { client }
    }

    fn text(value: Option<Value>) -> Option<String> {
        match value? {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }

    /// Prices are passed on as the provider wrote them; falsy prices become empty.
    fn price(value: Option<Value>) -> Option<String> {
        match value? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(number) if number.as_f64() == Some(0.0) => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }

    fn to_listing(&self, product: SerpApiProduct) -> ProductListing {
        ProductListing {
            title: Self::text(product.title),
            price: Self::price(product.price),
            category: Self::text(product.category),
            link: Self::text(product.link),
            thumbnail: Self::text(product.thumbnail),
            description: Self::text(product.description),
            availability: Self::text(product.availability),
            supplier: self.client.supplier.clone(),
        }
    }
}

#[async_trait]
impl ProductSearchService for SerpApiProductSearch {
    async fn search(&self, query: &str) -> Result<Vec<ProductListing>, ResolveError> {
        let api_key = self
            .client
            .api_key
            .as_deref()
            .ok_or(ResolveError::ConfigMissing)?;

        let response = self
            .client
            .client
            .get(self.client.search_url())
            .query(&[
                ("api_key", api_key),
                ("engine", self.client.engine.as_str()),
                ("q", query),
                ("num", RESULT_COUNT_HINT),
            ])
            .send()
            .await
            .map_err(|_| ResolveError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ResolveError::UnexpectedStatus(status.as_u16()));
        }

        let data: SerpApiResponse = response
            .json()
            .await
            .map_err(|_| ResolveError::MalformedPayload)?;

        let products = data.products.ok_or(ResolveError::MalformedPayload)?;

        Ok(products
            .into_iter()
            .map(|product| self.to_listing(product))
            .collect())
    }
}
