//! One-shot retrieval of the product collection over HTTP.

use reqwest::Url;
use tracing::{debug, info};

use catalog_model::ProductsPage;

use crate::error::{IngestError, Result};

/// Default products endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Remote product source.
///
/// Fire-and-once: `fetch_products` is called a single time at startup
/// and never retried. Cancellation is dropping the pending future;
/// nothing else is in flight.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteSource {
    /// Create a source for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Url`] when the base URL does not parse.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|error| IngestError::Url(format!("{base_url}: {error}")))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// Source pointed at the default endpoint.
    ///
    /// # Errors
    ///
    /// Propagates URL parse failure (cannot happen for the built-in
    /// default, but the constructor stays fallible).
    pub fn default_endpoint() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Fetch the full product payload.
    ///
    /// # Errors
    ///
    /// Non-success HTTP status, transport failure, and payload decode
    /// failure each map to their [`IngestError`] variant.
    pub async fn fetch_products(&self) -> Result<ProductsPage> {
        let url = self
            .base_url
            .join("products")
            .map_err(|error| IngestError::Url(error.to_string()))?;
        debug!(%url, "fetching products");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status(status));
        }
        let body = response.bytes().await?;
        let page: ProductsPage = serde_json::from_slice(&body)?;
        info!(
            products = page.products.len(),
            total = page.total,
            "fetched product payload"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_base_url() {
        let err = RemoteSource::new("not a url").unwrap_err();
        assert!(matches!(err, IngestError::Url(_)));
    }

    #[test]
    fn default_endpoint_parses() {
        let source = RemoteSource::default_endpoint().expect("default endpoint");
        assert_eq!(source.base_url.as_str(), "https://dummyjson.com/");
    }
}
