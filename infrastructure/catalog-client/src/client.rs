use reqwest::Client;

/// HTTP client bound to a catalog server.
///
/// No timeout is configured; requests wait as long as `reqwest` lets them.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the product collection endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    /// Returns the URL of a single product.
    pub fn product_url(&self, id: &str) -> String {
        format!("{}/{}", self.products_url(), id)
    }
}
