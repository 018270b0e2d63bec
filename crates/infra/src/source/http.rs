use async_trait::async_trait;

use shopfront_catalog::{Product, ProductSource, SourceError};

/// Fetches the catalog from the storefront API (`GET {base_url}/goods`).
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn goods_url(&self) -> String {
        format!("{}/goods", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
        let url = self.goods_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("GET {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| SourceError::Decode(format!("GET {url}: {e}")))
    }
}
