use crate::core::{Backend, BackendResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// 以 reqwest 實作的後端存取
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get(&self, url: &Url) -> Result<BackendResponse> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.bytes().await?;
        Ok(BackendResponse::new(status, body.to_vec()))
    }
}
