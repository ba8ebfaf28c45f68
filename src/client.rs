use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::{Result, ScanError};

/// Source of result pages. The paginator only ever holds one request in flight.
pub trait SearchBackend {
    fn fetch_page(
        &self,
        request: &SearchRequest,
    ) -> impl std::future::Future<Output = Result<SearchResponse>>;
}

pub struct HttpSearchClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<HttpSearchClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let endpoint = endpoint.into();
        let client = builder.build().map_err(|source| ScanError::Transport {
            url: endpoint.clone(),
            source,
        })?;
        Ok(HttpSearchClient { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchClient {
    async fn fetch_page(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let body = serde_json::to_vec(request).map_err(ScanError::Encode)?;
        let transport = |source: reqwest::Error| ScanError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let res = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(ScanError::Status {
                url: self.endpoint.clone(),
                status,
            });
        }

        let bytes = res.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes).map_err(ScanError::Decode)
    }
}
