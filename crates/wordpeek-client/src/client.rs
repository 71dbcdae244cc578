use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use wordpeek_core::{FetchError, WordInfoFetcher};
use wordpeek_types::WordInfoRecord;

use crate::payload::WordInfoPayload;

/// HTTP client for the word-info backend
#[derive(Clone)]
pub struct WordInfoClient {
    client: reqwest::Client,
    api_url: Url,
}

impl WordInfoClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let api_url = Url::parse(api_url)
            .map_err(|e| FetchError::Network(format!("invalid API URL '{}': {}", api_url, e)))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, api_url })
    }

    /// `{api_url}/words/{token}`, with the token as one encoded segment
    pub fn word_url(&self, token: &str) -> Result<Url, FetchError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("API URL cannot be a base: {}", self.api_url)))?
            .pop_if_empty()
            .push("words")
            .push(token);
        Ok(url)
    }
}

fn map_transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_decode() {
        FetchError::MalformedPayload(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl WordInfoFetcher for WordInfoClient {
    async fn fetch_word_info(&self, token: &str) -> Result<WordInfoRecord, FetchError> {
        let url = self.word_url(token)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        let payload = WordInfoPayload::from_slice(&body)?;

        Ok(payload.into_record())
    }
}
