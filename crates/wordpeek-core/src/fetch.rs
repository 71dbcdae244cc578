use wordpeek_types::WordInfoRecord;

/// Source of per-word linguistic data
#[async_trait::async_trait]
pub trait WordInfoFetcher: Send + Sync {
    /// Fetch the record for one token
    async fn fetch_word_info(&self, token: &str) -> Result<WordInfoRecord, FetchError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Request timed out")]
    Timeout,
}
