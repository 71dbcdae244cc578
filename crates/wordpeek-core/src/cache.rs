use std::collections::HashMap;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use wordpeek_types::WordInfoRecord;

use crate::fetch::{FetchError, WordInfoFetcher};

/// Outcome of a spawned fetch, handed back to the event task
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    pub token: String,
    pub result: Result<WordInfoRecord, FetchError>,
}

/// What `ensure_fetched` did for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// A new request was spawned
    Issued,
    /// A request for this token is already in flight
    Coalesced,
    /// The record is already stored
    Cached,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub fetches_issued: u64,
    pub fetch_failures: u64,
}

#[derive(Debug)]
enum Entry {
    Pending,
    Resolved(Arc<WordInfoRecord>),
}

/// Fetched records keyed by token. Entries are never evicted.
pub struct WordInfoCache {
    entries: HashMap<String, Entry>,
    completions_tx: AsyncSender<FetchCompletion>,
    subscribers: Vec<AsyncSender<String>>,
    stats: CacheStats,
}

impl WordInfoCache {
    /// Completed fetches are sent to `completions_tx`; the receiving side must
    /// pass them back through [`WordInfoCache::complete`].
    pub fn new(completions_tx: AsyncSender<FetchCompletion>) -> Self {
        Self {
            entries: HashMap::new(),
            completions_tx,
            subscribers: Vec::new(),
            stats: CacheStats::default(),
        }
    }

    /// Resolved record for `token`, if any. Never blocks.
    pub fn get(&self, token: &str) -> Option<Arc<WordInfoRecord>> {
        match self.entries.get(token) {
            Some(Entry::Resolved(record)) => Some(Arc::clone(record)),
            _ => None,
        }
    }

    pub fn is_pending(&self, token: &str) -> bool {
        matches!(self.entries.get(token), Some(Entry::Pending))
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Start a fetch for `token` unless one is stored or in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn ensure_fetched(
        &mut self,
        token: &str,
        fetcher: &Arc<dyn WordInfoFetcher>,
    ) -> FetchDecision {
        match self.entries.get(token) {
            Some(Entry::Resolved(_)) => return FetchDecision::Cached,
            Some(Entry::Pending) => {
                tracing::debug!("Fetch for '{}' already in flight", token);
                return FetchDecision::Coalesced;
            }
            None => {}
        }

        self.entries.insert(token.to_string(), Entry::Pending);
        self.stats.fetches_issued += 1;
        tracing::info!("Fetching word info for '{}'", token);

        let fetcher = Arc::clone(fetcher);
        let tx = self.completions_tx.clone();
        let token = token.to_string();
        tokio::spawn(async move {
            let result = fetcher.fetch_word_info(&token).await;
            if let Err(e) = tx.send(FetchCompletion { token, result }).await {
                tracing::warn!("Fetch completion dropped: {}", e);
            }
        });

        FetchDecision::Issued
    }

    /// Apply a finished fetch. Returns true if a record was newly stored.
    ///
    /// A failure clears the pending marker so the next selection retries.
    pub fn complete(&mut self, completion: FetchCompletion) -> bool {
        let FetchCompletion { token, result } = completion;

        match result {
            Ok(record) => {
                if let Some(Entry::Resolved(_)) = self.entries.get(&token) {
                    tracing::debug!("Ignoring duplicate record for '{}'", token);
                    return false;
                }
                self.entries
                    .insert(token.clone(), Entry::Resolved(Arc::new(record)));
                tracing::info!("Stored word info for '{}'", token);
                self.notify(&token);
                true
            }
            Err(e) => {
                self.stats.fetch_failures += 1;
                tracing::error!("Failed to fetch word info for '{}': {}", token, e);
                if self.is_pending(&token) {
                    self.entries.remove(&token);
                }
                false
            }
        }
    }

    /// Receive the token of every entry that becomes resolved
    pub fn subscribe(&mut self) -> AsyncReceiver<String> {
        let (tx, rx) = kanal::unbounded_async();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, token: &str) {
        // Closed receivers are dropped here
        self.subscribers
            .retain(|tx| tx.try_send(token.to_string()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;
    use wordpeek_types::PartOfSpeech;

    use super::*;
    use crate::testing::{ScriptedFetcher, next_completion, record_with};

    #[tokio::test]
    async fn test_second_request_joins_the_first() {
        let fetcher = ScriptedFetcher::new();
        fetcher.respond("hand", Ok(record_with(&[PartOfSpeech::Noun])));
        let dyn_fetcher: Arc<dyn WordInfoFetcher> = fetcher.clone();
        let (tx, rx) = kanal::unbounded_async();
        let mut cache = WordInfoCache::new(tx);

        assert_eq!(cache.ensure_fetched("hand", &dyn_fetcher), FetchDecision::Issued);
        assert_eq!(cache.ensure_fetched("hand", &dyn_fetcher), FetchDecision::Coalesced);
        assert!(cache.get("hand").is_none());
        assert!(cache.is_pending("hand"));

        assert!(cache.complete(next_completion(&rx).await));
        assert_eq!(cache.ensure_fetched("hand", &dyn_fetcher), FetchDecision::Cached);
        assert_eq!(fetcher.calls("hand"), 1);
        assert_eq!(cache.stats().fetches_issued, 1);
    }

    #[tokio::test]
    async fn test_failure_leaves_entry_absent() {
        let fetcher = ScriptedFetcher::new();
        fetcher.respond("see", Err(FetchError::Status(503)));
        let dyn_fetcher: Arc<dyn WordInfoFetcher> = fetcher.clone();
        let (tx, rx) = kanal::unbounded_async();
        let mut cache = WordInfoCache::new(tx);

        cache.ensure_fetched("see", &dyn_fetcher);
        assert!(!cache.complete(next_completion(&rx).await));
        assert!(!cache.is_pending("see"));
        assert!(cache.get("see").is_none());
        assert_eq!(cache.stats().fetch_failures, 1);

        fetcher.respond("see", Ok(record_with(&[PartOfSpeech::Verb])));
        assert_eq!(cache.ensure_fetched("see", &dyn_fetcher), FetchDecision::Issued);
        assert!(cache.complete(next_completion(&rx).await));
        assert!(cache.get("see").is_some());
        assert_eq!(fetcher.calls("see"), 2);
    }

    #[tokio::test]
    async fn test_subscribers_hear_about_resolution() {
        let fetcher = ScriptedFetcher::new();
        fetcher.respond("friend", Ok(record_with(&[PartOfSpeech::Noun])));
        let dyn_fetcher: Arc<dyn WordInfoFetcher> = fetcher;
        let (tx, rx) = kanal::unbounded_async();
        let mut cache = WordInfoCache::new(tx);
        let updates = cache.subscribe();
        drop(cache.subscribe());

        cache.ensure_fetched("friend", &dyn_fetcher);
        cache.complete(next_completion(&rx).await);

        let token = timeout(Duration::from_secs(2), updates.recv())
            .await
            .expect("no notification")
            .expect("channel closed");
        assert_eq!(token, "friend");
        assert_eq!(cache.subscribers.len(), 1);
    }
}
