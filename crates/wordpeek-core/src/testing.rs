//! Scripted fetcher and record builders shared by the unit tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::sync::Notify;
use tokio::time::timeout;
use wordpeek_types::{Explanation, PartOfSpeech, WordInfoRecord};

use crate::cache::FetchCompletion;
use crate::fetch::{FetchError, WordInfoFetcher};

/// Record with one definition per listed code
pub fn record_with(codes: &[PartOfSpeech]) -> WordInfoRecord {
    WordInfoRecord {
        info_by_pos: codes
            .iter()
            .map(|pos| {
                (
                    *pos,
                    vec![Explanation {
                        definition: format!("{} sense", pos.label()),
                    }],
                )
            })
            .collect(),
        attribution_url: "https://dictionary.example/".to_string(),
        attribution_text: "Example Dictionary".to_string(),
    }
}

pub async fn next_completion(rx: &AsyncReceiver<FetchCompletion>) -> FetchCompletion {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("Timeout - fetch never completed")
        .expect("completion channel closed")
}

/// Answers from a table; tokens can be held back behind a gate
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: Mutex<HashMap<String, Result<WordInfoRecord, FetchError>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl ScriptedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, token: &str, result: Result<WordInfoRecord, FetchError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(token.to_string(), result);
    }

    /// Hold fetches for `token` until the returned gate is notified
    pub fn gate(&self, token: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(token.to_string(), Arc::clone(&gate));
        gate
    }

    pub fn calls(&self, token: &str) -> usize {
        self.calls.lock().unwrap().get(token).copied().unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl WordInfoFetcher for ScriptedFetcher {
    async fn fetch_word_info(&self, token: &str) -> Result<WordInfoRecord, FetchError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(token.to_string())
            .or_default() += 1;

        let gate = self.gates.lock().unwrap().get(token).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Status(404)))
    }
}
