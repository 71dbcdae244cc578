use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use wordpeek_types::{
    Attribution, Intent, PartOfSpeech, Selection, TabView, ViewModel, Word,
};

use crate::cache::{FetchCompletion, WordInfoCache};
use crate::fetch::WordInfoFetcher;
use crate::resolver::effective_pos;
use crate::state::SelectionState;

/// Reacts to user intents and projects the current state into a view model.
///
/// Owns the selection and the cache; both are only mutated through here.
pub struct SelectionController {
    words: Vec<Word>,
    state: SelectionState,
    cache: WordInfoCache,
    fetcher: Arc<dyn WordInfoFetcher>,
}

impl SelectionController {
    pub fn new(
        words: Vec<Word>,
        fetcher: Arc<dyn WordInfoFetcher>,
        completions_tx: AsyncSender<FetchCompletion>,
    ) -> Self {
        Self {
            words,
            state: SelectionState::new(),
            cache: WordInfoCache::new(completions_tx),
            fetcher,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn selection(&self) -> &Selection {
        self.state.current()
    }

    pub fn cache(&self) -> &WordInfoCache {
        &self.cache
    }

    pub fn subscribe(&mut self) -> AsyncReceiver<String> {
        self.cache.subscribe()
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::SelectWord(word) => self.on_select_word(word),
            Intent::SelectPartOfSpeech(pos) => self.on_select_pos(pos),
            Intent::Back => self.on_back(),
        }
    }

    pub fn on_select_word(&mut self, word: Word) {
        let token = word.token.clone();
        self.state.select_word(word);

        let decision = self.cache.ensure_fetched(&token, &self.fetcher);
        tracing::debug!("Selected '{}' ({:?})", token, decision);
    }

    pub fn on_select_pos(&mut self, pos: PartOfSpeech) {
        if !self.state.select_part_of_speech(pos) {
            tracing::warn!("Ignoring tab '{}' with no word selected", pos);
            return;
        }
        tracing::debug!("Selected tab '{}'", pos);
    }

    pub fn on_back(&mut self) {
        self.state.clear_selection();
        tracing::debug!("Back to word list");
    }

    /// Store a finished fetch.
    ///
    /// Returns true when the record belongs to the selected word, i.e. the
    /// view has moved from loading to detail. Records for other words are
    /// cached without touching the selection.
    pub fn on_fetch_complete(&mut self, completion: FetchCompletion) -> bool {
        let token = completion.token.clone();
        let stored = self.cache.complete(completion);

        let is_current = self
            .state
            .current()
            .word
            .as_ref()
            .is_some_and(|w| w.token == token);
        if stored && !is_current {
            tracing::debug!("Cached '{}' for later, selection unchanged", token);
        }

        stored && is_current
    }

    pub fn view_model(&self) -> ViewModel {
        let selection = self.state.current();
        let Some(word) = &selection.word else {
            return ViewModel::List {
                tokens: self.words.iter().map(|w| w.token.clone()).collect(),
            };
        };

        let Some(record) = self.cache.get(&word.token) else {
            return ViewModel::Loading {
                header: word.token.clone(),
            };
        };

        let active = effective_pos(Some(record.as_ref()), selection.part_of_speech);
        let tabs = PartOfSpeech::ALL
            .into_iter()
            .map(|pos| TabView {
                part_of_speech: pos,
                label: pos.label(),
                enabled: record.has(pos),
                active: active == Some(pos),
            })
            .collect();
        let explanations = active
            .and_then(|pos| record.explanations(pos))
            .map(|set| set.iter().map(|e| e.definition.clone()).collect())
            .unwrap_or_default();

        ViewModel::Detail {
            header: word.token.clone(),
            tabs,
            active,
            explanations,
            examples: word.sentences.iter().map(|s| s.text.clone()).collect(),
            attribution: Attribution {
                url: record.attribution_url.clone(),
                text: record.attribution_text.clone(),
            },
        }
    }

    /// Whether selecting `token` now would go straight to detail
    pub fn is_cached(&self, token: &str) -> bool {
        self.cache.get(token).is_some()
    }
}
