use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordpeek_core::{FetchCompletion, WordInfoFetcher};
use wordpeek_types::{Intent, ViewModel, Word};

use crate::events::event_loop;
use crate::state::AppState;
use crate::terminal::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<ViewModel>, AsyncReceiver<ViewModel>),
    pub ui_to_app: (AsyncSender<Intent>, AsyncReceiver<Intent>),
    pub completions: (AsyncSender<FetchCompletion>, AsyncReceiver<FetchCompletion>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
            completions: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, channel_capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(channel_capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        words: Vec<Word>,
        fetcher: Arc<dyn WordInfoFetcher>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            words.clone(),
            fetcher,
            self.channels.ui_to_app.1.clone(),
            self.channels.completions.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Terminal presentation
        tasks.spawn(ui_loop(
            words,
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.state.config.clone(),
            self.cancel_token.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
