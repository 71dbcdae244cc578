use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordpeek_core::{FetchCompletion, SelectionController, WordInfoFetcher};
use wordpeek_types::{Intent, ViewModel, Word};

/// App's main loop. Sole owner of the selection controller.
pub async fn event_loop(
    words: Vec<Word>,
    fetcher: Arc<dyn WordInfoFetcher>,
    ui_to_app_rx: AsyncReceiver<Intent>,
    completions: (AsyncSender<FetchCompletion>, AsyncReceiver<FetchCompletion>),
    app_to_ui_tx: AsyncSender<ViewModel>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (completions_tx, completions_rx) = completions;
    let mut controller = SelectionController::new(words, fetcher, completions_tx);
    let resolved_rx = controller.subscribe();

    app_to_ui_tx.send(controller.view_model()).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Shutdown requested");
                break;
            }
            intent = ui_to_app_rx.recv() => {
                let Ok(intent) = intent else {
                    tracing::info!("[EVENT_LOOP] UI channel closed");
                    break;
                };
                tracing::debug!("[EVENT_LOOP] Intent: {:?}", intent);
                controller.dispatch(intent);
                app_to_ui_tx.send(controller.view_model()).await?;
            }
            completion = completions_rx.recv() => {
                let completion = completion?;
                if let Err(e) = &completion.result {
                    tracing::warn!("[EVENT_LOOP] Word info for '{}' unavailable: {}", completion.token, e);
                }
                controller.on_fetch_complete(completion);
            }
            token = resolved_rx.recv() => {
                let token = token?;
                let is_current = controller
                    .selection()
                    .word
                    .as_ref()
                    .is_some_and(|w| w.token == token);
                if is_current {
                    app_to_ui_tx.send(controller.view_model()).await?;
                }
            }
        }
    }

    Ok(())
}
