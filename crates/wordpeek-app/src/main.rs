use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordpeek_client::WordInfoClient;
use wordpeek_config::Config;
use wordpeek_core::{WordInfoFetcher, load_word_list};

pub mod controller;
pub mod events;
pub mod render;
pub mod state;
pub mod terminal;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordpeek", about = "Browse a word list and drill into definitions")]
struct Args {
    /// JSON config file; defaults plus environment overrides when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Word-list file, overrides `words_path` from the config
    #[arg(long)]
    words: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("WORDPEEK_LOG_FORMAT").is_ok_and(|v| v == "json");

    // stdout belongs to the presentation
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(args));
    // A pending stdin read holds a blocking thread until the next line
    runtime.shutdown_timeout(Duration::from_millis(250));
    result
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::new(),
    };

    let words_path = args
        .words
        .unwrap_or_else(|| PathBuf::from(&config.words_path));
    let words = load_word_list(&words_path)
        .with_context(|| format!("Failed to load word list from {}", words_path.display()))?;
    tracing::info!("{} words loaded", words.len());

    let fetcher: Arc<dyn WordInfoFetcher> = Arc::new(
        WordInfoClient::new(&config.network.api_url, config.network.timeout())
            .context("Failed to create word-info client")?,
    );

    let capacity = config.event_channel_capacity;
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks(words, fetcher);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task failed during shutdown: {e}");
        }
    }

    Ok(())
}
