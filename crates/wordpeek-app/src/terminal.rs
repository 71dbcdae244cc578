use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use wordpeek_config::Config;
use wordpeek_types::{Intent, PartOfSpeech, ViewModel, Word};

use crate::render::render;

const HELP: &str = "Commands: <n> | select <n|word> | pos <noun|verb|adj|adv> | back | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Pos(PartOfSpeech),
    Back,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    let arg = parts.collect::<Vec<_>>().join(" ");

    match head.to_ascii_lowercase().as_str() {
        "select" | "s" if !arg.is_empty() => Ok(Command::Select(arg)),
        "pos" | "p" if !arg.is_empty() => arg
            .parse::<PartOfSpeech>()
            .map(Command::Pos)
            .map_err(|e| e.to_string()),
        "back" | "b" => Ok(Command::Back),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ if arg.is_empty() && head.parse::<usize>().is_ok() => {
            Ok(Command::Select(head.to_string()))
        }
        _ => Err(format!("unknown command: {}", line.trim())),
    }
}

/// Find a word by 1-based list position or by token
pub fn resolve_word(words: &[Word], target: &str) -> Option<Word> {
    if let Ok(index) = target.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| words.get(i)).cloned();
    }

    let target = wordpeek_core::normalize_token(target);
    words.iter().find(|w| w.token == target).cloned()
}

/// Line-oriented presentation on stdin/stdout
pub async fn ui_loop(
    words: Vec<Word>,
    app_to_ui_rx: AsyncReceiver<ViewModel>,
    ui_to_app_tx: AsyncSender<Intent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui_config = config.read().await.ui.clone();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            view = app_to_ui_rx.recv() => {
                let Ok(view) = view else { break };
                print!("{}", render(&view, &ui_config));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    cancel.cancel();
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let intent = match parse_command(&line) {
                    Ok(Command::Select(target)) => match resolve_word(&words, &target) {
                        Some(word) => Intent::SelectWord(word),
                        None => {
                            println!("no such word: {}", target);
                            continue;
                        }
                    },
                    Ok(Command::Pos(pos)) => Intent::SelectPartOfSpeech(pos),
                    Ok(Command::Back) => Intent::Back,
                    Ok(Command::Help) => {
                        println!("{}", HELP);
                        continue;
                    }
                    Ok(Command::Quit) => {
                        cancel.cancel();
                        break;
                    }
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                ui_to_app_tx.send(intent).await?;
            }
        }
    }

    Ok(())
}
