mod display;
mod helper;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::history::DefaultHistory;
use tokio::sync::{Mutex, mpsc};
use tokio::time::timeout;

use mindmash_core::map::{CollaborationMap, MapRepository};
use mindmash_core::sentiment::Emotion;
use mindmash_core::session::{ChannelObserver, ChatEvent};
use mindmash_execution::{ChatSession, LogFormat, SubmitOutcome, init_tracing};
use mindmash_infrastructure::{ConfigService, JsonMapRepository};

use crate::helper::CliHelper;
use crate::repl::ReplCommand;

/// Offline multi-persona chat in the terminal.
#[derive(Parser, Debug)]
#[command(name = "mindmash", version, about)]
struct Args {
    /// Chat timing config (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for response selection, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

/// Prints session events as they arrive and tracks the active map node.
///
/// Returns once every sender is gone, i.e. after the session was dropped.
async fn render_events(
    mut events: mpsc::UnboundedReceiver<ChatEvent>,
    map: Arc<Mutex<CollaborationMap>>,
) {
    let mut mood = Emotion::Neutral;

    while let Some(event) = events.recv().await {
        match event {
            ChatEvent::MessageAppended { message } => {
                println!("{}", display::render_message(&message));
            }
            ChatEvent::AiActivity { persona } => {
                map.lock().await.set_active(&persona);
            }
            ChatEvent::EmotionChanged { emotion, sentiment } => {
                if emotion != mood {
                    mood = emotion;
                    println!("{}", display::render_emotion(emotion, &sentiment));
                }
            }
            ChatEvent::TypingChanged { .. } => {}
            ChatEvent::CycleCompleted => {
                println!();
            }
        }
    }
}

async fn save_map(map: &Mutex<CollaborationMap>, path: Option<PathBuf>) -> Result<()> {
    let repo = match path {
        Some(path) => JsonMapRepository::with_path(path),
        None => JsonMapRepository::in_current_dir(),
    };
    let data = map.lock().await.data().clone();
    repo.save(&data).await?;
    Ok(())
}

async fn load_map(map: &Mutex<CollaborationMap>, path: Option<PathBuf>) -> Result<()> {
    let repo = match path {
        Some(path) => JsonMapRepository::with_path(path),
        None => JsonMapRepository::in_current_dir(),
    };
    // Only a fully validated document replaces the current map.
    let data = repo.load().await?;
    map.lock().await.replace(data);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    });

    // ===== Session Setup =====
    let config_service = match &args.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = config_service
        .load()
        .with_context(|| match config_service.path() {
            Some(path) => format!("Failed to load config from {}", path.display()),
            None => "Failed to load config".to_string(),
        })?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let (observer, events) = ChannelObserver::channel();
    let session = ChatSession::builder(config)
        .observer(Arc::new(observer))
        .build();
    let map = Arc::new(Mutex::new(CollaborationMap::default()));
    let renderer = tokio::spawn(render_events(events, Arc::clone(&map)));

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== MindMash ===".bright_magenta().bold());
    println!(
        "{}",
        "Chat with Grok, ChatGPT and Gemini. Type '/help' for commands or 'quit' to exit."
            .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        match ReplCommand::parse(&line) {
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplCommand::Help => println!("{}", display::render_help()),
            ReplCommand::Pinned => {
                let pinned = session.pinned().await;
                if pinned.is_empty() {
                    println!("{}", "No pinned messages.".bright_black());
                }
                for (i, text) in pinned.iter().enumerate() {
                    println!("{} {}", format!("{}.", i + 1).bright_yellow(), text);
                }
            }
            ReplCommand::ShowMap => println!("{}", display::render_map(&*map.lock().await)),
            ReplCommand::SaveMap(path) => match save_map(&map, path).await {
                Ok(()) => println!("{}", "Map saved.".green()),
                Err(e) => eprintln!("{}", format!("Failed to save map: {e}").red()),
            },
            ReplCommand::LoadMap(path) => match load_map(&map, path).await {
                Ok(()) => println!("{}", "Map loaded.".green()),
                Err(e) => eprintln!("{}", format!("Failed to load map: {e}").red()),
            },
            ReplCommand::Clear => {
                session.clear().await;
                println!("{}", "Conversation cleared.".bright_black());
            }
            ReplCommand::Chat(text) => match session.submit(&text).await {
                SubmitOutcome::Dispatched(cycle) => {
                    tracing::debug!(category = %cycle.category, "Waiting for responses");
                }
                SubmitOutcome::Pinned { .. } | SubmitOutcome::Ignored => {}
            },
        }
    }

    // Pending cycles stop here; the renderer ends once the observer is gone.
    session.dispose();
    drop(session);
    if timeout(Duration::from_secs(1), renderer).await.is_err() {
        tracing::warn!("Event renderer did not stop in time");
    }

    Ok(())
}
