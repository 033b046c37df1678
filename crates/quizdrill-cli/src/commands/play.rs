//! The `quizdrill play` command: an interactive terminal transport.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use quizdrill_core::pool::QuestionPool;
use quizdrill_core::{QuizEngine, SessionKey, SessionStore};
use quizdrill_store::{load_config_from, MemoryStore, RedisSessionStore};

use crate::StoreKind;

/// Words that end the terminal session; everything else goes to the engine.
const QUIT_WORDS: [&str; 3] = ["выход", "quit", "exit"];

pub async fn execute(
    corpus: Option<PathBuf>,
    store_kind: StoreKind,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let corpus_dir = corpus.unwrap_or(config.corpus_dir);

    let store: Arc<dyn SessionStore> = match store_kind {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::Redis => Arc::new(RedisSessionStore::connect(&config.redis.url()).await?),
    };

    let engine = QuizEngine::new(QuestionPool::new(&corpus_dir), store)
        .with_ttl(Duration::from_secs(config.session_ttl_secs));
    let key = SessionKey::new("cli", "local");
    tracing::debug!(corpus = %corpus_dir.display(), "starting play session");

    let greeting = engine.on_start(&key).await?;
    for message in greeting.messages {
        println!("{message}");
    }
    println!("(«Новый вопрос», «Сдаться» или твой ответ; «выход» — закончить)");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&text.to_lowercase().as_str()) {
            break;
        }

        let reply = engine.handle_message(&key, text).await?;
        for message in reply.messages {
            println!("{message}");
        }
    }

    Ok(())
}
