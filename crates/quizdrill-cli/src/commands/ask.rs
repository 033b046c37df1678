//! The `quizdrill ask` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdrill_core::pool::QuestionPool;
use quizdrill_store::load_config_from;

pub fn execute(corpus: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let corpus_dir = corpus.unwrap_or(config.corpus_dir);
    let pool = QuestionPool::new(&corpus_dir);

    match pool.pick_random() {
        Some(record) => {
            println!("{}", record.question_text);
            Ok(())
        }
        None => anyhow::bail!("no questions available in {}", corpus_dir.display()),
    }
}
