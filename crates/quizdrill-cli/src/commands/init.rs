//! The `quizdrill init` command.

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::KOI8_R;

const STARTER_CONFIG: &str = r#"# quizdrill configuration
corpus_dir = "./quiz-questions"
session_ttl_secs = 86400

[redis]
host = "localhost"
port = 6379
# username = "default"
# password = "${REDIS_PASSWORD}"
tls = false
"#;

const EXAMPLE_QUESTION: &str = "\
Вопрос 1:
Сколько будет 2+2?

Ответ:
Четыре

Зачет:
4; четверка

Комментарий:
Пример файла вопроса. Кодировка корпуса — KOI8-R.
";

pub fn execute() -> Result<()> {
    write_if_absent(Path::new("quizdrill.toml"), STARTER_CONFIG.as_bytes())?;

    std::fs::create_dir_all("quiz-questions").context("failed to create quiz-questions/")?;
    let (encoded, _, _) = KOI8_R.encode(EXAMPLE_QUESTION);
    write_if_absent(Path::new("quiz-questions/example.txt"), &encoded)?;

    Ok(())
}

fn write_if_absent(path: &Path, content: &[u8]) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping", path.display());
        return Ok(());
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
