//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use encoding_rs::KOI8_R;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizdrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizdrill").unwrap()
}

fn write_corpus_file(dir: &std::path::Path, name: &str, text: &str) {
    let (encoded, _, _) = KOI8_R.encode(text);
    std::fs::write(dir.join(name), &encoded).unwrap();
}

#[test]
fn help_output() {
    quizdrill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal trivia"));
}

#[test]
fn version_output() {
    quizdrill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizdrill"));
}

#[test]
fn ask_prints_a_question() {
    let dir = TempDir::new().unwrap();
    write_corpus_file(
        dir.path(),
        "q1.txt",
        "Вопрос: 2+2?\nОтвет:\nЧетыре\nЗачет:\n4\n",
    );

    quizdrill()
        .arg("ask")
        .arg("--corpus")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2+2?"));
}

#[test]
fn ask_over_empty_corpus_fails() {
    let dir = TempDir::new().unwrap();

    quizdrill()
        .arg("ask")
        .arg("--corpus")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no questions available"));
}

#[test]
fn ask_with_missing_config_file_fails() {
    quizdrill()
        .arg("ask")
        .arg("--config")
        .arg("/no/such/quizdrill.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizdrill.toml"))
        .stdout(predicate::str::contains("Created quiz-questions/example.txt"));

    assert!(dir.path().join("quizdrill.toml").exists());
    assert!(dir.path().join("quiz-questions/example.txt").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizdrill().current_dir(dir.path()).arg("init").assert().success();

    quizdrill()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_example_corpus_is_usable() {
    let dir = TempDir::new().unwrap();

    quizdrill().current_dir(dir.path()).arg("init").assert().success();

    quizdrill()
        .current_dir(dir.path())
        .arg("ask")
        .assert()
        .success()
        .stdout(predicate::str::contains("2+2"));
}
