//! End-to-end play sessions driven over piped stdin.
//!
//! These exercise the full stack — corpus enumeration, KOI8-R parsing,
//! session store, answer matching, state transitions — through the same
//! adapter operations a chat transport would call.

use assert_cmd::Command;
use encoding_rs::KOI8_R;
use predicates::prelude::*;
use tempfile::TempDir;

const ONE_QUESTION: &str = "Вопрос: 2+2?\nОтвет:\nЧетыре\nЗачет:\n4\n";

fn corpus_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, text) in files {
        let (encoded, _, _) = KOI8_R.encode(text);
        std::fs::write(dir.path().join(name), &encoded).unwrap();
    }
    dir
}

fn play(corpus: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizdrill").unwrap();
    cmd.arg("play").arg("--corpus").arg(corpus.path());
    cmd
}

#[test]
fn wrong_then_right_answer() {
    let corpus = corpus_with(&[("q1.txt", ONE_QUESTION)]);

    play(&corpus)
        .write_stdin("Новый вопрос\n5\nчетыре\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2+2?"))
        .stdout(predicate::str::contains("Неправильно"))
        .stdout(predicate::str::contains("Правильно!"));
}

#[test]
fn alternate_answer_is_accepted() {
    let corpus = corpus_with(&[("q1.txt", ONE_QUESTION)]);

    play(&corpus)
        .write_stdin("Новый вопрос\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Правильно!"));
}

#[test]
fn answer_before_question_gives_guidance() {
    let corpus = corpus_with(&[("q1.txt", ONE_QUESTION)]);

    play(&corpus)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Сначала нажми «Новый вопрос»"));
}

#[test]
fn give_up_reveals_answer_and_continues() {
    let corpus = corpus_with(&[("q1.txt", ONE_QUESTION)]);

    play(&corpus)
        .write_stdin("Новый вопрос\nСдаться\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Правильный ответ:"))
        .stdout(predicate::str::contains("Четыре"))
        .stdout(predicate::str::contains("Следующий вопрос:"));
}

#[test]
fn empty_corpus_reports_no_questions() {
    let corpus = corpus_with(&[]);

    play(&corpus)
        .write_stdin("Новый вопрос\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Нет файлов с вопросами"));
}

#[test]
fn quit_word_ends_the_session() {
    let corpus = corpus_with(&[("q1.txt", ONE_QUESTION)]);

    play(&corpus)
        .write_stdin("Новый вопрос\nвыход\nэто уже не читается\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2+2?"));
}
