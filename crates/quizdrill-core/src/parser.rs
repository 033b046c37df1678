//! Question-file parser.
//!
//! Corpus files are plain text in the legacy KOI8-R encoding, one question
//! per file, structured by section markers: `Вопрос…` opens the question,
//! `Ответ:` the canonical answer, `Зачет:` the accepted alternates, and any
//! of `Комментарий:`/`Источник:`/`Автор:` ends capture for the rest of the
//! file. Parsing is best-effort: malformed structure degrades to whatever
//! sections were captured, and the only failure mode is a record with no
//! question text.

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::KOI8_R;

use crate::error::ParseError;
use crate::record::QuestionRecord;

const QUESTION_MARKER: &str = "Вопрос";
const ANSWER_MARKER: &str = "Ответ:";
const ACCEPT_MARKER: &str = "Зачет:";
const TERMINATORS: [&str; 3] = ["Комментарий:", "Источник:", "Автор:"];

/// Which section subsequent lines are appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Question,
    Answer,
    Accept,
}

/// Parse a raw KOI8-R encoded question file.
///
/// Undecodable bytes are replaced, never fatal.
pub fn parse_record(raw: &[u8]) -> Result<QuestionRecord, ParseError> {
    let (decoded, _, _) = KOI8_R.decode(raw);
    parse_record_str(&decoded)
}

/// Parse an already-decoded question file (useful for testing).
pub fn parse_record_str(text: &str) -> Result<QuestionRecord, ParseError> {
    let mut question_lines: Vec<&str> = Vec::new();
    let mut answer_lines: Vec<&str> = Vec::new();
    let mut accept_lines: Vec<&str> = Vec::new();
    let mut section = Section::None;

    for line in text.lines() {
        let stripped = line.trim();

        if stripped.starts_with(QUESTION_MARKER) {
            // A repeated question marker restarts capture entirely; only the
            // last question in a file survives.
            question_lines.clear();
            answer_lines.clear();
            accept_lines.clear();
            section = Section::Question;
            // Text after the colon on the marker line belongs to the question.
            if let Some((_, rest)) = stripped.split_once(':') {
                if !rest.trim().is_empty() {
                    question_lines.push(rest.trim());
                }
            }
            continue;
        }
        if stripped.starts_with(ANSWER_MARKER) {
            section = Section::Answer;
            continue;
        }
        if stripped.starts_with(ACCEPT_MARKER) {
            section = Section::Accept;
            continue;
        }
        if TERMINATORS.iter().any(|t| stripped.starts_with(t)) {
            break;
        }

        match section {
            Section::Question => question_lines.push(line),
            Section::Answer => answer_lines.push(line),
            Section::Accept => accept_lines.push(line),
            Section::None => {}
        }
    }

    let question_text = join_non_blank(&question_lines, "\n");
    if question_text.is_empty() {
        return Err(ParseError::EmptyQuestion);
    }

    let canonical_answer = join_non_blank(&answer_lines, " ");
    let accept_text = join_non_blank(&accept_lines, " ");
    let accepted_alternates = accept_text
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Ok(QuestionRecord {
        question_text,
        canonical_answer,
        accepted_alternates,
    })
}

/// Read and parse a corpus file.
pub fn parse_record_file(path: &Path) -> Result<QuestionRecord> {
    let raw = std::fs::read(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;
    parse_record(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn join_non_blank(lines: &[&str], sep: &str) -> String {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
        .trim()
        .to_string()
}
