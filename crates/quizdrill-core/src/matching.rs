//! Answer normalization and matching.
//!
//! `normalize` folds free text into a comparable canonical form;
//! `is_correct` judges a user's answer against a record's canonical answer
//! and accepted alternates. Matching is deliberately permissive: besides
//! equality it accepts bidirectional substring containment, so a short
//! generic answer can false-positive against a long candidate. That is the
//! historical grading behavior and is kept as-is; any tightening (e.g. a
//! minimum length ratio on containment matches) would change semantics for
//! existing corpora.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::QuestionRecord;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\- ]+").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalize text for comparison.
///
/// Trims, lowercases, folds `ё` to `е`, strips every character that is not
/// a word character, hyphen, or space, and collapses whitespace runs.
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase().replace('ё', "е");
    let stripped = NON_WORD_RE.replace_all(&lowered, " ");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// The head of an answer, cut at the first `.` or `(`.
///
/// Long canonical answers often carry a parenthetical qualifier or a second
/// explanatory clause; matching also runs against the bare head.
pub fn base_form(text: &str) -> &str {
    match text.find(['.', '(']) {
        Some(idx) => text[..idx].trim(),
        None => text.trim(),
    }
}

/// Judge a user's free-text answer against a record.
///
/// Every candidate (canonical answer and each alternate) contributes two
/// normalized forms: its base form and its full text. The answer is correct
/// if it equals any candidate or if either contains the other.
pub fn is_correct(user_text: &str, record: &QuestionRecord) -> bool {
    let user = normalize(user_text);

    record
        .candidates()
        .flat_map(|c| [normalize(base_form(c)), normalize(c)])
        .filter(|c| !c.is_empty())
        .any(|c| user == c || c.contains(&user) || user.contains(&c))
}
