//! Core data model types for quizdrill.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One question extracted from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The prompt shown to the user, verbatim and possibly multi-line.
    /// Always non-empty after trimming; the parser rejects records where
    /// it is not.
    pub question_text: String,
    /// The canonical answer. May be empty — some corpus files have none.
    #[serde(default)]
    pub canonical_answer: String,
    /// Accepted alternate answers, in corpus order. Duplicates allowed.
    #[serde(default)]
    pub accepted_alternates: Vec<String>,
}

impl QuestionRecord {
    /// All answer candidates: the canonical answer (if any) followed by
    /// the alternates.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        let canonical = (!self.canonical_answer.is_empty()).then_some(self.canonical_answer.as_str());
        canonical
            .into_iter()
            .chain(self.accepted_alternates.iter().map(String::as_str))
    }
}

/// Identifies one user's session on one transport.
///
/// `platform` is an opaque transport tag; known values are `"tg"`, `"vk"`,
/// and `"cli"`, but nothing in the engine depends on the set being closed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub platform: String,
    pub user_id: String,
}

impl SessionKey {
    pub fn new(platform: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            user_id: user_id.into(),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.platform, self.user_id)
    }
}
