//! Per-user session state machine.
//!
//! A user is either choosing (no active question) or answering (exactly one
//! active question, held in the session store). Each transport adapter
//! operation loads state, transitions, and returns the reply text to send —
//! one store round-trip per inbound message, no shared mutable state, so
//! distinct users can be handled concurrently.
//!
//! A missing or expired session is a guard condition that produces a
//! guidance message, never an error. Store failures are errors and
//! propagate uncaught; retry policy is the transport's business.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::matching;
use crate::pool::QuestionPool;
use crate::record::SessionKey;
use crate::traits::{SessionStore, DEFAULT_SESSION_TTL};

/// Keyboard labels the transports expose; anything else is an answer attempt.
const NEW_QUESTION_LABEL: &str = "Новый вопрос";
const GIVE_UP_LABEL: &str = "Сдаться";

const MSG_GREETING: &str = "Привет! Нажми «Новый вопрос», чтобы начать викторину.";
const MSG_NO_QUESTIONS: &str = "Нет файлов с вопросами";
const MSG_CORRECT: &str = "Правильно! Для следующего вопроса нажми «Новый вопрос».";
const MSG_INCORRECT: &str = "Неправильно… Попробуешь ещё раз?";
const MSG_NO_SESSION: &str = "Сначала нажми «Новый вопрос».";
const MSG_NO_ACTIVE_QUESTION: &str = "Активного вопроса нет";
const MISSING_ANSWER_PLACEHOLDER: &str = "(ответ не найден)";

/// Where a user's session stands after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No active question; waiting for a new-question request.
    Choosing,
    /// An active question exists; waiting for an answer or a give-up.
    Answering,
}

/// What to send back to the user, in order, and the resulting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub messages: Vec<String>,
    pub state: SessionState,
}

impl Reply {
    fn choosing(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            state: SessionState::Choosing,
        }
    }

    fn answering(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            state: SessionState::Answering,
        }
    }
}

/// What the user meant by a message.
///
/// Classification looks only at the message text, never at session state:
/// the state machine routes on the stored session, not on text patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    NewQuestion,
    GiveUp,
    Answer(&'a str),
}

impl<'a> Intent<'a> {
    pub fn classify(text: &'a str) -> Self {
        match text.trim() {
            NEW_QUESTION_LABEL => Intent::NewQuestion,
            GIVE_UP_LABEL => Intent::GiveUp,
            _ => Intent::Answer(text),
        }
    }
}

/// The trivia engine: pool + matcher + session store, one operation per
/// inbound user message.
pub struct QuizEngine {
    pool: QuestionPool,
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl QuizEngine {
    pub fn new(pool: QuestionPool, store: Arc<dyn SessionStore>) -> Self {
        Self {
            pool,
            store,
            ttl: DEFAULT_SESSION_TTL,
        }
    }

    /// Override the session TTL (default 24h).
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Greet a user starting an interaction. Always lands in `Choosing`.
    pub async fn on_start(&self, key: &SessionKey) -> Result<Reply> {
        tracing::info!(user = %key, "session started");
        Ok(Reply::choosing(MSG_GREETING))
    }

    /// Issue a new question, storing it as the user's active session.
    pub async fn on_new_question(&self, key: &SessionKey) -> Result<Reply> {
        match self.issue_question(key).await? {
            Some(question) => Ok(Reply::answering(question)),
            None => Ok(Reply::choosing(MSG_NO_QUESTIONS)),
        }
    }

    /// Judge an answer attempt against the user's active question.
    pub async fn on_answer(&self, key: &SessionKey, text: &str) -> Result<Reply> {
        let Some(record) = self.store.load(key).await? else {
            return Ok(Reply::choosing(MSG_NO_SESSION));
        };

        if matching::is_correct(text, &record) {
            tracing::info!(user = %key, "answer accepted");
            self.store.clear(key).await?;
            Ok(Reply::choosing(MSG_CORRECT))
        } else {
            tracing::debug!(user = %key, "answer rejected");
            Ok(Reply::answering(MSG_INCORRECT))
        }
    }

    /// Reveal the answer, drop the session, and immediately offer the next
    /// question. The old session is always deleted before a new one is
    /// created.
    pub async fn on_give_up(&self, key: &SessionKey) -> Result<Reply> {
        let Some(record) = self.store.load(key).await? else {
            return Ok(Reply::choosing(MSG_NO_ACTIVE_QUESTION));
        };

        let answer = if record.canonical_answer.is_empty() {
            MISSING_ANSWER_PLACEHOLDER
        } else {
            record.canonical_answer.as_str()
        };
        let mut messages = vec![format!("Правильный ответ:\n{answer}")];

        tracing::info!(user = %key, "gave up, revealing answer");
        self.store.clear(key).await?;

        match self.issue_question(key).await? {
            Some(question) => {
                messages.push(format!("Следующий вопрос:\n{question}"));
                Ok(Reply {
                    messages,
                    state: SessionState::Answering,
                })
            }
            None => {
                messages.push(MSG_NO_QUESTIONS.to_string());
                Ok(Reply {
                    messages,
                    state: SessionState::Choosing,
                })
            }
        }
    }

    /// Classify a raw message and dispatch to the matching operation.
    pub async fn handle_message(&self, key: &SessionKey, text: &str) -> Result<Reply> {
        match Intent::classify(text) {
            Intent::NewQuestion => self.on_new_question(key).await,
            Intent::GiveUp => self.on_give_up(key).await,
            Intent::Answer(answer) => self.on_answer(key, answer).await,
        }
    }

    /// Pick a question and store it. `None` covers both an exhausted pool
    /// and a parse failure — callers cannot and need not distinguish.
    async fn issue_question(&self, key: &SessionKey) -> Result<Option<String>> {
        let Some(record) = self.pool.pick_random() else {
            tracing::warn!(user = %key, "no question available");
            return Ok(None);
        };

        self.store.save(key, &record, self.ttl).await?;
        tracing::info!(user = %key, "question issued");
        Ok(Some(record.question_text))
    }
}
