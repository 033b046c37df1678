//! Engine error types.
//!
//! Defined in `quizdrill-core` so callers can classify failures without
//! string matching. Conditions the engine recovers from locally (an empty
//! corpus, a missing session) are not errors — they resolve to reply
//! messages, never to values of these types.

use thiserror::Error;

/// Errors from parsing a question file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The file yielded no usable question text. Malformed structure never
    /// fails harder than this: the parser degrades to best-effort capture.
    #[error("no question text found in record")]
    EmptyQuestion,
}

/// Errors from a session store backend.
///
/// Store failures are infrastructure failures. The session state machine
/// propagates them uncaught; retry and backoff policy belongs to the
/// surrounding transport, not the engine.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or refused the operation.
    #[error("session store unavailable: {0}")]
    Unavailable(String),

    /// A stored session could not be encoded or decoded.
    #[error("session serialization failed: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Returns `true` if retrying the same operation could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}
