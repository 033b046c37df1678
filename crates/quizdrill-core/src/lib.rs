//! quizdrill-core — Core trivia engine: parsing, matching, and sessions.
//!
//! This crate defines the fundamental data model, the question-file parser,
//! the answer normalization and matching algorithm, and the per-user session
//! state machine that the rest of quizdrill builds on.

pub mod error;
pub mod matching;
pub mod parser;
pub mod pool;
pub mod record;
pub mod session;
pub mod traits;

pub use error::{ParseError, StoreError};
pub use record::{QuestionRecord, SessionKey};
pub use session::{Intent, QuizEngine, Reply, SessionState};
pub use traits::SessionStore;
