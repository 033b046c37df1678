//! The session store contract.
//!
//! Implemented by the `quizdrill-store` crate (Redis for production, an
//! in-memory store for tests and offline play). The engine takes the store
//! as an explicit `Arc<dyn SessionStore>` — there is no ambient global
//! client, so tests can substitute a fake freely.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::record::{QuestionRecord, SessionKey};

/// Default session lifetime: 24 hours of inactivity. A safety net against
/// orphaned state, not a gameplay timer.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 3600);

/// Per-user storage of the single active question.
///
/// At most one record per key exists at any time; `save` overwrites.
/// Implementations serialize `accepted_alternates` joined with `;` — safe
/// because alternates are produced by splitting the corpus accept section
/// on `;`, so an alternate can never contain one.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The active question for `key`, or `None` if absent or expired.
    async fn load(&self, key: &SessionKey) -> Result<Option<QuestionRecord>, StoreError>;

    /// Store `record` as the active question for `key`, replacing any
    /// previous one and resetting the TTL.
    async fn save(
        &self,
        key: &SessionKey,
        record: &QuestionRecord,
        ttl: Duration,
    ) -> Result<(), StoreError>;

    /// Remove the active question for `key`. Absent keys are not an error.
    async fn clear(&self, key: &SessionKey) -> Result<(), StoreError>;
}
