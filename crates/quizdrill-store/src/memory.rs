//! In-memory session store for testing and offline play.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use quizdrill_core::{QuestionRecord, SessionKey, SessionStore, StoreError};

/// A `SessionStore` backed by a process-local map.
///
/// TTLs are recorded but not enforced — expiry semantics belong to the real
/// backend; tests only need to see what the engine asked for. Call counters
/// let tests assert store interaction patterns.
#[derive(Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<SessionKey, (QuestionRecord, Duration)>>,
    save_count: AtomicU32,
    clear_count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The TTL the last `save` for `key` was given, if the key is live.
    pub fn ttl_of(&self, key: &SessionKey) -> Option<Duration> {
        self.sessions.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    /// Number of `save` calls made.
    pub fn save_count(&self) -> u32 {
        self.save_count.load(Ordering::Relaxed)
    }

    /// Number of `clear` calls made.
    pub fn clear_count(&self) -> u32 {
        self.clear_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, key: &SessionKey) -> Result<Option<QuestionRecord>, StoreError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .get(key)
            .map(|(record, _)| record.clone()))
    }

    async fn save(
        &self,
        key: &SessionKey,
        record: &QuestionRecord,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        self.sessions
            .lock()
            .unwrap()
            .insert(key.clone(), (record.clone(), ttl));
        Ok(())
    }

    async fn clear(&self, key: &SessionKey) -> Result<(), StoreError> {
        self.clear_count.fetch_add(1, Ordering::Relaxed);
        self.sessions.lock().unwrap().remove(key);
        Ok(())
    }
}
