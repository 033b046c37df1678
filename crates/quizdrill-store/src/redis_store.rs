//! Redis-backed session store.
//!
//! One Redis hash per `(platform, user_id)` key, under the single
//! standardized scheme `quiz:session:{platform}:{user_id}`, with `EXPIRE`
//! set on every save. Alternates are stored `;`-joined in one field; the
//! parser guarantees an alternate can never contain `;`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;

use quizdrill_core::{QuestionRecord, SessionKey, SessionStore, StoreError};

const KEY_PREFIX: &str = "quiz:session";
const FIELD_QUESTION: &str = "question";
const FIELD_ANSWER: &str = "answer";
const FIELD_ALTERNATES: &str = "alternates";
const ALTERNATES_DELIMITER: char = ';';

/// `SessionStore` over a shared Redis connection manager.
///
/// The manager is injected (or built via [`RedisSessionStore::connect`]);
/// there is no process-wide client. Cloning the manager per operation is
/// how the `redis` crate multiplexes a single connection.
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Connect to Redis at `url` (`redis://` or `rediss://`).
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client =
            redis::Client::open(url).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tracing::info!("connected to redis session store");
        Ok(Self { conn })
    }
}

fn storage_key(key: &SessionKey) -> String {
    format!("{KEY_PREFIX}:{}:{}", key.platform, key.user_id)
}

fn join_alternates(alternates: &[String]) -> String {
    alternates.join(&ALTERNATES_DELIMITER.to_string())
}

fn split_alternates(joined: &str) -> Vec<String> {
    joined
        .split(ALTERNATES_DELIMITER)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, key: &SessionKey) -> Result<Option<QuestionRecord>, StoreError> {
        let mut conn = self.conn.clone();

        let fields: HashMap<String, String> = redis::cmd("HGETALL")
            .arg(storage_key(key))
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        // An expired or never-written key reads back as an empty hash.
        if fields.is_empty() {
            return Ok(None);
        }

        let question_text = fields
            .get(FIELD_QUESTION)
            .filter(|q| !q.is_empty())
            .cloned()
            .ok_or_else(|| StoreError::Serialization("session hash has no question".into()))?;

        Ok(Some(QuestionRecord {
            question_text,
            canonical_answer: fields.get(FIELD_ANSWER).cloned().unwrap_or_default(),
            accepted_alternates: fields
                .get(FIELD_ALTERNATES)
                .map(|s| split_alternates(s))
                .unwrap_or_default(),
        }))
    }

    async fn save(
        &self,
        key: &SessionKey,
        record: &QuestionRecord,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let storage_key = storage_key(key);

        redis::cmd("HSET")
            .arg(&storage_key)
            .arg(FIELD_QUESTION)
            .arg(&record.question_text)
            .arg(FIELD_ANSWER)
            .arg(&record.canonical_answer)
            .arg(FIELD_ALTERNATES)
            .arg(join_alternates(&record.accepted_alternates))
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        redis::cmd("EXPIRE")
            .arg(&storage_key)
            .arg(ttl.as_secs())
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::debug!(user = %key, "session saved");
        Ok(())
    }

    async fn clear(&self, key: &SessionKey) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();

        redis::cmd("DEL")
            .arg(storage_key(key))
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::debug!(user = %key, "session cleared");
        Ok(())
    }
}
