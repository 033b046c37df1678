//! quizdrill-store — Session store backends.
//!
//! Implements the `SessionStore` trait from `quizdrill-core` for Redis
//! (production) and for an in-memory map (tests and offline play), and
//! loads the store/corpus configuration.

pub mod config;
pub mod memory;
pub mod redis_store;

pub use config::{load_config, load_config_from, QuizdrillConfig, RedisConfig};
pub use memory::MemoryStore;
pub use redis_store::RedisSessionStore;
