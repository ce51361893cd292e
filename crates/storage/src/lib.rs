//! Storage layer for artsearch
//!
//! Small string key-value stores used to persist reference lists between
//! sessions.

mod file_store;
mod memory_store;

pub use artsearch_core::KeyValueStore;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
