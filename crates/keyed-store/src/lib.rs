//! # Keyed Store
//!
//! A minimal string key-value store behind an injectable trait, for callers
//! that want localStorage-style persistence without committing to a concrete
//! backend.
//!
//! Two backends are provided:
//!
//! - [`MemoryStore`]: a `HashMap` behind a `tokio` read-write lock, for tests
//!   and ephemeral sessions.
//! - [`FileStore`]: a single JSON document on disk, loaded once on open and
//!   rewritten wholesale on every mutation. This mirrors how browser local
//!   storage persists data: one flat string map, replaced atomically per write.
//!
//! ## Basic Usage
//!
//! ```rust
//! use keyed_store::{KeyValueStore, MemoryStore};
//!
//! # async fn example() -> keyed_store::Result<()> {
//! let store = MemoryStore::new();
//! store.set("icon-cache-https://example.com", "data:image/png;base64,...").await?;
//! assert!(store.get("icon-cache-https://example.com").await?.is_some());
//! store.remove("icon-cache-https://example.com").await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string key-value store with synchronous-feeling, whole-value semantics.
///
/// Every operation replaces or removes a complete entry; there is no partial
/// update, no transaction, and no expiry. Implementations must be safe to
/// share across tasks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Look up the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
