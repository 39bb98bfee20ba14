//! Core trait definitions for the storage abstraction layer

use async_trait::async_trait;

use super::error::StorageResult;

/// Minimal byte-level storage surface
///
/// Keys are slash-separated paths like `workouts/2024-03`; the segment before
/// the slash is the namespace. How a backend maps keys to its medium is its
/// own business, but reads of absent keys resolve to `None`, never an error.
#[async_trait]
pub trait ByteStore: Send + Sync {
    /// Check whether a key has content
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Read the full content of a key, or `None` if it does not exist
    async fn read_all(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replace the full content of a key
    async fn write_all(&self, key: &str, bytes: &[u8]) -> StorageResult<()>;

    /// List the keys present under a namespace
    async fn list(&self, namespace: &str) -> StorageResult<Vec<String>>;
}
