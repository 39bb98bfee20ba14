//! Storage abstraction layer for workout history
//!
//! Workout records are persisted as JSON arrays, one file per partition,
//! where the partition is derived from the workout's start timestamp. The
//! byte-level surface is the small [`ByteStore`] trait so the engine can run
//! against the filesystem in production and an in-memory map in tests.

pub mod backends;
pub mod error;
pub mod store;
pub mod traits;

#[cfg(test)]
mod tests;

pub use backends::{FileStore, MemoryStore};
pub use error::{StorageError, StorageResult};
pub use store::PartitionedWorkoutStore;
pub use traits::ByteStore;
