//! Date-partitioned workout record store

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::abstractions::{start_of_day, Clock};
use crate::model::Workout;

use super::error::{StorageError, StorageResult};
use super::traits::ByteStore;

/// Namespace all workout partitions live under
const WORKOUTS_NAMESPACE: &str = "workouts";

/// Partition key for a workout start timestamp
///
/// Partitions are one calendar month wide. Must stay a pure function of the
/// timestamp: save and the query paths all derive the key the same way.
fn partition_key(at: DateTime<Utc>) -> String {
    format!("{}/{}", WORKOUTS_NAMESPACE, at.format("%Y-%m"))
}

/// Workout record persistence over a [`ByteStore`]
///
/// Each partition holds a JSON array of [`Workout`] records. Writes are
/// read-modify-write of the whole partition; concurrent saves to the same
/// partition are last-write-wins and callers are expected to serialize
/// session commits.
pub struct PartitionedWorkoutStore {
    store: Arc<dyn ByteStore>,
    clock: Arc<dyn Clock>,
}

impl PartitionedWorkoutStore {
    /// Create a store over the given byte storage and clock
    pub fn new(store: Arc<dyn ByteStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Save a workout record, replacing any existing record with the same id
    ///
    /// Upsert semantics: at most one record per id survives in the partition.
    pub async fn save(&self, workout: &Workout) -> StorageResult<()> {
        let key = partition_key(workout.started_at);
        let mut records = self.read_partition(&key).await?;
        records.retain(|existing| existing.id != workout.id);
        records.push(workout.clone());
        debug!(partition = %key, workout = %workout.id, "saving workout");
        self.write_partition(&key, &records).await
    }

    /// Workouts whose start falls within one day of `date`
    ///
    /// The window is `[date, date + 1 day)`; callers that mean a calendar day
    /// pass a day-truncated instant. Only the partition derived from `date`
    /// is consulted, so a window reaching across a month boundary misses
    /// records in the adjacent partition. This is a known limitation, pinned
    /// by the module tests rather than fixed.
    pub async fn workouts_on(&self, date: DateTime<Utc>) -> StorageResult<Vec<Workout>> {
        let window_end = date + Duration::days(1);
        let records = self.read_partition(&partition_key(date)).await?;
        Ok(records
            .into_iter()
            .filter(|w| w.started_at >= date && w.started_at < window_end)
            .collect())
    }

    /// Today's workout that has not ended yet, if any
    pub async fn in_progress_workout(&self) -> StorageResult<Option<Workout>> {
        let today = start_of_day(self.clock.now());
        let workouts = self.workouts_on(today).await?;
        Ok(workouts.into_iter().find(Workout::is_in_progress))
    }

    /// Every stored workout, sorted by start time
    pub async fn history(&self) -> StorageResult<Vec<Workout>> {
        let mut workouts = Vec::new();
        for key in self.store.list(WORKOUTS_NAMESPACE).await? {
            workouts.extend(self.read_partition(&key).await?);
        }
        workouts.sort_by_key(|w| w.started_at);
        Ok(workouts)
    }

    /// Load a partition, resolving a missing one to an empty collection
    async fn read_partition(&self, key: &str) -> StorageResult<Vec<Workout>> {
        match self.store.read_all(key).await? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                warn!(partition = %key, error = %e, "partition failed to deserialize");
                StorageError::serialization(e)
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Replace a partition's full serialized content
    async fn write_partition(&self, key: &str, records: &[Workout]) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        self.store.write_all(key, &bytes).await
    }
}
