//! Comprehensive tests for storage backends and the partitioned store

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tempfile::TempDir;

use crate::abstractions::FixedClock;
use crate::model::{
    Difficulty, Exercise, ExerciseId, Set, SetId, SetStatus, Workout, WorkoutId,
};
use crate::storage::backends::{FileStore, MemoryStore};
use crate::storage::error::StorageError;
use crate::storage::store::PartitionedWorkoutStore;
use crate::storage::traits::ByteStore;

/// Create a test workout starting at the given instant
fn create_test_workout(id: &str, started_at: DateTime<Utc>) -> Workout {
    Workout {
        id: WorkoutId::new(id),
        name: "Pull Day".to_string(),
        started_at,
        ended_at: Some(started_at + chrono::Duration::minutes(45)),
        exercises: vec![Exercise {
            id: ExerciseId::new(format!("{id}-e1")),
            name: "Deadlift".to_string(),
            rest_duration: 120,
            sets: vec![Set {
                id: SetId::new(format!("{id}-s1")),
                status: SetStatus::Finished,
                difficulty: Difficulty::WeightReps {
                    weight: 100.0,
                    reps: 5,
                },
                rest_started_at: Some(started_at + chrono::Duration::minutes(2)),
                rest_ended_at: Some(started_at + chrono::Duration::minutes(4)),
            }],
        }],
    }
}

fn store_at(now: DateTime<Utc>) -> PartitionedWorkoutStore {
    PartitionedWorkoutStore::new(
        Arc::new(MemoryStore::new()),
        Arc::new(FixedClock::at(now)),
    )
}

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn test_save_and_read_round_trip() {
    let started = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
    let store = store_at(started);
    let workout = create_test_workout("w-1", started);

    store.save(&workout).await.unwrap();

    let found = store.workouts_on(day(2024, 3, 15)).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0], workout);
}

#[tokio::test]
async fn test_save_upserts_by_id() {
    let started = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
    let store = store_at(started);

    let first = create_test_workout("w-1", started);
    store.save(&first).await.unwrap();

    let mut second = create_test_workout("w-1", started);
    second.name = "Pull Day (deload)".to_string();
    store.save(&second).await.unwrap();

    let found = store.workouts_on(day(2024, 3, 15)).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Pull Day (deload)");
}

#[tokio::test]
async fn test_workouts_on_filters_to_one_day() {
    let store = store_at(day(2024, 3, 15));
    let on_day = create_test_workout("w-1", Utc.with_ymd_and_hms(2024, 3, 15, 7, 0, 0).unwrap());
    let day_before =
        create_test_workout("w-2", Utc.with_ymd_and_hms(2024, 3, 14, 7, 0, 0).unwrap());
    let day_after =
        create_test_workout("w-3", Utc.with_ymd_and_hms(2024, 3, 16, 7, 0, 0).unwrap());

    store.save(&on_day).await.unwrap();
    store.save(&day_before).await.unwrap();
    store.save(&day_after).await.unwrap();

    let found = store.workouts_on(day(2024, 3, 15)).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, on_day.id);
}

#[tokio::test]
async fn test_missing_partition_reads_empty() {
    let store = store_at(day(2024, 3, 15));
    let found = store.workouts_on(day(2024, 3, 15)).await.unwrap();
    assert!(found.is_empty());
}

// Known boundary limitation: the query only consults the partition derived
// from the query date. A window starting late on the last day of a month
// reaches into the next month's partition, and records there are missed.
#[tokio::test]
async fn test_day_window_does_not_cross_partition_boundary() {
    let store = store_at(day(2024, 3, 31));
    let in_april = create_test_workout("w-1", Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap());
    store.save(&in_april).await.unwrap();

    // Window [Mar 31 12:00, Apr 1 12:00) covers the April start, but only
    // the March partition is read.
    let query = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
    let found = store.workouts_on(query).await.unwrap();
    assert!(found.is_empty());

    // The same record is visible through its own partition.
    let found = store.workouts_on(day(2024, 4, 1)).await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_in_progress_workout_is_todays_unended_record() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
    let store = store_at(now);

    let mut finished =
        create_test_workout("w-done", Utc.with_ymd_and_hms(2024, 3, 15, 6, 0, 0).unwrap());
    finished.ended_at = Some(Utc.with_ymd_and_hms(2024, 3, 15, 7, 0, 0).unwrap());
    store.save(&finished).await.unwrap();

    let mut live =
        create_test_workout("w-live", Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap());
    live.ended_at = None;
    store.save(&live).await.unwrap();

    let in_progress = store.in_progress_workout().await.unwrap();
    assert_eq!(in_progress.map(|w| w.id), Some(WorkoutId::new("w-live")));
}

#[tokio::test]
async fn test_in_progress_workout_ignores_other_days() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
    let store = store_at(now);

    let mut yesterday =
        create_test_workout("w-old", Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap());
    yesterday.ended_at = None;
    store.save(&yesterday).await.unwrap();

    assert!(store.in_progress_workout().await.unwrap().is_none());
}

#[tokio::test]
async fn test_history_spans_partitions_sorted_by_start() {
    let store = store_at(day(2024, 4, 2));
    let march = create_test_workout("w-mar", Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap());
    let april = create_test_workout("w-apr", Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap());
    let january = create_test_workout("w-jan", Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap());

    store.save(&april).await.unwrap();
    store.save(&january).await.unwrap();
    store.save(&march).await.unwrap();

    let history = store.history().await.unwrap();
    let ids: Vec<&str> = history.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w-jan", "w-mar", "w-apr"]);
}

#[tokio::test]
async fn test_corrupt_partition_surfaces_serialization_error() {
    let bytes_store = Arc::new(MemoryStore::new());
    bytes_store
        .write_all("workouts/2024-03", b"not json at all")
        .await
        .unwrap();

    let store = PartitionedWorkoutStore::new(
        bytes_store,
        Arc::new(FixedClock::at(day(2024, 3, 15))),
    );
    let err = store.workouts_on(day(2024, 3, 15)).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path());

    assert!(!store.exists("workouts/2024-03").await.unwrap());
    assert_eq!(store.read_all("workouts/2024-03").await.unwrap(), None);

    store
        .write_all("workouts/2024-03", b"[]")
        .await
        .unwrap();

    assert!(store.exists("workouts/2024-03").await.unwrap());
    assert_eq!(
        store.read_all("workouts/2024-03").await.unwrap(),
        Some(b"[]".to_vec())
    );
}

#[tokio::test]
async fn test_file_store_overwrites_whole_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path());

    store.write_all("workouts/2024-03", b"first").await.unwrap();
    store.write_all("workouts/2024-03", b"second").await.unwrap();

    assert_eq!(
        store.read_all("workouts/2024-03").await.unwrap(),
        Some(b"second".to_vec())
    );
}

#[tokio::test]
async fn test_file_store_lists_namespace_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path());

    assert!(store.list("workouts").await.unwrap().is_empty());

    store.write_all("workouts/2024-03", b"[]").await.unwrap();
    store.write_all("workouts/2024-04", b"[]").await.unwrap();
    store.write_all("plans/custom", b"[]").await.unwrap();

    assert_eq!(
        store.list("workouts").await.unwrap(),
        vec!["workouts/2024-03".to_string(), "workouts/2024-04".to_string()]
    );
}

#[tokio::test]
async fn test_file_store_creation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();

    // Two stores over the same root racing to create the same partition
    // directory both succeed.
    let a = FileStore::new(temp_dir.path());
    let b = FileStore::new(temp_dir.path());

    a.write_all("workouts/2024-03", b"[]").await.unwrap();
    b.write_all("workouts/2024-04", b"[]").await.unwrap();

    assert_eq!(a.list("workouts").await.unwrap().len(), 2);
}
