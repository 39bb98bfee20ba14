//! Persisted workout records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ExerciseId, SetId, WorkoutId};
use super::plan::Difficulty;

/// Progression status of a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SetStatus {
    Unstarted,
    Resting,
    Finished,
}

/// A single performed (or to-be-performed) set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub id: SetId,
    pub status: SetStatus,
    pub difficulty: Difficulty,
    /// When the post-set rest began, if it has
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub rest_started_at: Option<DateTime<Utc>>,
    /// When the rest ended, if it has
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub rest_ended_at: Option<DateTime<Utc>>,
}

/// One exercise of a workout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    /// Rest between sets, in seconds
    pub rest_duration: u32,
    pub sets: Vec<Set>,
}

/// A workout record
///
/// A record with no `ended_at` is in progress. The engine keeps at most one
/// in-progress workout per day by construction: scheduled workouts get a
/// deterministic per-day id, so starting the same plan again upserts rather
/// than duplicates, and relaunches resume the stored record instead of
/// creating a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub started_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub ended_at: Option<DateTime<Utc>>,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Check whether this workout is still in progress
    pub fn is_in_progress(&self) -> bool {
        self.ended_at.is_none()
    }
}
