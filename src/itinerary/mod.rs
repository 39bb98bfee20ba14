//! Daily itinerary composition
//!
//! The itinerary answers "what is on the plate today": workouts already
//! recorded for the day, plus the program's scheduled plans that have not
//! been done yet. A scheduled plan counts as done when a stored workout
//! carries the plan's deterministic per-day identity.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::debug;

use crate::abstractions::start_of_day;
use crate::model::{Workout, WorkoutPlan};
use crate::schedule::ProgramSchedule;
use crate::storage::{PartitionedWorkoutStore, StorageResult};


/// Deterministic workout id for a scheduled plan on a given day
///
/// Stable across invocations: the ISO calendar day and the plan name fully
/// determine the id. Sessions started from a scheduled plan commit under
/// this id, which is what lets the itinerary recognize them as done.
pub fn scheduled_workout_id(date: DateTime<Utc>, plan_name: &str) -> String {
    let day = start_of_day(date).format("%Y-%m-%d").to_string();
    let mut hasher = Sha256::new();
    hasher.update(day.as_bytes());
    hasher.update(b":");
    hasher.update(plan_name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// One day's completed workouts and still-pending plans
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Workouts recorded for the day
    pub workouts: Vec<Workout>,
    /// Scheduled plans not yet done that day
    pub workout_plans: Vec<WorkoutPlan>,
}

/// Combines stored history with the program schedule
pub struct ItineraryService {
    store: Arc<PartitionedWorkoutStore>,
    schedule: ProgramSchedule,
}

impl ItineraryService {
    /// Create a service over the given store and schedule
    pub fn new(store: Arc<PartitionedWorkoutStore>, schedule: ProgramSchedule) -> Self {
        Self { store, schedule }
    }

    /// Itinerary for the calendar day of `date`
    ///
    /// Read-only: the store read is the only side effect.
    pub async fn itinerary_for(&self, date: DateTime<Utc>) -> StorageResult<Itinerary> {
        let day = start_of_day(date);
        let workouts = self.store.workouts_on(day).await?;

        let workout_plans: Vec<WorkoutPlan> = self
            .schedule
            .workout_plans_for(day)
            .iter()
            .filter(|plan| {
                let id = scheduled_workout_id(day, &plan.name);
                !workouts.iter().any(|w| w.id.as_str() == id)
            })
            .cloned()
            .collect();

        debug!(
            day = %day.format("%Y-%m-%d"),
            done = workouts.len(),
            pending = workout_plans.len(),
            "composed itinerary"
        );
        Ok(Itinerary {
            workouts,
            workout_plans,
        })
    }
}
