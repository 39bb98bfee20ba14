//! One live workout session

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::abstractions::{Clock, IdGenerator};
use crate::itinerary::scheduled_workout_id;
use crate::model::{ExerciseId, SetId, Workout, WorkoutId, WorkoutPlan};

use super::plan::{Activity, WorkoutActivityPlan};
use super::EditError;

/// Owner of the transient plan for the lifetime of one active session
///
/// Begun from a scheduled plan or resumed from a stored in-progress record;
/// ends by committing into a [`Workout`] handed back to the caller (who
/// persists it) or by being dropped. The session always holds the latest
/// plan copy: edits replace it wholesale, never mutate it.
pub struct ActivitySession {
    workout_id: WorkoutId,
    started_at: DateTime<Utc>,
    plan: WorkoutActivityPlan,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl ActivitySession {
    /// Start a session from a workout blueprint
    ///
    /// The workout id is the plan's deterministic identity for today, so the
    /// committed record both dedupes the plan out of the day's itinerary and
    /// upserts over any earlier run of the same plan that day.
    pub fn begin(plan: &WorkoutPlan, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        let now = clock.now();
        let workout_id = WorkoutId::new(scheduled_workout_id(now, &plan.name));
        debug!(workout = %workout_id, plan = %plan.name, "beginning session");
        Self {
            workout_id,
            started_at: now,
            plan: WorkoutActivityPlan::from_plan(plan, ids.as_ref()),
            clock,
            ids,
        }
    }

    /// Resume a stored in-progress workout
    ///
    /// Ids and the original start timestamp are preserved, so snapshots and
    /// the final commit keep replacing the same record.
    pub fn resume(workout: &Workout, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        debug!(workout = %workout.id, "resuming session");
        Self {
            workout_id: workout.id.clone(),
            started_at: workout.started_at,
            plan: WorkoutActivityPlan::from_workout(workout),
            clock,
            ids,
        }
    }

    /// Id the committed workout will carry
    pub fn workout_id(&self) -> &WorkoutId {
        &self.workout_id
    }

    /// The session's current plan
    pub fn plan(&self) -> &WorkoutActivityPlan {
        &self.plan
    }

    /// Swap in an edited plan copy
    ///
    /// Pure edits hand back a new plan; this installs it as the session's
    /// latest. The caller always edits the plan returned by [`plan`](Self::plan).
    pub fn replace_plan(&mut self, plan: WorkoutActivityPlan) {
        self.plan = plan;
    }

    /// What the user should be doing right now
    pub fn current_activity(&self) -> Activity {
        self.plan.current_activity()
    }

    /// Complete the given set, starting its rest if one follows
    pub fn complete_set(&mut self, set_id: &SetId) -> Result<(), EditError> {
        let now = self.clock.now();
        self.plan = self.plan.complete_set(set_id, now)?;
        Ok(())
    }

    /// Finish the given set's rest period
    pub fn finish_rest(&mut self, set_id: &SetId) -> Result<(), EditError> {
        let now = self.clock.now();
        self.plan = self.plan.finish_rest(set_id, now)?;
        Ok(())
    }

    /// Append a copy of the exercise's last set
    pub fn duplicate_last_set(&mut self, exercise_id: &ExerciseId) -> Result<(), EditError> {
        self.plan = self.plan.duplicate_last_set(exercise_id, self.ids.as_ref())?;
        Ok(())
    }

    /// Whether the given set's rest period has run out
    ///
    /// The comparison is all the engine offers; an external poller watches
    /// this and calls [`finish_rest`](Self::finish_rest) at or after the
    /// boundary.
    pub fn rest_elapsed(&self, set_id: &SetId) -> bool {
        let now = self.clock.now();
        self.plan.exercises.iter().any(|exercise| {
            exercise
                .sets
                .iter()
                .any(|set| &set.id == set_id && set.rest_elapsed(exercise.rest_duration, now))
        })
    }

    /// Render the session as an in-progress workout record
    ///
    /// Same id every time, so periodic saves upsert instead of piling up,
    /// and a relaunch can find the record via the store's in-progress lookup.
    pub fn snapshot(&self) -> Workout {
        Workout {
            id: self.workout_id.clone(),
            name: self.plan.name.clone(),
            started_at: self.started_at,
            ended_at: None,
            exercises: self.plan.to_exercises(),
        }
    }

    /// End the session, producing the final workout record
    ///
    /// Consumes the session; the plan is gone once the record is out. The
    /// caller hands the record to the store.
    pub fn commit(self) -> Workout {
        let ended_at = self.clock.now();
        debug!(workout = %self.workout_id, "committing session");
        Workout {
            id: self.workout_id,
            name: self.plan.name.clone(),
            started_at: self.started_at,
            ended_at: Some(ended_at),
            exercises: self.plan.to_exercises(),
        }
    }
}
