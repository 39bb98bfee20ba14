//! Live activity plan and current-activity resolution

use chrono::{DateTime, Utc};

use crate::abstractions::IdGenerator;
use crate::model::{
    Difficulty, Exercise, ExerciseId, Set, SetId, SetStatus, Workout, WorkoutPlan,
};

use super::edits::EditError;

/// A set within a live session
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySet {
    pub id: SetId,
    pub status: SetStatus,
    pub difficulty: Difficulty,
    pub rest_started_at: Option<DateTime<Utc>>,
    pub rest_ended_at: Option<DateTime<Utc>>,
}

impl ActivitySet {
    /// Whether this set's rest period has run out at `now`
    ///
    /// True once `rest_started_at + rest_duration` has been reached,
    /// millisecond-exact at the boundary. A set that never started resting
    /// has no rest to elapse.
    pub fn rest_elapsed(&self, rest_duration: u32, now: DateTime<Utc>) -> bool {
        match self.rest_started_at {
            Some(started) => {
                started.timestamp_millis() + i64::from(rest_duration) * 1000
                    <= now.timestamp_millis()
            }
            None => false,
        }
    }
}

/// An exercise within a live session
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityExercise {
    pub id: ExerciseId,
    pub name: String,
    /// Rest between sets, in seconds
    pub rest_duration: u32,
    pub sets: Vec<ActivitySet>,
}

/// What the user should be doing right now
#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    /// Perform the named exercise at the given target
    Exercising {
        exercise_name: String,
        set_id: SetId,
        difficulty: Difficulty,
    },
    /// Wait out the rest period of the given set
    Resting { set_id: SetId, rest_duration: u32 },
    /// Every set is done
    Finished,
}

/// The mutable-by-replacement plan of one live session
///
/// Built from a blueprint or a stored record at session start, discarded at
/// session end. All edits go through the pure functions in
/// [`edits`](super::edits) and the transition methods below; none of them
/// touch the receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutActivityPlan {
    pub name: String,
    pub exercises: Vec<ActivityExercise>,
}

impl WorkoutActivityPlan {
    /// Materialize a blueprint, stamping fresh ids on every exercise and set
    pub fn from_plan(plan: &WorkoutPlan, ids: &dyn IdGenerator) -> Self {
        Self {
            name: plan.name.clone(),
            exercises: plan
                .exercises
                .iter()
                .map(|exercise| ActivityExercise {
                    id: ExerciseId::new(ids.generate()),
                    name: exercise.name.clone(),
                    rest_duration: exercise.rest_duration,
                    sets: exercise
                        .sets
                        .iter()
                        .map(|set| ActivitySet {
                            id: SetId::new(ids.generate()),
                            status: SetStatus::Unstarted,
                            difficulty: set.difficulty.clone(),
                            rest_started_at: None,
                            rest_ended_at: None,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuild the live plan of a stored record, preserving its ids
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            name: workout.name.clone(),
            exercises: workout
                .exercises
                .iter()
                .map(|exercise| ActivityExercise {
                    id: exercise.id.clone(),
                    name: exercise.name.clone(),
                    rest_duration: exercise.rest_duration,
                    sets: exercise
                        .sets
                        .iter()
                        .map(|set| ActivitySet {
                            id: set.id.clone(),
                            status: set.status,
                            difficulty: set.difficulty.clone(),
                            rest_started_at: set.rest_started_at,
                            rest_ended_at: set.rest_ended_at,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Render the live plan as exercises of a workout record
    pub fn to_exercises(&self) -> Vec<Exercise> {
        self.exercises
            .iter()
            .map(|exercise| Exercise {
                id: exercise.id.clone(),
                name: exercise.name.clone(),
                rest_duration: exercise.rest_duration,
                sets: exercise
                    .sets
                    .iter()
                    .map(|set| Set {
                        id: set.id.clone(),
                        status: set.status,
                        difficulty: set.difficulty.clone(),
                        rest_started_at: set.rest_started_at,
                        rest_ended_at: set.rest_ended_at,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Resolve what the user should be doing right now
    ///
    /// Scans exercises and sets in plan order for the first set that is not
    /// finished. Deterministic and total: always one of the three variants.
    pub fn current_activity(&self) -> Activity {
        for exercise in &self.exercises {
            for set in &exercise.sets {
                match set.status {
                    SetStatus::Unstarted => {
                        return Activity::Exercising {
                            exercise_name: exercise.name.clone(),
                            set_id: set.id.clone(),
                            difficulty: set.difficulty.clone(),
                        }
                    }
                    SetStatus::Resting => {
                        return Activity::Resting {
                            set_id: set.id.clone(),
                            rest_duration: exercise.rest_duration,
                        }
                    }
                    SetStatus::Finished => {}
                }
            }
        }
        Activity::Finished
    }

    /// Complete an unstarted set
    ///
    /// Moves the set to RESTING and stamps `rest_started_at`, except for the
    /// last set of its exercise, which has no following set to rest for and
    /// finishes directly. Any other starting status is rejected.
    pub fn complete_set(&self, set_id: &SetId, now: DateTime<Utc>) -> Result<Self, EditError> {
        let mut plan = self.clone();
        let target = plan.exercises.iter_mut().find_map(|exercise| {
            let last_index = exercise.sets.len().checked_sub(1)?;
            exercise
                .sets
                .iter_mut()
                .enumerate()
                .find(|(_, set)| &set.id == set_id)
                .map(|(index, set)| (index == last_index, set))
        });
        let Some((is_last, set)) = target else {
            return Err(EditError::TargetMissing(set_id.to_string()));
        };
        if set.status != SetStatus::Unstarted {
            return Err(EditError::InvalidTransition {
                set: set_id.clone(),
                from: set.status,
                to: SetStatus::Resting,
            });
        }
        if is_last {
            set.status = SetStatus::Finished;
        } else {
            set.status = SetStatus::Resting;
            set.rest_started_at = Some(now);
        }
        Ok(plan)
    }

    /// Finish the rest period of a resting set
    ///
    /// Moves the set to FINISHED and stamps `rest_ended_at`. Any other
    /// starting status is rejected.
    pub fn finish_rest(&self, set_id: &SetId, now: DateTime<Utc>) -> Result<Self, EditError> {
        let mut plan = self.clone();
        let set = plan
            .exercises
            .iter_mut()
            .flat_map(|exercise| exercise.sets.iter_mut())
            .find(|set| &set.id == set_id)
            .ok_or_else(|| EditError::TargetMissing(set_id.to_string()))?;
        if set.status != SetStatus::Resting {
            return Err(EditError::InvalidTransition {
                set: set_id.clone(),
                from: set.status,
                to: SetStatus::Finished,
            });
        }
        set.status = SetStatus::Finished;
        set.rest_ended_at = Some(now);
        Ok(plan)
    }
}
