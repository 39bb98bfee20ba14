//! Pure structural edits on a live plan
//!
//! Every operation takes the plan by reference and returns a new plan; the
//! input is never touched. Unmatched targets are signaled, not silently
//! ignored, so the caller can tell an applied edit from one aimed at an id
//! that no longer exists.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::abstractions::IdGenerator;
use crate::model::{Difficulty, ExerciseId, SetId, SetStatus};

use super::plan::{ActivitySet, WorkoutActivityPlan};

/// Why an edit could not be applied
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// No set or exercise with the given id exists in the plan
    #[error("edit target not found: {0}")]
    TargetMissing(String),

    /// The set is not in a status the requested transition starts from
    #[error("set {set} cannot go from {from:?} to {to:?}")]
    InvalidTransition {
        set: SetId,
        from: SetStatus,
        to: SetStatus,
    },

    /// A reorder index is past the end of the exercise list
    #[error("exercise index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// Partial update for a set
#[derive(Debug, Clone, Default)]
pub struct SetPatch {
    pub status: Option<SetStatus>,
    pub difficulty: Option<Difficulty>,
    pub rest_started_at: Option<DateTime<Utc>>,
    pub rest_ended_at: Option<DateTime<Utc>>,
}

/// Partial update for an exercise
#[derive(Debug, Clone, Default)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub rest_duration: Option<u32>,
}

/// Partial update for the plan's top-level fields
#[derive(Debug, Clone, Default)]
pub struct PlanPatch {
    pub name: Option<String>,
}

impl WorkoutActivityPlan {
    /// Shallow-merge onto the plan's top-level fields
    pub fn update_plan(&self, patch: PlanPatch) -> Self {
        let mut plan = self.clone();
        if let Some(name) = patch.name {
            plan.name = name;
        }
        plan
    }

    /// Replace fields of the matching set, preserving its id
    pub fn update_set(&self, set_id: &SetId, patch: SetPatch) -> Result<Self, EditError> {
        let mut plan = self.clone();
        let set = plan
            .exercises
            .iter_mut()
            .flat_map(|exercise| exercise.sets.iter_mut())
            .find(|set| &set.id == set_id)
            .ok_or_else(|| EditError::TargetMissing(set_id.to_string()))?;

        if let Some(status) = patch.status {
            set.status = status;
        }
        if let Some(difficulty) = patch.difficulty {
            set.difficulty = difficulty;
        }
        if let Some(rest_started_at) = patch.rest_started_at {
            set.rest_started_at = Some(rest_started_at);
        }
        if let Some(rest_ended_at) = patch.rest_ended_at {
            set.rest_ended_at = Some(rest_ended_at);
        }
        Ok(plan)
    }

    /// Drop the matching set; an exercise left with no sets is dropped too
    pub fn remove_set(&self, set_id: &SetId) -> Result<Self, EditError> {
        let mut plan = self.clone();
        let mut found = false;
        plan.exercises.retain_mut(|exercise| {
            let before = exercise.sets.len();
            exercise.sets.retain(|set| &set.id != set_id);
            if exercise.sets.len() == before {
                return true;
            }
            found = true;
            !exercise.sets.is_empty()
        });
        if !found {
            return Err(EditError::TargetMissing(set_id.to_string()));
        }
        Ok(plan)
    }

    /// Append a copy of the exercise's last set, fresh id, not yet started
    pub fn duplicate_last_set(
        &self,
        exercise_id: &ExerciseId,
        ids: &dyn IdGenerator,
    ) -> Result<Self, EditError> {
        let mut plan = self.clone();
        let exercise = plan
            .exercises
            .iter_mut()
            .find(|exercise| &exercise.id == exercise_id)
            .ok_or_else(|| EditError::TargetMissing(exercise_id.to_string()))?;

        let last = exercise
            .sets
            .last()
            .ok_or_else(|| EditError::TargetMissing(exercise_id.to_string()))?;
        let copy = ActivitySet {
            id: SetId::new(ids.generate()),
            status: SetStatus::Unstarted,
            difficulty: last.difficulty.clone(),
            rest_started_at: None,
            rest_ended_at: None,
        };
        exercise.sets.push(copy);
        Ok(plan)
    }

    /// Replace fields of the matching exercise, preserving its id and sets
    pub fn update_exercise(
        &self,
        exercise_id: &ExerciseId,
        patch: ExercisePatch,
    ) -> Result<Self, EditError> {
        let mut plan = self.clone();
        let exercise = plan
            .exercises
            .iter_mut()
            .find(|exercise| &exercise.id == exercise_id)
            .ok_or_else(|| EditError::TargetMissing(exercise_id.to_string()))?;

        if let Some(name) = patch.name {
            exercise.name = name;
        }
        if let Some(rest_duration) = patch.rest_duration {
            exercise.rest_duration = rest_duration;
        }
        Ok(plan)
    }

    /// Drop the matching exercise and all of its sets
    pub fn remove_exercise(&self, exercise_id: &ExerciseId) -> Result<Self, EditError> {
        let mut plan = self.clone();
        let before = plan.exercises.len();
        plan.exercises.retain(|exercise| &exercise.id != exercise_id);
        if plan.exercises.len() == before {
            return Err(EditError::TargetMissing(exercise_id.to_string()));
        }
        Ok(plan)
    }

    /// Move the exercise at `from` so it sits at `to`
    pub fn move_exercise(&self, from: usize, to: usize) -> Result<Self, EditError> {
        let len = self.exercises.len();
        let out_of_bounds = |index| EditError::OutOfBounds { index, len };
        if from >= len {
            return Err(out_of_bounds(from));
        }
        if to >= len {
            return Err(out_of_bounds(to));
        }
        let mut plan = self.clone();
        let exercise = plan.exercises.remove(from);
        plan.exercises.insert(to, exercise);
        Ok(plan)
    }
}
