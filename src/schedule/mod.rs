//! Rotating program schedule
//!
//! A program is a fixed-length rotation of days, anchored at an origin date.
//! Day N of the rotation repeats every `len` days, so asking for any calendar
//! date, past or future, resolves to one rotation entry.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::WorkoutPlan;

#[cfg(test)]
mod tests;

/// Cyclic mapping from calendar dates to planned workouts
///
/// Pure and total: the same date always yields the same entry, and every
/// date yields one (possibly empty; rest days are empty entries).
#[derive(Debug, Clone)]
pub struct ProgramSchedule {
    origin: NaiveDate,
    rotation: Vec<Vec<WorkoutPlan>>,
}

impl ProgramSchedule {
    /// Create a schedule anchored at `origin` cycling through `rotation`
    pub fn new(origin: NaiveDate, rotation: Vec<Vec<WorkoutPlan>>) -> Self {
        Self { origin, rotation }
    }

    /// Length of the rotation, in days
    pub fn len(&self) -> usize {
        self.rotation.len()
    }

    /// Check whether the rotation has no days at all
    pub fn is_empty(&self) -> bool {
        self.rotation.is_empty()
    }

    /// Planned workouts for the calendar day of `date`
    ///
    /// The day delta is taken on calendar days, so the time of day never
    /// shifts the rotation. `rem_euclid` keeps the index in `[0, len)` for
    /// dates before the origin as well.
    pub fn workout_plans_for(&self, date: DateTime<Utc>) -> &[WorkoutPlan] {
        if self.rotation.is_empty() {
            return &[];
        }
        let delta = date
            .date_naive()
            .signed_duration_since(self.origin)
            .num_days();
        let index = delta.rem_euclid(self.rotation.len() as i64) as usize;
        &self.rotation[index]
    }
}
