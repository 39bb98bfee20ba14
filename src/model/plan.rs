//! Workout plan blueprints

use serde::{Deserialize, Serialize};

/// Performance target for a single set
///
/// Every set in an exercise uses the same difficulty shape; which shape that
/// is depends on the exercise type (barbell work is weight+reps, pull-ups are
/// reps-only, band work is assisted, planks are timed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Difficulty {
    /// External load in kilograms plus target repetitions
    WeightReps { weight: f64, reps: u32 },
    /// Bodyweight repetitions
    RepsOnly { reps: u32 },
    /// Assistance (negative load) in kilograms plus target repetitions
    AssistedReps { assistance: f64, reps: u32 },
    /// Timed hold, in seconds
    Duration { seconds: u32 },
}

/// Target for one set of a planned exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPlan {
    pub difficulty: Difficulty,
}

/// One exercise of a workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePlan {
    pub name: String,
    /// Rest between sets, in seconds
    pub rest_duration: u32,
    pub sets: Vec<SetPlan>,
}

/// An immutable workout template
///
/// Plans are read-only blueprints: the program rotation hands them out and
/// live sessions copy them into id-carrying structures. Nothing mutates a
/// plan after it is defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub name: String,
    pub exercises: Vec<ExercisePlan>,
}
