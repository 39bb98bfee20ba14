//! Core data model for workout tracking
//!
//! Two families of types live here:
//!
//! - Plan blueprints ([`WorkoutPlan`], [`ExercisePlan`], [`SetPlan`]): the
//!   immutable templates a program rotation is made of. They carry no ids and
//!   no state; they only describe what a workout should look like.
//! - Workout records ([`Workout`], [`Exercise`], [`Set`]): what actually
//!   happened (or is happening). These are the persisted shape: every entity
//!   has an opaque id, sets carry progression status and rest timestamps.
//!
//! All record types serialize with camelCase field names and integer
//! millisecond timestamps, which is the on-disk partition format.

pub mod ids;
pub mod plan;
pub mod workout;


pub use ids::{ExerciseId, SetId, WorkoutId};
pub use plan::{Difficulty, ExercisePlan, SetPlan, WorkoutPlan};
pub use workout::{Exercise, Set, SetStatus, Workout};
