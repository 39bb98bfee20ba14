//! Live workout session engine
//!
//! A live session materializes a workout blueprint (or a resumed record)
//! into a [`WorkoutActivityPlan`]: the same structure, but with ids on every
//! exercise and set and a progression status on every set. The plan is never
//! mutated in place: every edit is a pure function returning a fresh plan,
//! and the [`ActivitySession`] swaps in the latest copy.
//!
//! Set progression is a strict forward state machine:
//!
//! ```text
//! UNSTARTED -> RESTING -> FINISHED
//! ```
//!
//! with one shortcut: the last set of an exercise has nothing to rest for
//! and may finish directly. "What should the user be doing" is answered by
//! [`WorkoutActivityPlan::current_activity`], a plain ordered scan.

pub mod edits;
pub mod plan;
pub mod session;


pub use edits::{EditError, ExercisePatch, PlanPatch, SetPatch};
pub use plan::{Activity, ActivityExercise, ActivitySet, WorkoutActivityPlan};
pub use session::ActivitySession;
