//! Abstraction layers for external dependencies
//!
//! This module provides trait-based abstractions for the wall clock and id
//! generation to enable better testing and dependency injection. Everything
//! that needs "now" or a fresh unique id takes one of these as a collaborator
//! instead of reaching for the ambient environment.

pub mod clock;
pub mod ids;

pub use clock::{start_of_day, Clock, FixedClock, SystemClock};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
