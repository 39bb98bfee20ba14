//! # Repcycle
//!
//! A workout session engine: decides which workouts a rotating multi-week
//! program schedules for any calendar day, persists completed workouts into
//! date-partitioned JSON storage with upsert semantics, reconciles stored
//! history against the schedule into a daily itinerary, and drives a live
//! workout through an exercising/resting/finished progression with pure,
//! whole-structure edits.
//!
//! Screens, notifications and timers live outside this crate: they call in
//! through [`ItineraryService`](itinerary::ItineraryService),
//! [`ActivitySession`](activity::ActivitySession) and
//! [`PartitionedWorkoutStore`](storage::PartitionedWorkoutStore), and the
//! engine reaches out only through the small trait seams in
//! [`abstractions`] and [`storage::ByteStore`].
//!
//! ## Modules
//!
//! - `abstractions` - Trait-based abstractions for the clock and id generation
//! - `activity` - Live session state machine and pure plan edits
//! - `config` - TOML engine configuration (storage root, program rotation)
//! - `itinerary` - Daily reconciliation of stored history with the schedule
//! - `model` - Workout records and plan blueprints
//! - `schedule` - Rotating program schedule
//! - `storage` - Date-partitioned workout persistence over byte storage

pub mod abstractions;
pub mod activity;
pub mod config;
pub mod itinerary;
pub mod model;
pub mod schedule;
pub mod storage;
