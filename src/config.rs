//! Engine configuration
//!
//! A TOML file wires up the two things the engine cannot decide for itself:
//! where workout history lives on disk, and what the training program looks
//! like. The rotation reuses the plan model's serde shape, so a day entry is
//! just a list of workout plans.
//!
//! ```toml
//! [storage]
//! root = "/home/user/.repcycle"
//!
//! [program]
//! origin = "2024-01-01"
//!
//! [[program.rotation]]
//! plans = [{ name = "Push Day", exercises = [] }]
//!
//! [[program.rotation]]
//! plans = []
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::WorkoutPlan;
use crate::schedule::ProgramSchedule;

/// Where workout history is persisted
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the file store
    pub root: PathBuf,
}

/// One day of the program rotation
#[derive(Debug, Clone, Deserialize)]
pub struct RotationDay {
    /// Workouts planned for this rotation day; empty means a rest day
    #[serde(default)]
    pub plans: Vec<WorkoutPlan>,
}

/// The training program definition
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Date the rotation is anchored at
    pub origin: NaiveDate,
    /// Rotation days, cycled from the origin onward
    pub rotation: Vec<RotationDay>,
}

impl ProgramConfig {
    /// Build the schedule this program describes
    pub fn schedule(&self) -> ProgramSchedule {
        ProgramSchedule::new(
            self.origin,
            self.rotation.iter().map(|day| day.plans.clone()).collect(),
        )
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    pub storage: StorageConfig,
    pub program: ProgramConfig,
}

impl EngineConfig {
    /// Parse a configuration document
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse engine configuration")
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&raw)
    }
}
