// ABOUTME: Predicted per-exercise targets and the last-performance snapshot they build on
// ABOUTME: Targets are non-negative integers rounded once at projection time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Exercise, WorkoutMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Target for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseTarget {
    /// Evenly distributed set plan
    SetPlan {
        /// Identical reps (or seconds) for every set
        reps_per_set: Vec<u32>,
        /// Rounded volume before distribution
        projected_volume: u32,
        /// `reps_per_set` summed; may differ from `projected_volume` by rounding
        displayed_total: u32,
    },
    /// Single maximal effort
    MaxTest {
        /// Predicted max reps (or seconds)
        predicted_max: u32,
    },
}

impl ExerciseTarget {
    /// Value shown to the athlete as the headline target
    #[must_use]
    pub const fn headline(&self) -> u32 {
        match self {
            Self::SetPlan {
                displayed_total, ..
            } => *displayed_total,
            Self::MaxTest { predicted_max } => *predicted_max,
        }
    }
}

/// Per-exercise predicted targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedTargets {
    /// Target per exercise
    pub targets: BTreeMap<Exercise, ExerciseTarget>,
}

impl PredictedTargets {
    /// Target for one exercise
    #[must_use]
    pub fn get(&self, exercise: Exercise) -> Option<&ExerciseTarget> {
        self.targets.get(&exercise)
    }
}

/// Most recent known performance per exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "values", rename_all = "snake_case")]
pub enum LastPerformance {
    /// Last max per exercise; missing entries mean no prior test
    MaxTest(BTreeMap<Exercise, f64>),
    /// Last reps-per-set per exercise; missing entries mean no prior session
    SetPlan(BTreeMap<Exercise, Vec<u32>>),
}

impl LastPerformance {
    /// Workout mode this snapshot belongs to
    #[must_use]
    pub const fn mode(&self) -> WorkoutMode {
        match self {
            Self::MaxTest(_) => WorkoutMode::MaxTest,
            Self::SetPlan(_) => WorkoutMode::SetPlan,
        }
    }
}
