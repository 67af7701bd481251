// ABOUTME: Exercise and workout mode enumerations
// ABOUTME: Carries per-exercise weights, units, baselines, and string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{baselines, exercise_weights};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of tracked bodyweight exercises
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Exercise {
    /// Push-ups (reps)
    #[serde(rename = "pushups")]
    PushUps,
    /// Sit-ups (reps)
    #[serde(rename = "situps")]
    SitUps,
    /// Plank hold (seconds)
    #[serde(rename = "plank")]
    Plank,
    /// Bodyweight squats (reps)
    #[serde(rename = "squats")]
    Squats,
}

/// Unit a performance value is measured in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeasureUnit {
    /// Repetitions
    Reps,
    /// Seconds held
    Seconds,
}

impl Exercise {
    /// All exercises in workout order
    pub const ALL: [Self; 4] = [Self::PushUps, Self::SitUps, Self::Plank, Self::Squats];

    /// Stable key used in feature names, storage, and predictor routes
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PushUps => "pushups",
            Self::SitUps => "situps",
            Self::Plank => "plank",
            Self::Squats => "squats",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PushUps => "Push-ups",
            Self::SitUps => "Sit-ups",
            Self::Plank => "Plank",
            Self::Squats => "Squats",
        }
    }

    /// Difficulty weight applied to raw volume
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::PushUps => exercise_weights::PUSHUPS,
            Self::SitUps => exercise_weights::SITUPS,
            Self::Plank => exercise_weights::PLANK,
            Self::Squats => exercise_weights::SQUATS,
        }
    }

    /// Measurement unit for this exercise
    #[must_use]
    pub const fn unit(self) -> MeasureUnit {
        match self {
            Self::Plank => MeasureUnit::Seconds,
            Self::PushUps | Self::SitUps | Self::Squats => MeasureUnit::Reps,
        }
    }

    /// Per-set baseline used when no prior session exists
    #[must_use]
    pub const fn baseline_per_set(self) -> u32 {
        match self {
            Self::PushUps => baselines::PUSHUPS_PER_SET,
            Self::SitUps => baselines::SITUPS_PER_SET,
            Self::Plank => baselines::PLANK_PER_SET,
            Self::Squats => baselines::SQUATS_PER_SET,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Exercise {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pushups" | "push_ups" | "push-ups" => Ok(Self::PushUps),
            "situps" | "sit_ups" | "sit-ups" => Ok(Self::SitUps),
            "plank" | "plank_seconds" => Ok(Self::Plank),
            "squats" => Ok(Self::Squats),
            other => Err(format!("unknown exercise: {other}")),
        }
    }
}

/// Workout style a session was recorded under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutMode {
    /// One maximal effort per exercise
    MaxTest,
    /// Four prescribed sets per exercise
    #[default]
    SetPlan,
}

impl WorkoutMode {
    /// Stable storage name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaxTest => "max_test",
            Self::SetPlan => "set_plan",
        }
    }
}

impl fmt::Display for WorkoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max_test" | "max-test" | "max" => Ok(Self::MaxTest),
            "set_plan" | "set-plan" | "plan" => Ok(Self::SetPlan),
            other => Err(format!("unknown workout mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_parses_storage_aliases() {
        assert_eq!("push_ups".parse::<Exercise>(), Ok(Exercise::PushUps));
        assert_eq!("plank_seconds".parse::<Exercise>(), Ok(Exercise::Plank));
        assert!("burpees".parse::<Exercise>().is_err());
    }

    #[test]
    fn test_exercise_keys_round_trip_through_serde() {
        for exercise in Exercise::ALL {
            let json = serde_json::to_string(&exercise).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", exercise.key()));
        }
    }
}
