// ABOUTME: Helper utilities for progression-cli
// ABOUTME: Output selection, argument parsing, and summary formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;

use crate::ExerciseValues;
use pierre_progression::errors::AppResult;
use pierre_progression::intelligence::{BaseValues, InputValidator};
use pierre_progression::models::{Exercise, ExperienceLevel, WorkoutMode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Chooses between JSON and human-readable output
pub struct Output {
    /// Print JSON
    pub json: bool,
}

impl Output {
    /// Print `value` as JSON, or run `summary`
    pub fn emit<T: Serialize>(&self, value: &T, summary: impl FnOnce()) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            summary();
        }
        Ok(())
    }
}

/// Parse an experience level by name or number
pub fn parse_experience(raw: &str) -> Result<ExperienceLevel, String> {
    match raw.trim().to_lowercase().as_str() {
        "beginner" => Ok(ExperienceLevel::Beginner),
        "intermediate" => Ok(ExperienceLevel::Intermediate),
        "advanced" => Ok(ExperienceLevel::Advanced),
        other => other
            .parse::<i64>()
            .ok()
            .and_then(ExperienceLevel::from_number)
            .ok_or_else(|| format!("unknown experience level: {raw}")),
    }
}

/// Turn per-exercise arguments into validated values for a mode
///
/// Invalid numbers become 0 and are logged; exercises that were not given are skipped.
pub fn exercise_values(mode: WorkoutMode, values: &ExerciseValues) -> BaseValues {
    let provided = [
        (Exercise::PushUps, values.pushups.as_deref()),
        (Exercise::SitUps, values.situps.as_deref()),
        (Exercise::Plank, values.plank.as_deref()),
        (Exercise::Squats, values.squats.as_deref()),
    ];
    let provided = provided
        .into_iter()
        .filter_map(|(exercise, raw)| raw.map(|raw| (exercise, raw)));

    match mode {
        WorkoutMode::MaxTest => BaseValues::MaxTest(
            provided
                .map(|(exercise, raw)| {
                    (exercise, InputValidator::parse_count(exercise.key(), raw).value)
                })
                .collect(),
        ),
        WorkoutMode::SetPlan => {
            let sets: BTreeMap<Exercise, Vec<u32>> = provided
                .map(|(exercise, raw)| {
                    let parts: Vec<&str> = raw.split(',').collect();
                    (exercise, InputValidator::counts(exercise.key(), &parts).0)
                })
                .collect();
            BaseValues::SetPlan(sets)
        }
    }
}
