// ABOUTME: Workout pipeline commands for progression-cli
// ABOUTME: Features, next-workout planning, calibration, and recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::{display, exercise_values, Output};
use crate::ExerciseValues;
use pierre_progression::errors::{AppError, AppResult};
use pierre_progression::models::WorkoutMode;
use pierre_progression::services::{CompletedWorkout, ProgressionService};

/// Print features and the calibration gate
pub async fn features(
    service: &ProgressionService,
    output: &Output,
    user_id: i64,
    mode: WorkoutMode,
) -> AppResult<()> {
    let snapshot = service.get_features(user_id, mode).await?;
    output.emit(&snapshot, || display::display_features(&snapshot))
}

/// Print recommendations and targets for the next workout
pub async fn plan(
    service: &ProgressionService,
    output: &Output,
    user_id: i64,
    mode: WorkoutMode,
) -> AppResult<()> {
    let plan = service.plan_next_workout(user_id, mode).await?;
    output.emit(&plan, || display::display_plan(&plan))
}

/// Preview synthetic weeks, or persist them through the completion flow
pub async fn calibrate(
    service: &ProgressionService,
    output: &Output,
    user_id: i64,
    mode: WorkoutMode,
    values: &ExerciseValues,
    save: bool,
) -> AppResult<()> {
    let base = exercise_values(mode, values);

    if !save {
        let records = service.synthesize_calibration_weeks(user_id, &base);
        return output.emit(&records, || display::display_synthetic_weeks(&records));
    }

    let snapshot = service.get_features(user_id, mode).await?;
    if !snapshot.is_calibration {
        return Err(AppError::invalid_input(format!(
            "User {user_id} already has {mode} history; use `record` instead"
        )));
    }

    let report = service
        .complete_workout(&CompletedWorkout {
            user_id,
            performed: base,
            rpe: 0.0,
            feeling: 0,
            predicted: None,
        })
        .await?;
    output.emit(&report, || display::display_completion(&report))
}

/// Record a performed workout against the current plan's targets
pub async fn record(
    service: &ProgressionService,
    output: &Output,
    user_id: i64,
    mode: WorkoutMode,
    values: &ExerciseValues,
    rpe: f64,
    feeling: i64,
) -> AppResult<()> {
    let plan = service.plan_next_workout(user_id, mode).await?;
    let predicted = (!plan.targets.targets.is_empty()).then_some(plan.targets);

    let report = service
        .complete_workout(&CompletedWorkout {
            user_id,
            performed: exercise_values(mode, values),
            rpe,
            feeling,
            predicted,
        })
        .await?;
    output.emit(&report, || display::display_completion(&report))
}
