// ABOUTME: Domain service layer orchestrating the progression pipeline
// ABOUTME: Protocol-agnostic operations reusable from the CLI or any transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Feature fetch, recommendation, targets, calibration, and workout completion
pub mod progression;

pub use progression::{
    CompletedWorkout, CompletionReport, FeatureSnapshot, ProgressionService,
    RecommendationOutcome, TargetRecommendation, WorkoutPlan,
};
