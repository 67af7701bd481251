// ABOUTME: Core data models for the Pierre progression engine
// ABOUTME: Re-exports exercises, sessions, features, recommendations, and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! `SessionRecord` is the only durable entity; everything else here is
//! derived per request and discarded after use (except `PredictedActual`,
//! which is written for later accuracy analysis).
//!
//! ## Core Models
//!
//! - `Exercise` / `WorkoutMode`: the fixed exercise set and the two workout styles
//! - `SessionRecord`: one completed exercise within one workout
//! - `UserAttributes`: static athlete attributes fed to the predictor
//! - `FeatureSet`: flat numeric feature mapping
//! - `Recommendation`: banded category with advice and adjustment range
//! - `PredictedTargets`: per-exercise integer targets

mod exercise;
mod features;
mod recommendation;
mod session;
mod targets;
mod user;

pub use exercise::{Exercise, MeasureUnit, WorkoutMode};
pub use features::FeatureSet;
pub use recommendation::{AdjustmentRange, Recommendation, TrainingCategory};
pub use session::{PredictedActual, SessionRecord};
pub use targets::{ExerciseTarget, LastPerformance, PredictedTargets};
pub use user::{ExperienceLevel, UserAttributes};
