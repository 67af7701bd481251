// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, session fixtures, and function-backed predictors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_progression`

use pierre_progression::config::{CalibrationConfig, IntelligenceConfig};
use pierre_progression::database::InMemoryStore;
use pierre_progression::models::{
    Exercise, ExperienceLevel, FeatureSet, SessionRecord, UserAttributes, WorkoutMode,
};
use pierre_progression::predictor::{FnPredictor, PredictionTarget, Predictor, PredictorError};
use pierre_progression::services::ProgressionService;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A 30-year-old, 72 kg beginner
pub fn test_user(user_id: i64) -> UserAttributes {
    UserAttributes::new(user_id, 30, 72.0, ExperienceLevel::Beginner)
}

/// Four-set session with the same reps in every set
pub fn plan_session(week: u32, exercise: Exercise, reps: u32, rpe: f64) -> SessionRecord {
    SessionRecord::new(1, week, exercise, WorkoutMode::SetPlan, vec![reps; 4], rpe)
}

/// Predictor that always answers `value`
pub fn fixed_predictor(value: f64) -> Arc<dyn Predictor> {
    Arc::new(FnPredictor::new(
        move |_: PredictionTarget, _: &FeatureSet| -> Result<f64, PredictorError> { Ok(value) },
    ))
}

/// Predictor that is always unreachable
pub fn failing_predictor() -> Arc<dyn Predictor> {
    Arc::new(FnPredictor::new(
        |_: PredictionTarget, _: &FeatureSet| -> Result<f64, PredictorError> {
            Err(PredictorError::Transport("connection refused".to_owned()))
        },
    ))
}

/// Configuration with a fixed calibration seed
pub fn seeded_config() -> IntelligenceConfig {
    IntelligenceConfig {
        calibration: CalibrationConfig {
            seed: Some(7),
            ..CalibrationConfig::default()
        },
        ..IntelligenceConfig::default()
    }
}

/// Service over a fresh in-memory store
pub fn memory_service(predictor: Arc<dyn Predictor>) -> (ProgressionService, Arc<InMemoryStore>) {
    init_test_logging();
    let store = Arc::new(InMemoryStore::new());
    let service = ProgressionService::with_store(seeded_config(), store.clone(), predictor);
    (service, store)
}
