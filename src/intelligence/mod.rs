// ABOUTME: Intelligence module for workout progression analysis
// ABOUTME: Feature aggregation, banded categorization, target projection, and calibration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure functions over session history. Nothing here performs I/O; the
//! [`crate::services`] layer fetches history and calls the external predictor.

/// Rolling load, trend, monotony, and fatigue features
pub mod aggregator;
/// Calibration gate and per-user calibration profile
pub mod calibration;
/// Bounded-random synthetic history for new users
pub mod calibration_synthesizer;
/// Banded mapping from predicted change to training category
pub mod categorizer;
/// Explicit coercion of untrusted numeric input
pub mod input_validation;
/// Lagged per-exercise features for max-test mode
pub mod max_features;
/// Mean, dispersion, and least-squares slope
pub mod statistical_analysis;
/// Adjustment application to last known performance
pub mod target_projector;

pub use aggregator::FeatureAggregator;
pub use calibration::{CalibrationDetector, CalibrationProfile};
pub use calibration_synthesizer::{BaseValues, CalibrationSynthesizer};
pub use categorizer::Categorizer;
pub use input_validation::{InputIssue, InputIssueKind, InputValidator, Validated};
pub use max_features::MaxFeatureBuilder;
pub use statistical_analysis::StatisticalAnalyzer;
pub use target_projector::TargetProjector;
