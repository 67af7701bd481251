// ABOUTME: Main library entry point for the Pierre progression engine
// ABOUTME: Turns workout history into features, recommendations, and next-session targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Progression Engine
//!
//! Estimates bodyweight training progress from historical workout records.
//!
//! ## Pipeline
//!
//! - **Aggregator**: rolling load, trend, monotony and fatigue features
//! - **Calibration Detector**: decides whether enough history exists
//! - **Categorizer**: banded policy from a predicted change to a training category
//! - **Target Projector**: applies the category's adjustment to last performance
//! - **Calibration Synthesizer**: bootstraps synthetic history for new users
//!
//! The regression model that produces the raw predicted change is an external
//! collaborator reached through the [`predictor::Predictor`] trait.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_progression::config::IntelligenceConfig;
//! use pierre_progression::intelligence::{Categorizer, TargetProjector};
//! use pierre_progression::models::{LastPerformance, Exercise};
//! use std::collections::BTreeMap;
//!
//! let config = IntelligenceConfig::default();
//! let categorizer = Categorizer::new(config.weighted_load_bands.clone());
//! let recommendation = categorizer.categorize(75.0);
//!
//! let mut last = BTreeMap::new();
//! last.insert(Exercise::PushUps, vec![10, 10, 10, 10]);
//! let targets = TargetProjector::project(&recommendation, &LastPerformance::SetPlan(last));
//! println!("{targets:?}");
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Persistence collaborators
pub mod database;

/// Unified error handling
pub mod errors;

/// Feature aggregation, categorization, projection, and calibration
pub mod intelligence;

/// Structured logging
pub mod logging;

/// Domain models
pub mod models;

/// External regression model clients
pub mod predictor;

/// Orchestration of the prediction cycle and workout completion
pub mod services;
