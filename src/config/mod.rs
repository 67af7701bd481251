// ABOUTME: Configuration management module for engine settings and tuning parameters
// ABOUTME: Handles environment configs and intelligence settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Pierre progression engine
//!
//! - **Environment**: Database, predictor, and runtime configuration from environment variables
//! - **Intelligence**: Aggregation window, calibration bounds, and categorizer band tables

/// Environment and runtime configuration
pub mod environment;
/// Intelligence module configuration
pub mod intelligence_config;

pub use environment::{DatabaseUrl, Environment, PredictorConfig, ServerConfig};
pub use intelligence_config::{
    AggregationConfig, Band, BandTable, CalibrationConfig, ConfigError, IntelligenceConfig,
};
