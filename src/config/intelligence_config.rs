// ABOUTME: Intelligence configuration for aggregation windows, calibration, and category bands
// ABOUTME: Holds both threshold tables the categorizer selects between at call time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Intelligence Configuration Module
//!
//! Type-safe configuration for the feature aggregator, the calibration
//! bootstrap, and the two categorizer band tables. Defaults reproduce the
//! production tuning; every numeric knob can be overridden from the
//! environment.

use crate::constants::{aggregation, calibration};
use crate::models::{AdjustmentRange, TrainingCategory, WorkoutMode};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Band table violates ordering rules
    #[error("Invalid band table '{table}': {reason}")]
    InvalidBands {
        /// Table name
        table: String,
        /// What is wrong with it
        reason: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// One band of a categorizer threshold table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Exclusive upper bound; `None` marks the final catch-all band
    pub upper_bound: Option<f64>,
    /// Category assigned to values in this band
    pub category: TrainingCategory,
    /// Advice shown with the category
    pub advice: String,
    /// Adjustment applied to last performance
    pub adjustment_range: AdjustmentRange,
}

impl Band {
    fn bounded(upper: f64, category: TrainingCategory, advice: &str, range: [f64; 2]) -> Self {
        Self {
            upper_bound: Some(upper),
            category,
            advice: advice.to_owned(),
            adjustment_range: range.into(),
        }
    }

    fn catch_all(category: TrainingCategory, advice: &str, range: [f64; 2]) -> Self {
        Self {
            upper_bound: None,
            category,
            advice: advice.to_owned(),
            adjustment_range: range.into(),
        }
    }
}

/// Ordered threshold table mapping a predicted change to a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    /// Table name used in logs and validation errors
    pub name: String,
    /// Bands in strictly increasing threshold order, catch-all last
    pub bands: Vec<Band>,
}

impl BandTable {
    /// Table for predicted change in weighted training load (set-plan mode)
    #[must_use]
    pub fn weighted_load() -> Self {
        use TrainingCategory::{
            Deload, FullDeload, Increase, IncreaseLight, Maintain, Overreach, Push, PushHard,
            Reduce,
        };
        Self {
            name: "weighted_load".to_owned(),
            bands: vec![
                Band::bounded(-150.0, FullDeload, "Training load is far above what you are absorbing. Cut volume hard this session.", [-0.6, -0.4]),
                Band::bounded(-100.0, Deload, "Load is outpacing recovery. Take a deload session.", [-0.5, -0.3]),
                Band::bounded(-40.0, Reduce, "Fatigue is building. Trim volume slightly.", [-0.25, -0.15]),
                Band::bounded(20.0, Maintain, "Load is well matched. Keep volume steady and focus on quality.", [0.0, 0.0]),
                Band::bounded(60.0, IncreaseLight, "You are absorbing the load. Add a little volume.", [0.05, 0.1]),
                Band::bounded(100.0, Increase, "Good adaptation. Increase volume moderately.", [0.1, 0.2]),
                Band::bounded(160.0, Push, "Strong adaptation signal. Push harder this session.", [0.15, 0.3]),
                Band::bounded(220.0, PushHard, "Very strong response. Push volume significantly.", [0.2, 0.35]),
                Band::catch_all(Overreach, "Exceptional capacity. A short overreach block is on the table.", [0.3, 0.4]),
            ],
        }
    }

    /// Table for predicted change in single-exercise max reps (max-test mode)
    #[must_use]
    pub fn max_reps() -> Self {
        use TrainingCategory::{
            Deload, FullDeload, Increase, IncreaseLight, Maintain, Overreach, Push, PushHard,
            Reduce,
        };
        Self {
            name: "max_reps".to_owned(),
            bands: vec![
                Band::bounded(-10.0, FullDeload, "Severe fatigue detected. Reduce intensity significantly.", [-0.6, -0.4]),
                Band::bounded(-5.0, Deload, "Significant fatigue. Reduce intensity moderately.", [-0.5, -0.3]),
                Band::bounded(-2.0, Reduce, "Moderate fatigue. Reduce intensity slightly.", [-0.25, -0.15]),
                Band::bounded(2.0, Maintain, "Maintain current intensity. Focus on quality.", [0.0, 0.0]),
                Band::bounded(5.0, IncreaseLight, "Mild positive adaptation. Increase slightly.", [0.05, 0.1]),
                Band::bounded(8.0, Increase, "Good adaptation. Increase moderately.", [0.1, 0.2]),
                Band::bounded(12.0, Push, "Strong adaptation signal. Push harder.", [0.2, 0.3]),
                Band::bounded(16.0, PushHard, "Very strong response. Push significantly.", [0.25, 0.35]),
                Band::catch_all(Overreach, "Exceptional capacity. Consider overreaching.", [0.3, 0.4]),
            ],
        }
    }

    /// Check threshold ordering, range orientation, and the trailing catch-all
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBands` describing the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBands {
            table: self.name.clone(),
            reason,
        };

        let Some((last, bounded)) = self.bands.split_last() else {
            return Err(invalid("table has no bands".to_owned()));
        };
        if last.upper_bound.is_some() {
            return Err(invalid("final band must be a catch-all".to_owned()));
        }

        let mut previous = f64::NEG_INFINITY;
        for band in bounded {
            let Some(upper) = band.upper_bound else {
                return Err(invalid(format!(
                    "catch-all band {} is not last",
                    band.category
                )));
            };
            if !upper.is_finite() || upper <= previous {
                return Err(invalid(format!(
                    "threshold {upper} for {} is not strictly increasing",
                    band.category
                )));
            }
            previous = upper;
        }

        for band in &self.bands {
            let range = band.adjustment_range;
            if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
                return Err(invalid(format!(
                    "adjustment range for {} is inverted or not finite",
                    band.category
                )));
            }
            if range.min < -1.0 {
                return Err(invalid(format!(
                    "adjustment range for {} drops below -100%",
                    band.category
                )));
            }
        }
        Ok(())
    }
}

/// Feature aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Most recent session records treated as the two-week window
    pub window_sessions: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            window_sessions: aggregation::DEFAULT_WINDOW_SESSIONS,
        }
    }
}

/// Calibration bootstrap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Fewest synthetic weeks for max-test mode
    pub max_test_min_weeks: u32,
    /// Most synthetic weeks for max-test mode
    pub max_test_max_weeks: u32,
    /// Synthetic weeks for set-plan mode
    pub set_plan_weeks: u32,
    /// RPE stamped on synthetic sessions
    pub synthetic_rpe: f64,
    /// Fixed RNG seed; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            max_test_min_weeks: calibration::MAX_TEST_MIN_WEEKS,
            max_test_max_weeks: calibration::MAX_TEST_MAX_WEEKS,
            set_plan_weeks: calibration::SET_PLAN_WEEKS,
            synthetic_rpe: calibration::SYNTHETIC_RPE,
            seed: None,
        }
    }
}

impl CalibrationConfig {
    /// Inclusive bounds on synthetic weeks for a mode
    #[must_use]
    pub const fn week_bounds(&self, mode: WorkoutMode) -> (u32, u32) {
        match mode {
            WorkoutMode::MaxTest => (self.max_test_min_weeks, self.max_test_max_weeks),
            WorkoutMode::SetPlan => (self.set_plan_weeks, self.set_plan_weeks),
        }
    }
}

/// Intelligence configuration root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Aggregator settings
    pub aggregation: AggregationConfig,
    /// Calibration bootstrap settings
    pub calibration: CalibrationConfig,
    /// Bands for weighted-load change (set-plan mode)
    pub weighted_load_bands: BandTable,
    /// Bands for max-rep change (max-test mode)
    pub max_reps_bands: BandTable,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationConfig::default(),
            calibration: CalibrationConfig::default(),
            weighted_load_bands: BandTable::weighted_load(),
            max_reps_bands: BandTable::max_reps(),
        }
    }
}

impl IntelligenceConfig {
    /// Defaults with environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override fails to parse or the result is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Band table used for a workout mode
    #[must_use]
    pub const fn bands_for(&self, mode: WorkoutMode) -> &BandTable {
        match mode {
            WorkoutMode::MaxTest => &self.max_reps_bands,
            WorkoutMode::SetPlan => &self.weighted_load_bands,
        }
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.aggregation.window_sessions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Aggregation window must hold at least one session",
            ));
        }
        let cal = &self.calibration;
        if cal.max_test_min_weeks == 0 || cal.set_plan_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calibration must synthesize at least one week",
            ));
        }
        if cal.max_test_min_weeks > cal.max_test_max_weeks {
            return Err(ConfigError::InvalidRange(
                "Calibration max-test week bounds are inverted",
            ));
        }
        if !(0.0..=10.0).contains(&cal.synthetic_rpe) {
            return Err(ConfigError::ValueOutOfRange(
                "Synthetic RPE must be between 0 and 10",
            ));
        }
        self.weighted_load_bands.validate()?;
        self.max_reps_bands.validate()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(val) = parse_env::<usize>("PROGRESSION_WINDOW_SESSIONS")? {
            self.aggregation.window_sessions = val;
        }
        if let Some(val) = parse_env::<u32>("PROGRESSION_CALIBRATION_MIN_WEEKS")? {
            self.calibration.max_test_min_weeks = val;
        }
        if let Some(val) = parse_env::<u32>("PROGRESSION_CALIBRATION_MAX_WEEKS")? {
            self.calibration.max_test_max_weeks = val;
        }
        if let Some(val) = parse_env::<u32>("PROGRESSION_CALIBRATION_PLAN_WEEKS")? {
            self.calibration.set_plan_weeks = val;
        }
        if let Some(val) = parse_env::<f64>("PROGRESSION_CALIBRATION_RPE")? {
            self.calibration.synthetic_rpe = val;
        }
        if let Some(val) = parse_env::<u64>("PROGRESSION_CALIBRATION_SEED")? {
            self.calibration.seed = Some(val);
        }
        Ok(self)
    }
}

/// Parse an optional environment variable
fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: {raw}"))),
        Err(_) => Ok(None),
    }
}
