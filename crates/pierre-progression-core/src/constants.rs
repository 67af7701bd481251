// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Exercise weights, baselines, feature names, and calibration bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Per-exercise difficulty weights applied to raw volume
pub mod exercise_weights {
    /// Push-ups weight
    pub const PUSHUPS: f64 = 1.0;
    /// Squats weight
    pub const SQUATS: f64 = 0.7;
    /// Sit-ups weight
    pub const SITUPS: f64 = 1.5;
    /// Plank weight (per second held)
    pub const PLANK: f64 = 0.3;
}

/// Per-set baselines used when an exercise has no prior session
pub mod baselines {
    /// Push-up reps per set
    pub const PUSHUPS_PER_SET: u32 = 10;
    /// Sit-up reps per set
    pub const SITUPS_PER_SET: u32 = 15;
    /// Plank seconds per set
    pub const PLANK_PER_SET: u32 = 30;
    /// Squat reps per set
    pub const SQUATS_PER_SET: u32 = 12;
}

/// Set-plan and max-test projection constants
pub mod projection {
    /// Number of sets in a generated plan
    pub const SETS_PER_PLAN: usize = 4;
    /// Max-test target used when the projection is not a finite number
    pub const MAX_TEST_FALLBACK: u32 = 3;
}

/// Feature aggregation constants
pub mod aggregation {
    /// Number of most recent session records treated as "the last two weeks"
    pub const DEFAULT_WINDOW_SESSIONS: usize = 8;
    /// Lags (in weeks) emitted for max-test features
    pub const MAX_TEST_LAGS: [u32; 3] = [1, 2, 3];
    /// Weeks averaged for the max-test rolling average
    pub const MAX_TEST_ROLLING_WEEKS: usize = 3;
}

/// Calibration bootstrap constants
pub mod calibration {
    /// Fewest synthetic weeks generated for max-test mode
    pub const MAX_TEST_MIN_WEEKS: u32 = 4;
    /// Most synthetic weeks generated for max-test mode
    pub const MAX_TEST_MAX_WEEKS: u32 = 5;
    /// Synthetic weeks generated for set-plan mode
    pub const SET_PLAN_WEEKS: u32 = 2;
    /// Largest per-value perturbation applied to base values
    pub const PERTURBATION: i64 = 1;
    /// RPE recorded on synthetic sessions
    pub const SYNTHETIC_RPE: f64 = 5.0;

    /// Progression rate by experience level
    pub const PROGRESSION_RATE_BEGINNER: f64 = 0.081;
    /// Progression rate for intermediate athletes
    pub const PROGRESSION_RATE_INTERMEDIATE: f64 = 0.042;
    /// Progression rate for advanced athletes
    pub const PROGRESSION_RATE_ADVANCED: f64 = 0.024;

    /// Starting point for fatigue sensitivity adjustments
    pub const FATIGUE_SENSITIVITY_BASE: f64 = 1.2;
}

/// Flat feature names shared by aggregation, prediction, and persistence
pub mod features {
    /// Sum of weighted volume over the window
    pub const TOTAL_WEIGHTED_LOAD_2W: &str = "total_weighted_load_2w";
    /// Mean RPE over the window
    pub const AVG_RPE_2W: &str = "avg_rpe_2w";
    /// Least-squares slope of weighted volume over the window
    pub const VOLUME_TREND: &str = "volume_trend";
    /// Most recent weighted volume times its RPE
    pub const FATIGUE_INDEX: &str = "fatigue_index";
    /// Mean load over its standard deviation
    pub const MONOTONY: &str = "monotony";
    /// Prefix for per-exercise best session volume
    pub const BEST_SESSION_VOLUME_PREFIX: &str = "best_session_volume_";
    /// Sum of raw volume over the window; zero triggers calibration
    pub const TOTAL_VOLUME: &str = "total_volume";
    /// Athlete age in years
    pub const AGE: &str = "age";
    /// Athlete body weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Experience level (0 beginner, 1 intermediate, 2 advanced)
    pub const EXPERIENCE: &str = "experience";
    /// Calibrated progression rate
    pub const PROGRESSION_RATE: &str = "progression_rate";
    /// Calibrated fatigue sensitivity
    pub const FATIGUE_SENSITIVITY: &str = "fatigue_sensitivity";
    /// Week index sent with max-test features
    pub const WEEK: &str = "week";
}

/// Input validation bounds
pub mod limits {
    /// Highest accepted RPE
    pub const MAX_RPE: f64 = 10.0;
    /// Highest accepted workout feeling score
    pub const MAX_FEELING: u8 = 5;
}

/// Service identifiers used in logs
pub mod service_names {
    /// Engine service name
    pub const PROGRESSION_ENGINE: &str = "pierre-progression-engine";
    /// External predictor service name
    pub const PREDICTOR: &str = "progression-predictor";
}
