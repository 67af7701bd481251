// ABOUTME: Calibration gate and per-user calibration profile
// ABOUTME: Detects missing history and derives progression rate and fatigue sensitivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::calibration;
use crate::models::{ExperienceLevel, FeatureSet, UserAttributes};
use serde::{Deserialize, Serialize};

/// Decides between the prediction path and the calibration bootstrap
pub struct CalibrationDetector;

impl CalibrationDetector {
    /// `true` when the features carry no training volume at all
    ///
    /// Evaluate against freshly fetched features on every request; a new
    /// session flips the outcome.
    #[must_use]
    pub fn is_calibration(features: &FeatureSet) -> bool {
        features.total_volume() == 0.0
    }
}

/// Calibration metrics persisted once synthetic history has been written
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Expected weekly progression as a fraction
    pub progression_rate: f64,
    /// Multiplier on fatigue accumulation, rounded to two decimals
    pub fatigue_sensitivity: f64,
}

impl CalibrationProfile {
    /// Derive the profile from the user's static attributes
    #[must_use]
    pub fn for_user(user: &UserAttributes) -> Self {
        Self {
            progression_rate: Self::progression_rate(user.experience),
            fatigue_sensitivity: Self::fatigue_sensitivity(user),
        }
    }

    /// Weekly progression rate by experience level
    #[must_use]
    pub const fn progression_rate(experience: ExperienceLevel) -> f64 {
        match experience {
            ExperienceLevel::Beginner => calibration::PROGRESSION_RATE_BEGINNER,
            ExperienceLevel::Intermediate => calibration::PROGRESSION_RATE_INTERMEDIATE,
            ExperienceLevel::Advanced => calibration::PROGRESSION_RATE_ADVANCED,
        }
    }

    /// Fatigue sensitivity adjusted for age, body weight, and experience
    #[must_use]
    pub fn fatigue_sensitivity(user: &UserAttributes) -> f64 {
        let mut sensitivity = calibration::FATIGUE_SENSITIVITY_BASE;

        if (31..=35).contains(&user.age) {
            sensitivity += 0.08;
        } else if user.age >= 26 {
            sensitivity -= 0.07;
        }

        if user.weight_kg < 65.0 {
            sensitivity += 0.03;
        } else if user.weight_kg >= 85.0 {
            sensitivity -= 0.19;
        } else if user.weight_kg >= 75.0 {
            sensitivity -= 0.08;
        }

        match user.experience {
            ExperienceLevel::Beginner => {}
            ExperienceLevel::Intermediate => sensitivity += 0.05,
            ExperienceLevel::Advanced => sensitivity -= 0.05,
        }

        (sensitivity * 100.0).round() / 100.0
    }
}
