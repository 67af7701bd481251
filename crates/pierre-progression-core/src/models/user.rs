// ABOUTME: Static athlete attributes consumed by feature aggregation
// ABOUTME: Includes experience level parsing and calibrated rates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Training experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than a year of structured training
    #[default]
    Beginner,
    /// One to three years
    Intermediate,
    /// Several years of consistent training
    Advanced,
}

impl ExperienceLevel {
    /// Numeric encoding used by the predictor (0, 1, 2)
    #[must_use]
    pub const fn as_number(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Decode the numeric form; unknown values yield `None`
    #[must_use]
    pub const fn from_number(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Beginner),
            1 => Some(Self::Intermediate),
            2 => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Static user attributes fetched alongside session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    /// User identifier
    pub user_id: i64,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Experience level
    pub experience: ExperienceLevel,
    /// Calibrated progression rate, absent before calibration
    pub progression_rate: Option<f64>,
    /// Calibrated fatigue sensitivity, absent before calibration
    pub fatigue_sensitivity: Option<f64>,
}

impl UserAttributes {
    /// Attributes for a user who has not been calibrated yet
    #[must_use]
    pub const fn new(user_id: i64, age: u32, weight_kg: f64, experience: ExperienceLevel) -> Self {
        Self {
            user_id,
            age,
            weight_kg,
            experience,
            progression_rate: None,
            fatigue_sensitivity: None,
        }
    }
}
