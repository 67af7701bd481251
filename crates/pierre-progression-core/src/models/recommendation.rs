// ABOUTME: Training category bands and the recommendation built from them
// ABOUTME: Adjustment ranges serialize as two-element arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nine ordered training-load categories, most negative first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingCategory {
    /// Severe fatigue, cut load hard
    FullDeload,
    /// Significant fatigue
    Deload,
    /// Moderate fatigue
    Reduce,
    /// Hold current load
    Maintain,
    /// Mild positive adaptation
    IncreaseLight,
    /// Good adaptation
    Increase,
    /// Strong adaptation
    Push,
    /// Very strong adaptation
    PushHard,
    /// Exceptional capacity
    Overreach,
}

impl TrainingCategory {
    /// All categories in band order
    pub const ALL: [Self; 9] = [
        Self::FullDeload,
        Self::Deload,
        Self::Reduce,
        Self::Maintain,
        Self::IncreaseLight,
        Self::Increase,
        Self::Push,
        Self::PushHard,
        Self::Overreach,
    ];

    /// Stable wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullDeload => "FULL_DELOAD",
            Self::Deload => "DELOAD",
            Self::Reduce => "REDUCE",
            Self::Maintain => "MAINTAIN",
            Self::IncreaseLight => "INCREASE_LIGHT",
            Self::Increase => "INCREASE",
            Self::Push => "PUSH",
            Self::PushHard => "PUSH_HARD",
            Self::Overreach => "OVERREACH",
        }
    }

    /// Whether the category asks the athlete to back off
    #[must_use]
    pub const fn is_deload(self) -> bool {
        matches!(self, Self::FullDeload | Self::Deload | Self::Reduce)
    }
}

impl fmt::Display for TrainingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fractional load adjustment `[min, max]` applied to last performance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct AdjustmentRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl AdjustmentRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Mean of the two bounds
    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl From<[f64; 2]> for AdjustmentRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<AdjustmentRange> for [f64; 2] {
    fn from(range: AdjustmentRange) -> Self {
        [range.min, range.max]
    }
}

/// Banded recommendation for the next session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Chosen category
    pub category: TrainingCategory,
    /// Advice shown to the athlete
    pub advice: String,
    /// Adjustment applied to last performance
    pub adjustment_range: AdjustmentRange,
    /// Raw predictor output the category was derived from
    pub predicted_change: f64,
}
