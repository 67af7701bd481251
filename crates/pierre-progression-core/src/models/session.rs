// ABOUTME: Session record and predicted-vs-actual models
// ABOUTME: Derives volume and weighted volume from per-set values at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Exercise, WorkoutMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed exercise within one workout
///
/// Immutable once written. `volume` is always the sum of `reps_per_set` and
/// `weighted_volume` is `volume * exercise.weight()`; use [`SessionRecord::new`]
/// so the derived fields cannot drift from the per-set values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Owning user
    pub user_id: i64,
    /// Training week index (1-based)
    pub week: u32,
    /// Exercise performed
    pub exercise: Exercise,
    /// Workout style the session belongs to
    pub mode: WorkoutMode,
    /// Number of sets
    pub sets: u32,
    /// Reps (or seconds) per set, in order
    pub reps_per_set: Vec<u32>,
    /// Sum of `reps_per_set`
    pub volume: u32,
    /// `volume` scaled by the exercise weight
    pub weighted_volume: f64,
    /// Perceived effort 0-10
    pub avg_rpe: f64,
    /// When the record was created
    pub recorded_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Build a record, deriving sets, volume, and weighted volume
    #[must_use]
    pub fn new(
        user_id: i64,
        week: u32,
        exercise: Exercise,
        mode: WorkoutMode,
        reps_per_set: Vec<u32>,
        avg_rpe: f64,
    ) -> Self {
        let volume = reps_per_set.iter().copied().fold(0_u32, u32::saturating_add);
        Self {
            user_id,
            week,
            exercise,
            mode,
            sets: u32::try_from(reps_per_set.len()).unwrap_or(u32::MAX),
            weighted_volume: f64::from(volume) * exercise.weight(),
            volume,
            reps_per_set,
            avg_rpe,
            recorded_at: Utc::now(),
        }
    }

    /// Build a single-set max-test record
    #[must_use]
    pub fn max_test(user_id: i64, week: u32, exercise: Exercise, max: u32, avg_rpe: f64) -> Self {
        Self::new(user_id, week, exercise, WorkoutMode::MaxTest, vec![max], avg_rpe)
    }
}

/// Predicted target paired with what the user actually performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedActual {
    /// Owning user
    pub user_id: i64,
    /// Week the workout was recorded in
    pub week: u32,
    /// Exercise the pair refers to
    pub exercise: Exercise,
    /// Workout style
    pub mode: WorkoutMode,
    /// Target shown before the workout
    pub predicted: u32,
    /// Value performed
    pub actual: u32,
    /// Session RPE 0-10
    pub rpe: f64,
    /// Self-reported feeling 0-5
    pub feeling: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_volume_fields() {
        let record = SessionRecord::new(
            1,
            3,
            Exercise::SitUps,
            WorkoutMode::SetPlan,
            vec![10, 10, 8, 7],
            6.0,
        );
        assert_eq!(record.sets, 4);
        assert_eq!(record.volume, 35);
        assert!((record.weighted_volume - 52.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_saturates_huge_counts() {
        let record = SessionRecord::new(
            1,
            1,
            Exercise::PushUps,
            WorkoutMode::SetPlan,
            vec![u32::MAX, 1],
            5.0,
        );
        assert_eq!(record.volume, u32::MAX);
        assert_eq!(record.sets, 2);
        assert!(record.weighted_volume.is_finite());
    }
}
