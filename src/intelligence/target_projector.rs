// ABOUTME: Applies a recommendation's adjustment range to last known performance
// ABOUTME: Produces evenly distributed set plans or single max-test targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::projection;
use crate::models::{
    AdjustmentRange, Exercise, ExerciseTarget, LastPerformance, PredictedTargets, Recommendation,
};
use std::collections::BTreeMap;
use tracing::warn;

/// Turns an adjustment range into concrete per-exercise targets
///
/// Rounding happens exactly once per produced integer. A set plan rounds the
/// projected volume, then rounds the per-set share, so the displayed total
/// (`reps_per_set * 4`) can drift from the projected volume by a few units.
pub struct TargetProjector;

impl TargetProjector {
    /// Project targets for every exercise using one recommendation
    #[must_use]
    pub fn project(recommendation: &Recommendation, last: &LastPerformance) -> PredictedTargets {
        let range = recommendation.adjustment_range;
        let targets = match last {
            LastPerformance::SetPlan(reps) => Exercise::ALL
                .into_iter()
                .map(|exercise| {
                    let target =
                        Self::project_set_plan(exercise, reps.get(&exercise).map(Vec::as_slice), range);
                    (exercise, target)
                })
                .collect(),
            LastPerformance::MaxTest(maxes) => Exercise::ALL
                .into_iter()
                .map(|exercise| {
                    let target = Self::project_max_test(maxes.get(&exercise).copied(), range);
                    (exercise, target)
                })
                .collect(),
        };
        PredictedTargets { targets }
    }

    /// Project max-test targets with one recommendation per exercise
    ///
    /// Exercises without a recommendation get no target.
    #[must_use]
    pub fn project_max_tests(
        recommendations: &BTreeMap<Exercise, Recommendation>,
        last_maxes: &BTreeMap<Exercise, f64>,
    ) -> PredictedTargets {
        let targets = recommendations
            .iter()
            .map(|(exercise, recommendation)| {
                let target = Self::project_max_test(
                    last_maxes.get(exercise).copied(),
                    recommendation.adjustment_range,
                );
                (*exercise, target)
            })
            .collect();
        PredictedTargets { targets }
    }

    /// Evenly distributed set plan from the last session's reps
    ///
    /// Without a prior session the exercise baseline is used for every set.
    #[must_use]
    pub fn project_set_plan(
        exercise: Exercise,
        last_reps: Option<&[u32]>,
        range: AdjustmentRange,
    ) -> ExerciseTarget {
        let last_volume: u32 = match last_reps {
            Some(reps) if !reps.is_empty() => {
                reps.iter().copied().fold(0_u32, u32::saturating_add)
            }
            _ => exercise.baseline_per_set() * sets_per_plan(),
        };

        let raw_volume = f64::from(last_volume) * (1.0 + range.midpoint());
        let projected_volume = round_non_negative(raw_volume).unwrap_or_else(|| {
            warn!(
                exercise = %exercise,
                last_volume,
                "Non-finite projected volume, keeping last volume"
            );
            last_volume
        });

        let per_set = round_non_negative(f64::from(projected_volume) / f64::from(sets_per_plan()))
            .unwrap_or(0);

        ExerciseTarget::SetPlan {
            reps_per_set: vec![per_set; projection::SETS_PER_PLAN],
            projected_volume,
            displayed_total: per_set.saturating_mul(sets_per_plan()),
        }
    }

    /// Single max-test target; a missing or non-finite result becomes the fixed fallback
    #[must_use]
    pub fn project_max_test(last_max: Option<f64>, range: AdjustmentRange) -> ExerciseTarget {
        let predicted_max = last_max
            .and_then(|max| round_non_negative(max * (1.0 + range.midpoint())))
            .unwrap_or(projection::MAX_TEST_FALLBACK);
        ExerciseTarget::MaxTest { predicted_max }
    }
}

#[allow(clippy::cast_possible_truncation)] // Safe: SETS_PER_PLAN is a small constant
const fn sets_per_plan() -> u32 {
    projection::SETS_PER_PLAN as u32
}

/// Round half away from zero and floor at 0; `None` for non-finite input
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: clamped to u32 range first
fn round_non_negative(value: f64) -> Option<u32> {
    value
        .is_finite()
        .then(|| value.round().clamp(0.0, f64::from(u32::MAX)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_non_negative() {
        assert_eq!(round_non_negative(45.5), Some(46));
        assert_eq!(round_non_negative(-3.2), Some(0));
        assert_eq!(round_non_negative(f64::NAN), None);
        assert_eq!(round_non_negative(f64::INFINITY), None);
    }
}
