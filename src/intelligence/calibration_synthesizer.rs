// ABOUTME: Bounded-random synthetic history for users entering calibration
// ABOUTME: Perturbs self-reported base values by at most one unit per week and exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CalibrationConfig;
use crate::constants::calibration;
use crate::models::{Exercise, SessionRecord, WorkoutMode};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Self-reported or first-attempt values that seed synthetic history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "values", rename_all = "snake_case")]
pub enum BaseValues {
    /// One max per exercise
    MaxTest(BTreeMap<Exercise, u32>),
    /// Reps (or seconds) per set per exercise
    SetPlan(BTreeMap<Exercise, Vec<u32>>),
}

impl BaseValues {
    /// Workout mode of the synthesized sessions
    #[must_use]
    pub const fn mode(&self) -> WorkoutMode {
        match self {
            Self::MaxTest(_) => WorkoutMode::MaxTest,
            Self::SetPlan(_) => WorkoutMode::SetPlan,
        }
    }
}

/// Generates plausible but clearly synthetic weeks of sessions
///
/// Each value gets an independent, uniformly drawn perturbation in `-1..=1` and
/// is floored at 0, so the synthetic series carries no artificial trend.
#[derive(Debug, Clone, Default)]
pub struct CalibrationSynthesizer {
    config: CalibrationConfig,
}

impl CalibrationSynthesizer {
    /// Create a synthesizer; a configured seed makes output reproducible
    #[must_use]
    pub const fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    /// Synthesize weeks `1..=n` for `user_id`, ordered by week
    #[must_use]
    pub fn synthesize(&self, user_id: i64, base: &BaseValues) -> Vec<SessionRecord> {
        let mut rng = self
            .config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        self.synthesize_with_rng(user_id, base, &mut rng)
    }

    /// Synthesize with a caller-supplied random source
    pub fn synthesize_with_rng<R: Rng + ?Sized>(
        &self,
        user_id: i64,
        base: &BaseValues,
        rng: &mut R,
    ) -> Vec<SessionRecord> {
        let (min_weeks, max_weeks) = self.config.week_bounds(base.mode());
        let weeks = rng.gen_range(min_weeks..=max_weeks.max(min_weeks));
        let rpe = self.config.synthetic_rpe;

        let mut records = Vec::new();
        for week in 1..=weeks {
            match base {
                BaseValues::MaxTest(maxes) => {
                    records.extend(maxes.iter().map(|(exercise, max)| {
                        SessionRecord::max_test(user_id, week, *exercise, perturb(*max, rng), rpe)
                    }));
                }
                BaseValues::SetPlan(sets) => {
                    records.extend(sets.iter().map(|(exercise, reps)| {
                        let reps = reps.iter().map(|value| perturb(*value, rng)).collect();
                        SessionRecord::new(user_id, week, *exercise, WorkoutMode::SetPlan, reps, rpe)
                    }));
                }
            }
        }

        debug!(
            user.id = user_id,
            mode = %base.mode(),
            weeks,
            records = records.len(),
            "Synthesized calibration weeks"
        );
        records
    }
}

fn perturb<R: Rng + ?Sized>(value: u32, rng: &mut R) -> u32 {
    let delta = rng.gen_range(-calibration::PERTURBATION..=calibration::PERTURBATION);
    let shifted = i64::from(value) + delta;
    u32::try_from(shifted.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturb_never_goes_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(perturb(0, &mut rng) <= 1);
        }
    }

    #[test]
    fn test_perturb_is_symmetric_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            seen.insert(perturb(10, &mut rng));
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![9, 10, 11]);
    }
}
