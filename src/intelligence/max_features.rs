// ABOUTME: Lagged per-exercise features for max-test workouts
// ABOUTME: Builds lag, rolling-average, and trend values keyed by exercise and week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::aggregator::insert_user_attributes;
use super::statistical_analysis::StatisticalAnalyzer;
use crate::constants::{aggregation, features as keys};
use crate::models::{Exercise, FeatureSet, SessionRecord, UserAttributes};
use std::collections::BTreeMap;
use tracing::debug;

/// Builds the max-test feature mapping
///
/// For every exercise the mapping holds `<exercise>_lag1..3` (value from week
/// `latest - lag`), `<exercise>_rolling_avg_3w` (mean of up to three weeks before
/// the latest) and `<exercise>_trend` (latest minus lag 1). Each is `null` when
/// the weeks it needs are missing. `latest` is the highest week in the history.
pub struct MaxFeatureBuilder;

impl MaxFeatureBuilder {
    /// Build features from max-test history (oldest first)
    #[must_use]
    pub fn build(history: &[SessionRecord], user: &UserAttributes) -> FeatureSet {
        let mut features = FeatureSet::new();
        let latest_week = history.iter().map(|s| s.week).max();

        let mut total_volume = 0.0;
        for exercise in Exercise::ALL {
            let by_week = Self::values_by_week(history, exercise);
            let latest = latest_week.and_then(|week| by_week.get(&week).copied());
            if let Some(value) = latest {
                total_volume += value;
            }

            for lag in aggregation::MAX_TEST_LAGS {
                let value = latest_week
                    .and_then(|week| week.checked_sub(lag))
                    .and_then(|week| by_week.get(&week).copied());
                features.insert_optional(format!("{}_lag{lag}", exercise.key()), value);
            }

            let earlier: Vec<f64> = by_week
                .iter()
                .filter(|(week, _)| latest_week.is_some_and(|latest| **week < latest))
                .map(|(_, value)| *value)
                .collect();
            let rolling = &earlier[earlier
                .len()
                .saturating_sub(aggregation::MAX_TEST_ROLLING_WEEKS)..];
            features.insert_optional(
                format!("{}_rolling_avg_3w", exercise.key()),
                (!rolling.is_empty()).then(|| StatisticalAnalyzer::mean(rolling)),
            );

            let lag1 = latest_week
                .and_then(|week| week.checked_sub(1))
                .and_then(|week| by_week.get(&week).copied());
            let trend = latest.zip(lag1).map(|(last, previous)| last - previous);
            features.insert_optional(format!("{}_trend", exercise.key()), trend);
        }

        features.insert(keys::TOTAL_VOLUME, total_volume);
        features.insert(keys::WEEK, 0.0);
        insert_user_attributes(&mut features, user);

        debug!(
            user.id = user.user_id,
            latest_week,
            total_volume,
            "Built max-test features"
        );
        features
    }

    /// Max per week for one exercise; a later record in the same week wins
    fn values_by_week(history: &[SessionRecord], exercise: Exercise) -> BTreeMap<u32, f64> {
        history
            .iter()
            .filter(|s| s.exercise == exercise)
            .map(|s| (s.week, f64::from(s.volume)))
            .collect()
    }
}
