// ABOUTME: Rolling feature aggregation over recent session records
// ABOUTME: Computes load, RPE, trend, monotony, fatigue, and best-volume features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::statistical_analysis::StatisticalAnalyzer;
use crate::config::AggregationConfig;
use crate::constants::features as keys;
use crate::models::{Exercise, FeatureSet, SessionRecord, UserAttributes};
use tracing::debug;

/// Builds the set-plan feature mapping from session history
///
/// The "last two weeks" window is the last `window_sessions` records regardless
/// of their `week` field, because records are stored per exercise per session.
#[derive(Debug, Clone, Default)]
pub struct FeatureAggregator {
    config: AggregationConfig,
}

impl FeatureAggregator {
    /// Create an aggregator with the given window configuration
    #[must_use]
    pub const fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Number of records treated as the recent window
    #[must_use]
    pub const fn window_sessions(&self) -> usize {
        self.config.window_sessions
    }

    /// Aggregate `history` (oldest first) plus static user attributes
    #[must_use]
    pub fn aggregate(&self, history: &[SessionRecord], user: &UserAttributes) -> FeatureSet {
        let window = self.window(history);
        let loads: Vec<f64> = window.iter().map(|s| s.weighted_volume).collect();
        let rpes: Vec<f64> = window.iter().map(|s| s.avg_rpe).collect();

        let mut features = FeatureSet::new();
        features.insert(keys::TOTAL_WEIGHTED_LOAD_2W, loads.iter().sum());
        features.insert(keys::AVG_RPE_2W, StatisticalAnalyzer::mean(&rpes));
        features.insert(keys::VOLUME_TREND, StatisticalAnalyzer::slope(&loads));
        features.insert(keys::FATIGUE_INDEX, Self::fatigue_index(window));
        features.insert(keys::MONOTONY, StatisticalAnalyzer::monotony(&loads));

        for exercise in Exercise::ALL {
            features.insert(
                format!("{}{}", keys::BEST_SESSION_VOLUME_PREFIX, exercise.key()),
                f64::from(Self::best_session_volume(window, exercise)),
            );
        }

        let total_volume: f64 = window.iter().map(|s| f64::from(s.volume)).sum();
        features.insert(keys::TOTAL_VOLUME, total_volume);

        insert_user_attributes(&mut features, user);

        debug!(
            user.id = user.user_id,
            history.len = history.len(),
            window.len = window.len(),
            total_volume,
            "Aggregated set-plan features"
        );
        features
    }

    fn window<'a>(&self, history: &'a [SessionRecord]) -> &'a [SessionRecord] {
        let start = history.len().saturating_sub(self.config.window_sessions);
        &history[start..]
    }

    fn fatigue_index(window: &[SessionRecord]) -> f64 {
        window
            .last()
            .map_or(0.0, |latest| latest.weighted_volume * latest.avg_rpe)
    }

    fn best_session_volume(window: &[SessionRecord], exercise: Exercise) -> u32 {
        window
            .iter()
            .filter(|s| s.exercise == exercise)
            .map(|s| s.volume)
            .max()
            .unwrap_or(0)
    }
}

/// Append the static user attributes every feature mapping carries
///
/// Calibration metrics stay `null` until the user has been calibrated.
pub fn insert_user_attributes(features: &mut FeatureSet, user: &UserAttributes) {
    features.insert(keys::AGE, f64::from(user.age));
    features.insert(keys::WEIGHT, user.weight_kg);
    features.insert(keys::EXPERIENCE, f64::from(user.experience.as_number()));
    features.insert_optional(keys::PROGRESSION_RATE, user.progression_rate);
    features.insert_optional(keys::FATIGUE_SENSITIVITY, user.fatigue_sensitivity);
}
