// ABOUTME: Integration tests for rolling feature aggregation
// ABOUTME: Covers window selection, trend, monotony, fatigue, and empty history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{plan_session, test_user};
use pierre_progression::config::AggregationConfig;
use pierre_progression::constants::features as keys;
use pierre_progression::intelligence::FeatureAggregator;
use pierre_progression::models::{Exercise, ExperienceLevel, UserAttributes};

fn approx(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("feature present");
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_three_session_window() {
    let history = vec![
        plan_session(1, Exercise::PushUps, 10, 6.0), // volume 40, weighted 40
        plan_session(1, Exercise::SitUps, 10, 7.0),  // volume 40, weighted 60
        plan_session(1, Exercise::Squats, 10, 8.0),  // volume 40, weighted 28
    ];
    let features = FeatureAggregator::default().aggregate(&history, &test_user(1));

    approx(features.get(keys::TOTAL_WEIGHTED_LOAD_2W), 128.0);
    approx(features.get(keys::AVG_RPE_2W), 7.0);
    approx(features.get(keys::VOLUME_TREND), -6.0);
    approx(features.get(keys::FATIGUE_INDEX), 28.0 * 8.0);
    approx(features.get(keys::TOTAL_VOLUME), 120.0);

    let mean = 128.0 / 3.0;
    let variance = [40.0_f64, 60.0, 28.0]
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / 3.0;
    approx(features.get(keys::MONOTONY), mean / variance.sqrt());

    approx(features.get("best_session_volume_pushups"), 40.0);
    approx(features.get("best_session_volume_plank"), 0.0);
}

#[test]
fn test_window_keeps_only_most_recent_records() {
    let mut history: Vec<_> = (1..=6)
        .map(|week| plan_session(week, Exercise::PushUps, 5, 5.0))
        .collect();
    history.extend((7..=10).map(|week| plan_session(week, Exercise::PushUps, 10, 5.0)));

    let aggregator = FeatureAggregator::new(AggregationConfig { window_sessions: 4 });
    let features = aggregator.aggregate(&history, &test_user(1));

    approx(features.get(keys::TOTAL_VOLUME), 160.0);
    approx(features.get(keys::VOLUME_TREND), 0.0);
    // Constant series: deviation floored at 1, so monotony equals the mean
    approx(features.get(keys::MONOTONY), 40.0);
}

#[test]
fn test_best_session_volume_per_exercise() {
    let history = vec![
        plan_session(1, Exercise::Plank, 30, 5.0),
        plan_session(2, Exercise::Plank, 45, 6.0),
        plan_session(3, Exercise::Plank, 40, 6.0),
    ];
    let features = FeatureAggregator::default().aggregate(&history, &test_user(1));

    approx(features.get("best_session_volume_plank"), 180.0);
    approx(features.get("best_session_volume_squats"), 0.0);
}

#[test]
fn test_empty_history_yields_zero_features() {
    let features = FeatureAggregator::default().aggregate(&[], &test_user(1));

    for key in [
        keys::TOTAL_WEIGHTED_LOAD_2W,
        keys::AVG_RPE_2W,
        keys::VOLUME_TREND,
        keys::FATIGUE_INDEX,
        keys::MONOTONY,
        keys::TOTAL_VOLUME,
    ] {
        approx(features.get(key), 0.0);
    }
    for exercise in Exercise::ALL {
        approx(
            features.get(&format!("best_session_volume_{}", exercise.key())),
            0.0,
        );
    }
}

#[test]
fn test_user_attributes_are_included() {
    let mut user = UserAttributes::new(3, 41, 80.5, ExperienceLevel::Advanced);
    let features = FeatureAggregator::default().aggregate(&[], &user);

    approx(features.get(keys::AGE), 41.0);
    approx(features.get(keys::WEIGHT), 80.5);
    approx(features.get(keys::EXPERIENCE), 2.0);
    assert!(features.contains(keys::PROGRESSION_RATE));
    assert_eq!(features.get(keys::PROGRESSION_RATE), None);

    user.progression_rate = Some(0.024);
    user.fatigue_sensitivity = Some(1.08);
    let features = FeatureAggregator::default().aggregate(&[], &user);
    approx(features.get(keys::PROGRESSION_RATE), 0.024);
    approx(features.get(keys::FATIGUE_SENSITIVITY), 1.08);
}
