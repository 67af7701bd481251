// ABOUTME: Integration tests for banded categorization
// ABOUTME: Covers boundary tie-breaks, both threshold tables, and non-finite input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_progression::config::{Band, BandTable};
use pierre_progression::intelligence::Categorizer;
use pierre_progression::models::{AdjustmentRange, TrainingCategory};

fn weighted() -> Categorizer {
    common::init_test_logging();
    Categorizer::new(BandTable::weighted_load())
}

fn max_reps() -> Categorizer {
    common::init_test_logging();
    Categorizer::new(BandTable::max_reps())
}

#[test]
fn test_weighted_load_bands() {
    let categorizer = weighted();
    let cases = [
        (-500.0, TrainingCategory::FullDeload),
        (-150.0, TrainingCategory::Deload),
        (-100.5, TrainingCategory::Deload),
        (-100.0, TrainingCategory::Reduce),
        (-40.0, TrainingCategory::Maintain),
        (0.0, TrainingCategory::Maintain),
        (19.999, TrainingCategory::Maintain),
        (20.0, TrainingCategory::IncreaseLight),
        (60.0, TrainingCategory::Increase),
        (100.0, TrainingCategory::Push),
        (160.0, TrainingCategory::PushHard),
        (219.9, TrainingCategory::PushHard),
        (220.0, TrainingCategory::Overreach),
        (1.0e9, TrainingCategory::Overreach),
    ];
    for (value, expected) in cases {
        assert_eq!(
            categorizer.categorize(value).category,
            expected,
            "predicted change {value}"
        );
    }
}

#[test]
fn test_boundary_belongs_to_later_band() {
    let categorizer = weighted();
    assert_eq!(
        categorizer.categorize(-150.0).category,
        TrainingCategory::Deload
    );
    assert_eq!(
        categorizer.categorize(-150.000_001).category,
        TrainingCategory::FullDeload
    );
    assert_eq!(
        categorizer.categorize(20.0).category,
        TrainingCategory::IncreaseLight
    );
}

#[test]
fn test_recommendation_carries_range_and_prediction() {
    let recommendation = weighted().categorize(75.0);

    assert_eq!(recommendation.category, TrainingCategory::Increase);
    assert_eq!(recommendation.adjustment_range, AdjustmentRange::new(0.1, 0.2));
    assert!((recommendation.predicted_change - 75.0).abs() < f64::EPSILON);
    assert!(!recommendation.advice.is_empty());

    let deload = weighted().categorize(-175.0);
    assert_eq!(deload.category, TrainingCategory::FullDeload);
    assert!((deload.adjustment_range.midpoint() + 0.5).abs() < 1e-12);
}

#[test]
fn test_max_reps_bands() {
    let categorizer = max_reps();
    let cases = [
        (-11.0, TrainingCategory::FullDeload),
        (-10.0, TrainingCategory::Deload),
        (-5.0, TrainingCategory::Reduce),
        (-2.0, TrainingCategory::Maintain),
        (1.9, TrainingCategory::Maintain),
        (2.0, TrainingCategory::IncreaseLight),
        (5.0, TrainingCategory::Increase),
        (8.0, TrainingCategory::Push),
        (12.0, TrainingCategory::PushHard),
        (16.0, TrainingCategory::Overreach),
    ];
    for (value, expected) in cases {
        assert_eq!(
            categorizer.categorize(value).category,
            expected,
            "predicted change {value}"
        );
    }
}

#[test]
fn test_every_real_input_yields_one_of_nine_categories() {
    let categorizer = weighted();
    let mut seen = std::collections::BTreeSet::new();
    let mut value = -400.0;
    while value <= 400.0 {
        let category = categorizer.categorize(value).category;
        assert!(TrainingCategory::ALL.contains(&category));
        seen.insert(category.as_str());
        value += 0.5;
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn test_non_finite_input_maintains() {
    let categorizer = weighted();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let recommendation = categorizer.categorize(value);
        assert_eq!(recommendation.category, TrainingCategory::Maintain);
        assert_eq!(recommendation.adjustment_range, AdjustmentRange::new(0.0, 0.0));
    }
}

#[test]
fn test_custom_table() {
    let table = BandTable {
        name: "custom".to_owned(),
        bands: vec![
            Band {
                upper_bound: Some(0.0),
                category: TrainingCategory::Reduce,
                advice: "Ease off".to_owned(),
                adjustment_range: AdjustmentRange::new(-0.2, -0.1),
            },
            Band {
                upper_bound: None,
                category: TrainingCategory::Increase,
                advice: "Build".to_owned(),
                adjustment_range: AdjustmentRange::new(0.1, 0.2),
            },
        ],
    };
    table.validate().unwrap();

    let categorizer = Categorizer::new(table);
    assert_eq!(categorizer.categorize(-1.0).category, TrainingCategory::Reduce);
    assert_eq!(categorizer.categorize(0.0).category, TrainingCategory::Increase);
    // No MAINTAIN band: non-finite input still maps to MAINTAIN with a neutral range
    let fallback = categorizer.categorize(f64::NAN);
    assert_eq!(fallback.category, TrainingCategory::Maintain);
    assert_eq!(fallback.adjustment_range, AdjustmentRange::new(0.0, 0.0));
}
