// ABOUTME: Integration tests for synthetic calibration history
// ABOUTME: Covers perturbation bounds, week counts, ordering, and reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_progression::config::CalibrationConfig;
use pierre_progression::intelligence::{BaseValues, CalibrationSynthesizer};
use pierre_progression::models::{Exercise, WorkoutMode};
use std::collections::{BTreeMap, BTreeSet};

fn seeded(seed: u64) -> CalibrationSynthesizer {
    CalibrationSynthesizer::new(CalibrationConfig {
        seed: Some(seed),
        ..CalibrationConfig::default()
    })
}

fn pushup_max(value: u32) -> BaseValues {
    let mut maxes = BTreeMap::new();
    maxes.insert(Exercise::PushUps, value);
    BaseValues::MaxTest(maxes)
}

#[test]
fn test_max_test_values_stay_within_one_of_base() {
    common::init_test_logging();
    for seed in 0..50 {
        let records = seeded(seed).synthesize(1, &pushup_max(20));
        assert!(!records.is_empty());
        for record in &records {
            assert_eq!(record.exercise, Exercise::PushUps);
            assert_eq!(record.mode, WorkoutMode::MaxTest);
            assert_eq!(record.reps_per_set.len(), 1);
            assert!(
                (19..=21).contains(&record.volume),
                "seed {seed} produced {}",
                record.volume
            );
            let expected = f64::from(record.volume) * Exercise::PushUps.weight();
            assert!((record.weighted_volume - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn test_max_test_week_count_is_four_or_five() {
    let mut counts = BTreeSet::new();
    for seed in 0..100 {
        let records = seeded(seed).synthesize(1, &pushup_max(20));
        let weeks: BTreeSet<u32> = records.iter().map(|r| r.week).collect();
        assert!(weeks.len() == 4 || weeks.len() == 5);
        assert_eq!(weeks.iter().copied().min(), Some(1));
        counts.insert(weeks.len());
    }
    assert_eq!(counts.into_iter().collect::<Vec<_>>(), vec![4, 5]);
}

#[test]
fn test_set_plan_is_two_weeks_with_bounded_sets() {
    let mut sets = BTreeMap::new();
    sets.insert(Exercise::Squats, vec![12, 12, 10, 0]);
    sets.insert(Exercise::Plank, vec![45, 45, 40, 30]);
    let base = BaseValues::SetPlan(sets.clone());

    for seed in 0..30 {
        let records = seeded(seed).synthesize(5, &base);
        assert_eq!(records.len(), 4);
        let weeks: BTreeSet<u32> = records.iter().map(|r| r.week).collect();
        assert_eq!(weeks.into_iter().collect::<Vec<_>>(), vec![1, 2]);

        for record in &records {
            assert_eq!(record.user_id, 5);
            assert_eq!(record.mode, WorkoutMode::SetPlan);
            let base_reps = &sets[&record.exercise];
            assert_eq!(record.reps_per_set.len(), base_reps.len());
            for (value, base) in record.reps_per_set.iter().zip(base_reps) {
                assert!(value.abs_diff(*base) <= 1);
            }
            assert_eq!(record.volume, record.reps_per_set.iter().sum::<u32>());
        }
    }
}

#[test]
fn test_records_are_ordered_by_week() {
    let mut maxes = BTreeMap::new();
    for exercise in Exercise::ALL {
        maxes.insert(exercise, 10);
    }
    let records = seeded(3).synthesize(1, &BaseValues::MaxTest(maxes));
    assert!(records.windows(2).all(|pair| pair[0].week <= pair[1].week));
}

#[test]
fn test_zero_base_is_floored() {
    for seed in 0..50 {
        for record in seeded(seed).synthesize(1, &pushup_max(0)) {
            assert!(record.volume <= 1);
        }
    }
}

#[test]
fn test_same_seed_is_reproducible() {
    let first: Vec<u32> = seeded(42)
        .synthesize(1, &pushup_max(20))
        .iter()
        .map(|r| r.volume)
        .collect();
    let second: Vec<u32> = seeded(42)
        .synthesize(1, &pushup_max(20))
        .iter()
        .map(|r| r.volume)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_perturbation_is_symmetric() {
    let mut deltas: BTreeMap<i64, usize> = BTreeMap::new();
    for seed in 0..400 {
        for record in seeded(seed).synthesize(1, &pushup_max(20)) {
            *deltas.entry(i64::from(record.volume) - 20).or_default() += 1;
        }
    }
    let total: usize = deltas.values().sum();
    assert_eq!(deltas.keys().copied().collect::<Vec<_>>(), vec![-1, 0, 1]);
    for (delta, count) in &deltas {
        let share = *count as f64 / total as f64;
        assert!(
            (0.25..0.42).contains(&share),
            "delta {delta} share {share:.3} is not close to one third"
        );
    }
}
