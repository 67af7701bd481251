// ABOUTME: Output formatting helpers for progression-cli
// ABOUTME: Human-readable summaries of features, plans, and completion reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_progression::models::{Exercise, ExerciseTarget, MeasureUnit, SessionRecord};
use pierre_progression::services::{
    CompletionReport, FeatureSnapshot, RecommendationOutcome, WorkoutPlan,
};

/// Print a feature snapshot
pub fn display_features(snapshot: &FeatureSnapshot) {
    println!("Features for user {} ({})", snapshot.user_id, snapshot.mode);
    println!("{}", "=".repeat(60));
    for (name, value) in snapshot.features.iter() {
        match value {
            Some(v) => println!("   {name:<32} {v:>12.3}"),
            None => println!("   {name:<32} {:>12}", "null"),
        }
    }
    if snapshot.is_calibration {
        println!("\nNo history yet: next workout runs in calibration mode");
    }
}

/// Print a workout plan
pub fn display_plan(plan: &WorkoutPlan) {
    println!(
        "Next workout for user {} ({})",
        plan.snapshot.user_id, plan.snapshot.mode
    );
    println!("{}", "=".repeat(60));

    if plan.snapshot.is_calibration {
        println!("Calibration mode: enter your current maxes to bootstrap history");
        return;
    }

    for entry in &plan.recommendations {
        match &entry.outcome {
            RecommendationOutcome::Available(rec) => println!(
                "   {:<20} {:<15} {:+.1}  {}",
                entry.target.to_string(),
                rec.category.to_string(),
                rec.predicted_change,
                rec.advice
            ),
            RecommendationOutcome::Unavailable { reason } => println!(
                "   {:<20} unavailable ({reason})",
                entry.target.to_string()
            ),
        }
    }

    if plan.targets.targets.is_empty() {
        println!("\nNo targets available");
        return;
    }

    println!("\nTargets:");
    for (exercise, target) in &plan.targets.targets {
        match target {
            ExerciseTarget::SetPlan {
                reps_per_set,
                displayed_total,
                ..
            } => println!(
                "   {:<10} {:?} (total {displayed_total} {})",
                exercise.label(),
                reps_per_set,
                unit_label(*exercise)
            ),
            ExerciseTarget::MaxTest { predicted_max } => println!(
                "   {:<10} {predicted_max} {}",
                exercise.label(),
                unit_label(*exercise)
            ),
        }
    }
}

/// Print synthesized calibration records
pub fn display_synthetic_weeks(records: &[SessionRecord]) {
    println!("Synthetic calibration history ({} records)", records.len());
    println!("{}", "=".repeat(60));
    for record in records {
        println!(
            "   week {:<3} {:<10} {:?}",
            record.week,
            record.exercise.label(),
            record.reps_per_set
        );
    }
}

/// Print a completion report
pub fn display_completion(report: &CompletionReport) {
    match report {
        CompletionReport::Calibrated {
            weeks,
            records,
            profile,
        } => {
            println!("Calibration complete: {weeks} weeks, {records} records saved");
            println!("   Progression rate: {:.3}", profile.progression_rate);
            println!("   Fatigue sensitivity: {:.2}", profile.fatigue_sensitivity);
        }
        CompletionReport::Recorded {
            week,
            sessions,
            pairs,
        } => {
            println!("Workout saved as week {week}: {sessions} sessions, {pairs} predicted-vs-actual pairs");
        }
    }
}

const fn unit_label(exercise: Exercise) -> &'static str {
    match exercise.unit() {
        MeasureUnit::Reps => "reps",
        MeasureUnit::Seconds => "s",
    }
}
