// ABOUTME: Progression service wiring stores, predictor, and intelligence modules
// ABOUTME: Implements feature fetch, degrade-on-failure recommendations, and workout completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::IntelligenceConfig;
use crate::database::{PredictionLog, SessionStore, UserStore};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    BaseValues, CalibrationDetector, CalibrationProfile, CalibrationSynthesizer, Categorizer,
    FeatureAggregator, InputValidator, MaxFeatureBuilder, TargetProjector,
};
use crate::logging::AppLogger;
use crate::models::{
    Exercise, FeatureSet, LastPerformance, PredictedActual, PredictedTargets, Recommendation,
    SessionRecord, UserAttributes, WorkoutMode,
};
use crate::predictor::{PredictionTarget, Predictor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Features for one user and mode, with the calibration gate already evaluated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSnapshot {
    /// Owning user
    pub user_id: i64,
    /// Mode the history was read for
    pub mode: WorkoutMode,
    /// Flat feature mapping
    pub features: FeatureSet,
    /// `true` when there is no history to predict from
    pub is_calibration: bool,
}

/// Result of asking for a recommendation
///
/// A failed predictor call is reported as `Unavailable`, never as a default
/// category, so callers can carry on without blocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    /// Predictor answered and the value was categorized
    Available(Recommendation),
    /// Predictor unreachable or returned an unusable response
    Unavailable {
        /// Human-readable failure description
        reason: String,
    },
}

impl RecommendationOutcome {
    /// The recommendation, if one was produced
    #[must_use]
    pub const fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Available(recommendation) => Some(recommendation),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Recommendation outcome for one prediction target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecommendation {
    /// What was predicted
    pub target: PredictionTarget,
    /// How it went
    pub outcome: RecommendationOutcome,
}

/// Everything needed to present the next workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Features the plan was derived from
    pub snapshot: FeatureSnapshot,
    /// Latest performance per exercise
    pub last_performance: LastPerformance,
    /// One entry in set-plan mode, one per exercise in max-test mode; empty while calibrating
    pub recommendations: Vec<TargetRecommendation>,
    /// Targets for every recommendation that was available
    pub targets: PredictedTargets,
}

/// A finished workout as entered by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedWorkout {
    /// Owning user
    pub user_id: i64,
    /// Values performed; while calibrating they seed the synthetic history
    pub performed: BaseValues,
    /// Session RPE
    pub rpe: f64,
    /// Self-reported feeling
    pub feeling: i64,
    /// Targets shown before the workout, if any
    pub predicted: Option<PredictedTargets>,
}

/// What the completion flow persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionReport {
    /// Synthetic weeks and calibration metrics were written
    Calibrated {
        /// Number of synthetic weeks
        weeks: u32,
        /// Number of synthetic session records
        records: usize,
        /// Persisted calibration metrics
        profile: CalibrationProfile,
    },
    /// Performed sessions and predicted-vs-actual pairs were written
    Recorded {
        /// Week the sessions were stored under
        week: u32,
        /// Number of session records
        sessions: usize,
        /// Number of predicted-vs-actual pairs
        pairs: usize,
    },
}

/// Orchestrates the prediction cycle over the persistence collaborators
///
/// Holds no per-user state: every call reads fresh history.
pub struct ProgressionService {
    config: IntelligenceConfig,
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    predictions: Arc<dyn PredictionLog>,
    predictor: Arc<dyn Predictor>,
}

impl ProgressionService {
    /// Create a service over separate collaborators
    #[must_use]
    pub fn new(
        config: IntelligenceConfig,
        sessions: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
        predictions: Arc<dyn PredictionLog>,
        predictor: Arc<dyn Predictor>,
    ) -> Self {
        Self {
            config,
            sessions,
            users,
            predictions,
            predictor,
        }
    }

    /// Create a service over one store implementing every repository trait
    #[must_use]
    pub fn with_store<S>(
        config: IntelligenceConfig,
        store: Arc<S>,
        predictor: Arc<dyn Predictor>,
    ) -> Self
    where
        S: SessionStore + UserStore + PredictionLog + 'static,
    {
        Self::new(config, store.clone(), store.clone(), store, predictor)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    async fn require_user(&self, user_id: i64) -> AppResult<UserAttributes> {
        self.users
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))
    }

    /// Aggregate features for a user and evaluate the calibration gate
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown user and propagates store failures
    #[instrument(skip(self))]
    pub async fn get_features(&self, user_id: i64, mode: WorkoutMode) -> AppResult<FeatureSnapshot> {
        let user = self.require_user(user_id).await?;
        let history = self.sessions.session_history(user_id, mode).await?;
        Ok(self.snapshot(&user, mode, &history))
    }

    fn snapshot(
        &self,
        user: &UserAttributes,
        mode: WorkoutMode,
        history: &[SessionRecord],
    ) -> FeatureSnapshot {
        let features = match mode {
            WorkoutMode::SetPlan => {
                FeatureAggregator::new(self.config.aggregation.clone()).aggregate(history, user)
            }
            WorkoutMode::MaxTest => MaxFeatureBuilder::build(history, user),
        };
        let is_calibration = CalibrationDetector::is_calibration(&features);

        info!(
            user.id = user.user_id,
            mode = %mode,
            history.len = history.len(),
            is_calibration,
            "Features fetched"
        );
        FeatureSnapshot {
            user_id: user.user_id,
            mode,
            features,
            is_calibration,
        }
    }

    /// Ask the predictor and categorize its answer
    ///
    /// Never fails: predictor errors become [`RecommendationOutcome::Unavailable`].
    pub async fn get_recommendation(
        &self,
        snapshot: &FeatureSnapshot,
        target: PredictionTarget,
    ) -> RecommendationOutcome {
        match self.predictor.predict(target, &snapshot.features).await {
            Ok(predicted_change) => {
                let recommendation = self.categorizer_for(target).categorize(predicted_change);
                AppLogger::log_recommendation(
                    snapshot.user_id,
                    snapshot.mode,
                    &target.to_string(),
                    predicted_change,
                    recommendation.category,
                );
                RecommendationOutcome::Available(recommendation)
            }
            Err(e) => {
                let reason = e.to_string();
                AppLogger::log_prediction_unavailable(
                    snapshot.user_id,
                    snapshot.mode,
                    &target.to_string(),
                    &reason,
                );
                RecommendationOutcome::Unavailable { reason }
            }
        }
    }

    fn categorizer_for(&self, target: PredictionTarget) -> Categorizer {
        let mode = match target {
            PredictionTarget::WeightedLoad => WorkoutMode::SetPlan,
            PredictionTarget::MaxReps(_) => WorkoutMode::MaxTest,
        };
        Categorizer::new(self.config.bands_for(mode).clone())
    }

    /// Apply a recommendation to the last known performance
    #[must_use]
    pub fn get_predicted_targets(
        &self,
        recommendation: &Recommendation,
        last: &LastPerformance,
    ) -> PredictedTargets {
        TargetProjector::project(recommendation, last)
    }

    /// Generate synthetic calibration weeks without persisting them
    #[must_use]
    pub fn synthesize_calibration_weeks(
        &self,
        user_id: i64,
        base: &BaseValues,
    ) -> Vec<SessionRecord> {
        CalibrationSynthesizer::new(self.config.calibration.clone()).synthesize(user_id, base)
    }

    /// Latest recorded performance per exercise in one mode
    ///
    /// # Errors
    ///
    /// Propagates store failures
    pub async fn last_performance(
        &self,
        user_id: i64,
        mode: WorkoutMode,
    ) -> AppResult<LastPerformance> {
        let history = self.sessions.session_history(user_id, mode).await?;
        Ok(last_performance_from(&history, mode))
    }

    /// Features, recommendations, and targets for the next workout
    ///
    /// While calibrating no prediction is attempted. In max-test mode each
    /// exercise is predicted separately and a failure drops only that exercise.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown user and propagates store failures
    pub async fn plan_next_workout(&self, user_id: i64, mode: WorkoutMode) -> AppResult<WorkoutPlan> {
        let user = self.require_user(user_id).await?;
        let history = self.sessions.session_history(user_id, mode).await?;
        let snapshot = self.snapshot(&user, mode, &history);
        let last_performance = last_performance_from(&history, mode);

        if snapshot.is_calibration {
            return Ok(WorkoutPlan {
                snapshot,
                last_performance,
                recommendations: Vec::new(),
                targets: PredictedTargets::default(),
            });
        }

        let (recommendations, targets) = match &last_performance {
            LastPerformance::SetPlan(_) => {
                let target = PredictionTarget::WeightedLoad;
                let outcome = self.get_recommendation(&snapshot, target).await;
                let targets = outcome
                    .recommendation()
                    .map(|rec| self.get_predicted_targets(rec, &last_performance))
                    .unwrap_or_default();
                (vec![TargetRecommendation { target, outcome }], targets)
            }
            LastPerformance::MaxTest(last_maxes) => {
                let mut recommendations = Vec::with_capacity(Exercise::ALL.len());
                let mut available = BTreeMap::new();
                for exercise in Exercise::ALL {
                    let target = PredictionTarget::MaxReps(exercise);
                    let outcome = self.get_recommendation(&snapshot, target).await;
                    if let Some(rec) = outcome.recommendation() {
                        available.insert(exercise, rec.clone());
                    }
                    recommendations.push(TargetRecommendation { target, outcome });
                }
                let targets = TargetProjector::project_max_tests(&available, last_maxes);
                (recommendations, targets)
            }
        };

        Ok(WorkoutPlan {
            snapshot,
            last_performance,
            recommendations,
            targets,
        })
    }

    /// Persist a finished workout
    ///
    /// While calibrating, synthetic weeks are written in increasing week order
    /// and only then the calibration metrics. Otherwise the performed sessions
    /// are stored at `last_week + 1` followed by predicted-vs-actual pairs.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown user and propagates store failures
    #[instrument(skip(self, workout), fields(user.id = workout.user_id))]
    pub async fn complete_workout(&self, workout: &CompletedWorkout) -> AppResult<CompletionReport> {
        let mode = workout.performed.mode();
        let user = self.require_user(workout.user_id).await?;
        let history = self.sessions.session_history(workout.user_id, mode).await?;

        if self.snapshot(&user, mode, &history).is_calibration {
            return self.complete_calibration(&user, &workout.performed).await;
        }

        let rpe = InputValidator::rpe(workout.rpe).value;
        let feeling = InputValidator::feeling(workout.feeling).value;
        let week = self
            .sessions
            .last_week(workout.user_id, mode)
            .await?
            .map_or(1, |last| last.saturating_add(1));

        let sessions = performed_sessions(workout.user_id, week, &workout.performed, rpe);
        self.sessions.insert_sessions(&sessions).await?;

        let pairs: Vec<PredictedActual> = workout
            .predicted
            .as_ref()
            .map(|predicted| {
                sessions
                    .iter()
                    .filter_map(|session| {
                        predicted.get(session.exercise).map(|target| PredictedActual {
                            user_id: workout.user_id,
                            week,
                            exercise: session.exercise,
                            mode,
                            predicted: target.headline(),
                            actual: session.volume,
                            rpe,
                            feeling,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();
        if !pairs.is_empty() {
            self.predictions.save_predicted_actuals(&pairs).await?;
        }

        info!(
            user.id = workout.user_id,
            mode = %mode,
            week,
            sessions = sessions.len(),
            pairs = pairs.len(),
            "Workout recorded"
        );
        Ok(CompletionReport::Recorded {
            week,
            sessions: sessions.len(),
            pairs: pairs.len(),
        })
    }

    async fn complete_calibration(
        &self,
        user: &UserAttributes,
        base: &BaseValues,
    ) -> AppResult<CompletionReport> {
        let records = self.synthesize_calibration_weeks(user.user_id, base);
        let weeks = records.iter().map(|r| r.week).max().unwrap_or(0);

        // One write per week, in increasing order, before the profile
        for week in 1..=weeks {
            let batch: Vec<SessionRecord> =
                records.iter().filter(|r| r.week == week).cloned().collect();
            self.sessions.insert_sessions(&batch).await?;
        }

        let profile = CalibrationProfile::for_user(user);
        self.users.update_calibration(user.user_id, &profile).await?;

        AppLogger::log_calibration(user.user_id, base.mode(), weeks, records.len());
        Ok(CompletionReport::Calibrated {
            weeks,
            records: records.len(),
            profile,
        })
    }
}

/// Latest session per exercise; later entries in `history` win
fn last_performance_from(history: &[SessionRecord], mode: WorkoutMode) -> LastPerformance {
    match mode {
        WorkoutMode::MaxTest => LastPerformance::MaxTest(
            history
                .iter()
                .map(|s| (s.exercise, f64::from(s.volume)))
                .collect(),
        ),
        WorkoutMode::SetPlan => LastPerformance::SetPlan(
            history
                .iter()
                .map(|s| (s.exercise, s.reps_per_set.clone()))
                .collect(),
        ),
    }
}

fn performed_sessions(user_id: i64, week: u32, performed: &BaseValues, rpe: f64) -> Vec<SessionRecord> {
    match performed {
        BaseValues::MaxTest(maxes) => maxes
            .iter()
            .map(|(exercise, max)| SessionRecord::max_test(user_id, week, *exercise, *max, rpe))
            .collect(),
        BaseValues::SetPlan(sets) => sets
            .iter()
            .map(|(exercise, reps)| {
                SessionRecord::new(user_id, week, *exercise, WorkoutMode::SetPlan, reps.clone(), rpe)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_performance_keeps_latest_session() {
        let history = vec![
            SessionRecord::max_test(1, 1, Exercise::PushUps, 18, 6.0),
            SessionRecord::max_test(1, 2, Exercise::PushUps, 21, 6.0),
            SessionRecord::max_test(1, 2, Exercise::Plank, 60, 6.0),
        ];
        let LastPerformance::MaxTest(maxes) = last_performance_from(&history, WorkoutMode::MaxTest)
        else {
            unreachable!("max-test history yields a max-test snapshot");
        };
        assert_eq!(maxes.get(&Exercise::PushUps), Some(&21.0));
        assert_eq!(maxes.get(&Exercise::Plank), Some(&60.0));
        assert!(!maxes.contains_key(&Exercise::Squats));
    }
}
