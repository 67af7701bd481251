// ABOUTME: In-memory implementation of the persistence traits
// ABOUTME: Backs tests and embedded use with a single async RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PredictionLog, SessionStore, UserStore};
use crate::errors::{AppError, AppResult};
use crate::intelligence::CalibrationProfile;
use crate::models::{PredictedActual, SessionRecord, UserAttributes, WorkoutMode};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    sessions: Vec<SessionRecord>,
    users: HashMap<i64, UserAttributes>,
    predictions: Vec<PredictedActual>,
}

/// Store holding everything in process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<MemoryState>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn session_history(
        &self,
        user_id: i64,
        mode: WorkoutMode,
    ) -> AppResult<Vec<SessionRecord>> {
        let state = self.state.read().await;
        let mut history: Vec<SessionRecord> = state
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id && s.mode == mode)
            .cloned()
            .collect();
        // Stable: insertion order is kept within a week
        history.sort_by_key(|s| s.week);
        Ok(history)
    }

    async fn insert_sessions(&self, sessions: &[SessionRecord]) -> AppResult<()> {
        self.state.write().await.sessions.extend_from_slice(sessions);
        Ok(())
    }

    async fn last_week(&self, user_id: i64, mode: WorkoutMode) -> AppResult<Option<u32>> {
        let state = self.state.read().await;
        Ok(state
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id && s.mode == mode)
            .map(|s| s.week)
            .max())
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn upsert_user(&self, user: &UserAttributes) -> AppResult<()> {
        self.state
            .write()
            .await
            .users
            .insert(user.user_id, user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: i64) -> AppResult<Option<UserAttributes>> {
        Ok(self.state.read().await.users.get(&user_id).cloned())
    }

    async fn update_calibration(
        &self,
        user_id: i64,
        profile: &CalibrationProfile,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))?;
        user.progression_rate = Some(profile.progression_rate);
        user.fatigue_sensitivity = Some(profile.fatigue_sensitivity);
        Ok(())
    }
}

#[async_trait]
impl PredictionLog for InMemoryStore {
    async fn save_predicted_actuals(&self, pairs: &[PredictedActual]) -> AppResult<()> {
        self.state
            .write()
            .await
            .predictions
            .extend_from_slice(pairs);
        Ok(())
    }

    async fn predicted_actuals(&self, user_id: i64) -> AppResult<Vec<PredictedActual>> {
        Ok(self
            .state
            .read()
            .await
            .predictions
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}
