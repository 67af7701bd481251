// ABOUTME: Persistence collaborators for sessions, users, and prediction history
// ABOUTME: Async repository traits with in-memory and SQLite implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! The engine reads and writes through three narrow repository traits so the
//! orchestration layer never depends on a concrete store. Session records are
//! append-only; histories are returned oldest first (by week, then insertion).

/// In-memory store for tests and embedding
pub mod memory;
/// SQLite store on sqlx
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::InMemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::intelligence::CalibrationProfile;
use crate::models::{PredictedActual, SessionRecord, UserAttributes, WorkoutMode};
use async_trait::async_trait;

/// Session history repository
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Sessions for a user in one mode, ordered by week then insertion
    async fn session_history(&self, user_id: i64, mode: WorkoutMode)
        -> AppResult<Vec<SessionRecord>>;

    /// Append sessions in the given order
    async fn insert_sessions(&self, sessions: &[SessionRecord]) -> AppResult<()>;

    /// Highest recorded week for a user in one mode
    async fn last_week(&self, user_id: i64, mode: WorkoutMode) -> AppResult<Option<u32>>;
}

/// User attribute repository
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create or replace a user's static attributes
    async fn upsert_user(&self, user: &UserAttributes) -> AppResult<()>;

    /// Attributes for a user, if known
    async fn get_user(&self, user_id: i64) -> AppResult<Option<UserAttributes>>;

    /// Persist calibration metrics for an existing user
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the user does not exist.
    async fn update_calibration(&self, user_id: i64, profile: &CalibrationProfile)
        -> AppResult<()>;
}

/// Predicted-vs-actual history
#[async_trait]
pub trait PredictionLog: Send + Sync {
    /// Append predicted-vs-actual pairs
    async fn save_predicted_actuals(&self, pairs: &[PredictedActual]) -> AppResult<()>;

    /// All pairs for a user, oldest first
    async fn predicted_actuals(&self, user_id: i64) -> AppResult<Vec<PredictedActual>>;
}
