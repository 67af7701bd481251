// ABOUTME: SQLite implementation of the persistence traits using sqlx
// ABOUTME: Creates its schema on connect and stores per-set reps as JSON text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PredictionLog, SessionStore, UserStore};
use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};
use crate::intelligence::CalibrationProfile;
use crate::models::{
    Exercise, ExperienceLevel, PredictedActual, SessionRecord, UserAttributes, WorkoutMode,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::fs;
use tracing::{debug, info};

fn db_error(context: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |e| AppError::database(format!("{context}: {e}")).with_source(e)
}

fn column_u32(row: &SqliteRow, column: &str) -> AppResult<u32> {
    let value: i64 = row
        .try_get(column)
        .map_err(db_error("Failed to read column"))?;
    u32::try_from(value)
        .map_err(|_| AppError::database(format!("Column {column} out of range: {value}")))
}

/// SQLite-backed store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect and run migrations
    ///
    /// File databases are created (with their parent directory) when missing.
    /// In-memory databases use a single connection so every query sees the
    /// same data.
    ///
    /// # Errors
    ///
    /// Returns a `DATABASE_ERROR` if the connection or a migration fails
    pub async fn connect(database: &DatabaseUrl) -> AppResult<Self> {
        let pool = match database {
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&database.to_connection_string())
                .await
                .map_err(db_error("Failed to open in-memory database"))?,
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                let url = format!("{}?mode=rwc", database.to_connection_string());
                SqlitePoolOptions::new()
                    .connect(&url)
                    .await
                    .map_err(db_error("Failed to open database"))?
            }
        };

        let store = Self { pool };
        store.migrate().await?;
        info!(database = %database.to_connection_string(), "Progression database ready");
        Ok(store)
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns a `DATABASE_ERROR` if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                age INTEGER NOT NULL,
                weight_kg REAL NOT NULL,
                experience INTEGER NOT NULL DEFAULT 0,
                progression_rate REAL,
                fatigue_sensitivity REAL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create users table"))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                week INTEGER NOT NULL CHECK (week > 0),
                exercise TEXT NOT NULL,
                mode TEXT NOT NULL,
                sets INTEGER NOT NULL,
                reps_per_set TEXT NOT NULL,
                volume INTEGER NOT NULL,
                weighted_volume REAL NOT NULL,
                avg_rpe REAL NOT NULL,
                recorded_at TEXT NOT NULL,
                deleted_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create workout_sessions table"))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_sessions_user_mode_week
             ON workout_sessions(user_id, mode, week)",
        )
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create workout_sessions index"))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS predicted_actuals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                week INTEGER NOT NULL,
                exercise TEXT NOT NULL,
                mode TEXT NOT NULL,
                predicted INTEGER NOT NULL,
                actual INTEGER NOT NULL,
                rpe REAL NOT NULL,
                feeling INTEGER NOT NULL CHECK (feeling BETWEEN 0 AND 5),
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create predicted_actuals table"))?;

        debug!("Progression schema migrated");
        Ok(())
    }

    fn row_to_session(row: &SqliteRow) -> AppResult<SessionRecord> {
        let exercise: String = row
            .try_get("exercise")
            .map_err(db_error("Failed to read exercise"))?;
        let mode: String = row.try_get("mode").map_err(db_error("Failed to read mode"))?;
        let reps_json: String = row
            .try_get("reps_per_set")
            .map_err(db_error("Failed to read reps_per_set"))?;
        let recorded_at: DateTime<Utc> = row
            .try_get("recorded_at")
            .map_err(db_error("Failed to read recorded_at"))?;

        Ok(SessionRecord {
            user_id: row.try_get("user_id").map_err(db_error("Failed to read user_id"))?,
            week: column_u32(row, "week")?,
            exercise: exercise.parse::<Exercise>().map_err(AppError::database)?,
            mode: mode.parse::<WorkoutMode>().map_err(AppError::database)?,
            sets: column_u32(row, "sets")?,
            reps_per_set: serde_json::from_str(&reps_json)?,
            volume: column_u32(row, "volume")?,
            weighted_volume: row
                .try_get("weighted_volume")
                .map_err(db_error("Failed to read weighted_volume"))?,
            avg_rpe: row.try_get("avg_rpe").map_err(db_error("Failed to read avg_rpe"))?,
            recorded_at,
        })
    }
}

#[async_trait]
impl SessionStore for SqliteStore {
    async fn session_history(
        &self,
        user_id: i64,
        mode: WorkoutMode,
    ) -> AppResult<Vec<SessionRecord>> {
        let rows = sqlx::query(
            r"
            SELECT user_id, week, exercise, mode, sets, reps_per_set, volume,
                   weighted_volume, avg_rpe, recorded_at
            FROM workout_sessions
            WHERE user_id = ? AND mode = ? AND deleted_at IS NULL
            ORDER BY week ASC, id ASC
            ",
        )
        .bind(user_id)
        .bind(mode.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch session history"))?;

        rows.iter().map(Self::row_to_session).collect()
    }

    async fn insert_sessions(&self, sessions: &[SessionRecord]) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        for session in sessions {
            sqlx::query(
                r"
                INSERT INTO workout_sessions
                    (user_id, week, exercise, mode, sets, reps_per_set, volume,
                     weighted_volume, avg_rpe, recorded_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ",
            )
            .bind(session.user_id)
            .bind(i64::from(session.week))
            .bind(session.exercise.key())
            .bind(session.mode.as_str())
            .bind(i64::from(session.sets))
            .bind(serde_json::to_string(&session.reps_per_set)?)
            .bind(i64::from(session.volume))
            .bind(session.weighted_volume)
            .bind(session.avg_rpe)
            .bind(session.recorded_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert session"))?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit sessions"))
    }

    async fn last_week(&self, user_id: i64, mode: WorkoutMode) -> AppResult<Option<u32>> {
        let week: Option<i64> = sqlx::query_scalar(
            "SELECT MAX(week) FROM workout_sessions
             WHERE user_id = ? AND mode = ? AND deleted_at IS NULL",
        )
        .bind(user_id)
        .bind(mode.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to fetch last week"))?;

        week.map(|w| {
            u32::try_from(w).map_err(|_| AppError::database(format!("Week out of range: {w}")))
        })
        .transpose()
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn upsert_user(&self, user: &UserAttributes) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, age, weight_kg, experience, progression_rate, fatigue_sensitivity)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                age = excluded.age,
                weight_kg = excluded.weight_kg,
                experience = excluded.experience,
                progression_rate = excluded.progression_rate,
                fatigue_sensitivity = excluded.fatigue_sensitivity
            ",
        )
        .bind(user.user_id)
        .bind(i64::from(user.age))
        .bind(user.weight_kg)
        .bind(i64::from(user.experience.as_number()))
        .bind(user.progression_rate)
        .bind(user.fatigue_sensitivity)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to upsert user"))?;
        Ok(())
    }

    async fn get_user(&self, user_id: i64) -> AppResult<Option<UserAttributes>> {
        let row = sqlx::query(
            "SELECT id, age, weight_kg, experience, progression_rate, fatigue_sensitivity
             FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch user"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let experience: i64 = row
            .try_get("experience")
            .map_err(db_error("Failed to read experience"))?;

        Ok(Some(UserAttributes {
            user_id,
            age: column_u32(&row, "age")?,
            weight_kg: row
                .try_get("weight_kg")
                .map_err(db_error("Failed to read weight_kg"))?,
            experience: ExperienceLevel::from_number(experience).unwrap_or_default(),
            progression_rate: row
                .try_get("progression_rate")
                .map_err(db_error("Failed to read progression_rate"))?,
            fatigue_sensitivity: row
                .try_get("fatigue_sensitivity")
                .map_err(db_error("Failed to read fatigue_sensitivity"))?,
        }))
    }

    async fn update_calibration(
        &self,
        user_id: i64,
        profile: &CalibrationProfile,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE users SET progression_rate = ?, fatigue_sensitivity = ? WHERE id = ?",
        )
        .bind(profile.progression_rate)
        .bind(profile.fatigue_sensitivity)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update calibration"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl PredictionLog for SqliteStore {
    async fn save_predicted_actuals(&self, pairs: &[PredictedActual]) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        for pair in pairs {
            sqlx::query(
                r"
                INSERT INTO predicted_actuals
                    (user_id, week, exercise, mode, predicted, actual, rpe, feeling)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ",
            )
            .bind(pair.user_id)
            .bind(i64::from(pair.week))
            .bind(pair.exercise.key())
            .bind(pair.mode.as_str())
            .bind(i64::from(pair.predicted))
            .bind(i64::from(pair.actual))
            .bind(pair.rpe)
            .bind(i64::from(pair.feeling))
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert predicted-vs-actual pair"))?;
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit predicted-vs-actual pairs"))
    }

    async fn predicted_actuals(&self, user_id: i64) -> AppResult<Vec<PredictedActual>> {
        let rows = sqlx::query(
            r"
            SELECT user_id, week, exercise, mode, predicted, actual, rpe, feeling
            FROM predicted_actuals
            WHERE user_id = ?
            ORDER BY id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to fetch predicted-vs-actual pairs"))?;

        rows.iter()
            .map(|row| {
                let exercise: String = row
                    .try_get("exercise")
                    .map_err(db_error("Failed to read exercise"))?;
                let mode: String = row.try_get("mode").map_err(db_error("Failed to read mode"))?;
                let feeling = column_u32(row, "feeling")?;
                Ok(PredictedActual {
                    user_id: row.try_get("user_id").map_err(db_error("Failed to read user_id"))?,
                    week: column_u32(row, "week")?,
                    exercise: exercise.parse::<Exercise>().map_err(AppError::database)?,
                    mode: mode.parse::<WorkoutMode>().map_err(AppError::database)?,
                    predicted: column_u32(row, "predicted")?,
                    actual: column_u32(row, "actual")?,
                    rpe: row.try_get("rpe").map_err(db_error("Failed to read rpe"))?,
                    feeling: u8::try_from(feeling).map_err(|_| {
                        AppError::database(format!("Feeling out of range: {feeling}"))
                    })?,
                })
            })
            .collect()
    }
}
