// ABOUTME: User management command for progression-cli
// ABOUTME: Creates or updates a user's static attributes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::Output;
use pierre_progression::database::UserStore;
use pierre_progression::errors::{AppError, AppResult};
use pierre_progression::models::{ExperienceLevel, UserAttributes};
use tracing::info;

/// Create or update a user, keeping existing calibration metrics
pub async fn create(
    users: &dyn UserStore,
    output: &Output,
    user_id: i64,
    age: u32,
    weight: f64,
    experience: ExperienceLevel,
) -> AppResult<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Body weight must be a positive number, got {weight}"
        )));
    }

    let mut user = UserAttributes::new(user_id, age, weight, experience);
    if let Some(existing) = users.get_user(user_id).await? {
        user.progression_rate = existing.progression_rate;
        user.fatigue_sensitivity = existing.fatigue_sensitivity;
    }
    users.upsert_user(&user).await?;
    info!(user.id = user_id, "User saved");

    output.emit(&user, || {
        println!("User {user_id} saved");
        println!("   Age: {age}");
        println!("   Weight: {weight} kg");
        println!("   Experience: {experience:?}");
    })
}
