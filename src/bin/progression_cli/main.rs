// ABOUTME: Progression CLI - command-line front end for the progression engine
// ABOUTME: Creates users, prints features and plans, and records or calibrates workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Register a user
//! progression-cli user create --user-id 1 --age 29 --weight 72.5 --experience beginner
//!
//! # Show features and the calibration gate
//! progression-cli features --user-id 1 --mode set_plan
//!
//! # Plan the next workout (asks the predictor)
//! progression-cli plan --user-id 1 --mode max_test
//!
//! # Preview synthetic calibration weeks, or persist them with --save
//! progression-cli calibrate --user-id 1 --mode max_test --pushups 20 --situps 25 --plank 60 --squats 30 --save
//!
//! # Record a performed set-plan workout
//! progression-cli record --user-id 1 --mode set_plan --pushups 12,12,11,10 --rpe 7 --feeling 4
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pierre_progression::config::{DatabaseUrl, ServerConfig};
use pierre_progression::database::SqliteStore;
use pierre_progression::logging::{LogFormat, LoggingConfig};
use pierre_progression::models::{ExperienceLevel, WorkoutMode};
use pierre_progression::predictor::HttpPredictor;
use pierre_progression::services::ProgressionService;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "progression-cli",
    about = "Pierre Progression Engine CLI",
    long_about = "Feature aggregation, load-trend recommendations, and next-session targets for bodyweight training."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Predictor base URL override
    #[arg(long, global = true)]
    predictor_url: Option<String>,

    /// Print JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// User management commands
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Show the feature mapping and calibration gate for a user
    Features {
        /// User identifier
        #[arg(long)]
        user_id: i64,

        /// Workout mode (`set_plan` or `max_test`)
        #[arg(long, default_value = "set_plan")]
        mode: WorkoutMode,
    },

    /// Plan the next workout
    Plan {
        /// User identifier
        #[arg(long)]
        user_id: i64,

        /// Workout mode (`set_plan` or `max_test`)
        #[arg(long, default_value = "set_plan")]
        mode: WorkoutMode,
    },

    /// Synthesize calibration weeks from base values
    Calibrate {
        /// User identifier
        #[arg(long)]
        user_id: i64,

        /// Workout mode (`set_plan` or `max_test`)
        #[arg(long, default_value = "max_test")]
        mode: WorkoutMode,

        #[command(flatten)]
        values: ExerciseValues,

        /// Persist the weeks and calibration metrics instead of previewing
        #[arg(long)]
        save: bool,
    },

    /// Record a performed workout
    Record {
        /// User identifier
        #[arg(long)]
        user_id: i64,

        /// Workout mode (`set_plan` or `max_test`)
        #[arg(long, default_value = "set_plan")]
        mode: WorkoutMode,

        #[command(flatten)]
        values: ExerciseValues,

        /// Session RPE (0-10)
        #[arg(long, default_value = "5")]
        rpe: f64,

        /// How the session felt (0-5)
        #[arg(long, default_value = "3")]
        feeling: i64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum UserCommand {
    /// Create or update a user's static attributes
    Create {
        /// User identifier
        #[arg(long)]
        user_id: i64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Experience (`beginner`, `intermediate`, `advanced` or 0-2)
        #[arg(long, default_value = "beginner", value_parser = helpers::parse_experience)]
        experience: ExperienceLevel,
    },
}

/// Per-exercise values; comma-separated sets in set-plan mode, one max in max-test mode
#[derive(Args, Debug, Clone, Default)]
pub struct ExerciseValues {
    /// Push-ups
    #[arg(long)]
    pub pushups: Option<String>,

    /// Sit-ups
    #[arg(long)]
    pub situps: Option<String>,

    /// Plank seconds
    #[arg(long)]
    pub plank: Option<String>,

    /// Squats
    #[arg(long)]
    pub squats: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.to_owned(),
        format: LogFormat::Compact,
        ..LoggingConfig::from_env()
    }
    .init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database = DatabaseUrl::parse_url(url);
    }
    if let Some(url) = cli.predictor_url.as_deref() {
        config.predictor = config.predictor.with_base_url(url)?;
    }

    info!(
        service = %config.service_name,
        environment = %config.environment,
        database = %config.database.to_connection_string(),
        "Starting progression CLI"
    );
    let store = Arc::new(SqliteStore::connect(&config.database).await?);
    let predictor = Arc::new(HttpPredictor::new(config.predictor.clone()));
    let service =
        ProgressionService::with_store(config.intelligence.clone(), store.clone(), predictor);

    let output = helpers::Output { json: cli.json };

    match cli.command {
        Command::User { action } => match action {
            UserCommand::Create {
                user_id,
                age,
                weight,
                experience,
            } => commands::user::create(store.as_ref(), &output, user_id, age, weight, experience)
                .await?,
        },
        Command::Features { user_id, mode } => {
            commands::workout::features(&service, &output, user_id, mode).await?;
        }
        Command::Plan { user_id, mode } => {
            commands::workout::plan(&service, &output, user_id, mode).await?;
        }
        Command::Calibrate {
            user_id,
            mode,
            values,
            save,
        } => {
            commands::workout::calibrate(&service, &output, user_id, mode, &values, save).await?;
        }
        Command::Record {
            user_id,
            mode,
            values,
            rpe,
            feeling,
        } => {
            commands::workout::record(&service, &output, user_id, mode, &values, rpe, feeling)
                .await?;
        }
    }

    Ok(())
}
