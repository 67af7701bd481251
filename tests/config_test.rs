// ABOUTME: Integration tests for environment and intelligence configuration
// ABOUTME: Env-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_progression::config::{
    BandTable, ConfigError, DatabaseUrl, Environment, IntelligenceConfig, PredictorConfig,
    ServerConfig,
};
use pierre_progression::errors::ErrorCode;
use pierre_progression::models::{TrainingCategory, WorkoutMode};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const MANAGED_VARS: [&str; 11] = [
    "SERVICE_NAME",
    "DATABASE_URL",
    "ENVIRONMENT",
    "PREDICTOR_BASE_URL",
    "PREDICTOR_TIMEOUT_SECS",
    "PROGRESSION_WINDOW_SESSIONS",
    "PROGRESSION_CALIBRATION_MIN_WEEKS",
    "PROGRESSION_CALIBRATION_MAX_WEEKS",
    "PROGRESSION_CALIBRATION_PLAN_WEEKS",
    "PROGRESSION_CALIBRATION_RPE",
    "PROGRESSION_CALIBRATION_SEED",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_tables_validate() {
    let config = IntelligenceConfig::default();
    config.validate().unwrap();
    assert_eq!(config.weighted_load_bands.bands.len(), 9);
    assert_eq!(config.max_reps_bands.bands.len(), 9);
    assert_eq!(config.bands_for(WorkoutMode::SetPlan).name, "weighted_load");
    assert_eq!(config.bands_for(WorkoutMode::MaxTest).name, "max_reps");
}

#[test]
fn test_band_tables_cover_every_category_in_order() {
    for table in [BandTable::weighted_load(), BandTable::max_reps()] {
        let categories: Vec<TrainingCategory> =
            table.bands.iter().map(|band| band.category).collect();
        assert_eq!(categories, TrainingCategory::ALL.to_vec());
    }
}

#[test]
fn test_unordered_thresholds_are_rejected() {
    let mut table = BandTable::max_reps();
    table.bands[3].upper_bound = Some(-8.0);
    let err = table.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBands { ref table, .. } if table == "max_reps"));
}

#[test]
fn test_missing_catch_all_is_rejected() {
    let mut table = BandTable::weighted_load();
    table.bands.last_mut().unwrap().upper_bound = Some(1_000.0);
    assert!(table.validate().is_err());

    let empty = BandTable {
        name: "empty".to_owned(),
        bands: Vec::new(),
    };
    assert!(empty.validate().is_err());
}

#[test]
fn test_inverted_adjustment_range_is_rejected() {
    let mut table = BandTable::weighted_load();
    table.bands[0].adjustment_range = [-0.2, -0.6].into();
    assert!(table.validate().is_err());
}

#[test]
fn test_band_table_deserializes_from_json() {
    let json = serde_json::to_string(&BandTable::max_reps()).unwrap();
    let parsed: BandTable = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, BandTable::max_reps());
}

#[test]
fn test_database_url_parsing() {
    assert_eq!(DatabaseUrl::parse_url("sqlite::memory:"), DatabaseUrl::Memory);
    assert_eq!(DatabaseUrl::parse_url(":memory:"), DatabaseUrl::Memory);
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:./data/progress.db"),
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/progress.db")
        }
    );
    assert_eq!(
        DatabaseUrl::parse_url("/var/lib/progress.db").to_connection_string(),
        "sqlite:/var/lib/progress.db"
    );
    assert!(DatabaseUrl::Memory.is_memory());
}

#[test]
fn test_environment_parsing() {
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_intelligence_env_overrides() {
    clear_env();
    env::set_var("PROGRESSION_WINDOW_SESSIONS", "12");
    env::set_var("PROGRESSION_CALIBRATION_SEED", "99");
    env::set_var("PROGRESSION_CALIBRATION_MAX_WEEKS", "6");

    let config = IntelligenceConfig::from_env().unwrap();
    assert_eq!(config.aggregation.window_sessions, 12);
    assert_eq!(config.calibration.seed, Some(99));
    assert_eq!(config.calibration.week_bounds(WorkoutMode::MaxTest), (4, 6));
    assert_eq!(config.calibration.week_bounds(WorkoutMode::SetPlan), (2, 2));
    clear_env();
}

#[test]
#[serial]
fn test_intelligence_env_rejects_bad_values() {
    clear_env();
    env::set_var("PROGRESSION_WINDOW_SESSIONS", "eight");
    assert!(matches!(
        IntelligenceConfig::from_env(),
        Err(ConfigError::Parse(_))
    ));

    env::set_var("PROGRESSION_WINDOW_SESSIONS", "0");
    assert!(matches!(
        IntelligenceConfig::from_env(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
    env::set_var("PROGRESSION_CALIBRATION_MIN_WEEKS", "7");
    assert!(matches!(
        IntelligenceConfig::from_env(),
        Err(ConfigError::InvalidRange(_))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_predictor_config_from_env() {
    clear_env();
    let defaults = PredictorConfig::from_env().unwrap();
    assert_eq!(defaults.base_url, "http://localhost:8000");
    assert_eq!(defaults.timeout, Duration::from_secs(5));

    env::set_var("PREDICTOR_BASE_URL", "http://model.internal:9000");
    env::set_var("PREDICTOR_TIMEOUT_SECS", "2");
    let custom = PredictorConfig::from_env().unwrap();
    assert_eq!(custom.base_url, "http://model.internal:9000");
    assert_eq!(custom.timeout, Duration::from_secs(2));

    env::set_var("PREDICTOR_TIMEOUT_SECS", "0");
    assert!(PredictorConfig::from_env().is_err());

    env::set_var("PREDICTOR_TIMEOUT_SECS", "2");
    env::set_var("PREDICTOR_BASE_URL", "not a url");
    assert!(PredictorConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_server_config_from_env() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.database.is_memory());
    assert!(config.environment.is_production());
    assert_eq!(config.intelligence.aggregation.window_sessions, 8);
    assert_eq!(config.service_name, "pierre-progression-engine");
    clear_env();
}

#[test]
fn test_predictor_base_url_override_is_validated() {
    let config = PredictorConfig::default()
        .with_base_url("http://127.0.0.1:9100/")
        .unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:9100/");
    assert_eq!(config.timeout, PredictorConfig::default().timeout);

    let err = PredictorConfig::default()
        .with_base_url("localhost without scheme")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigError);
}
