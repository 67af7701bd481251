// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses database, predictor, and runtime settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use super::intelligence_config::IntelligenceConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Default database location
const DEFAULT_DATABASE_URL: &str = "sqlite:./data/progression.db";
/// Default predictor service address
const DEFAULT_PREDICTOR_URL: &str = "http://localhost:8000";
/// Default predictor request timeout
const DEFAULT_PREDICTOR_TIMEOUT_SECS: u64 = 5;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; bare paths are treated as SQLite files
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Whether this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

/// External predictor connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Base URL of the prediction service
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PREDICTOR_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_PREDICTOR_TIMEOUT_SECS),
        }
    }
}

impl PredictorConfig {
    /// Load predictor settings from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if `PREDICTOR_BASE_URL` is not a valid URL or the
    /// timeout is not a positive integer
    pub fn from_env() -> Result<Self> {
        let raw_url =
            env::var("PREDICTOR_BASE_URL").unwrap_or_else(|_| DEFAULT_PREDICTOR_URL.to_owned());
        let base = Self::default().with_base_url(&raw_url)?;

        let timeout_secs = match env::var("PREDICTOR_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid PREDICTOR_TIMEOUT_SECS: {raw}"))?,
            Err(_) => DEFAULT_PREDICTOR_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            anyhow::bail!("PREDICTOR_TIMEOUT_SECS must be at least 1");
        }

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            ..base
        })
    }

    /// Replace the base URL after checking it parses as an absolute URL
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_ERROR` if `raw` is not a valid URL
    pub fn with_base_url(self, raw: &str) -> AppResult<Self> {
        Url::parse(raw).map_err(|e| {
            AppError::config(format!("Invalid predictor base URL {raw}: {e}")).with_source(e)
        })?;
        Ok(Self {
            base_url: raw.to_owned(),
            ..self
        })
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Service name used in logs
    pub service_name: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database location
    pub database: DatabaseUrl,
    /// Predictor connection
    pub predictor: PredictorConfig,
    /// Aggregation, calibration, and band settings
    pub intelligence: IntelligenceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but malformed, or the
    /// intelligence configuration fails validation
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_owned()),
        );

        let database = match env::var("DATABASE_URL") {
            Ok(url) => DatabaseUrl::parse_url(&url),
            Err(_) => {
                warn!("DATABASE_URL not set, using default {DEFAULT_DATABASE_URL}");
                DatabaseUrl::parse_url(DEFAULT_DATABASE_URL)
            }
        };

        let predictor = PredictorConfig::from_env()?;
        let intelligence =
            IntelligenceConfig::from_env().context("Invalid intelligence configuration")?;

        let config = Self {
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::PROGRESSION_ENGINE.to_owned()),
            environment,
            database,
            predictor,
            intelligence,
        };

        info!(
            environment = %config.environment,
            database = %config.database.to_connection_string(),
            predictor.url = %config.predictor.base_url,
            window_sessions = config.intelligence.aggregation.window_sessions,
            "Configuration loaded"
        );
        Ok(config)
    }
}
