// ABOUTME: External regression model abstraction for predicted training change
// ABOUTME: Defines the Predictor trait, prediction targets, and predictor errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Predictor
//!
//! The regression model is a fixed external oracle: a flat feature mapping goes
//! in, a scalar predicted change comes out. Any failure is reported as a
//! [`PredictorError`] and the caller degrades to "no recommendation".

/// HTTP client for the predictor service
pub mod http;

pub use http::HttpPredictor;

use crate::models::{Exercise, FeatureSet};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// What the predictor is asked to estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "exercise", rename_all = "snake_case")]
pub enum PredictionTarget {
    /// Change in total weighted volume (set-plan mode)
    WeightedLoad,
    /// Change in one exercise's max (max-test mode)
    MaxReps(Exercise),
}

impl fmt::Display for PredictionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightedLoad => write!(f, "weighted_load"),
            Self::MaxReps(exercise) => write!(f, "max_{}", exercise.key()),
        }
    }
}

/// Predictor failures; all of them mean "prediction unavailable"
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Connection, timeout, or other transport failure
    #[error("Predictor unreachable: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("Predictor returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Success status but the body lacks a usable number
    #[error("Malformed predictor response: {0}")]
    Malformed(String),
}

/// Maps a feature mapping to a scalar predicted change
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Predict the change for `target`
    ///
    /// # Errors
    ///
    /// Returns `PredictorError` when no usable prediction could be obtained
    async fn predict(
        &self,
        target: PredictionTarget,
        features: &FeatureSet,
    ) -> Result<f64, PredictorError>;
}

/// Predictor backed by a plain function, for embedding a local model
pub struct FnPredictor<F> {
    predict_fn: F,
}

impl<F> FnPredictor<F>
where
    F: Fn(PredictionTarget, &FeatureSet) -> Result<f64, PredictorError> + Send + Sync,
{
    /// Wrap a function as a predictor
    pub const fn new(predict_fn: F) -> Self {
        Self { predict_fn }
    }
}

#[async_trait]
impl<F> Predictor for FnPredictor<F>
where
    F: Fn(PredictionTarget, &FeatureSet) -> Result<f64, PredictorError> + Send + Sync,
{
    async fn predict(
        &self,
        target: PredictionTarget,
        features: &FeatureSet,
    ) -> Result<f64, PredictorError> {
        (self.predict_fn)(target, features)
    }
}
