// ABOUTME: HTTP client for the external regression model service
// ABOUTME: Posts feature mappings as JSON and extracts the predicted change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{PredictionTarget, Predictor, PredictorError};
use crate::config::PredictorConfig;
use crate::constants::service_names;
use crate::models::FeatureSet;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Response field carrying the weighted-volume prediction
const PLAN_FIELD: &str = "predicted_weighted_volume_change";
/// Response field carrying a per-exercise max prediction
const MAX_FIELD: &str = "prediction";

/// Predictor reached over HTTP
///
/// Set-plan predictions go to `POST {base}/predict/plan`, max-test predictions
/// to `POST {base}/predict/{exercise}`. No retries: a failed call is final for
/// the current request.
pub struct HttpPredictor {
    config: PredictorConfig,
    client: Client,
}

impl HttpPredictor {
    /// Create a client with the configured timeout
    #[must_use]
    pub fn new(config: PredictorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    /// Endpoint and response field for a target
    fn route(&self, target: PredictionTarget) -> (String, &'static str) {
        let base = self.config.base_url.trim_end_matches('/');
        match target {
            PredictionTarget::WeightedLoad => (format!("{base}/predict/plan"), PLAN_FIELD),
            PredictionTarget::MaxReps(exercise) => {
                (format!("{base}/predict/{}", exercise.key()), MAX_FIELD)
            }
        }
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(
        &self,
        target: PredictionTarget,
        features: &FeatureSet,
    ) -> Result<f64, PredictorError> {
        let (url, field) = self.route(target);
        debug!(
            service = service_names::PREDICTOR,
            prediction.target = %target,
            url = %url,
            features = features.len(),
            "Requesting prediction"
        );

        let response = self
            .client
            .post(&url)
            .json(features)
            .send()
            .await
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(PredictorError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|e| PredictorError::Malformed(format!("invalid JSON: {e}")))?;

        body.get(field)
            .and_then(Value::as_f64)
            .ok_or_else(|| PredictorError::Malformed(format!("missing numeric field `{field}`")))
    }
}
