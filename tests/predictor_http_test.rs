// ABOUTME: Integration tests for the HTTP predictor client
// ABOUTME: Runs a local axum stub to exercise success, status, and malformed responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pierre_progression::config::PredictorConfig;
use pierre_progression::models::{Exercise, FeatureSet};
use pierre_progression::predictor::{HttpPredictor, PredictionTarget, Predictor, PredictorError};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::net::TcpListener;

async fn predict_plan(Json(features): Json<Value>) -> Json<Value> {
    // Echo back a value derived from the request so the payload is checked too
    let volume = features
        .get("total_volume")
        .and_then(Value::as_f64)
        .unwrap_or(-1.0);
    Json(json!({ "predicted_weighted_volume_change": volume / 2.0 }))
}

async fn predict_pushups() -> Json<Value> {
    Json(json!({ "prediction": 6.5 }))
}

async fn predict_situps() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "model not loaded")
}

async fn predict_plank() -> Json<Value> {
    Json(json!({ "result": 3.0 }))
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/predict/plan", post(predict_plan))
        .route("/predict/pushups", post(predict_pushups))
        .route("/predict/situps", post(predict_situps))
        .route("/predict/plank", post(predict_plank));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn predictor(base_url: String) -> HttpPredictor {
    HttpPredictor::new(PredictorConfig {
        base_url,
        timeout: Duration::from_secs(2),
    })
}

fn features() -> FeatureSet {
    let mut features = FeatureSet::new();
    features.insert("total_volume", 240.0);
    features.insert("week", 3.0);
    features.insert_optional("progression_rate", None);
    features
}

#[tokio::test]
async fn test_plan_prediction_reads_weighted_volume_field() {
    common::init_test_logging();
    let client = predictor(spawn_stub().await);

    let value = client
        .predict(PredictionTarget::WeightedLoad, &features())
        .await
        .unwrap();
    assert!((value - 120.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_max_prediction_routes_by_exercise() {
    common::init_test_logging();
    let client = predictor(spawn_stub().await);

    let value = client
        .predict(PredictionTarget::MaxReps(Exercise::PushUps), &features())
        .await
        .unwrap();
    assert!((value - 6.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    common::init_test_logging();
    let client = predictor(spawn_stub().await);

    let err = client
        .predict(PredictionTarget::MaxReps(Exercise::SitUps), &features())
        .await
        .unwrap_err();
    match err {
        PredictorError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "model not loaded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_field_is_malformed() {
    common::init_test_logging();
    let client = predictor(spawn_stub().await);

    let err = client
        .predict(PredictionTarget::MaxReps(Exercise::Plank), &features())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictorError::Malformed(_)));
}

#[tokio::test]
async fn test_unknown_route_is_a_status_error() {
    common::init_test_logging();
    let client = predictor(spawn_stub().await);

    let err = client
        .predict(PredictionTarget::MaxReps(Exercise::Squats), &features())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictorError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    common::init_test_logging();
    // Bind then drop to get a port nothing is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = predictor(format!("http://{addr}"));
    let err = client
        .predict(PredictionTarget::WeightedLoad, &features())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictorError::Transport(_)));
}

#[test]
fn test_target_display() {
    assert_eq!(PredictionTarget::WeightedLoad.to_string(), "weighted_load");
    assert_eq!(
        PredictionTarget::MaxReps(Exercise::Squats).to_string(),
        "max_squats"
    );
}
