// ABOUTME: Flat numeric feature mapping sent to the external predictor
// ABOUTME: Keys map to a number or null when a lag has no history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::features;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat mapping from feature name to number (or null)
///
/// Serializes as a plain JSON object so it can be posted to the predictor
/// unchanged. Derived fresh on every request; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    values: BTreeMap<String, Option<f64>>,
}

impl FeatureSet {
    /// Empty feature set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a numeric feature
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), Some(value));
    }

    /// Set a feature that may be null
    pub fn insert_optional(&mut self, key: impl Into<String>, value: Option<f64>) {
        self.values.insert(key.into(), value);
    }

    /// Numeric value for `key`; `None` when absent or null
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }

    /// Whether `key` is present, even if null
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// `total_volume`, treating absent or null as zero
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.get(features::TOTAL_VOLUME).unwrap_or(0.0)
    }

    /// Iterate over all features in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of features
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set has no features
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
