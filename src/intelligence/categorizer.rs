// ABOUTME: Banded categorization of a predicted change into a training category
// ABOUTME: One configurable threshold table per call site, first matching band wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{Band, BandTable};
use crate::models::{AdjustmentRange, Recommendation, TrainingCategory};
use tracing::warn;

const MAINTAIN_FALLBACK_ADVICE: &str = "Maintain current training.";

/// Maps a scalar predicted change onto a [`BandTable`]
///
/// Bands are scanned in order and the first with `value < upper_bound` wins, so a
/// value sitting exactly on a threshold lands in the later band. Non-finite input
/// is categorized as `MAINTAIN`.
#[derive(Debug, Clone)]
pub struct Categorizer {
    table: BandTable,
}

impl Categorizer {
    /// Create a categorizer over a (validated) band table
    #[must_use]
    pub const fn new(table: BandTable) -> Self {
        Self { table }
    }

    /// Band table in use
    #[must_use]
    pub const fn table(&self) -> &BandTable {
        &self.table
    }

    /// Categorize a predicted change
    #[must_use]
    pub fn categorize(&self, predicted_change: f64) -> Recommendation {
        if !predicted_change.is_finite() {
            warn!(
                table = %self.table.name,
                predicted_change,
                "Non-finite predicted change, falling back to MAINTAIN"
            );
            return self.maintain(predicted_change);
        }

        self.table
            .bands
            .iter()
            .find(|band| {
                band.upper_bound
                    .is_none_or(|upper| predicted_change < upper)
            })
            .map_or_else(
                || self.maintain(predicted_change),
                |band| Self::recommend(band, predicted_change),
            )
    }

    fn recommend(band: &Band, predicted_change: f64) -> Recommendation {
        Recommendation {
            category: band.category,
            advice: band.advice.clone(),
            adjustment_range: band.adjustment_range,
            predicted_change,
        }
    }

    fn maintain(&self, predicted_change: f64) -> Recommendation {
        self.table
            .bands
            .iter()
            .find(|band| band.category == TrainingCategory::Maintain)
            .map_or_else(
                || Recommendation {
                    category: TrainingCategory::Maintain,
                    advice: MAINTAIN_FALLBACK_ADVICE.to_owned(),
                    adjustment_range: AdjustmentRange::new(0.0, 0.0),
                    predicted_change,
                },
                |band| Self::recommend(band, predicted_change),
            )
    }
}
