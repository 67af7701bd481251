// ABOUTME: Statistical helpers for rolling training-load features
// ABOUTME: Mean, population standard deviation, and least-squares slope over position index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: window sizes are small session counts

/// Descriptive statistics over small series of session values
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Arithmetic mean; empty input yields 0
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation (divides by `n`); empty input yields 0
    #[must_use]
    pub fn population_std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / values.len() as f64;
        variance.sqrt()
    }

    /// Least-squares slope of `values` against their index `0, 1, 2, ...`
    ///
    /// A series of zero or one point has no trend and yields 0.
    #[must_use]
    pub fn slope(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = Self::mean(values);

        let (numerator, denominator) =
            values
                .iter()
                .enumerate()
                .fold((0.0_f64, 0.0_f64), |(num, den), (i, y)| {
                    let dx = i as f64 - mean_x;
                    (dx.mul_add(y - mean_y, num), dx.mul_add(dx, den))
                });

        if denominator.abs() < f64::EPSILON {
            0.0
        } else {
            numerator / denominator
        }
    }

    /// Mean over population standard deviation, with a zero deviation floored at 1
    #[must_use]
    pub fn monotony(values: &[f64]) -> f64 {
        let std_dev = Self::population_std_dev(values);
        let divisor = if std_dev == 0.0 { 1.0 } else { std_dev };
        Self::mean(values) / divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_slope_of_short_series_is_zero() {
        assert!(approx(StatisticalAnalyzer::slope(&[]), 0.0));
        assert!(approx(StatisticalAnalyzer::slope(&[42.0]), 0.0));
    }

    #[test]
    fn test_slope_of_linear_series() {
        assert!(approx(StatisticalAnalyzer::slope(&[1.0, 3.0, 5.0, 7.0]), 2.0));
        assert!(approx(StatisticalAnalyzer::slope(&[9.0, 6.0, 3.0]), -3.0));
    }

    #[test]
    fn test_population_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(approx(StatisticalAnalyzer::population_std_dev(&values), 2.0));
    }

    #[test]
    fn test_monotony_of_constant_series_equals_mean() {
        assert!(approx(StatisticalAnalyzer::monotony(&[30.0, 30.0, 30.0]), 30.0));
    }

    #[test]
    fn test_empty_series() {
        assert!(approx(StatisticalAnalyzer::mean(&[]), 0.0));
        assert!(approx(StatisticalAnalyzer::monotony(&[]), 0.0));
    }
}
