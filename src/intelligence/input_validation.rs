// ABOUTME: Explicit validation of untrusted numeric workout input
// ABOUTME: Flags invalid values and substitutes safe defaults instead of rejecting them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::logging::AppLogger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an input value was replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputIssueKind {
    /// Could not be parsed as a number
    NotANumber,
    /// NaN or infinite
    NotFinite,
    /// Below zero
    Negative,
    /// Above the accepted maximum
    AboveMaximum,
}

impl fmt::Display for InputIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "not a number"),
            Self::NotFinite => write!(f, "not finite"),
            Self::Negative => write!(f, "negative"),
            Self::AboveMaximum => write!(f, "above maximum"),
        }
    }
}

/// A flagged input value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIssue {
    /// Field the value was supplied for
    pub field: String,
    /// Value as received
    pub raw: String,
    /// What was wrong with it
    pub kind: InputIssueKind,
}

/// A value that is always safe to use, plus the issue that produced it, if any
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    /// Value to use
    pub value: T,
    /// Set when `value` is a substitute
    pub issue: Option<InputIssue>,
}

impl<T> Validated<T> {
    const fn ok(value: T) -> Self {
        Self { value, issue: None }
    }

    fn replaced(value: T, field: &str, raw: String, kind: InputIssueKind) -> Self
    where
        T: fmt::Display,
    {
        AppLogger::log_input_coerced(field, &raw, &value.to_string(), &kind.to_string());
        Self {
            value,
            issue: Some(InputIssue {
                field: field.to_owned(),
                raw,
                kind,
            }),
        }
    }

    /// Whether the value had to be replaced
    #[must_use]
    pub const fn was_replaced(&self) -> bool {
        self.issue.is_some()
    }
}

/// Coerces raw input to safe numbers, logging every substitution
pub struct InputValidator;

impl InputValidator {
    /// Rep or second count from text; invalid or negative text becomes 0
    #[must_use]
    pub fn parse_count(field: &str, raw: &str) -> Validated<u32> {
        raw.trim().parse::<f64>().map_or_else(
            |_| Validated::replaced(0, field, raw.to_owned(), InputIssueKind::NotANumber),
            |value| Self::count(field, value),
        )
    }

    /// Rep or second count from a number; fractions round to the nearest whole
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: range checked above
    pub fn count(field: &str, value: f64) -> Validated<u32> {
        if !value.is_finite() {
            return Validated::replaced(0, field, value.to_string(), InputIssueKind::NotFinite);
        }
        if value < 0.0 {
            return Validated::replaced(0, field, value.to_string(), InputIssueKind::Negative);
        }
        if value > f64::from(u32::MAX) {
            return Validated::replaced(
                u32::MAX,
                field,
                value.to_string(),
                InputIssueKind::AboveMaximum,
            );
        }
        Validated::ok(value.round() as u32)
    }

    /// Reps for every set of an exercise
    #[must_use]
    pub fn counts(field: &str, raw: &[&str]) -> (Vec<u32>, Vec<InputIssue>) {
        let mut issues = Vec::new();
        let values = raw
            .iter()
            .map(|value| {
                let validated = Self::parse_count(field, value);
                issues.extend(validated.issue);
                validated.value
            })
            .collect();
        (values, issues)
    }

    /// RPE clamped to `0..=10`; non-finite input becomes 0
    #[must_use]
    pub fn rpe(value: f64) -> Validated<f64> {
        let field = "rpe";
        if !value.is_finite() {
            return Validated::replaced(0.0, field, value.to_string(), InputIssueKind::NotFinite);
        }
        if value < 0.0 {
            return Validated::replaced(0.0, field, value.to_string(), InputIssueKind::Negative);
        }
        if value > limits::MAX_RPE {
            return Validated::replaced(
                limits::MAX_RPE,
                field,
                value.to_string(),
                InputIssueKind::AboveMaximum,
            );
        }
        Validated::ok(value)
    }

    /// Feeling score clamped to `0..=5`
    #[must_use]
    pub fn feeling(value: i64) -> Validated<u8> {
        let field = "feeling";
        if value < 0 {
            return Validated::replaced(0, field, value.to_string(), InputIssueKind::Negative);
        }
        match u8::try_from(value) {
            Ok(score) if score <= limits::MAX_FEELING => Validated::ok(score),
            _ => Validated::replaced(
                limits::MAX_FEELING,
                field,
                value.to_string(),
                InputIssueKind::AboveMaximum,
            ),
        }
    }
}
