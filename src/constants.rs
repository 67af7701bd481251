// ABOUTME: Re-exports domain constants from pierre-progression-core
// ABOUTME: Exercise weights, baselines, feature keys, and calibration bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_progression_core::constants::*;
