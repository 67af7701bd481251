// ABOUTME: Re-exports unified error types from pierre-progression-core
// ABOUTME: Keeps `crate::errors` paths stable for the engine modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error handling re-exported from `pierre_progression_core::errors`

pub use pierre_progression_core::errors::*;
