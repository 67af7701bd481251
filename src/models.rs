// ABOUTME: Re-exports domain models from pierre-progression-core
// ABOUTME: Sessions, users, features, recommendations, and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models shared by every engine module

pub use pierre_progression_core::models::*;
