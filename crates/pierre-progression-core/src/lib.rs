// ABOUTME: Core types and constants for the Pierre progression engine
// ABOUTME: Foundation crate with error handling, workout models, and tuning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Progression Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! progression engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Exercise weights, default baselines, and window sizes
//! - **models**: Session records, feature sets, recommendations, and targets

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (sessions, features, recommendations, targets)
pub mod models;
