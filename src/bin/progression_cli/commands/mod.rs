// ABOUTME: Command implementations for progression-cli
// ABOUTME: User management and workout pipeline commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod user;
pub mod workout;
