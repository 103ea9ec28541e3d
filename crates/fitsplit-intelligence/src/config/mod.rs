// ABOUTME: Configuration module for fitsplit-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (activity counts, request limits)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
