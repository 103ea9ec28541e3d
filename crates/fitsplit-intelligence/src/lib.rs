// ABOUTME: Weekly training split engine for the fitsplit planner
// ABOUTME: Split calculator, activity catalogs, explanation text, and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitsplit Intelligence
//!
//! Deterministic, rule-based recommendation core. Every public operation is
//! pure and total: unknown goals fall back to general fitness, unknown
//! categories fall back to rest, and any integer number of weekly minutes
//! produces a split summing to 100.

/// Fixed activity catalogs and prefix selection
pub mod activity_catalog;
/// Environment-overridable engine configuration
pub mod config;
/// Natural-language explanation of a split
pub mod explanation;
/// Engine composing split, activities, and explanation
pub mod recommendation_engine;
/// Goal and volume driven split calculation
pub mod split_calculator;

pub use activity_catalog::{catalog, select_activities, select_activities_for};
pub use config::IntelligenceConfig;
pub use explanation::{generate_explanation, generate_explanation_for_goal};
pub use recommendation_engine::RecommendationEngine;
pub use split_calculator::{calculate_split, calculate_split_for_goal};
