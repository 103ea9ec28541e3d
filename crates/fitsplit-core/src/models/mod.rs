// ABOUTME: Domain models for the training split planner
// ABOUTME: Re-exports goals, categories, splits, and recommendation records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training goals and activity categories
pub mod goal;
/// Request and response records
pub mod recommendation;
/// Percentage split and volume bands
pub mod split;

pub use goal::{invalid_goal_error, ActivityCategory, Goal};
pub use recommendation::{ActivitySuggestions, Recommendation, RecommendationRequest};
pub use split::{Split, TrainingVolume};
