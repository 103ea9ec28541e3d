// ABOUTME: Recommendation engine configuration for activity suggestions and request limits
// ABOUTME: Configures suggestion counts per category and accepted input ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Only the surface of a recommendation is configurable: how many sample
//! activities are listed per category and which input ranges the request
//! boundary accepts. The split rule table itself is fixed.

use fitsplit_core::constants::{activity_counts, request_limits};
use fitsplit_core::models::ActivityCategory;
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Number of suggested activities per category
    pub activity_counts: ActivityCounts,
    /// Inclusive ranges accepted at the request boundary
    pub request_limits: RequestLimits,
}

/// Number of suggested activities listed per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounts {
    /// Cardio suggestions
    pub cardio: usize,
    /// Strength suggestions
    pub strength: usize,
    /// Flexibility suggestions
    pub flexibility: usize,
    /// Rest suggestions
    pub rest: usize,
}

impl ActivityCounts {
    /// Configured count for a category
    #[must_use]
    pub const fn for_category(&self, category: ActivityCategory) -> usize {
        match category {
            ActivityCategory::Cardio => self.cardio,
            ActivityCategory::Strength => self.strength,
            ActivityCategory::Flexibility => self.flexibility,
            ActivityCategory::Rest => self.rest,
        }
    }
}

/// Inclusive input ranges accepted at the request boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLimits {
    /// Youngest accepted age in years
    pub min_age: i64,
    /// Oldest accepted age in years
    pub max_age: i64,
    /// Shortest accepted height in centimeters
    pub min_height_cm: f64,
    /// Tallest accepted height in centimeters
    pub max_height_cm: f64,
    /// Lightest accepted weight in kilograms
    pub min_weight_kg: f64,
    /// Heaviest accepted weight in kilograms
    pub max_weight_kg: f64,
    /// Fewest accepted weekly training minutes
    pub min_weekly_minutes: i64,
    /// Most accepted weekly training minutes
    pub max_weekly_minutes: i64,
}

impl Default for ActivityCounts {
    fn default() -> Self {
        Self {
            cardio: activity_counts::CARDIO,
            strength: activity_counts::STRENGTH,
            flexibility: activity_counts::FLEXIBILITY,
            rest: activity_counts::REST,
        }
    }
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            min_age: request_limits::MIN_AGE,
            max_age: request_limits::MAX_AGE,
            min_height_cm: request_limits::MIN_HEIGHT_CM,
            max_height_cm: request_limits::MAX_HEIGHT_CM,
            min_weight_kg: request_limits::MIN_WEIGHT_KG,
            max_weight_kg: request_limits::MAX_WEIGHT_KG,
            min_weekly_minutes: request_limits::MIN_WEEKLY_MINUTES,
            max_weekly_minutes: request_limits::MAX_WEEKLY_MINUTES,
        }
    }
}
