// ABOUTME: Request and response records exchanged with the recommendation core
// ABOUTME: Validated user inputs in, split plus activity suggestions plus explanation out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::goal::{ActivityCategory, Goal};
use super::split::Split;

/// Validated inputs for a single recommendation
///
/// Only `goal` and `weekly_minutes` influence the result; the body
/// measurements are carried so the boundary can range-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Training goal
    pub goal: Goal,
    /// Available training minutes per week
    pub weekly_minutes: u32,
}

/// Suggested activities per category, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivitySuggestions {
    /// Cardio suggestions
    pub cardio: Vec<String>,
    /// Strength suggestions
    pub strength: Vec<String>,
    /// Flexibility suggestions
    pub flexibility: Vec<String>,
    /// Rest suggestions
    pub rest: Vec<String>,
}

impl ActivitySuggestions {
    /// Suggestions for a category
    #[must_use]
    pub fn for_category(&self, category: ActivityCategory) -> &[String] {
        match category {
            ActivityCategory::Cardio => &self.cardio,
            ActivityCategory::Strength => &self.strength,
            ActivityCategory::Flexibility => &self.flexibility,
            ActivityCategory::Rest => &self.rest,
        }
    }
}

/// Complete recommendation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Percentage split across categories
    pub split: Split,
    /// Sample activities per category
    pub activities: ActivitySuggestions,
    /// Natural-language explanation of the split
    pub explanation: String,
}
