// ABOUTME: Recommendation engine composing split, activity suggestions, and explanation
// ABOUTME: Produces the complete per-request recommendation payload from goal and weekly minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training split recommendation engine

use fitsplit_core::models::{
    ActivityCategory, ActivitySuggestions, Goal, Recommendation, RecommendationRequest,
};
use tracing::debug;

use crate::activity_catalog::select_owned;
use crate::config::intelligence::{
    ActivityCounts, IntelligenceConfig, RecommendationEngineConfig,
};
use crate::explanation::generate_explanation;
use crate::split_calculator::calculate_split;

/// Stateless recommendation engine
///
/// Holds only read-only configuration, so a single engine can serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        let global_config = IntelligenceConfig::global();
        Self {
            config: global_config.recommendation_engine.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Build a recommendation for a goal and weekly training minutes
    #[must_use]
    pub fn recommend(&self, goal: Goal, weekly_minutes: i64) -> Recommendation {
        let split = calculate_split(goal, weekly_minutes);
        let activities = suggest_activities(&self.config.activity_counts);
        let explanation = generate_explanation(goal, weekly_minutes, &split);

        debug!(
            goal = %goal,
            weekly_minutes,
            cardio = split.cardio,
            strength = split.strength,
            flexibility = split.flexibility,
            rest = split.rest,
            "Generated training split recommendation"
        );

        Recommendation {
            split,
            activities,
            explanation,
        }
    }

    /// Build a recommendation for a validated request
    #[must_use]
    pub fn recommend_for(&self, request: &RecommendationRequest) -> Recommendation {
        self.recommend(request.goal, i64::from(request.weekly_minutes))
    }
}

/// Select the configured number of activities from every category
#[must_use]
pub fn suggest_activities(counts: &ActivityCounts) -> ActivitySuggestions {
    ActivitySuggestions {
        cardio: select_owned(
            ActivityCategory::Cardio,
            counts.for_category(ActivityCategory::Cardio),
        ),
        strength: select_owned(
            ActivityCategory::Strength,
            counts.for_category(ActivityCategory::Strength),
        ),
        flexibility: select_owned(
            ActivityCategory::Flexibility,
            counts.for_category(ActivityCategory::Flexibility),
        ),
        rest: select_owned(
            ActivityCategory::Rest,
            counts.for_category(ActivityCategory::Rest),
        ),
    }
}
