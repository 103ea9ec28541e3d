// ABOUTME: Recommendation service joining request validation to the recommendation engine
// ABOUTME: Transport-agnostic entry point for single and parallel batch requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use super::request_validation::validate_request;
use crate::errors::AppResult;
use crate::intelligence::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use crate::intelligence::RecommendationEngine;
use crate::models::{Recommendation, RecommendationRequest};

/// Validates raw payloads and hands them to the recommendation engine
///
/// The service holds only read-only configuration and can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    engine: RecommendationEngine,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationService {
    /// Create a service using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().recommendation_engine.clone())
    }

    /// Create a service with explicit configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self {
            engine: RecommendationEngine::with_config(config),
        }
    }

    /// Underlying engine
    #[must_use]
    pub const fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Validate a raw payload against the configured request limits
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first failed check
    pub fn validate(&self, body: &Value) -> AppResult<RecommendationRequest> {
        validate_request(body, &self.engine.config().request_limits)
    }

    /// Build a recommendation for an already validated request
    #[must_use]
    pub fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        self.engine.recommend_for(request)
    }

    /// Validate a raw payload and build its recommendation
    ///
    /// # Errors
    ///
    /// Returns a validation error if the payload is rejected
    pub fn handle(&self, body: &Value) -> AppResult<Recommendation> {
        let request = self.validate(body).inspect_err(|e| {
            warn!(
                error.code = ?e.code,
                error.message = %e.message,
                "Rejected recommendation request"
            );
        })?;

        debug!(
            goal = %request.goal,
            weekly_minutes = request.weekly_minutes,
            "Accepted recommendation request"
        );

        Ok(self.recommend(&request))
    }

    /// Handle independent payloads in parallel, preserving input order
    #[must_use]
    pub fn handle_batch(&self, bodies: &[Value]) -> Vec<AppResult<Recommendation>> {
        bodies.par_iter().map(|body| self.handle(body)).collect()
    }
}
