// ABOUTME: Intelligence module configuration for the training split recommendation engine
// ABOUTME: Loads defaults, applies environment overrides, validates, and caches globally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is environment-only: defaults are compiled in, optional
//! `FITSPLIT_*` variables override them, and the result is validated before
//! use. [`IntelligenceConfig::global`] caches the loaded configuration for
//! the lifetime of the process.
//!
//! # Module Structure
//!
//! - `recommendation` - Activity suggestion counts and request limits
//! - `error` - Configuration validation errors

pub mod error;
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{ActivityCounts, RecommendationEngineConfig, RequestLimits};

use fitsplit_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the recommendation engine and its request boundary
    pub recommendation_engine: RecommendationEngineConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            activity_counts = ?config.recommendation_engine.activity_counts,
            "Intelligence configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a range is empty or an activity count is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.recommendation_engine.request_limits;

        if limits.min_age >= limits.max_age {
            return Err(ConfigError::InvalidRange("min_age must be < max_age"));
        }
        if limits.min_age < 0 {
            return Err(ConfigError::ValueOutOfRange("min_age must not be negative"));
        }
        if limits.min_height_cm.partial_cmp(&limits.max_height_cm) != Some(Ordering::Less) {
            return Err(ConfigError::InvalidRange(
                "min_height_cm must be < max_height_cm",
            ));
        }
        if limits.min_weight_kg.partial_cmp(&limits.max_weight_kg) != Some(Ordering::Less) {
            return Err(ConfigError::InvalidRange(
                "min_weight_kg must be < max_weight_kg",
            ));
        }
        if limits.min_weekly_minutes >= limits.max_weekly_minutes {
            return Err(ConfigError::InvalidRange(
                "min_weekly_minutes must be < max_weekly_minutes",
            ));
        }
        if limits.min_weekly_minutes < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_weekly_minutes must not be negative",
            ));
        }

        let counts = &self.recommendation_engine.activity_counts;
        if counts.cardio == 0 || counts.strength == 0 || counts.flexibility == 0 || counts.rest == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Activity counts must be at least 1",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let counts = &mut self.recommendation_engine.activity_counts;
        Self::apply_env_var(env_config::CARDIO_ACTIVITY_COUNT, &mut counts.cardio)?;
        Self::apply_env_var(env_config::STRENGTH_ACTIVITY_COUNT, &mut counts.strength)?;
        Self::apply_env_var(env_config::FLEXIBILITY_ACTIVITY_COUNT, &mut counts.flexibility)?;
        Self::apply_env_var(env_config::REST_ACTIVITY_COUNT, &mut counts.rest)?;

        let limits = &mut self.recommendation_engine.request_limits;
        Self::apply_env_var(env_config::MIN_AGE, &mut limits.min_age)?;
        Self::apply_env_var(env_config::MAX_AGE, &mut limits.max_age)?;
        Self::apply_env_var(env_config::MIN_HEIGHT_CM, &mut limits.min_height_cm)?;
        Self::apply_env_var(env_config::MAX_HEIGHT_CM, &mut limits.max_height_cm)?;
        Self::apply_env_var(env_config::MIN_WEIGHT_KG, &mut limits.min_weight_kg)?;
        Self::apply_env_var(env_config::MAX_WEIGHT_KG, &mut limits.max_weight_kg)?;
        Self::apply_env_var(env_config::MIN_WEEKLY_MINUTES, &mut limits.min_weekly_minutes)?;
        Self::apply_env_var(env_config::MAX_WEEKLY_MINUTES, &mut limits.max_weekly_minutes)?;

        Ok(self)
    }
}
