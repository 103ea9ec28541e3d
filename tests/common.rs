// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and request payload builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitsplit`

use std::env;
use std::sync::Once;

use fitsplit::intelligence::config::intelligence::RecommendationEngineConfig;
use fitsplit::services::RecommendationService;
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary thread may already have installed one
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Service with default limits and counts, independent of the environment
pub fn create_test_service() -> RecommendationService {
    init_test_logging();
    RecommendationService::with_config(RecommendationEngineConfig::default())
}

/// A request payload that passes every check
pub fn valid_body() -> Value {
    json!({
        "age": 30,
        "height_cm": 175,
        "weight_kg": 80,
        "goal": "weight_loss",
        "weekly_minutes": 200
    })
}

/// `valid_body` with one field replaced
pub fn body_with(field: &str, value: Value) -> Value {
    let mut body = valid_body();
    body[field] = value;
    body
}

/// `valid_body` with one field removed
pub fn body_without(field: &str) -> Value {
    let mut body = valid_body();
    if let Some(fields) = body.as_object_mut() {
        fields.remove(field);
    }
    body
}
