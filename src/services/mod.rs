// ABOUTME: Domain service layer between callers and the recommendation engine
// ABOUTME: Provides transport-agnostic validation, single, and batch recommendation handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Any caller (the CLI today, an HTTP or message handler tomorrow) hands raw
//! JSON payloads to these services and gets back either a recommendation or
//! an [`AppError`](crate::errors::AppError) with a stable code.

/// Batch document parsing and result rendering
pub mod batch;

/// Recommendation service: validation plus engine
pub mod recommendation;

/// Field presence, coercion, and range validation
pub mod request_validation;

pub use batch::{parse_batch, read_batch_file, render_result};
pub use recommendation::RecommendationService;
pub use request_validation::validate_request;
