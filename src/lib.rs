// ABOUTME: Main library entry point for the fitsplit weekly training split planner
// ABOUTME: Wires the domain crates to request validation, batch handling, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitsplit
//!
//! Turns a short fitness profile (age, height, weight, goal, weekly minutes)
//! into a weekly training split across cardio, strength, flexibility, and
//! rest, with a short list of activities per category and a plain-language
//! explanation.
//!
//! ## Architecture
//!
//! - **`fitsplit-core`**: errors, constants, and domain models
//! - **`fitsplit-intelligence`**: split calculator, activity catalog,
//!   explanation generator, engine configuration
//! - **services** (this crate): untyped request validation plus single and
//!   batch handling
//! - **logging** (this crate): subscriber setup for binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use fitsplit::services::RecommendationService;
//! use serde_json::json;
//!
//! let service = RecommendationService::new();
//! let recommendation = service
//!     .handle(&json!({
//!         "age": 30,
//!         "height_cm": 175,
//!         "weight_kg": 80,
//!         "goal": "weight_loss",
//!         "weekly_minutes": 200
//!     }))
//!     .unwrap();
//! assert_eq!(recommendation.split.cardio, 45);
//! ```

pub use fitsplit_core::{constants, errors, models};
pub use fitsplit_intelligence as intelligence;

/// Structured logging configuration
pub mod logging;

/// Request validation and recommendation services
pub mod services;
