// ABOUTME: Core types and constants for the fitsplit weekly training split planner
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitsplit Core
//!
//! Foundation crate providing shared types and constants for the training
//! split planner. It carries no logic beyond small helpers on the value
//! types, so it changes rarely and keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Rule-table constants, request limits, and env var names
//! - **models**: `Goal`, `ActivityCategory`, `Split`, and recommendation records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
