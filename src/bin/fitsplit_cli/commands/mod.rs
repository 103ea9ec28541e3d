// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fitsplit-cli
// ABOUTME: Provides single recommendation, batch, and catalog commands

pub mod batch;
pub mod catalog;
pub mod recommend;
