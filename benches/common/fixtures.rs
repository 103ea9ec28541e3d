// ABOUTME: Deterministic request payload fixtures for benchmarks
// ABOUTME: Cycles through goals and weekly volumes, with a share of invalid requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitsplit::constants::goals;
use serde_json::{json, Value};

/// Batch sizes used across benchmark groups
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// 10 requests
    Small,
    /// 1,000 requests
    Medium,
    /// 10,000 requests
    Large,
}

impl BatchSize {
    /// Number of requests in the batch
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1_000,
            Self::Large => 10_000,
        }
    }
}

/// Generate request payloads; every tenth one fails range validation
pub fn generate_requests(count: usize) -> Vec<Value> {
    (0..count)
        .map(|index| {
            let age = if index % 10 == 9 { 5 } else { 18 + index % 60 };
            json!({
                "age": age,
                "height_cm": 150 + index % 50,
                "weight_kg": 50 + index % 70,
                "goal": goals::ALL[index % goals::ALL.len()],
                "weekly_minutes": 60 + (index * 37) % 940
            })
        })
        .collect()
}
