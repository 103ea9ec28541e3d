// ABOUTME: Batch input parsing and per-item result rendering for recommendation requests
// ABOUTME: Accepts a JSON array or JSON-lines document and renders results as JSON values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::models::Recommendation;

/// Parse a batch document into individual request payloads
///
/// A document whose first non-blank character is `[` is read as one JSON
/// array; anything else is read as JSON lines, skipping blank lines.
///
/// # Errors
///
/// Returns `INVALID_INPUT` naming the offending line if any JSON is malformed
pub fn parse_batch(contents: &str) -> AppResult<Vec<Value>> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents)
            .map_err(|e| AppError::invalid_input(format!("Invalid JSON array: {e}")));
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                AppError::invalid_input(format!("Invalid JSON on line {}: {e}", index + 1))
            })
        })
        .collect()
}

/// Read and parse a batch file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents do not parse
pub fn read_batch_file(path: &Path) -> AppResult<Vec<Value>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    parse_batch(&contents)
}

/// Render one result as JSON: the recommendation, or an error body
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` if serialization fails
pub fn render_result(result: &AppResult<Recommendation>) -> AppResult<Value> {
    let value = match result {
        Ok(recommendation) => serde_json::to_value(recommendation)?,
        Err(error) => serde_json::to_value(ErrorResponse::from(error))?,
    };
    Ok(value)
}
