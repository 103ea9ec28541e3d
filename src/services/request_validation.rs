// ABOUTME: Request boundary validation for untyped recommendation payloads
// ABOUTME: Field presence, numeric coercion, and inclusive range checks in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Checks run in three passes so the first failure reported is stable:
//!
//! 1. every required field is present (`age`, `height_cm`, `weight_kg`,
//!    `goal`, `weekly_minutes`);
//! 2. the numeric fields coerce to numbers (JSON numbers or numeric strings);
//! 3. each value lies in its configured inclusive range, then the goal is
//!    one of the four known keys.

use serde_json::{Map, Value};

use crate::constants::request_fields::{AGE, GOAL, HEIGHT_CM, REQUIRED, WEEKLY_MINUTES, WEIGHT_KG};
use crate::errors::{AppError, AppResult};
use crate::intelligence::config::intelligence::RequestLimits;
use crate::models::{invalid_goal_error, Goal, RecommendationRequest};

/// Validate an untyped payload into a [`RecommendationRequest`]
///
/// # Errors
///
/// Returns the first failed check:
/// - `INVALID_INPUT` if the body is not an object or the goal is unknown
/// - `MISSING_REQUIRED_FIELD` if a field is absent
/// - `INVALID_FORMAT` if a numeric field cannot be coerced
/// - `VALUE_OUT_OF_RANGE` if a value is outside `limits`
pub fn validate_request(body: &Value, limits: &RequestLimits) -> AppResult<RecommendationRequest> {
    let fields = body
        .as_object()
        .ok_or_else(|| AppError::invalid_input("Request body must be a JSON object"))?;

    for field in REQUIRED {
        required_field(fields, field)?;
    }

    let age = coerce_integer(fields, AGE)?;
    let height_cm = coerce_real(fields, HEIGHT_CM)?;
    let weight_kg = coerce_real(fields, WEIGHT_KG)?;
    let weekly_minutes = coerce_integer(fields, WEEKLY_MINUTES)?;

    if !(limits.min_age..=limits.max_age).contains(&age) {
        return Err(AppError::out_of_range(format!(
            "Age must be between {} and {}",
            limits.min_age, limits.max_age
        )));
    }
    if !(limits.min_height_cm..=limits.max_height_cm).contains(&height_cm) {
        return Err(AppError::out_of_range(format!(
            "Height must be between {} and {} cm",
            limits.min_height_cm, limits.max_height_cm
        )));
    }
    if !(limits.min_weight_kg..=limits.max_weight_kg).contains(&weight_kg) {
        return Err(AppError::out_of_range(format!(
            "Weight must be between {} and {} kg",
            limits.min_weight_kg, limits.max_weight_kg
        )));
    }

    let goal = match required_field(fields, GOAL)? {
        Value::String(goal) => goal.parse::<Goal>()?,
        _ => return Err(invalid_goal_error()),
    };

    if !(limits.min_weekly_minutes..=limits.max_weekly_minutes).contains(&weekly_minutes) {
        return Err(AppError::out_of_range(format!(
            "Weekly minutes must be between {} and {}",
            limits.min_weekly_minutes, limits.max_weekly_minutes
        )));
    }

    Ok(RecommendationRequest {
        age: u32::try_from(age)
            .map_err(|_| AppError::out_of_range(format!("Age {age} does not fit in u32")))?,
        height_cm,
        weight_kg,
        goal,
        weekly_minutes: u32::try_from(weekly_minutes).map_err(|_| {
            AppError::out_of_range(format!("Weekly minutes {weekly_minutes} does not fit in u32"))
        })?,
    })
}

fn required_field<'a>(fields: &'a Map<String, Value>, field: &str) -> AppResult<&'a Value> {
    fields
        .get(field)
        .ok_or_else(|| AppError::missing_field(field))
}

/// Coerce an integer field; fractional numbers truncate toward zero
fn coerce_integer(fields: &Map<String, Value>, field: &str) -> AppResult<i64> {
    let value = required_field(fields, field)?;
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| not_a_number(field, value))
}

fn coerce_real(fields: &Map<String, Value>, field: &str) -> AppResult<f64> {
    let value = required_field(fields, field)?;
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| not_a_number(field, value))
}

fn not_a_number(field: &str, value: &Value) -> AppError {
    AppError::invalid_format(format!("{field} must be a number, got {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    fn fields(value: &Value) -> &Map<String, Value> {
        value.as_object().unwrap()
    }

    #[test]
    fn test_integer_coercion_accepts_strings_and_truncates_floats() {
        let body = json!({ "a": "42", "b": " 7 ", "c": 30.9, "d": -2.5, "e": 12 });
        let map = fields(&body);
        assert_eq!(coerce_integer(map, "a").unwrap(), 42);
        assert_eq!(coerce_integer(map, "b").unwrap(), 7);
        assert_eq!(coerce_integer(map, "c").unwrap(), 30);
        assert_eq!(coerce_integer(map, "d").unwrap(), -2);
        assert_eq!(coerce_integer(map, "e").unwrap(), 12);
    }

    #[test]
    fn test_integer_coercion_rejects_decimal_strings_and_other_types() {
        let body = json!({ "a": "30.5", "b": true, "c": null, "d": [1] });
        let map = fields(&body);
        for field in ["a", "b", "c", "d"] {
            let err = coerce_integer(map, field).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat, "{field}");
        }
    }

    #[test]
    fn test_real_coercion() {
        let body = json!({ "a": "175.5", "b": 80, "c": "NaN", "d": "tall" });
        let map = fields(&body);
        assert!((coerce_real(map, "a").unwrap() - 175.5).abs() < f64::EPSILON);
        assert!((coerce_real(map, "b").unwrap() - 80.0).abs() < f64::EPSILON);
        assert!(coerce_real(map, "c").is_err());
        assert!(coerce_real(map, "d").is_err());
    }
}
