// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single recommendation command for fitsplit-cli
// ABOUTME: Passes raw flag values through request validation and prints the result

use std::process::ExitCode;

use fitsplit::constants::request_fields::{AGE, GOAL, HEIGHT_CM, WEEKLY_MINUTES, WEIGHT_KG};
use fitsplit::errors::ErrorResponse;
use fitsplit::services::RecommendationService;
use serde_json::{Map, Value};

use crate::helpers::display::print_json;

/// Raw flag values, coerced by the same validation any other caller gets
pub struct RecommendArgs {
    pub age: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub goal: String,
    pub weekly_minutes: String,
}

impl RecommendArgs {
    fn to_body(&self) -> Value {
        let fields = [
            (AGE, &self.age),
            (HEIGHT_CM, &self.height_cm),
            (WEIGHT_KG, &self.weight_kg),
            (GOAL, &self.goal),
            (WEEKLY_MINUTES, &self.weekly_minutes),
        ];
        let body: Map<String, Value> = fields
            .into_iter()
            .map(|(key, value)| (key.to_owned(), Value::String(value.clone())))
            .collect();
        Value::Object(body)
    }
}

pub fn run(
    service: &RecommendationService,
    args: &RecommendArgs,
    pretty: bool,
) -> anyhow::Result<ExitCode> {
    match service.handle(&args.to_body()) {
        Ok(recommendation) => {
            print_json(&recommendation, pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            print_json(&ErrorResponse::from(&error), pretty)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
