// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Catalog command for fitsplit-cli
// ABOUTME: Prints one or all activity catalogs as JSON

use std::process::ExitCode;

use fitsplit::intelligence::{catalog, select_activities};
use fitsplit::models::ActivityCategory;
use serde_json::{Map, Value};

use crate::helpers::display::print_json;

pub fn run(category: Option<&str>, count: Option<usize>, pretty: bool) -> anyhow::Result<ExitCode> {
    let categories = category.map_or_else(
        || ActivityCategory::ALL.to_vec(),
        |name| vec![ActivityCategory::from_str_or_default(name)],
    );

    let mut output = Map::new();
    for category in categories {
        let activities = count.map_or_else(
            || catalog(category),
            |count| select_activities(category, count),
        );
        output.insert(category.as_str().to_owned(), Value::from(activities.to_vec()));
    }

    print_json(&output, pretty)?;
    Ok(ExitCode::SUCCESS)
}
