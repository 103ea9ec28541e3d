// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Batch command for fitsplit-cli
// ABOUTME: Evaluates a file of requests in parallel and prints results in input order

use std::path::Path;
use std::process::ExitCode;

use fitsplit::services::{read_batch_file, render_result, RecommendationService};
use tracing::info;

use crate::helpers::display::print_json;

pub fn run(service: &RecommendationService, path: &Path, pretty: bool) -> anyhow::Result<ExitCode> {
    let bodies = read_batch_file(path)?;
    let results = service.handle_batch(&bodies);

    let rejected = results.iter().filter(|r| r.is_err()).count();
    info!(
        total = results.len(),
        rejected,
        path = %path.display(),
        "Batch evaluated"
    );

    for result in &results {
        print_json(&render_result(result)?, pretty)?;
    }

    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
