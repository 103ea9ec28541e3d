// ABOUTME: fitsplit-cli - command-line front end for the weekly training split planner
// ABOUTME: Runs single and batch recommendations and prints the activity catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recommend a weekly split
//! fitsplit-cli recommend --age 30 --height-cm 175 --weight-kg 80 \
//!     --goal weight_loss --weekly-minutes 200 --pretty
//!
//! # Evaluate a JSON array or JSON-lines file, one result per line
//! fitsplit-cli batch requests.jsonl
//!
//! # Print the strength catalog
//! fitsplit-cli catalog --category strength
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fitsplit::logging::LoggingConfig;
use fitsplit::services::RecommendationService;
use tracing::{debug, error};

use commands::recommend::RecommendArgs;

#[derive(Parser)]
#[command(
    name = "fitsplit-cli",
    version,
    about = "Weekly training split planner",
    long_about = "Recommends a weekly split across cardio, strength, flexibility, and rest from a short fitness profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend a weekly split for one profile
    Recommend {
        /// Age in years (13-100)
        #[arg(long, allow_hyphen_values = true)]
        age: String,

        /// Height in centimeters (100-250)
        #[arg(long, allow_hyphen_values = true)]
        height_cm: String,

        /// Weight in kilograms (30-300)
        #[arg(long, allow_hyphen_values = true)]
        weight_kg: String,

        /// Goal: `weight_loss`, `muscle_gain`, `endurance`, or `general_fitness`
        #[arg(long)]
        goal: String,

        /// Planned training minutes per week (60-1000)
        #[arg(long, allow_hyphen_values = true)]
        weekly_minutes: String,
    },

    /// Recommend splits for every request in a JSON array or JSON-lines file
    Batch {
        /// Path to the batch file
        path: PathBuf,
    },

    /// Print the activity catalogs
    Catalog {
        /// Category to print (unknown names fall back to rest)
        #[arg(long)]
        category: Option<String>,

        /// Number of activities to print per category
        #[arg(long)]
        count: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("fitsplit-cli failed: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let pretty = cli.pretty;

    match cli.command {
        Command::Recommend {
            age,
            height_cm,
            weight_kg,
            goal,
            weekly_minutes,
        } => {
            debug!("Running single recommendation");
            let args = RecommendArgs {
                age,
                height_cm,
                weight_kg,
                goal,
                weekly_minutes,
            };
            commands::recommend::run(&RecommendationService::new(), &args, pretty)
        }
        Command::Batch { path } => {
            commands::batch::run(&RecommendationService::new(), &path, pretty)
        }
        Command::Catalog { category, count } => {
            commands::catalog::run(category.as_deref(), count, pretty)
        }
    }
}
