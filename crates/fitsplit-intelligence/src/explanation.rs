// ABOUTME: Natural-language explanation of a recommended training split
// ABOUTME: Goal display text, split percentages, goal rationale, and volume context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Explanation Generator
//!
//! The text is composed in a fixed order: the goal and weekly minutes, the
//! four percentages, a goal-specific rationale, then an optional clause for
//! low or high weekly volume. Volume bands come from [`TrainingVolume`], the
//! same classification the split calculator uses.

use fitsplit_core::models::{Goal, Split, TrainingVolume};

/// Why the split favours what it does for a goal
#[must_use]
pub const fn goal_rationale(goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => {
            "Cardio is prioritized to maximize calorie burn and support your weight loss goals."
        }
        Goal::MuscleGain => {
            "Strength training is emphasized to build muscle mass and increase strength."
        }
        Goal::Endurance => {
            "Cardio is the focus to improve your cardiovascular endurance and stamina."
        }
        Goal::GeneralFitness => {
            "This balanced approach helps you build overall fitness across all areas."
        }
    }
}

/// Trailing clause describing the weekly volume, empty for moderate volume
#[must_use]
pub const fn volume_context(volume: TrainingVolume) -> &'static str {
    match volume {
        TrainingVolume::Low => " With limited time, we've optimized for efficiency.",
        TrainingVolume::High => {
            " With plenty of time available, we've included more rest and flexibility work for recovery."
        }
        TrainingVolume::Moderate => "",
    }
}

/// Build the explanation for a computed split
#[must_use]
pub fn generate_explanation(goal: Goal, weekly_minutes: i64, split: &Split) -> String {
    let mut explanation = format!(
        "Based on your goal of {} and {weekly_minutes} minutes per week, \
         we recommend {}% cardio, {}% strength training, {}% flexibility work, and {}% rest. ",
        goal.display_name(),
        split.cardio,
        split.strength,
        split.flexibility,
        split.rest
    );
    explanation.push_str(goal_rationale(goal));
    explanation.push_str(volume_context(TrainingVolume::from_weekly_minutes(
        weekly_minutes,
    )));
    explanation
}

/// Build the explanation from a goal key; unknown keys read as general fitness
#[must_use]
pub fn generate_explanation_for_goal(goal: &str, weekly_minutes: i64, split: &Split) -> String {
    generate_explanation(Goal::from_str_or_default(goal), weekly_minutes, split)
}
