// ABOUTME: Fixed catalogs of sample activities per training category
// ABOUTME: Deterministic prefix selection with slice semantics for oversized counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity catalogs are compiled-in and read-only, so they can be shared
//! across threads without synchronization.

use fitsplit_core::models::ActivityCategory;

/// Cardio activities in suggestion order
pub const CARDIO_ACTIVITIES: &[&str] = &[
    "Running",
    "Cycling",
    "Swimming",
    "Jump Rope",
    "HIIT",
    "Dancing",
    "Rowing",
    "Elliptical",
];

/// Strength activities in suggestion order
pub const STRENGTH_ACTIVITIES: &[&str] = &[
    "Weight Lifting",
    "Bodyweight Exercises",
    "Resistance Bands",
    "Kettlebell Training",
    "Calisthenics",
    "Pilates",
    "CrossFit",
    "Powerlifting",
];

/// Flexibility activities in suggestion order
pub const FLEXIBILITY_ACTIVITIES: &[&str] = &[
    "Yoga",
    "Stretching",
    "Pilates",
    "Tai Chi",
    "Mobility Work",
    "Foam Rolling",
    "Dynamic Warm-ups",
];

/// Rest and recovery activities in suggestion order
pub const REST_ACTIVITIES: &[&str] = &[
    "Active Recovery",
    "Light Walking",
    "Meditation",
    "Sleep",
    "Hydration",
];

/// Full catalog for a category
#[must_use]
pub const fn catalog(category: ActivityCategory) -> &'static [&'static str] {
    match category {
        ActivityCategory::Cardio => CARDIO_ACTIVITIES,
        ActivityCategory::Strength => STRENGTH_ACTIVITIES,
        ActivityCategory::Flexibility => FLEXIBILITY_ACTIVITIES,
        ActivityCategory::Rest => REST_ACTIVITIES,
    }
}

/// First `count` activities of a category's catalog
///
/// A count beyond the catalog length returns the whole catalog.
#[must_use]
pub fn select_activities(category: ActivityCategory, count: usize) -> &'static [&'static str] {
    let activities = catalog(category);
    &activities[..count.min(activities.len())]
}

/// Select activities by category key; unknown keys use the rest catalog
#[must_use]
pub fn select_activities_for(category: &str, count: usize) -> &'static [&'static str] {
    select_activities(ActivityCategory::from_str_or_default(category), count)
}

/// Owned copy of a selection, as stored in a recommendation
#[must_use]
pub fn select_owned(category: ActivityCategory, count: usize) -> Vec<String> {
    select_activities(category, count)
        .iter()
        .map(|&name| name.to_owned())
        .collect()
}
