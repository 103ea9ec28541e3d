// ABOUTME: Tests for activity catalogs and prefix selection
// ABOUTME: Covers fixed ordering, oversized counts, and unknown category fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitsplit::intelligence::activity_catalog::REST_ACTIVITIES;
use fitsplit::intelligence::config::intelligence::ActivityCounts;
use fitsplit::intelligence::recommendation_engine::suggest_activities;
use fitsplit::intelligence::{catalog, select_activities, select_activities_for};
use fitsplit::models::ActivityCategory;

#[test]
fn test_selection_is_catalog_prefix() {
    assert_eq!(
        select_activities(ActivityCategory::Cardio, 3),
        ["Running", "Cycling", "Swimming"]
    );
    assert_eq!(
        select_activities(ActivityCategory::Strength, 3),
        ["Weight Lifting", "Bodyweight Exercises", "Resistance Bands"]
    );
    assert_eq!(
        select_activities(ActivityCategory::Flexibility, 3),
        ["Yoga", "Stretching", "Pilates"]
    );
    assert_eq!(
        select_activities(ActivityCategory::Rest, 2),
        ["Active Recovery", "Light Walking"]
    );
}

#[test]
fn test_oversized_count_returns_full_catalog() {
    for category in ActivityCategory::ALL {
        let full = catalog(category);
        assert_eq!(select_activities(category, full.len() + 10), full);
        assert_eq!(select_activities(category, usize::MAX), full);
    }
}

#[test]
fn test_zero_count_is_empty() {
    assert!(select_activities(ActivityCategory::Cardio, 0).is_empty());
}

#[test]
fn test_catalog_sizes() {
    assert_eq!(catalog(ActivityCategory::Cardio).len(), 8);
    assert_eq!(catalog(ActivityCategory::Strength).len(), 8);
    assert_eq!(catalog(ActivityCategory::Flexibility).len(), 7);
    assert_eq!(catalog(ActivityCategory::Rest).len(), 5);
}

#[test]
fn test_unknown_category_falls_back_to_rest() {
    assert_eq!(select_activities_for("swimming", 10), REST_ACTIVITIES);
    assert_eq!(select_activities_for("Cardio", 1), ["Active Recovery"]);
    assert_eq!(select_activities_for("cardio", 1), ["Running"]);
}

#[test]
fn test_default_suggestions_per_category() {
    let suggestions = suggest_activities(&ActivityCounts::default());
    assert_eq!(suggestions.cardio.len(), 3);
    assert_eq!(suggestions.strength.len(), 3);
    assert_eq!(suggestions.flexibility.len(), 3);
    assert_eq!(suggestions.rest, ["Active Recovery", "Light Walking"]);
    assert_eq!(
        suggestions.for_category(ActivityCategory::Strength),
        ["Weight Lifting", "Bodyweight Exercises", "Resistance Bands"]
    );
}
