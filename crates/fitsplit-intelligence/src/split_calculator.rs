// ABOUTME: Rule-based weekly training split calculator
// ABOUTME: Goal base profiles, weekly-volume adjustment, and tie-broken renormalization to 100%
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Split Calculator Module
//!
//! Maps a training goal and the available weekly minutes onto four integer
//! percentages (cardio, strength, flexibility, rest) in three steps:
//!
//! 1. **Base profile** - a fixed row per goal, each summing to 100.
//! 2. **Volume adjustment** - below 150 min/week rest and flexibility give up
//!    5 points each (floored at 5 and 10) and cardio and strength gain 5 each;
//!    above 400 min/week rest and flexibility gain 5 (capped at 20 and 30)
//!    while cardio and strength lose 5 (floored at 20).
//! 3. **Renormalization** - any shortfall or excess against 100 is added to
//!    the single largest category, ties resolved cardio, then strength, then
//!    flexibility, then rest.
//!
//! The calculator is total: every goal and every integer minute count yields
//! a split, and nothing is clamped after renormalization.

use fitsplit_core::constants::split_bounds::{
    ADJUSTMENT_STEP, HIGH_VOLUME_CARDIO_FLOOR, HIGH_VOLUME_FLEXIBILITY_CEILING,
    HIGH_VOLUME_REST_CEILING, HIGH_VOLUME_STRENGTH_FLOOR, LOW_VOLUME_EXTRA,
    LOW_VOLUME_FLEXIBILITY_FLOOR, LOW_VOLUME_REST_FLOOR, TOTAL_PERCENT,
};
use fitsplit_core::models::{Goal, Split, TrainingVolume};
use tracing::debug;

/// Unadjusted split for a goal
///
/// | goal | cardio | strength | flexibility | rest |
/// |---|---|---|---|---|
/// | weight loss | 40 | 30 | 20 | 10 |
/// | muscle gain | 25 | 45 | 20 | 10 |
/// | endurance | 50 | 25 | 15 | 10 |
/// | general fitness | 30 | 30 | 25 | 15 |
#[must_use]
pub const fn base_profile(goal: Goal) -> Split {
    match goal {
        Goal::WeightLoss => Split::new(40, 30, 20, 10),
        Goal::MuscleGain => Split::new(25, 45, 20, 10),
        Goal::Endurance => Split::new(50, 25, 15, 10),
        Goal::GeneralFitness => Split::new(30, 30, 25, 15),
    }
}

/// Apply the low/high weekly-volume correction to a profile
///
/// The result may no longer sum to 100; see [`renormalize`].
#[must_use]
pub fn adjust_for_volume(profile: Split, weekly_minutes: i64) -> Split {
    let Split {
        mut cardio,
        mut strength,
        mut flexibility,
        mut rest,
    } = profile;

    match TrainingVolume::from_weekly_minutes(weekly_minutes) {
        TrainingVolume::Low => {
            rest = (rest - ADJUSTMENT_STEP).max(LOW_VOLUME_REST_FLOOR);
            flexibility = (flexibility - ADJUSTMENT_STEP).max(LOW_VOLUME_FLEXIBILITY_FLOOR);
            cardio += LOW_VOLUME_EXTRA / 2;
            strength += LOW_VOLUME_EXTRA / 2;
        }
        TrainingVolume::High => {
            rest = (rest + ADJUSTMENT_STEP).min(HIGH_VOLUME_REST_CEILING);
            flexibility = (flexibility + ADJUSTMENT_STEP).min(HIGH_VOLUME_FLEXIBILITY_CEILING);
            cardio = (cardio - ADJUSTMENT_STEP).max(HIGH_VOLUME_CARDIO_FLOOR);
            strength = (strength - ADJUSTMENT_STEP).max(HIGH_VOLUME_STRENGTH_FLOOR);
        }
        TrainingVolume::Moderate => {}
    }

    Split::new(cardio, strength, flexibility, rest)
}

/// Restore a split to a total of exactly 100
///
/// The whole difference goes to the largest category. Ties are resolved by
/// the fixed precedence cardio, strength, flexibility, rest; the chain below
/// must keep that order for reproducible output.
#[must_use]
pub fn renormalize(split: Split) -> Split {
    let diff = TOTAL_PERCENT - split.total();
    if diff == 0 {
        return split;
    }

    let Split {
        cardio,
        strength,
        flexibility,
        rest,
    } = split;
    let mut adjusted = split;

    if cardio >= strength && cardio >= flexibility && cardio >= rest {
        adjusted.cardio += diff;
    } else if strength >= flexibility && strength >= rest {
        adjusted.strength += diff;
    } else if flexibility >= rest {
        adjusted.flexibility += diff;
    } else {
        adjusted.rest += diff;
    }

    debug!(
        diff,
        before = ?split,
        after = ?adjusted,
        "Renormalized training split"
    );

    adjusted
}

/// Compute the weekly training split for a goal and weekly minutes
#[must_use]
pub fn calculate_split(goal: Goal, weekly_minutes: i64) -> Split {
    renormalize(adjust_for_volume(base_profile(goal), weekly_minutes))
}

/// Compute the split from a goal key, treating unknown keys as general fitness
#[must_use]
pub fn calculate_split_for_goal(goal: &str, weekly_minutes: i64) -> Split {
    calculate_split(Goal::from_str_or_default(goal), weekly_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_profiles_sum_to_100() {
        for goal in Goal::ALL {
            assert!(base_profile(goal).is_normalized(), "{goal} base profile");
        }
    }

    #[test]
    fn test_renormalize_leaves_complete_split_untouched() {
        let split = Split::new(45, 35, 15, 5);
        assert_eq!(renormalize(split), split);
    }

    #[test]
    fn test_renormalize_cardio_wins_ties() {
        // cardio ties strength at the top
        let split = renormalize(Split::new(30, 30, 20, 10));
        assert_eq!(split, Split::new(40, 30, 20, 10));
    }

    #[test]
    fn test_renormalize_strength_beats_flexibility_and_rest() {
        let split = renormalize(Split::new(10, 30, 30, 25));
        assert_eq!(split, Split::new(10, 35, 30, 25));
    }

    #[test]
    fn test_renormalize_flexibility_beats_rest_on_tie() {
        let split = renormalize(Split::new(10, 10, 45, 45));
        assert_eq!(split, Split::new(10, 10, 35, 45));
    }

    #[test]
    fn test_renormalize_rest_when_strictly_largest() {
        let split = renormalize(Split::new(5, 5, 5, 80));
        assert_eq!(split, Split::new(5, 5, 5, 85));
    }

    #[test]
    fn test_renormalize_is_not_clamped() {
        let split = renormalize(Split::new(0, 0, 0, 0));
        assert_eq!(split, Split::new(100, 0, 0, 0));
    }
}
