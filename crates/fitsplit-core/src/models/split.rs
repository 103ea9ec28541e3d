// ABOUTME: Weekly training split value type and training volume classification
// ABOUTME: Four integer percentages plus the low/moderate/high weekly-minutes bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::goal::ActivityCategory;
use crate::constants::split_bounds::TOTAL_PERCENT;
use crate::constants::volume::{HIGH_VOLUME_THRESHOLD_MINUTES, LOW_VOLUME_THRESHOLD_MINUTES};

/// Percentage allocation of weekly training time
///
/// A split produced by the calculator is normalized: every value is
/// non-negative and the four values sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Split {
    /// Cardio share in percent
    pub cardio: i32,
    /// Strength share in percent
    pub strength: i32,
    /// Flexibility share in percent
    pub flexibility: i32,
    /// Rest share in percent
    pub rest: i32,
}

impl Split {
    /// Build a split from its four shares
    #[must_use]
    pub const fn new(cardio: i32, strength: i32, flexibility: i32, rest: i32) -> Self {
        Self {
            cardio,
            strength,
            flexibility,
            rest,
        }
    }

    /// Sum of the four shares
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.cardio + self.strength + self.flexibility + self.rest
    }

    /// Whether all shares are non-negative and sum to 100
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        self.cardio >= 0
            && self.strength >= 0
            && self.flexibility >= 0
            && self.rest >= 0
            && self.total() == TOTAL_PERCENT
    }

    /// Share allotted to a category
    #[must_use]
    pub const fn share(&self, category: ActivityCategory) -> i32 {
        match category {
            ActivityCategory::Cardio => self.cardio,
            ActivityCategory::Strength => self.strength,
            ActivityCategory::Flexibility => self.flexibility,
            ActivityCategory::Rest => self.rest,
        }
    }
}

/// Weekly training volume band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingVolume {
    /// Fewer than 150 minutes per week
    Low,
    /// 150 to 400 minutes per week inclusive
    Moderate,
    /// More than 400 minutes per week
    High,
}

impl TrainingVolume {
    /// Classify weekly training minutes
    #[must_use]
    pub const fn from_weekly_minutes(weekly_minutes: i64) -> Self {
        if weekly_minutes < LOW_VOLUME_THRESHOLD_MINUTES {
            Self::Low
        } else if weekly_minutes > HIGH_VOLUME_THRESHOLD_MINUTES {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_thresholds_are_exclusive() {
        assert_eq!(TrainingVolume::from_weekly_minutes(149), TrainingVolume::Low);
        assert_eq!(TrainingVolume::from_weekly_minutes(150), TrainingVolume::Moderate);
        assert_eq!(TrainingVolume::from_weekly_minutes(400), TrainingVolume::Moderate);
        assert_eq!(TrainingVolume::from_weekly_minutes(401), TrainingVolume::High);
        assert_eq!(TrainingVolume::from_weekly_minutes(-30), TrainingVolume::Low);
    }

    #[test]
    fn test_normalization_check() {
        assert!(Split::new(30, 30, 25, 15).is_normalized());
        assert!(!Split::new(30, 30, 25, 10).is_normalized());
        assert!(!Split::new(110, 0, 0, -10).is_normalized());
        assert_eq!(Split::new(45, 35, 15, 5).share(ActivityCategory::Strength), 35);
    }
}
