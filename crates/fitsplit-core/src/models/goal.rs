// ABOUTME: Training goal and activity category enumerations
// ABOUTME: Closed enums with strict parsing plus an explicit fallback for unknown keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{categories, goals};
use crate::errors::AppError;

/// Training goal driving the base split profile
///
/// Strict parsing (`FromStr`) rejects unknown keys; the recommendation core
/// uses [`Goal::from_str_or_default`] instead, which treats anything
/// unrecognized as [`Goal::GeneralFitness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose body weight
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Improve cardiovascular endurance
    Endurance,
    /// Balanced overall fitness
    #[default]
    GeneralFitness,
}

impl Goal {
    /// All goals in declaration order
    pub const ALL: [Self; 4] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Endurance,
        Self::GeneralFitness,
    ];

    /// Parse from string with fallback to general fitness
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Wire key of this goal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => goals::WEIGHT_LOSS,
            Self::MuscleGain => goals::MUSCLE_GAIN,
            Self::Endurance => goals::ENDURANCE,
            Self::GeneralFitness => goals::GENERAL_FITNESS,
        }
    }

    /// Human-readable name used in explanations
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general fitness",
        }
    }
}

/// Error reported for a goal outside the four known keys
#[must_use]
pub fn invalid_goal_error() -> AppError {
    AppError::invalid_input(format!(
        "Invalid goal. Must be one of: {}",
        goals::ALL.join(", ")
    ))
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            goals::WEIGHT_LOSS => Ok(Self::WeightLoss),
            goals::MUSCLE_GAIN => Ok(Self::MuscleGain),
            goals::ENDURANCE => Ok(Self::Endurance),
            goals::GENERAL_FITNESS => Ok(Self::GeneralFitness),
            _ => Err(invalid_goal_error()),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of weekly training time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    /// Aerobic conditioning
    Cardio,
    /// Resistance training
    Strength,
    /// Mobility and stretching
    Flexibility,
    /// Recovery
    #[default]
    Rest,
}

impl ActivityCategory {
    /// All categories in split order
    pub const ALL: [Self; 4] = [Self::Cardio, Self::Strength, Self::Flexibility, Self::Rest];

    /// Parse from string with fallback to rest
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            categories::CARDIO => Self::Cardio,
            categories::STRENGTH => Self::Strength,
            categories::FLEXIBILITY => Self::Flexibility,
            _ => Self::Rest,
        }
    }

    /// Wire key of this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardio => categories::CARDIO,
            Self::Strength => categories::STRENGTH,
            Self::Flexibility => categories::FLEXIBILITY,
            Self::Rest => categories::REST,
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_parsing() {
        assert_eq!("weight_loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert_eq!("endurance".parse::<Goal>().unwrap(), Goal::Endurance);
        assert!("Weight_Loss".parse::<Goal>().is_err());
        assert_eq!(Goal::from_str_or_default("xyz"), Goal::GeneralFitness);
        assert_eq!(Goal::from_str_or_default("muscle_gain"), Goal::MuscleGain);
    }

    #[test]
    fn test_invalid_goal_message() {
        let err = "yoga".parse::<Goal>().unwrap_err();
        assert_eq!(
            err.message,
            "Invalid goal. Must be one of: weight_loss, muscle_gain, endurance, general_fitness"
        );
    }

    #[test]
    fn test_goal_round_trips_through_wire_key() {
        for goal in Goal::ALL {
            assert_eq!(goal.as_str().parse::<Goal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_category_fallback() {
        assert_eq!(ActivityCategory::from_str_or_default("cardio"), ActivityCategory::Cardio);
        assert_eq!(ActivityCategory::from_str_or_default("rest"), ActivityCategory::Rest);
        assert_eq!(ActivityCategory::from_str_or_default("napping"), ActivityCategory::Rest);
        assert_eq!(ActivityCategory::from_str_or_default(""), ActivityCategory::Rest);
    }
}
