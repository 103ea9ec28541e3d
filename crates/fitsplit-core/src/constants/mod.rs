// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Goal keys, volume thresholds, split bounds, request limits, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. The split bounds are fixed rule-table values and are
//! deliberately not part of the runtime configuration.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the command-line tool
    pub const FITSPLIT_CLI: &str = "fitsplit-cli";
}

/// Wire keys for training goals
pub mod goals {
    /// Weight loss goal key
    pub const WEIGHT_LOSS: &str = "weight_loss";
    /// Muscle gain goal key
    pub const MUSCLE_GAIN: &str = "muscle_gain";
    /// Endurance goal key
    pub const ENDURANCE: &str = "endurance";
    /// General fitness goal key
    pub const GENERAL_FITNESS: &str = "general_fitness";

    /// Every accepted goal key, in the order reported by validation errors
    pub const ALL: [&str; 4] = [WEIGHT_LOSS, MUSCLE_GAIN, ENDURANCE, GENERAL_FITNESS];
}

/// Wire keys for activity categories
pub mod categories {
    /// Cardio category key
    pub const CARDIO: &str = "cardio";
    /// Strength category key
    pub const STRENGTH: &str = "strength";
    /// Flexibility category key
    pub const FLEXIBILITY: &str = "flexibility";
    /// Rest category key
    pub const REST: &str = "rest";
}

/// Weekly training volume thresholds shared by the split calculator and the explanation text
pub mod volume {
    /// Weekly minutes strictly below this value are low volume
    pub const LOW_VOLUME_THRESHOLD_MINUTES: i64 = 150;
    /// Weekly minutes strictly above this value are high volume
    pub const HIGH_VOLUME_THRESHOLD_MINUTES: i64 = 400;
}

/// Fixed bounds and step sizes of the volume adjustment
pub mod split_bounds {
    /// Percentage total every split is renormalized to
    pub const TOTAL_PERCENT: i32 = 100;
    /// Amount shifted by each volume adjustment step
    pub const ADJUSTMENT_STEP: i32 = 5;
    /// Extra share redistributed to cardio and strength at low volume
    pub const LOW_VOLUME_EXTRA: i32 = 10;
    /// Rest never drops below this at low volume
    pub const LOW_VOLUME_REST_FLOOR: i32 = 5;
    /// Flexibility never drops below this at low volume
    pub const LOW_VOLUME_FLEXIBILITY_FLOOR: i32 = 10;
    /// Rest never rises above this at high volume
    pub const HIGH_VOLUME_REST_CEILING: i32 = 20;
    /// Flexibility never rises above this at high volume
    pub const HIGH_VOLUME_FLEXIBILITY_CEILING: i32 = 30;
    /// Cardio never drops below this at high volume
    pub const HIGH_VOLUME_CARDIO_FLOOR: i32 = 20;
    /// Strength never drops below this at high volume
    pub const HIGH_VOLUME_STRENGTH_FLOOR: i32 = 20;
}

/// Default number of suggested activities per category
pub mod activity_counts {
    /// Cardio suggestions per recommendation
    pub const CARDIO: usize = 3;
    /// Strength suggestions per recommendation
    pub const STRENGTH: usize = 3;
    /// Flexibility suggestions per recommendation
    pub const FLEXIBILITY: usize = 3;
    /// Rest suggestions per recommendation
    pub const REST: usize = 2;
}

/// Default inclusive ranges accepted at the request boundary
pub mod request_limits {
    /// Youngest accepted age in years
    pub const MIN_AGE: i64 = 13;
    /// Oldest accepted age in years
    pub const MAX_AGE: i64 = 100;
    /// Shortest accepted height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Tallest accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Lightest accepted weight in kilograms
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Heaviest accepted weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Fewest accepted weekly training minutes
    pub const MIN_WEEKLY_MINUTES: i64 = 60;
    /// Most accepted weekly training minutes
    pub const MAX_WEEKLY_MINUTES: i64 = 1000;
}

/// Request field names, in the order presence is checked
pub mod request_fields {
    /// Age field
    pub const AGE: &str = "age";
    /// Height field
    pub const HEIGHT_CM: &str = "height_cm";
    /// Weight field
    pub const WEIGHT_KG: &str = "weight_kg";
    /// Goal field
    pub const GOAL: &str = "goal";
    /// Weekly minutes field
    pub const WEEKLY_MINUTES: &str = "weekly_minutes";

    /// Required fields in presence-check order
    pub const REQUIRED: [&str; 5] = [AGE, HEIGHT_CM, WEIGHT_KG, GOAL, WEEKLY_MINUTES];
}

/// Environment variables read by the configuration loaders
pub mod env_config {
    /// Cardio suggestion count override
    pub const CARDIO_ACTIVITY_COUNT: &str = "FITSPLIT_CARDIO_ACTIVITY_COUNT";
    /// Strength suggestion count override
    pub const STRENGTH_ACTIVITY_COUNT: &str = "FITSPLIT_STRENGTH_ACTIVITY_COUNT";
    /// Flexibility suggestion count override
    pub const FLEXIBILITY_ACTIVITY_COUNT: &str = "FITSPLIT_FLEXIBILITY_ACTIVITY_COUNT";
    /// Rest suggestion count override
    pub const REST_ACTIVITY_COUNT: &str = "FITSPLIT_REST_ACTIVITY_COUNT";
    /// Minimum age override
    pub const MIN_AGE: &str = "FITSPLIT_MIN_AGE";
    /// Maximum age override
    pub const MAX_AGE: &str = "FITSPLIT_MAX_AGE";
    /// Minimum height override
    pub const MIN_HEIGHT_CM: &str = "FITSPLIT_MIN_HEIGHT_CM";
    /// Maximum height override
    pub const MAX_HEIGHT_CM: &str = "FITSPLIT_MAX_HEIGHT_CM";
    /// Minimum weight override
    pub const MIN_WEIGHT_KG: &str = "FITSPLIT_MIN_WEIGHT_KG";
    /// Maximum weight override
    pub const MAX_WEIGHT_KG: &str = "FITSPLIT_MAX_WEIGHT_KG";
    /// Minimum weekly minutes override
    pub const MIN_WEEKLY_MINUTES: &str = "FITSPLIT_MIN_WEEKLY_MINUTES";
    /// Maximum weekly minutes override
    pub const MAX_WEEKLY_MINUTES: &str = "FITSPLIT_MAX_WEEKLY_MINUTES";
}
