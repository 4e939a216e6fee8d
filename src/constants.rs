//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers shared between the classifier,
//! the grouper and the sheet renderer so they stay in sync.

#![allow(dead_code)]

/// Sentinel division label for entries the classifier cannot confidently place.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Number of players on one printed pool sheet. Positions 1v2 and 3v4 are the
/// intended first-round pairings.
pub const POOL_SIZE: usize = 4;

/// Column headers a roster file must provide. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] =
    ["name", "age", "weight", "gender", "club", "city", "state"];

/// Age band boundaries used by the classifier
pub mod age_bands {
    /// Last age that gets its own undifferentiated bucket (bare age as label)
    pub const YOUTH_MAX: i64 = 13;

    /// Inclusive bounds of the junior band
    pub const JUNIOR_MIN: i64 = 14;
    pub const JUNIOR_MAX: i64 = 15;

    /// Inclusive bounds of the cadet band
    pub const CADET_MIN: i64 = 16;
    pub const CADET_MAX: i64 = 17;

    /// Label fragments for the gendered bands
    pub const JUNIOR_LABEL: &str = "14-15";
    pub const CADET_LABEL: &str = "16-17";
    pub const SENIOR_LABEL: &str = "18+";
}

/// Fixed-width column layout of the printed player table
pub mod sheet_layout {
    /// Width of the seeding position column ("No.")
    pub const POSITION_WIDTH: usize = 4;

    /// Width of the player name column
    pub const NAME_WIDTH: usize = 24;

    /// Width of the age column
    pub const AGE_WIDTH: usize = 5;

    /// Width of the weight column ("Weight (kg)")
    pub const WEIGHT_WIDTH: usize = 12;

    /// Width of the club column
    pub const CLUB_WIDTH: usize = 28;

    /// Width of the city column
    pub const CITY_WIDTH: usize = 16;

    /// Total printable width of one sheet line
    pub const SHEET_WIDTH: usize =
        POSITION_WIDTH + NAME_WIDTH + AGE_WIDTH + WEIGHT_WIDTH + CLUB_WIDTH + CITY_WIDTH;

    /// Number of outcome placeholder lines printed under each pool table
    pub const OUTCOME_LINES: usize = 4;
}
