//! Boxer records and attribute validation.

use crate::{DomainError, WeightClass};
use serde::{Deserialize, Serialize};

/// A boxer profile as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boxer {
    /// Store-assigned row id.
    pub id: i64,
    /// Unique boxer name.
    pub name: String,
    /// Weight in pounds.
    pub weight: i32,
    /// Height in inches.
    pub height: i32,
    /// Reach in inches.
    pub reach: f64,
    /// Age in years.
    pub age: i32,
    /// Derived from `weight` on every read; never stored.
    pub weight_class: WeightClass,
}

impl Boxer {
    /// Builds a boxer record, deriving the weight class from the weight.
    pub fn from_attrs(
        id: i64,
        name: String,
        weight: i32,
        height: i32,
        reach: f64,
        age: i32,
    ) -> Result<Self, DomainError> {
        let weight_class = WeightClass::for_weight(weight)?;
        Ok(Self {
            id,
            name,
            weight,
            height,
            reach,
            age,
            weight_class,
        })
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Store-assigned row id.
    pub id: i64,
    /// Unique boxer name.
    pub name: String,
    /// Weight in pounds.
    pub weight: i32,
    /// Height in inches.
    pub height: i32,
    /// Reach in inches.
    pub reach: f64,
    /// Age in years.
    pub age: i32,
    /// Derived from `weight` on every read; never stored.
    pub weight_class: WeightClass,
    /// Total recorded matches; at least 1 for every ranked boxer.
    pub fights: i32,
    /// Matches won.
    pub wins: i32,
    /// Wins over fights as a percentage, rounded to one decimal place.
    pub win_pct: f64,
}

/// Validates the writable boxer attributes.
///
/// Checks run in declaration order and the first violated constraint is
/// reported: weight at least 125, height and reach positive, age between
/// 18 and 40 inclusive.
pub fn validate_attributes(
    weight: i32,
    height: i32,
    reach: f64,
    age: i32,
) -> Result<(), DomainError> {
    if weight < WeightClass::MIN_WEIGHT {
        return Err(DomainError::InvalidWeight(weight));
    }
    if height <= 0 {
        return Err(DomainError::InvalidHeight(height));
    }
    if reach <= 0.0 {
        return Err(DomainError::InvalidReach(reach));
    }
    if !(18..=40).contains(&age) {
        return Err(DomainError::InvalidAge(age));
    }
    Ok(())
}

/// Win percentage rounded to one decimal place.
///
/// Callers never pass `fights == 0`; the leaderboard query filters those
/// rows out before any percentage is computed.
pub fn win_pct(wins: i32, fights: i32) -> f64 {
    (f64::from(wins) * 1000.0 / f64::from(fights)).round() / 10.0
}
