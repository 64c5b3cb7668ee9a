//! Weight class derivation.

use crate::DomainError;
use serde::{Deserialize, Serialize};

/// The four weight classes recognized by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightClass {
    Heavyweight,
    Middleweight,
    Lightweight,
    Featherweight,
}

impl WeightClass {
    /// Minimum sanctioned weight in pounds; anything below is rejected.
    pub const MIN_WEIGHT: i32 = 125;

    /// Derives the weight class for a weight in pounds.
    ///
    /// Bands are contiguous and inclusive at their lower bound:
    /// 203+ heavyweight, 166-202 middleweight, 133-165 lightweight,
    /// 125-132 featherweight.
    pub fn for_weight(weight: i32) -> Result<Self, DomainError> {
        match weight {
            w if w >= 203 => Ok(WeightClass::Heavyweight),
            w if w >= 166 => Ok(WeightClass::Middleweight),
            w if w >= 133 => Ok(WeightClass::Lightweight),
            w if w >= Self::MIN_WEIGHT => Ok(WeightClass::Featherweight),
            w => Err(DomainError::InvalidWeight(w)),
        }
    }

    /// Returns the canonical upper-case name used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            WeightClass::Heavyweight => "HEAVYWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Featherweight => "FEATHERWEIGHT",
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
