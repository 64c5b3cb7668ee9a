//! Request parameters for match results and leaderboard sorting.

use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of a single match from one boxer's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightOutcome {
    Win,
    Loss,
}

impl FromStr for FightOutcome {
    type Err = DomainError;

    /// Parses the request form of an outcome, exactly `"win"` or `"loss"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(FightOutcome::Win),
            "loss" => Ok(FightOutcome::Loss),
            other => Err(DomainError::UnknownOutcome(other.to_string())),
        }
    }
}

/// Sort key for the leaderboard query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Total wins, the default ordering.
    #[default]
    Wins,
    /// Wins as a share of fights.
    WinPct,
}

impl FromStr for SortKey {
    type Err = DomainError;

    /// Parses the request form of a sort key, exactly `"wins"` or `"win_pct"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(SortKey::Wins),
            "win_pct" => Ok(SortKey::WinPct),
            other => Err(DomainError::UnknownSortKey(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_outcome() {
        assert_eq!("win".parse(), Ok(FightOutcome::Win));
        assert_eq!("loss".parse(), Ok(FightOutcome::Loss));
    }

    #[test]
    fn parse_outcome_rejects_unknown() {
        assert_eq!(
            "draw".parse::<FightOutcome>(),
            Err(DomainError::UnknownOutcome("draw".to_string()))
        );
        // Matching is exact, not case-insensitive.
        assert!("Win".parse::<FightOutcome>().is_err());
        assert!("".parse::<FightOutcome>().is_err());
    }

    #[test]
    fn parse_sort_key() {
        assert_eq!("wins".parse(), Ok(SortKey::Wins));
        assert_eq!("win_pct".parse(), Ok(SortKey::WinPct));
    }

    #[test]
    fn parse_sort_key_rejects_unknown() {
        assert_eq!(
            "losses".parse::<SortKey>(),
            Err(DomainError::UnknownSortKey("losses".to_string()))
        );
        assert!("WIN_PCT".parse::<SortKey>().is_err());
    }

    #[test]
    fn default_sort_is_wins() {
        assert_eq!(SortKey::default(), SortKey::Wins);
    }
}
