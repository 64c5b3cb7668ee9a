//! Core types for the boxer registry.
//!
//! This crate provides the fundamental domain types used across the registry:
//! - [`WeightClass`] and its derivation from a boxer's weight
//! - [`FightOutcome`] and [`SortKey`] request parameters
//! - [`Boxer`] and [`LeaderboardEntry`] records
//! - Attribute validation shared by every write path

mod boxer;
mod error;
mod outcome;
mod weight;

pub use boxer::{validate_attributes, win_pct, Boxer, LeaderboardEntry};
pub use error::DomainError;
pub use outcome::{FightOutcome, SortKey};
pub use weight::WeightClass;
