//! Core Score trait definitions

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

use super::ScoreLevel;

/// Core trait for all score types in SolvKit.
///
/// Scores represent the quality of a planning solution. They are used to:
/// - Compare solutions (better/worse/equal)
/// - Guide the optimization process
/// - Bound what a partially initialized solution can still become
///
/// All score implementations must be:
/// - Immutable (operations return new instances)
/// - Thread-safe (Send + Sync)
/// - Totally ordered, lexicographically over their levels
///
/// # Score Levels
///
/// Scores can have multiple levels (e.g., hard/soft constraints). When
/// comparing scores, higher-priority levels are compared first, so any
/// hard-level difference dominates all soft levels. Feasibility is a
/// separate capability: only families with at least one hard level
/// implement [`FeasibilityScore`].
pub trait Score:
    Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;

    /// Returns the number of score levels of this score value.
    ///
    /// For example:
    /// - SimpleScore: 1 level
    /// - HardSoftScore: 2 levels
    /// - BendableScore: hard levels + soft levels, fixed per value
    fn levels_size(&self) -> usize;

    /// Returns the score values as a vector of i64.
    ///
    /// The order is from highest priority to lowest priority.
    /// For HardSoftScore: [hard, soft]
    fn to_level_numbers(&self) -> Vec<i64>;

    /// Multiplies this score by a scalar.
    fn multiply(&self, multiplicand: f64) -> Self;

    /// Divides this score by a scalar.
    fn divide(&self, divisor: f64) -> Self;

    /// Returns the absolute value of this score.
    fn abs(&self) -> Self;

    /// Returns the semantic label for the score level at the given index.
    ///
    /// Level indices follow the same order as `to_level_numbers()`:
    /// highest priority first.
    ///
    /// # Panics
    /// Panics if `index >= levels_size()`.
    fn level_label(&self, index: usize) -> ScoreLevel;

    /// Compares two scores, returning the ordering.
    ///
    /// Default implementation uses the Ord trait.
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Returns true if this score is better than the other score.
    ///
    /// In optimization, "better" means higher.
    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }

    /// Returns true if this score is worse than the other score.
    fn is_worse_than(&self, other: &Self) -> bool {
        self < other
    }
}

/// A [`Score`] that supports a feasibility query.
///
/// Implemented by every score family with at least one hard level
/// (HardSoftScore, HardMediumSoftScore, BendableScore), but not by
/// SimpleScore: a family without hard levels has no feasibility concept.
pub trait FeasibilityScore: Score {
    /// Returns true if no hard constraint is broken, i.e. every hard
    /// level is 0 or higher.
    fn is_feasible(&self) -> bool;
}

/// Marker trait for scores that can be parsed from a string.
pub trait ParseableScore: Score {
    /// Parses a score from a string representation.
    ///
    /// # Format
    /// - SimpleScore: "42"
    /// - HardSoftScore: "0hard/-100soft"
    /// - HardMediumSoftScore: "0hard/0medium/-100soft"
    /// - BendableScore: "[0/-1]hard/[-10/-20]soft"
    fn parse(s: &str) -> std::result::Result<Self, ScoreParseError>;

    /// Returns the string representation of this score.
    fn to_string_repr(&self) -> String;
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl std::fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}
