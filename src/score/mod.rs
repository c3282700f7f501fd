//! Score types for representing solution quality
//!
//! Scores are used to compare candidate solutions and guide the
//! optimization process. All score types are immutable value types with
//! lexicographic level-wise comparison: any hard-level difference
//! dominates all soft levels.

#[macro_use]
mod macros;

mod bendable;
mod definition;
mod hard_medium_soft;
mod hard_soft;
mod level;
mod simple;
mod traits;
mod trend;

#[cfg(test)]
mod tests;

pub use bendable::BendableScore;
pub use definition::{
    BendableScoreDefinition, HardMediumSoftScoreDefinition, HardSoftScoreDefinition,
    ScoreDefinition, SimpleScoreDefinition,
};
pub use hard_medium_soft::HardMediumSoftScore;
pub use hard_soft::HardSoftScore;
pub use level::ScoreLevel;
pub use simple::SimpleScore;
pub use traits::{FeasibilityScore, ParseableScore, Score, ScoreParseError};
pub use trend::{InitializingScoreTrend, InitializingScoreTrendLevel};
