//! Error types for the score and shadow variable core.

use thiserror::Error;

/// Contract-violation errors raised by the score model and the shadow
/// variable infrastructure.
///
/// Every variant signals a programming error in the calling search layer.
/// None of them is retried or recovered internally; they propagate up and
/// are fatal to the current solve attempt.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Score arithmetic or construction with mismatched level counts.
    #[error("score shape mismatch: {0}")]
    ScoreShape(String),

    /// Level index out of bounds on a score accessor.
    #[error("level index out of range: {0}")]
    LevelIndex(String),

    /// A listener or supply method was called outside its valid
    /// lifecycle state.
    #[error("invalid lifecycle state: {0}")]
    InvalidState(String),

    /// An `after` notification without its matching `before`, or an
    /// interleaved change bracket.
    #[error("notification sequence violation: {0}")]
    StateSequence(String),

    /// A feasibility query on a score family that has no hard levels.
    #[error("unsupported capability: {0}")]
    UnsupportedCapability(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
