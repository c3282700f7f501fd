//! Core domain traits

use crate::score::Score;

/// Marker trait for planning solutions.
///
/// A planning solution represents both the problem definition and the
/// (potentially partial) solution. It contains:
/// - Problem facts: immutable input data
/// - Planning entities: things to be optimized, addressed by index
/// - Score: the quality of the current variable assignment
///
/// Entities are addressed by `usize` index into the solution's entity
/// collection; the listener framework and supplies never hold references
/// into the solution graph, only indices and value identities.
///
/// # Example
///
/// ```
/// use solvkit_core::{PlanningSolution, SimpleScore};
///
/// #[derive(Clone)]
/// struct NQueens {
///     rows: Vec<Option<usize>>,
///     score: Option<SimpleScore>,
/// }
///
/// impl PlanningSolution for NQueens {
///     type Score = SimpleScore;
///
///     fn score(&self) -> Option<Self::Score> {
///         self.score
///     }
///
///     fn set_score(&mut self, score: Option<Self::Score>) {
///         self.score = score;
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// A working solution is owned and mutated by exactly one score director
/// at a time; parallel solving clones the whole solution graph per
/// instance instead of sharing it, which is why `Send + Sync` suffices
/// and no internal locking exists.
pub trait PlanningSolution: Clone + Send + Sync + 'static {
    /// The score type used to evaluate this solution.
    type Score: Score;

    /// Returns the current score of this solution, if calculated.
    ///
    /// Returns `None` if the solution has not been scored yet.
    fn score(&self) -> Option<Self::Score>;

    /// Sets the score of this solution.
    fn set_score(&mut self, score: Option<Self::Score>);
}
