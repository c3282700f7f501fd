//! Initializing score trend - per-level bounds metadata.
//!
//! While a solution is still being initialized (some planning variables
//! unassigned), assigning the remaining variables can only move certain
//! score levels in one direction. The trend captures that per-level
//! guarantee so a score definition can bound the best and worst case a
//! partial solution can still reach.

/// Directional guarantee for one score level while the solution is
/// initializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitializingScoreTrendLevel {
    /// Initializing a variable can only raise this level (e.g., a pure
    /// reward constraint).
    OnlyUp,
    /// Initializing a variable can only lower this level (e.g., a pure
    /// penalty constraint).
    OnlyDown,
    /// No directional guarantee.
    Any,
}

/// Per-level trend of a score family while the working solution is
/// initializing.
///
/// Built once per solve from the constraint configuration; consumed by
/// [`ScoreDefinition::build_optimistic_bound`](super::ScoreDefinition::build_optimistic_bound)
/// and its pessimistic counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializingScoreTrend {
    levels: Vec<InitializingScoreTrendLevel>,
}

impl InitializingScoreTrend {
    /// Creates a trend from explicit per-level values.
    pub fn new(levels: Vec<InitializingScoreTrendLevel>) -> Self {
        InitializingScoreTrend { levels }
    }

    /// Creates a trend with the same guarantee on every level.
    pub fn build_uniform(level: InitializingScoreTrendLevel, levels_size: usize) -> Self {
        InitializingScoreTrend {
            levels: vec![level; levels_size],
        }
    }

    /// Returns the number of levels this trend covers.
    pub fn levels_size(&self) -> usize {
        self.levels.len()
    }

    /// Returns the trend of the level at the given index.
    ///
    /// # Panics
    /// Panics if `index >= levels_size()`.
    pub fn level(&self, index: usize) -> InitializingScoreTrendLevel {
        self.levels[index]
    }

    /// Returns all per-level trends.
    pub fn levels(&self) -> &[InitializingScoreTrendLevel] {
        &self.levels
    }

    /// Returns true if every level can only go up.
    pub fn is_only_up(&self) -> bool {
        self.levels
            .iter()
            .all(|&l| l == InitializingScoreTrendLevel::OnlyUp)
    }

    /// Returns true if every level can only go down.
    pub fn is_only_down(&self) -> bool {
        self.levels
            .iter()
            .all(|&l| l == InitializingScoreTrendLevel::OnlyDown)
    }
}
