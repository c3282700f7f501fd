//! Score definitions - factory/policy objects parameterizing a score family.
//!
//! A [`ScoreDefinition`] knows the level shape of its family, creates
//! scores from raw level values, and builds optimistic/pessimistic bounds
//! from an [`InitializingScoreTrend`]. Bound construction is the single
//! source of truth for branch-and-bound-style pruning: the optimistic
//! bound is never worse than the best achievable completion, the
//! pessimistic bound never better than the worst.

use crate::error::{CoreError, Result};

use super::traits::{FeasibilityScore, Score};
use super::trend::{InitializingScoreTrend, InitializingScoreTrendLevel};
use super::{BendableScore, HardMediumSoftScore, HardSoftScore, SimpleScore};

/// Stateless policy object for one score family.
///
/// Per-level bound policy:
///
/// | trend level | optimistic bound | pessimistic bound |
/// |-------------|------------------|-------------------|
/// | OnlyUp      | `i64::MAX`       | unchanged         |
/// | OnlyDown    | unchanged        | `i64::MIN`        |
/// | Any         | unchanged        | unchanged         |
pub trait ScoreDefinition {
    /// The score type produced by this definition.
    type Score: Score;

    /// Returns the total number of score levels.
    fn levels_size(&self) -> usize;

    /// Returns the number of hard (feasibility-deciding) levels.
    fn feasible_levels_size(&self) -> usize;

    /// Returns the zero score of this family.
    fn zero_score(&self) -> Self::Score;

    /// Creates a score from raw level values, highest priority first.
    ///
    /// Fails with [`CoreError::ScoreShape`] unless
    /// `levels.len() == levels_size()`.
    fn create_score(&self, levels: &[i64]) -> Result<Self::Score>;

    /// Returns whether the given score is feasible.
    ///
    /// Fails with [`CoreError::UnsupportedCapability`] on a family without
    /// hard levels. Check `feasible_levels_size() > 0` first when in doubt.
    fn is_feasible(&self, score: &Self::Score) -> Result<bool> {
        if self.feasible_levels_size() == 0 {
            return Err(CoreError::UnsupportedCapability(format!(
                "{} has no hard levels, feasibility is undefined",
                std::any::type_name::<Self::Score>()
            )));
        }
        let levels = score.to_level_numbers();
        Ok(levels[..self.feasible_levels_size()].iter().all(|&v| v >= 0))
    }

    /// Builds the best score still reachable from `score` given `trend`.
    ///
    /// Pure function; fails with [`CoreError::ScoreShape`] if the trend's
    /// level count differs from this definition's.
    fn build_optimistic_bound(
        &self,
        trend: &InitializingScoreTrend,
        score: &Self::Score,
    ) -> Result<Self::Score> {
        let levels = self.bound_levels(trend, score, true)?;
        self.create_score(&levels)
    }

    /// Builds the worst score still reachable from `score` given `trend`.
    ///
    /// Pure function; fails with [`CoreError::ScoreShape`] if the trend's
    /// level count differs from this definition's.
    fn build_pessimistic_bound(
        &self,
        trend: &InitializingScoreTrend,
        score: &Self::Score,
    ) -> Result<Self::Score> {
        let levels = self.bound_levels(trend, score, false)?;
        self.create_score(&levels)
    }

    /// Applies the bound policy table level by level.
    #[doc(hidden)]
    fn bound_levels(
        &self,
        trend: &InitializingScoreTrend,
        score: &Self::Score,
        optimistic: bool,
    ) -> Result<Vec<i64>> {
        if trend.levels_size() != self.levels_size() {
            return Err(CoreError::ScoreShape(format!(
                "trend has {} levels but the score definition has {}",
                trend.levels_size(),
                self.levels_size()
            )));
        }
        let level_numbers = score.to_level_numbers();
        if level_numbers.len() != self.levels_size() {
            return Err(CoreError::ScoreShape(format!(
                "score has {} levels but the score definition has {}",
                level_numbers.len(),
                self.levels_size()
            )));
        }
        Ok(level_numbers
            .iter()
            .zip(trend.levels())
            .map(|(&value, &level)| match (level, optimistic) {
                (InitializingScoreTrendLevel::OnlyUp, true) => i64::MAX,
                (InitializingScoreTrendLevel::OnlyDown, false) => i64::MIN,
                _ => value,
            })
            .collect())
    }
}

fn check_levels_size(expected: usize, levels: &[i64], family: &str) -> Result<()> {
    if levels.len() != expected {
        return Err(CoreError::ScoreShape(format!(
            "{} expects {} level values, got {}",
            family,
            expected,
            levels.len()
        )));
    }
    Ok(())
}

/// Score definition for [`SimpleScore`]: one level, no feasibility concept.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleScoreDefinition;

impl ScoreDefinition for SimpleScoreDefinition {
    type Score = SimpleScore;

    fn levels_size(&self) -> usize {
        1
    }

    fn feasible_levels_size(&self) -> usize {
        0
    }

    fn zero_score(&self) -> SimpleScore {
        SimpleScore::ZERO
    }

    fn create_score(&self, levels: &[i64]) -> Result<SimpleScore> {
        check_levels_size(1, levels, "SimpleScore")?;
        Ok(SimpleScore::of(levels[0]))
    }
}

/// Score definition for [`HardSoftScore`]: one hard level, one soft level.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardSoftScoreDefinition;

impl ScoreDefinition for HardSoftScoreDefinition {
    type Score = HardSoftScore;

    fn levels_size(&self) -> usize {
        2
    }

    fn feasible_levels_size(&self) -> usize {
        1
    }

    fn zero_score(&self) -> HardSoftScore {
        HardSoftScore::ZERO
    }

    fn create_score(&self, levels: &[i64]) -> Result<HardSoftScore> {
        check_levels_size(2, levels, "HardSoftScore")?;
        Ok(HardSoftScore::of(levels[0], levels[1]))
    }

    fn is_feasible(&self, score: &HardSoftScore) -> Result<bool> {
        Ok(FeasibilityScore::is_feasible(score))
    }
}

/// Score definition for [`HardMediumSoftScore`]: one hard, two soft-side levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardMediumSoftScoreDefinition;

impl ScoreDefinition for HardMediumSoftScoreDefinition {
    type Score = HardMediumSoftScore;

    fn levels_size(&self) -> usize {
        3
    }

    fn feasible_levels_size(&self) -> usize {
        1
    }

    fn zero_score(&self) -> HardMediumSoftScore {
        HardMediumSoftScore::ZERO
    }

    fn create_score(&self, levels: &[i64]) -> Result<HardMediumSoftScore> {
        check_levels_size(3, levels, "HardMediumSoftScore")?;
        Ok(HardMediumSoftScore::of(levels[0], levels[1], levels[2]))
    }

    fn is_feasible(&self, score: &HardMediumSoftScore) -> Result<bool> {
        Ok(FeasibilityScore::is_feasible(score))
    }
}

/// Score definition for [`BendableScore`] with a fixed level shape.
///
/// # Examples
///
/// ```
/// use solvkit_core::{BendableScoreDefinition, ScoreDefinition};
///
/// let definition = BendableScoreDefinition::new(3, 4);
/// assert_eq!(definition.levels_size(), 7);
/// assert_eq!(definition.feasible_levels_size(), 3);
///
/// let score = definition.create_score(&[0, 1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(score.hard_score(2), 2);
/// assert_eq!(score.soft_score(0), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BendableScoreDefinition {
    hard_levels_size: usize,
    soft_levels_size: usize,
}

impl BendableScoreDefinition {
    /// Creates a definition with the given level shape.
    ///
    /// # Panics
    /// Panics if `hard_levels_size + soft_levels_size == 0`: a score
    /// family needs at least one level.
    pub fn new(hard_levels_size: usize, soft_levels_size: usize) -> Self {
        assert!(
            hard_levels_size + soft_levels_size >= 1,
            "A bendable score definition needs at least 1 level"
        );
        BendableScoreDefinition {
            hard_levels_size,
            soft_levels_size,
        }
    }

    /// Returns the number of hard levels.
    pub fn hard_levels_size(&self) -> usize {
        self.hard_levels_size
    }

    /// Returns the number of soft levels.
    pub fn soft_levels_size(&self) -> usize {
        self.soft_levels_size
    }
}

impl ScoreDefinition for BendableScoreDefinition {
    type Score = BendableScore;

    fn levels_size(&self) -> usize {
        self.hard_levels_size + self.soft_levels_size
    }

    fn feasible_levels_size(&self) -> usize {
        self.hard_levels_size
    }

    fn zero_score(&self) -> BendableScore {
        BendableScore::zero_with_levels(self.hard_levels_size, self.soft_levels_size)
    }

    fn create_score(&self, levels: &[i64]) -> Result<BendableScore> {
        if levels.len() != self.levels_size() {
            return Err(CoreError::ScoreShape(format!(
                "BendableScore({}, {}) expects {} level values, got {}",
                self.hard_levels_size,
                self.soft_levels_size,
                self.levels_size(),
                levels.len()
            )));
        }
        Ok(BendableScore::of(
            levels[..self.hard_levels_size].to_vec(),
            levels[self.hard_levels_size..].to_vec(),
        ))
    }

    fn is_feasible(&self, score: &BendableScore) -> Result<bool> {
        if self.hard_levels_size == 0 {
            return Err(CoreError::UnsupportedCapability(
                "BendableScore with 0 hard levels, feasibility is undefined".to_string(),
            ));
        }
        Ok(FeasibilityScore::is_feasible(score))
    }
}
