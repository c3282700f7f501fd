//! BendableScore - Runtime-configurable multi-level score

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::traits::{FeasibilityScore, ParseableScore, Score, ScoreParseError};
use super::ScoreLevel;

/// A score with a configurable number of hard and soft levels.
///
/// Unlike `HardSoftScore`, the number of levels is determined at runtime.
/// This is useful when the constraint structure varies between problem
/// instances. The level shape (hard count, soft count) is carried by every
/// value; mixing two shapes in arithmetic or comparison is a contract
/// violation and panics.
///
/// # Examples
///
/// ```
/// use solvkit_core::{BendableScore, FeasibilityScore};
///
/// // Create a score with 2 hard levels and 3 soft levels
/// let score = BendableScore::of(vec![-1, -2], vec![-10, -20, -30]);
///
/// assert_eq!(score.hard_levels_size(), 2);
/// assert_eq!(score.soft_levels_size(), 3);
/// assert!(!score.is_feasible());  // Negative hard scores
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BendableScore {
    hard_scores: Vec<i64>,
    soft_scores: Vec<i64>,
}

impl BendableScore {
    /// Creates a new BendableScore with the given hard and soft score vectors.
    pub fn of(hard_scores: Vec<i64>, soft_scores: Vec<i64>) -> Self {
        BendableScore {
            hard_scores,
            soft_scores,
        }
    }

    /// Creates a zero score with the specified number of levels.
    pub fn zero_with_levels(hard_levels: usize, soft_levels: usize) -> Self {
        BendableScore {
            hard_scores: vec![0; hard_levels],
            soft_scores: vec![0; soft_levels],
        }
    }

    /// Returns the number of hard score levels.
    pub fn hard_levels_size(&self) -> usize {
        self.hard_scores.len()
    }

    /// Returns the number of soft score levels.
    pub fn soft_levels_size(&self) -> usize {
        self.soft_scores.len()
    }

    /// Returns the hard score at the given level.
    ///
    /// # Panics
    /// Panics if `level >= hard_levels_size()`.
    pub fn hard_score(&self, level: usize) -> i64 {
        assert!(
            level < self.hard_scores.len(),
            "Hard level index {} out of range [0, {})",
            level,
            self.hard_scores.len()
        );
        self.hard_scores[level]
    }

    /// Returns the soft score at the given level.
    ///
    /// # Panics
    /// Panics if `level >= soft_levels_size()`.
    pub fn soft_score(&self, level: usize) -> i64 {
        assert!(
            level < self.soft_scores.len(),
            "Soft level index {} out of range [0, {})",
            level,
            self.soft_scores.len()
        );
        self.soft_scores[level]
    }

    /// Returns all hard scores as a slice.
    pub fn hard_scores(&self) -> &[i64] {
        &self.hard_scores
    }

    /// Returns all soft scores as a slice.
    pub fn soft_scores(&self) -> &[i64] {
        &self.soft_scores
    }

    /// Creates a score with a single hard level penalty at the given index.
    pub fn one_hard(hard_levels: usize, soft_levels: usize, level: usize) -> Self {
        let mut hard_scores = vec![0; hard_levels];
        hard_scores[level] = 1;
        BendableScore {
            hard_scores,
            soft_scores: vec![0; soft_levels],
        }
    }

    /// Creates a score with a single soft level penalty at the given index.
    pub fn one_soft(hard_levels: usize, soft_levels: usize, level: usize) -> Self {
        let mut soft_scores = vec![0; soft_levels];
        soft_scores[level] = 1;
        BendableScore {
            hard_scores: vec![0; hard_levels],
            soft_scores,
        }
    }

    fn ensure_compatible(&self, other: &Self) {
        assert_eq!(
            self.hard_scores.len(),
            other.hard_scores.len(),
            "Incompatible hard levels: {} vs {}",
            self.hard_scores.len(),
            other.hard_scores.len()
        );
        assert_eq!(
            self.soft_scores.len(),
            other.soft_scores.len(),
            "Incompatible soft levels: {} vs {}",
            self.soft_scores.len(),
            other.soft_scores.len()
        );
    }
}

impl Default for BendableScore {
    fn default() -> Self {
        // Default to 1 hard + 1 soft level (like HardSoftScore)
        BendableScore::zero_with_levels(1, 1)
    }
}

impl Score for BendableScore {
    fn zero() -> Self {
        BendableScore::default()
    }

    fn levels_size(&self) -> usize {
        self.hard_scores.len() + self.soft_scores.len()
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        let mut levels = self.hard_scores.clone();
        levels.extend(self.soft_scores.iter());
        levels
    }

    fn multiply(&self, multiplicand: f64) -> Self {
        BendableScore {
            hard_scores: self
                .hard_scores
                .iter()
                .map(|&s| (s as f64 * multiplicand).round() as i64)
                .collect(),
            soft_scores: self
                .soft_scores
                .iter()
                .map(|&s| (s as f64 * multiplicand).round() as i64)
                .collect(),
        }
    }

    fn divide(&self, divisor: f64) -> Self {
        BendableScore {
            hard_scores: self
                .hard_scores
                .iter()
                .map(|&s| (s as f64 / divisor).round() as i64)
                .collect(),
            soft_scores: self
                .soft_scores
                .iter()
                .map(|&s| (s as f64 / divisor).round() as i64)
                .collect(),
        }
    }

    fn abs(&self) -> Self {
        BendableScore {
            hard_scores: self.hard_scores.iter().map(|&s| s.abs()).collect(),
            soft_scores: self.soft_scores.iter().map(|&s| s.abs()).collect(),
        }
    }

    fn level_label(&self, index: usize) -> ScoreLevel {
        if index < self.hard_scores.len() {
            ScoreLevel::Hard
        } else if index < self.levels_size() {
            ScoreLevel::Soft
        } else {
            panic!(
                "BendableScore has {} levels, got index {}",
                self.levels_size(),
                index
            )
        }
    }
}

impl FeasibilityScore for BendableScore {
    fn is_feasible(&self) -> bool {
        self.hard_scores.iter().all(|&s| s >= 0)
    }
}

impl Ord for BendableScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ensure_compatible(other);

        // Compare hard scores first (highest priority first)
        for (a, b) in self.hard_scores.iter().zip(other.hard_scores.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        // Then compare soft scores
        for (a, b) in self.soft_scores.iter().zip(other.soft_scores.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BendableScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for BendableScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.ensure_compatible(&other);
        BendableScore {
            hard_scores: self
                .hard_scores
                .iter()
                .zip(other.hard_scores.iter())
                .map(|(a, b)| a + b)
                .collect(),
            soft_scores: self
                .soft_scores
                .iter()
                .zip(other.soft_scores.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl Sub for BendableScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.ensure_compatible(&other);
        BendableScore {
            hard_scores: self
                .hard_scores
                .iter()
                .zip(other.hard_scores.iter())
                .map(|(a, b)| a - b)
                .collect(),
            soft_scores: self
                .soft_scores
                .iter()
                .zip(other.soft_scores.iter())
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl Neg for BendableScore {
    type Output = Self;

    fn neg(self) -> Self {
        BendableScore {
            hard_scores: self.hard_scores.iter().map(|&s| -s).collect(),
            soft_scores: self.soft_scores.iter().map(|&s| -s).collect(),
        }
    }
}

impl fmt::Debug for BendableScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BendableScore(hard: {:?}, soft: {:?})",
            self.hard_scores, self.soft_scores
        )
    }
}

impl fmt::Display for BendableScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "[0/0]hard/[-10/-20/-30]soft"
        let hard_str: Vec<String> = self.hard_scores.iter().map(|s| s.to_string()).collect();
        let soft_str: Vec<String> = self.soft_scores.iter().map(|s| s.to_string()).collect();

        write!(
            f,
            "[{}]hard/[{}]soft",
            hard_str.join("/"),
            soft_str.join("/")
        )
    }
}

impl ParseableScore for BendableScore {
    fn parse(s: &str) -> std::result::Result<Self, ScoreParseError> {
        let s = s.trim();

        // Format: "[0/0]hard/[-10/-20/-30]soft"
        let parts: Vec<&str> = s.split("hard/").collect();
        if parts.len() != 2 {
            return Err(ScoreParseError {
                message: format!(
                    "Invalid BendableScore format '{}': expected '[...]hard/[...]soft'",
                    s
                ),
            });
        }

        let hard_part = parts[0]
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| ScoreParseError {
                message: format!("Hard score part '{}' must be wrapped in brackets", parts[0]),
            })?;

        let soft_part = parts[1]
            .trim()
            .strip_suffix("soft")
            .and_then(|s| s.strip_prefix('['))
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| ScoreParseError {
                message: format!(
                    "Soft score part '{}' must be wrapped in brackets and end with 'soft'",
                    parts[1]
                ),
            })?;

        let hard_scores: std::result::Result<Vec<i64>, _> = hard_part
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.trim().parse::<i64>().map_err(|e| ScoreParseError {
                    message: format!("Invalid hard score '{}': {}", s, e),
                })
            })
            .collect();

        let soft_scores: std::result::Result<Vec<i64>, _> = soft_part
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.trim().parse::<i64>().map_err(|e| ScoreParseError {
                    message: format!("Invalid soft score '{}': {}", s, e),
                })
            })
            .collect();

        Ok(BendableScore::of(hard_scores?, soft_scores?))
    }

    fn to_string_repr(&self) -> String {
        format!("{}", self)
    }
}
