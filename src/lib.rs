//! SolvKit Core - score model and shadow variable infrastructure
//!
//! This crate provides the fundamental abstractions of the SolvKit
//! constraint solver:
//! - Score types for representing solution quality, with lexicographic
//!   hard/soft comparison and feasibility semantics
//! - Score definitions that parameterize a score family and build
//!   optimistic/pessimistic bounds from an initializing score trend
//! - Variable descriptors and the variable listener framework that keeps
//!   shadow variables consistent while the working solution is mutated
//! - The collection inverse variable supply, answering "which entities
//!   currently point at this value?" in O(1) per change

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{
    CollectionInverseVariableSupply, InverseCollection, ListenerLifecycle, PlanningSolution,
    ShadowVariableKind, VariableDescriptor, VariableListener, VariableListenerSupport,
    VariableType,
};
pub use error::{CoreError, Result};
pub use score::{
    BendableScore, BendableScoreDefinition, FeasibilityScore, HardMediumSoftScore,
    HardMediumSoftScoreDefinition, HardSoftScore, HardSoftScoreDefinition,
    InitializingScoreTrend, InitializingScoreTrendLevel, ParseableScore, Score, ScoreDefinition,
    ScoreLevel, ScoreParseError, SimpleScore, SimpleScoreDefinition,
};
