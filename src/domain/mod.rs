//! Domain model for planning problems
//!
//! This module defines the structure of a planning problem as the score
//! core sees it:
//! - `PlanningSolution`: the container for the working solution and score
//! - Variable metadata: genuine variables the search mutates, shadow
//!   variables derived from them
//! - The listener framework that keeps shadow state consistent while the
//!   search mutates genuine variables move by move

mod descriptor;
pub mod listener;
pub mod supply;
mod traits;
mod variable;

pub use descriptor::VariableDescriptor;
pub use listener::{ListenerLifecycle, VariableListener, VariableListenerSupport};
pub use supply::{CollectionInverseVariableSupply, InverseCollection};
pub use traits::PlanningSolution;
pub use variable::{ShadowVariableKind, VariableType};
