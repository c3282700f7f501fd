//! Variable listener infrastructure for shadow variable updates.
//!
//! Variable listeners are notified when genuine planning variables change,
//! allowing them to update shadow variables accordingly.
//!
//! # Architecture
//!
//! - [`VariableListener`]: the before/after change contract one listener
//!   implements
//! - [`VariableListenerSupport`]: explicit registry that dispatches
//!   notifications to the listeners of the changed variable in
//!   registration order and enforces the lifecycle state machine
//!
//! # Lifecycle
//!
//! All listeners registered with one support share a single state machine
//! per working solution: `Uninitialized -> Active -> Cleared`.
//! `reset_working_solution` activates, `clear_working_solution` clears,
//! and every `before`/`after` pair must bracket exactly one mutation of
//! one genuine variable on one entity while `Active`.

mod support;
mod traits;

#[cfg(test)]
mod tests;

pub use support::{ListenerLifecycle, VariableListenerSupport};
pub use traits::VariableListener;
