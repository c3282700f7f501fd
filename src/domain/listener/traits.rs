//! Variable listener trait.

use crate::error::Result;

/// A listener that is notified when a genuine planning variable changes.
///
/// Variable listeners update shadow variables in response to genuine
/// variable changes. The listener is called with before/after
/// notifications: `before` runs while the entity still holds its old
/// value, `after` runs once the mutation has been applied and must
/// reconcile the derived state against the new value.
///
/// # Implementation Notes
///
/// - Only modify the shadow state this listener is responsible for
/// - Never modify genuine variables or problem facts
/// - Every method returns `Err` only for lifecycle contract violations;
///   those indicate a bug in the caller and are fatal to the solve
///
/// # Type Parameters
///
/// - `S`: The solution type owning the entities (indexed by `usize`)
pub trait VariableListener<S>: Send {
    /// Returns the name of the genuine variable this listener depends on.
    ///
    /// Used by [`VariableListenerSupport`](super::VariableListenerSupport)
    /// to route change notifications.
    fn source_variable(&self) -> &str;

    /// Rebuilds the derived state from scratch by scanning the working
    /// solution once. Transitions the listener to its active state.
    fn reset_working_solution(&mut self, solution: &S) -> Result<()>;

    /// Called before the source variable changes on the entity at
    /// `entity_index`.
    ///
    /// Use this to capture any old state needed for the update in
    /// `after_variable_changed`.
    fn before_variable_changed(&mut self, solution: &S, entity_index: usize) -> Result<()>;

    /// Called after the source variable has changed on the entity at
    /// `entity_index`. Reconciles derived state against the new value.
    fn after_variable_changed(&mut self, solution: &S, entity_index: usize) -> Result<()>;

    /// Releases the derived state. Reads are undefined until the next
    /// `reset_working_solution`.
    fn clear_working_solution(&mut self) -> Result<()>;
}
