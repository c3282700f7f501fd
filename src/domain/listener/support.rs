//! Listener registry and shared lifecycle state machine.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CoreError, Result};

use super::traits::VariableListener;

/// Lifecycle state shared by every listener registered with one
/// [`VariableListenerSupport`] (and by each supply driving itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerLifecycle {
    /// No working solution has been loaded yet.
    Uninitialized,
    /// Derived state is live and incrementally maintained.
    Active,
    /// Derived state has been released; reads are invalid until reset.
    Cleared,
}

/// Explicit registry of variable listeners for one working solution.
///
/// Listeners are keyed by the genuine variable they depend on and are
/// dispatched in registration order, so that when multiple shadow
/// variables depend on the same genuine variable, all of them observe
/// `before` prior to the mutation and `after` prior to score
/// recalculation, deterministically.
///
/// The support owns the lifecycle state machine
/// `Uninitialized -> Active -> Cleared` and validates the
/// `before`/`after` bracket protocol: exactly one open bracket at a time,
/// and `after` must name the same entity and variable as the `before`
/// that opened it. Violations are [`CoreError::InvalidState`] or
/// [`CoreError::StateSequence`] and indicate a bug in the move/search
/// layer.
pub struct VariableListenerSupport<S> {
    /// All listeners, in registration order.
    listeners: Vec<Box<dyn VariableListener<S>>>,
    /// Listener indices per source variable, in registration order.
    by_source: HashMap<String, Vec<usize>>,
    state: ListenerLifecycle,
    /// The (entity_index, variable) of the currently open bracket.
    open_bracket: Option<(usize, String)>,
}

impl<S> Default for VariableListenerSupport<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> VariableListenerSupport<S> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        VariableListenerSupport {
            listeners: Vec::new(),
            by_source: HashMap::new(),
            state: ListenerLifecycle::Uninitialized,
            open_bracket: None,
        }
    }

    /// Registers a listener. Dispatch order follows registration order
    /// within each source variable.
    pub fn register(&mut self, listener: Box<dyn VariableListener<S>>) {
        let source = listener.source_variable().to_string();
        let index = self.listeners.len();
        self.listeners.push(listener);
        self.by_source.entry(source).or_default().push(index);
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> ListenerLifecycle {
        self.state
    }

    /// Activates the registry: every listener rebuilds its derived state
    /// from a full scan of `solution`.
    ///
    /// Valid from `Uninitialized` or `Cleared` only.
    pub fn reset_working_solution(&mut self, solution: &S) -> Result<()> {
        if self.state == ListenerLifecycle::Active {
            return Err(CoreError::InvalidState(
                "reset_working_solution called while already active; \
                 clear_working_solution first"
                    .to_string(),
            ));
        }
        for listener in &mut self.listeners {
            listener.reset_working_solution(solution)?;
        }
        self.state = ListenerLifecycle::Active;
        self.open_bracket = None;
        debug!(listeners = self.listeners.len(), "working solution reset");
        Ok(())
    }

    /// Notifies every listener of `variable` that the entity at
    /// `entity_index` is about to change, in registration order.
    pub fn before_variable_changed(
        &mut self,
        solution: &S,
        entity_index: usize,
        variable: &str,
    ) -> Result<()> {
        self.require_active("before_variable_changed")?;
        if let Some((open_entity, open_variable)) = &self.open_bracket {
            return Err(CoreError::StateSequence(format!(
                "before_variable_changed(entity {}, variable '{}') while the bracket \
                 for entity {} variable '{}' is still open",
                entity_index, variable, open_entity, open_variable
            )));
        }
        if let Some(indices) = self.by_source.get(variable) {
            // Indices were recorded in registration order.
            for &i in indices {
                self.listeners[i].before_variable_changed(solution, entity_index)?;
            }
        }
        self.open_bracket = Some((entity_index, variable.to_string()));
        Ok(())
    }

    /// Notifies every listener of `variable` that the entity at
    /// `entity_index` has changed, in registration order.
    ///
    /// Must close the bracket opened by the matching
    /// `before_variable_changed`.
    pub fn after_variable_changed(
        &mut self,
        solution: &S,
        entity_index: usize,
        variable: &str,
    ) -> Result<()> {
        self.require_active("after_variable_changed")?;
        match self.open_bracket.take() {
            Some((open_entity, open_variable))
                if open_entity == entity_index && open_variable == variable => {}
            Some((open_entity, open_variable)) => {
                // Restore so the caller can still close the real bracket.
                let err = CoreError::StateSequence(format!(
                    "after_variable_changed(entity {}, variable '{}') does not match the \
                     open bracket (entity {}, variable '{}')",
                    entity_index, variable, open_entity, open_variable
                ));
                self.open_bracket = Some((open_entity, open_variable));
                return Err(err);
            }
            None => {
                return Err(CoreError::StateSequence(format!(
                    "after_variable_changed(entity {}, variable '{}') without a \
                     preceding before_variable_changed",
                    entity_index, variable
                )));
            }
        }
        if let Some(indices) = self.by_source.get(variable) {
            for &i in indices {
                self.listeners[i].after_variable_changed(solution, entity_index)?;
            }
        }
        Ok(())
    }

    /// Clears the registry: every listener releases its derived state.
    ///
    /// Valid from `Active` only; an open bracket is a contract violation.
    pub fn clear_working_solution(&mut self) -> Result<()> {
        self.require_active("clear_working_solution")?;
        if let Some((entity, variable)) = &self.open_bracket {
            return Err(CoreError::StateSequence(format!(
                "clear_working_solution while the bracket for entity {} variable '{}' \
                 is still open",
                entity, variable
            )));
        }
        for listener in &mut self.listeners {
            listener.clear_working_solution()?;
        }
        self.state = ListenerLifecycle::Cleared;
        debug!("working solution cleared");
        Ok(())
    }

    fn require_active(&self, operation: &str) -> Result<()> {
        if self.state != ListenerLifecycle::Active {
            return Err(CoreError::InvalidState(format!(
                "{} called in {:?} state; call reset_working_solution first",
                operation, self.state
            )));
        }
        Ok(())
    }
}

impl<S> std::fmt::Debug for VariableListenerSupport<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariableListenerSupport")
            .field("listener_count", &self.listeners.len())
            .field("state", &self.state)
            .field("open_bracket", &self.open_bracket)
            .finish()
    }
}
