//! Variable descriptor.

use super::variable::{ShadowVariableKind, VariableType};

/// Describes a planning variable at runtime.
///
/// Immutable metadata record: built once when the problem model is wired
/// up, then shared by the listener framework and the supplies that track
/// the variable.
#[derive(Debug, Clone)]
pub struct VariableDescriptor {
    /// Name of the variable (field name).
    pub name: &'static str,
    /// Type of the variable.
    pub variable_type: VariableType,
    /// Whether the variable can be unassigned (None).
    pub allows_unassigned: bool,
    /// For shadow variables: the genuine variable this shadow depends on.
    ///
    /// Determines which change notifications reach the shadow's listener
    /// and in what registration bucket it is ordered.
    pub source_variable: Option<&'static str>,
}

impl VariableDescriptor {
    /// Creates a new genuine variable descriptor.
    pub fn genuine(name: &'static str) -> Self {
        VariableDescriptor {
            name,
            variable_type: VariableType::Genuine,
            allows_unassigned: false,
            source_variable: None,
        }
    }

    /// Creates a new shadow variable descriptor.
    pub fn shadow(name: &'static str, kind: ShadowVariableKind) -> Self {
        VariableDescriptor {
            name,
            variable_type: VariableType::Shadow(kind),
            allows_unassigned: true,
            source_variable: None,
        }
    }

    /// Sets whether unassigned values are allowed.
    pub fn with_allows_unassigned(mut self, allows: bool) -> Self {
        self.allows_unassigned = allows;
        self
    }

    /// Sets the genuine source variable for shadow variables.
    pub fn with_source(mut self, variable: &'static str) -> Self {
        self.source_variable = Some(variable);
        self
    }

    /// Returns true if this describes a genuine variable.
    pub fn is_genuine(&self) -> bool {
        self.variable_type.is_genuine()
    }

    /// Returns true if this describes a shadow variable.
    pub fn is_shadow(&self) -> bool {
        self.variable_type.is_shadow()
    }
}
