//! Variable type definitions

/// The type of a planning variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// A genuine planning variable that the solver optimizes.
    Genuine,
    /// A shadow variable computed from genuine variables.
    Shadow(ShadowVariableKind),
}

/// The kind of shadow variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowVariableKind {
    /// Inverse of another variable: "which entities point at this value".
    InverseRelation,
    /// Custom shadow variable with a user-defined listener.
    Custom,
}

impl VariableType {
    /// Returns true if this is a genuine (non-shadow) variable.
    pub fn is_genuine(&self) -> bool {
        matches!(self, VariableType::Genuine)
    }

    /// Returns true if this is a shadow variable.
    pub fn is_shadow(&self) -> bool {
        matches!(self, VariableType::Shadow(_))
    }
}

impl ShadowVariableKind {
    /// Returns true if this shadow variable requires a user-defined
    /// listener rather than a built-in one.
    pub fn requires_custom_listener(&self) -> bool {
        matches!(self, ShadowVariableKind::Custom)
    }
}
