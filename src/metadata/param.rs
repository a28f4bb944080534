//! Method parameters.

use crate::metadata::typesystem::TypeRc;

/// A single method parameter
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    /// Parameter name
    pub name: String,
    /// Parameter type; by-reference parameters carry the `&` marker on the type name
    pub parameter_type: TypeRc,
    /// 1-based position in the owning method's parameter list (0 is the return value)
    pub sequence: u16,
}

impl ParameterDefinition {
    /// Create a new parameter with sequence number 0
    pub fn new(name: impl Into<String>, parameter_type: impl Into<TypeRc>) -> Self {
        ParameterDefinition {
            name: name.into(),
            parameter_type: parameter_type.into(),
            sequence: 0,
        }
    }

    /// Set the sequence number
    #[must_use]
    pub fn with_sequence(mut self, sequence: u16) -> Self {
        self.sequence = sequence;
        self
    }

    /// Is this parameter passed by reference?
    #[must_use]
    pub fn is_by_ref(&self) -> bool {
        self.parameter_type.is_by_ref()
    }
}
