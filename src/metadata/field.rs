//! Field definitions.

use crate::metadata::typesystem::TypeRc;

/// A field declaration
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Field type
    pub field_type: TypeRc,
    /// Defined on the type rather than per instance
    pub is_static: bool,
}

impl FieldDefinition {
    /// Create a new instance field
    pub fn new(name: impl Into<String>, field_type: impl Into<TypeRc>) -> Self {
        FieldDefinition {
            name: name.into(),
            field_type: field_type.into(),
            is_static: false,
        }
    }

    /// Mark this field as static
    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}
