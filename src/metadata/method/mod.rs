//! Method definitions as seen by the renderer.
//!
//! A [`MethodDefinition`] carries exactly what a declaration needs: name, modifiers, return
//! type, parameters and generic parameters. Bodies are never part of the model, the renderer
//! only produces stub bodies.

mod types;

pub use types::*;

use std::sync::Arc;

use crate::metadata::{
    param::ParameterDefinition,
    typesystem::{TypeRc, TypeReference},
};

/// A method declaration
#[derive(Debug, Clone)]
pub struct MethodDefinition {
    /// Method name (`.ctor`/`.cctor` for constructors)
    pub name: String,
    /// Modifier flags
    pub modifiers: MethodModifiers,
    /// Return type; `System.Void` for procedures
    pub return_type: TypeRc,
    /// Parameters, in declaration order
    pub parameters: Vec<ParameterDefinition>,
    /// Generic parameters declared by this method, in declaration order
    pub generic_params: Vec<TypeRc>,
    /// The type declaring this method (if known)
    pub declaring_type: Option<TypeRc>,
}

impl MethodDefinition {
    /// Create a new instance method without parameters
    pub fn new(name: impl Into<String>, return_type: impl Into<TypeRc>) -> Self {
        MethodDefinition {
            name: name.into(),
            modifiers: MethodModifiers::HIDE_BY_SIG,
            return_type: return_type.into(),
            parameters: Vec::new(),
            generic_params: Vec::new(),
            declaring_type: None,
        }
    }

    /// Create an instance constructor of `declaring_type`
    pub fn constructor(declaring_type: impl Into<TypeRc>) -> Self {
        MethodDefinition {
            name: CONSTRUCTOR_NAME.to_string(),
            modifiers: MethodModifiers::HIDE_BY_SIG | MethodModifiers::constructor(),
            return_type: Arc::new(TypeReference::void()),
            parameters: Vec::new(),
            generic_params: Vec::new(),
            declaring_type: Some(declaring_type.into()),
        }
    }

    /// Mark this method as static
    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.modifiers |= MethodModifiers::STATIC;
        self
    }

    /// Replace the modifier flags
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: MethodModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Append a parameter; its sequence number follows the existing ones
    #[must_use]
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        parameter_type: impl Into<TypeRc>,
    ) -> Self {
        let sequence = u16::try_from(self.parameters.len() + 1).unwrap_or(u16::MAX);
        self.parameters
            .push(ParameterDefinition::new(name, parameter_type).with_sequence(sequence));
        self
    }

    /// Declare the generic parameters of this method
    #[must_use]
    pub fn with_generic_params(mut self, generic_params: Vec<TypeRc>) -> Self {
        self.generic_params = generic_params;
        self
    }

    /// Set the declaring type
    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: impl Into<TypeRc>) -> Self {
        self.declaring_type = Some(declaring_type.into());
        self
    }

    /// Is this method defined on the type rather than per instance?
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(MethodModifiers::STATIC)
    }

    /// Is this an instance constructor or a type initializer?
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.modifiers.contains(MethodModifiers::constructor())
            && (self.name == CONSTRUCTOR_NAME || self.name == STATIC_CONSTRUCTOR_NAME)
    }

    /// Does this method return `System.Void`?
    #[must_use]
    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }
}
