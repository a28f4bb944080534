//! The closed set of metadata nodes a renderer accepts.

use crate::metadata::{
    field::FieldDefinition, method::MethodDefinition, param::ParameterDefinition,
    typesystem::{TypeDefinition, TypeReference},
};

/// A borrowed metadata node, tagged by kind.
///
/// The renderer matches on this instead of dispatching through per-node visitor methods, so
/// adding a language never touches the node types.
#[derive(Debug, Clone, Copy)]
pub enum MetadataNode<'a> {
    /// A type definition, rendered as a type signature
    Type(&'a TypeDefinition),
    /// A method definition, rendered as signature plus stub body
    Method(&'a MethodDefinition),
    /// A field definition
    Field(&'a FieldDefinition),
    /// A single method parameter
    Parameter(&'a ParameterDefinition),
    /// A generic parameter at its declaration site (name plus constraints)
    GenericParameter(&'a TypeReference),
}

impl MetadataNode<'_> {
    /// The metadata name of the node, markers included
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MetadataNode::Type(def) => &def.name,
            MetadataNode::Method(method) => &method.name,
            MetadataNode::Field(field) => &field.name,
            MetadataNode::Parameter(param) => &param.name,
            MetadataNode::GenericParameter(param) => &param.name,
        }
    }
}

impl<'a> From<&'a TypeDefinition> for MetadataNode<'a> {
    fn from(node: &'a TypeDefinition) -> Self {
        MetadataNode::Type(node)
    }
}

impl<'a> From<&'a MethodDefinition> for MetadataNode<'a> {
    fn from(node: &'a MethodDefinition) -> Self {
        MetadataNode::Method(node)
    }
}

impl<'a> From<&'a FieldDefinition> for MetadataNode<'a> {
    fn from(node: &'a FieldDefinition) -> Self {
        MetadataNode::Field(node)
    }
}

impl<'a> From<&'a ParameterDefinition> for MetadataNode<'a> {
    fn from(node: &'a ParameterDefinition) -> Self {
        MetadataNode::Parameter(node)
    }
}
