//! # declscope Prelude
//!
//! Import this module to get quick access to the types needed to describe metadata and
//! render it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all declscope operations
pub use crate::Error;

/// The result type used throughout declscope
pub use crate::Result;

// ================================================================================================
// Rendering
// ================================================================================================

/// The rendering engine and its configuration
pub use crate::render::{RenderConfig, Renderer};

/// Target languages and their descriptor tables
pub use crate::render::{Language, LanguageDescriptor, CSHARP, VISUAL_BASIC};

// ================================================================================================
// Metadata Model
// ================================================================================================

/// Type system components
pub use crate::metadata::typesystem::{
    GenericOwner, PrimitiveKind, TypeDefinition, TypeKind, TypeRc, TypeRef, TypeReference,
    TypeRegistry,
};

/// Members
pub use crate::metadata::{
    field::FieldDefinition,
    method::{MethodDefinition, MethodModifiers},
    param::ParameterDefinition,
};

/// Tagged union over all renderable nodes
pub use crate::metadata::node::MetadataNode;

/// Assembly references
pub use crate::metadata::identity::AssemblyReference;
