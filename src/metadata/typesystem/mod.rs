//! .NET type model consumed by the renderer.
//!
//! This module provides the read-only view of types the host hands to the rendering engine:
//! named references, generic instantiations, generic parameters with their constraints,
//! arrays, and type definitions. Naming follows the runtime conventions, so by-reference
//! types carry a trailing `&` and generic types a trailing `` `N `` arity marker.
//!
//! # Key Components
//!
//! - [`TypeReference`]: A type as it is used in a signature (return, parameter, field, argument)
//! - [`TypeKind`]: The shape of a reference (ordinary, generic instance, generic parameter, array)
//! - [`TypeDefinition`]: A declared type, input of type signature rendering
//! - [`TypeRegistry`]: Owner of a graph of types, so weak constraint links stay valid
//! - [`PrimitiveKind`]: Built-in types that languages spell with a keyword
//!
//! # Examples
//!
//! ```rust
//! use declscope::metadata::typesystem::{GenericOwner, TypeReference, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let t = registry.insert(TypeReference::generic_parameter("T", GenericOwner::Method, 0));
//! let comparable = registry.insert(TypeReference::new("System", "IComparable"));
//! t.add_constraint(&comparable);
//!
//! assert!(t.is_generic_parameter());
//! assert_eq!(t.constraints().map(|c| c.count()), Some(1));
//! ```

mod base;
mod primitives;
mod registry;

use std::{fmt, sync::Arc};

pub use base::{
    strip_arity_marker, strip_reference_marker, GenericOwner, TypeKind, TypeRef, TypeRefList,
    ARITY_MARKER, ARRAY_MARKER, REFERENCE_MARKER, VOID_FULLNAME,
};
pub use primitives::PrimitiveKind;
pub use registry::TypeRegistry;

/// Reference to a `TypeReference`
pub type TypeRc = Arc<TypeReference>;

/// A type as it appears inside a signature.
///
/// `name` is the raw metadata name and may carry the arity marker (`List`1`) and the
/// reference marker (`Int32&`); the renderer strips both.
#[derive(Clone)]
pub struct TypeReference {
    /// `TypeNamespace` (can be empty, e.g. for generic parameters and nested types)
    pub namespace: String,
    /// `TypeName`, including markers
    pub name: String,
    /// The shape of this reference
    pub kind: TypeKind,
}

impl TypeReference {
    /// Create a plain named type reference
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeReference {
            namespace: namespace.into(),
            name: name.into(),
            kind: TypeKind::Ordinary,
        }
    }

    /// Create a reference to a built-in type
    #[must_use]
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(PrimitiveKind::NAMESPACE, kind.name())
    }

    /// Create a reference to `System.Void`, the return type of procedures
    #[must_use]
    pub fn void() -> Self {
        Self::primitive(PrimitiveKind::Void)
    }

    /// Create a generic instantiation. `name` is the generic type's metadata name including
    /// its arity marker, e.g. `Dictionary`2`.
    pub fn generic_instance(
        namespace: impl Into<String>,
        name: impl Into<String>,
        arguments: Vec<TypeRc>,
    ) -> Self {
        TypeReference {
            namespace: namespace.into(),
            name: name.into(),
            kind: TypeKind::GenericInstance { arguments },
        }
    }

    /// Create an unbound generic parameter without constraints
    pub fn generic_parameter(name: impl Into<String>, owner: GenericOwner, position: u32) -> Self {
        TypeReference {
            namespace: String::new(),
            name: name.into(),
            kind: TypeKind::GenericParameter {
                owner,
                position,
                constraints: Arc::new(boxcar::Vec::new()),
            },
        }
    }

    /// Create an array of `element` with `rank` dimensions
    #[must_use]
    pub fn array(element: TypeRc, rank: u32) -> Self {
        let rank = rank.max(1);
        let dimensions = ",".repeat(rank as usize - 1);
        TypeReference {
            namespace: element.namespace.clone(),
            name: format!("{}[{}]", element.name, dimensions),
            kind: TypeKind::Array { element, rank },
        }
    }

    /// The by-reference version of this type (`Int32` becomes `Int32&`).
    ///
    /// Generic parameters share their constraint list with `self`.
    #[must_use]
    pub fn by_ref(&self) -> Self {
        if self.is_by_ref() {
            return self.clone();
        }

        TypeReference {
            namespace: self.namespace.clone(),
            name: format!("{}{}", self.name, REFERENCE_MARKER),
            kind: self.kind.clone(),
        }
    }

    /// Returns the full name (Namespace.Name) of the entity, markers included
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }

    /// Is this the `System.Void` sentinel?
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.fullname() == VOID_FULLNAME
    }

    /// Does the name carry the by-reference marker?
    #[must_use]
    pub fn is_by_ref(&self) -> bool {
        self.name.ends_with(REFERENCE_MARKER)
    }

    /// Is this an unbound generic parameter?
    #[must_use]
    pub fn is_generic_parameter(&self) -> bool {
        matches!(self.kind, TypeKind::GenericParameter { .. })
    }

    /// Is this a generic instantiation?
    #[must_use]
    pub fn is_generic_instance(&self) -> bool {
        matches!(self.kind, TypeKind::GenericInstance { .. })
    }

    /// Number of generic arguments of an instantiation, otherwise the count encoded in the
    /// name's arity marker (0 if there is none)
    #[must_use]
    pub fn arity(&self) -> usize {
        if let TypeKind::GenericInstance { arguments } = &self.kind {
            return arguments.len();
        }

        let name = strip_reference_marker(&self.name);
        match name.rfind(ARITY_MARKER) {
            Some(pos) => name[pos + 1..].parse().unwrap_or(0),
            None => 0,
        }
    }

    /// The generic arguments of an instantiation (empty for every other kind)
    #[must_use]
    pub fn generic_arguments(&self) -> &[TypeRc] {
        match &self.kind {
            TypeKind::GenericInstance { arguments } => arguments,
            _ => &[],
        }
    }

    /// The constraint list of a generic parameter
    #[must_use]
    pub fn constraints(&self) -> Option<&TypeRefList> {
        match &self.kind {
            TypeKind::GenericParameter { constraints, .. } => Some(constraints),
            _ => None,
        }
    }

    /// Append a constraint to a generic parameter.
    ///
    /// The constraint is held weakly; keep `constraint` alive in the owning graph. Returns
    /// `false` (and does nothing) if this type is not a generic parameter.
    pub fn add_constraint(&self, constraint: &TypeRc) -> bool {
        match &self.kind {
            TypeKind::GenericParameter { constraints, .. } => {
                constraints.push(TypeRef::new(constraint));
                true
            }
            _ => false,
        }
    }

    /// The built-in type this reference names, ignoring a by-reference marker
    #[must_use]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        if self.namespace != PrimitiveKind::NAMESPACE {
            return None;
        }
        PrimitiveKind::from_fullname(&format!(
            "{}.{}",
            self.namespace,
            strip_reference_marker(&self.name)
        ))
    }
}

impl fmt::Debug for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            TypeKind::Ordinary => "Ordinary",
            TypeKind::GenericInstance { .. } => "GenericInstance",
            TypeKind::GenericParameter { .. } => "GenericParameter",
            TypeKind::Array { .. } => "Array",
        };
        f.debug_struct("TypeReference")
            .field("namespace", &self.namespace)
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// A declared type, as shown in a type signature (`Dictionary(Of TKey, TValue)`)
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    /// `TypeNamespace`
    pub namespace: String,
    /// `TypeName`, including the arity marker for generic types
    pub name: String,
    /// Generic parameters declared by this type, in declaration order
    pub generic_params: Vec<TypeRc>,
}

impl TypeDefinition {
    /// Create a new type definition without generic parameters
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDefinition {
            namespace: namespace.into(),
            name: name.into(),
            generic_params: Vec::new(),
        }
    }

    /// Declare the generic parameters of this type
    #[must_use]
    pub fn with_generic_params(mut self, generic_params: Vec<TypeRc>) -> Self {
        self.generic_params = generic_params;
        self
    }

    /// Returns the full name (Namespace.Name) of the entity
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }
}
