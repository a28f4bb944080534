use std::sync::{Arc, Weak};

use crate::metadata::typesystem::{TypeRc, TypeReference};

/// Separates a generic type's name from the number of generic parameters it declares
/// (`List`1`, `Dictionary`2`)
pub const ARITY_MARKER: char = '`';
/// Suffix marking a by-reference type (`Int32&`)
pub const REFERENCE_MARKER: char = '&';
/// Suffix of single dimensional array names (`Int32[]`)
pub const ARRAY_MARKER: &str = "[]";
/// Fully-qualified name of the sentinel return type of procedures
pub const VOID_FULLNAME: &str = "System.Void";

/// A vector that holds `TypeRef` instances (weak references)
pub type TypeRefList = Arc<boxcar::Vec<TypeRef>>;

/// A smart reference to a `TypeReference` that does not keep its target alive.
///
/// Generic constraints point back into the graph they are part of (`T : IComparable<T>`),
/// holding them weakly keeps such cycles from leaking. The metadata graph that produced the
/// nodes (e.g. a [`crate::metadata::typesystem::TypeRegistry`]) owns them.
#[derive(Clone, Debug)]
pub struct TypeRef {
    weak_ref: Weak<TypeReference>,
}

impl TypeRef {
    /// Create a new `TypeRef` from a strong reference
    pub fn new(strong_ref: &TypeRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the type, returning None if the type has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<TypeRc> {
        self.weak_ref.upgrade()
    }

    /// Check if the referenced type is still alive
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weak_ref.strong_count() > 0
    }

    /// Get the name of the referenced type (if still alive)
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.upgrade().map(|t| t.name.clone())
    }
}

impl From<&TypeRc> for TypeRef {
    fn from(strong_ref: &TypeRc) -> Self {
        Self::new(strong_ref)
    }
}

/// Which kind of definition declares a generic parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericOwner {
    /// Declared by a type (`class List<T>`)
    Type,
    /// Declared by a method (`T Max<T>(T a, T b)`)
    Method,
}

/// The shape of a type reference.
///
/// By-reference types are not a separate variant: they keep the shape of the type they refer
/// to and carry the [`REFERENCE_MARKER`] suffix on their name.
#[derive(Clone)]
pub enum TypeKind {
    /// A plain named type (`System.String`, `MyApp.Widget`)
    Ordinary,
    /// A closed or partially closed generic type (`List<Int32>`)
    GenericInstance {
        /// The generic arguments, in declaration order
        arguments: Vec<TypeRc>,
    },
    /// An unbound generic parameter (`T`)
    GenericParameter {
        /// Whether a type or a method declares the parameter
        owner: GenericOwner,
        /// Index in the owner's generic parameter list
        position: u32,
        /// Types the parameter is constrained to, in declaration order
        constraints: TypeRefList,
    },
    /// An array of `element`
    Array {
        /// The element type
        element: TypeRc,
        /// The number of dimensions
        rank: u32,
    },
}

/// Removes a trailing arity marker (`` `N ``) from a type name.
///
/// Only a marker followed exclusively by digits is removed; names without one are returned
/// unchanged.
#[must_use]
pub fn strip_arity_marker(name: &str) -> &str {
    match name.rfind(ARITY_MARKER) {
        Some(pos)
            if pos + 1 < name.len() && name[pos + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &name[..pos]
        }
        _ => name,
    }
}

/// Removes the by-reference marker from a type name, if present
#[must_use]
pub fn strip_reference_marker(name: &str) -> &str {
    name.strip_suffix(REFERENCE_MARKER).unwrap_or(name)
}
