//! Owner of a graph of type references.
//!
//! Nodes of the type model point at each other through weak [`TypeRef`] handles wherever a
//! cycle is possible (generic constraints). Something has to keep the nodes alive while a
//! declaration is rendered; in a host that is the loaded assembly, in tests and small tools
//! it is a `TypeRegistry`.

use std::sync::Arc;

use dashmap::DashMap;

use crate::metadata::typesystem::{PrimitiveKind, TypeRc, TypeRef, TypeReference};

/// Append-only store of type references, indexed by full name.
///
/// Insertion is possible through a shared reference, so a registry can be filled from
/// several threads and handed to [`crate::Renderer::render_batch`] afterwards.
pub struct TypeRegistry {
    /// All registered types, in insertion order
    types: boxcar::Vec<TypeRc>,
    /// Full name (markers included) to indices into `types`
    types_by_fullname: DashMap<String, Vec<usize>>,
}

impl TypeRegistry {
    /// Create a new, empty registry
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: boxcar::Vec::new(),
            types_by_fullname: DashMap::new(),
        }
    }

    /// Take ownership of `new_type` and return a shared handle to it
    pub fn insert(&self, new_type: TypeReference) -> TypeRc {
        let fullname = new_type.fullname();
        let type_rc = Arc::new(new_type);
        let index = self.types.push(type_rc.clone());

        self.types_by_fullname
            .entry(fullname)
            .or_default()
            .push(index);

        type_rc
    }

    /// Register (or reuse) the reference to a built-in type
    pub fn primitive(&self, kind: PrimitiveKind) -> TypeRc {
        if let Some(existing) = self.get_by_fullname(&kind.fullname()).into_iter().next() {
            return existing;
        }
        self.insert(TypeReference::primitive(kind))
    }

    /// Register `constraint` and attach it to the generic parameter `parameter`.
    ///
    /// Returns the registered constraint, or `None` if `parameter` is not a generic parameter.
    pub fn constrain(&self, parameter: &TypeRc, constraint: TypeReference) -> Option<TypeRc> {
        parameter.constraints()?;

        let constraint = self.insert(constraint);
        parameter.add_constraint(&constraint);
        Some(constraint)
    }

    /// All types registered under `fullname`, in insertion order
    pub fn get_by_fullname(&self, fullname: &str) -> Vec<TypeRc> {
        match self.types_by_fullname.get(fullname) {
            Some(indices) => indices
                .value()
                .iter()
                .filter_map(|index| self.types.get(*index).cloned())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Weak handle to the first type registered under `fullname`
    pub fn get_ref(&self, fullname: &str) -> Option<TypeRef> {
        self.get_by_fullname(fullname)
            .first()
            .map(TypeRef::new)
    }

    /// Get the number of registered types
    pub fn len(&self) -> usize {
        self.types.count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.count() == 0
    }

    /// Get all types in the registry, in insertion order
    pub fn all_types(&self) -> Vec<TypeRc> {
        self.types.iter().map(|(_, entry)| entry.clone()).collect()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
