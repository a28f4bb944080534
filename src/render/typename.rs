//! Structured type names.
//!
//! Type references are rendered in two phases: [`TypeNameBuilder::lower`] walks the metadata
//! and resolves every naming decision (markers, namespaces, aliases, which constraints to
//! show) into a [`TypeName`] tree, then [`TypeName::write_to`] serializes that tree in a
//! single pass. Nothing is emitted before the whole structure is known, so emitted text
//! never needs patching.

use tracing::{trace, warn};

use crate::{
    metadata::typesystem::{
        strip_arity_marker, strip_reference_marker, TypeKind, TypeRc, TypeReference,
    },
    render::{buffer::OutputBuffer, config::RenderConfig, language::ConstraintStyle},
    Error, LanguageDescriptor, Result,
};

/// A fully resolved type name, ready to serialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    /// A name emitted as is (`Integer`, `System.Text.StringBuilder`)
    Named(String),
    /// A generic instantiation (`List(Of Integer)`)
    Generic {
        /// Base name without arity marker
        base: String,
        /// Generic arguments, in order
        arguments: Vec<TypeName>,
    },
    /// A generic parameter, optionally with an inline constraint list (`T As {IComparable}`)
    Parameter {
        /// Parameter name
        name: String,
        /// Constraints to list inline, empty if none are shown
        constraints: Vec<TypeName>,
    },
    /// An array (`Integer()`, `int[,]`)
    Array {
        /// Element type
        element: Box<TypeName>,
        /// Number of dimensions
        rank: u32,
    },
}

impl TypeName {
    /// Serialize this name with the tokens of `descriptor`
    pub fn write_to(&self, descriptor: &LanguageDescriptor, out: &mut OutputBuffer) {
        match self {
            TypeName::Named(name) => out.write(name),
            TypeName::Generic { base, arguments } => {
                out.write(base);
                write_list(descriptor, out, descriptor.generic_brackets, arguments);
            }
            TypeName::Parameter { name, constraints } => {
                out.write(name);
                if let ConstraintStyle::Inline { open, close } = descriptor.constraint_style {
                    if !constraints.is_empty() {
                        write_list(descriptor, out, (open, close), constraints);
                    }
                }
            }
            TypeName::Array { element, rank } => {
                element.write_to(descriptor, out);
                out.write(descriptor.array_brackets.0);
                for _ in 1..*rank {
                    out.write(",");
                }
                out.write(descriptor.array_brackets.1);
            }
        }
    }

    /// Serialize into a fresh string
    #[must_use]
    pub fn to_text(&self, descriptor: &LanguageDescriptor) -> String {
        let mut out = OutputBuffer::new();
        self.write_to(descriptor, &mut out);
        out.into_result()
    }
}

/// Writes `items` between `brackets`, separated by the list separator
pub(crate) fn write_list(
    descriptor: &LanguageDescriptor,
    out: &mut OutputBuffer,
    brackets: (&str, &str),
    items: &[TypeName],
) {
    out.write(brackets.0);
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.write(descriptor.list_separator);
        }
        item.write_to(descriptor, out);
    }
    out.write(brackets.1);
}

/// Where a type reference appears, which decides whether constraints are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// The generic parameter is declared here (`(Of T As {IComparable})`)
    Declaration,
    /// The type is merely used (parameter, return, field type, generic argument)
    Usage,
}

/// Lowers metadata type references into [`TypeName`] trees
pub struct TypeNameBuilder<'r> {
    descriptor: &'r LanguageDescriptor,
    config: &'r RenderConfig,
}

impl<'r> TypeNameBuilder<'r> {
    /// Create a builder for one descriptor and configuration
    #[must_use]
    pub fn new(descriptor: &'r LanguageDescriptor, config: &'r RenderConfig) -> Self {
        TypeNameBuilder { descriptor, config }
    }

    /// Resolve `ty`, found at `site` and nested `depth` levels deep, into a `TypeName`.
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] if expansion nests deeper than the configured
    /// maximum, and [`Error::Malformed`] if a constraint of a generic parameter no longer
    /// exists.
    pub fn lower(&self, ty: &TypeReference, site: Site, depth: usize) -> Result<TypeName> {
        if depth > self.config.max_depth {
            warn!(
                name = %ty.name,
                max_depth = self.config.max_depth,
                "type expansion exceeded the render depth"
            );
            return Err(Error::RenderDepthExceeded(self.config.max_depth));
        }

        trace!(name = %ty.name, namespace = %ty.namespace, ?site, depth, "lowering type");

        match &ty.kind {
            TypeKind::GenericInstance { arguments } => {
                let arguments = self.lower_all(arguments, depth)?;
                Ok(TypeName::Generic {
                    base: self.display_name(ty),
                    arguments,
                })
            }
            TypeKind::GenericParameter { constraints, .. } => {
                let name = strip_reference_marker(&ty.name).to_string();
                if !self.shows_inline_constraints(site) {
                    return Ok(TypeName::Parameter {
                        name,
                        constraints: Vec::new(),
                    });
                }

                let mut lowered = Vec::with_capacity(constraints.count());
                for (_, constraint) in constraints.iter() {
                    let constraint = constraint.upgrade().ok_or_else(|| {
                        malformed_error!("Constraint of generic parameter '{}' was dropped", name)
                    })?;
                    lowered.push(self.lower(&constraint, Site::Usage, depth + 1)?);
                }

                Ok(TypeName::Parameter {
                    name,
                    constraints: lowered,
                })
            }
            TypeKind::Array { element, rank } => Ok(TypeName::Array {
                element: Box::new(self.lower(element, Site::Usage, depth + 1)?),
                rank: *rank,
            }),
            TypeKind::Ordinary => {
                if self.config.use_aliases {
                    if let Some(alias) = ty
                        .primitive_kind()
                        .and_then(|kind| self.descriptor.alias_of(kind))
                    {
                        return Ok(TypeName::Named(alias.to_string()));
                    }
                }
                Ok(TypeName::Named(self.display_name(ty)))
            }
        }
    }

    /// Lower the constraints of a generic parameter for a where-clause
    ///
    /// # Errors
    /// Same as [`TypeNameBuilder::lower`].
    pub fn lower_constraints(&self, parameter: &TypeReference) -> Result<Vec<TypeName>> {
        let Some(constraints) = parameter.constraints() else {
            return Ok(Vec::new());
        };

        let mut lowered = Vec::with_capacity(constraints.count());
        for (_, constraint) in constraints.iter() {
            let constraint = constraint.upgrade().ok_or_else(|| {
                malformed_error!(
                    "Constraint of generic parameter '{}' was dropped",
                    parameter.name
                )
            })?;
            lowered.push(self.lower(&constraint, Site::Usage, 1)?);
        }
        Ok(lowered)
    }

    fn lower_all(&self, types: &[TypeRc], depth: usize) -> Result<Vec<TypeName>> {
        types
            .iter()
            .map(|ty| self.lower(ty, Site::Usage, depth + 1))
            .collect()
    }

    fn shows_inline_constraints(&self, site: Site) -> bool {
        match self.descriptor.constraint_style {
            ConstraintStyle::Inline { .. } => {
                site == Site::Declaration || self.config.usage_constraints
            }
            ConstraintStyle::WhereClause { .. } => false,
        }
    }

    /// Name without reference or arity marker, namespace-qualified if configured
    fn display_name(&self, ty: &TypeReference) -> String {
        let name = strip_arity_marker(strip_reference_marker(&ty.name));
        if ty.namespace.is_empty() || !self.config.qualify_namespaces {
            name.to_string()
        } else {
            format!(
                "{}{}{}",
                ty.namespace, self.descriptor.namespace_separator, name
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        metadata::typesystem::{GenericOwner, PrimitiveKind, TypeRegistry},
        render::language::{CSHARP, VISUAL_BASIC},
    };

    fn render(
        descriptor: &LanguageDescriptor,
        config: &RenderConfig,
        ty: &TypeReference,
    ) -> String {
        TypeNameBuilder::new(descriptor, config)
            .lower(ty, Site::Usage, 0)
            .unwrap()
            .to_text(descriptor)
    }

    #[test]
    fn test_ordinary_and_alias() {
        let config = RenderConfig::default();
        let int32 = TypeReference::primitive(PrimitiveKind::Int32);
        let builder = TypeReference::new("System.Text", "StringBuilder");

        assert_eq!(render(&VISUAL_BASIC, &config, &int32), "Integer");
        assert_eq!(render(&CSHARP, &config, &int32), "int");
        assert_eq!(
            render(&VISUAL_BASIC, &config, &builder),
            "System.Text.StringBuilder"
        );

        let plain = config.with_aliases(false).with_namespaces(false);
        assert_eq!(render(&VISUAL_BASIC, &plain, &int32), "Int32");
        assert_eq!(render(&VISUAL_BASIC, &plain, &builder), "StringBuilder");
    }

    #[test]
    fn test_by_ref_marker_is_stripped() {
        let config = RenderConfig::default();
        let by_ref = TypeReference::primitive(PrimitiveKind::Int32).by_ref();
        let widget = TypeReference::new("MyApp", "Widget").by_ref();

        assert_eq!(render(&VISUAL_BASIC, &config, &by_ref), "Integer");
        assert_eq!(render(&CSHARP, &config, &widget), "MyApp.Widget");
    }

    #[test]
    fn test_generic_instance() {
        let config = RenderConfig::default();
        let int32: TypeRc = Arc::new(TypeReference::primitive(PrimitiveKind::Int32));
        let string: TypeRc = Arc::new(TypeReference::primitive(PrimitiveKind::String));
        let dict = TypeReference::generic_instance(
            "System.Collections.Generic",
            "Dictionary`2",
            vec![string, int32],
        );

        assert_eq!(
            render(&VISUAL_BASIC, &config, &dict),
            "System.Collections.Generic.Dictionary(Of String, Integer)"
        );
        assert_eq!(
            render(&CSHARP, &config, &dict),
            "System.Collections.Generic.Dictionary<string, int>"
        );
    }

    #[test]
    fn test_array() {
        let config = RenderConfig::default();
        let int32: TypeRc = Arc::new(TypeReference::primitive(PrimitiveKind::Int32));
        let vector = TypeReference::array(int32.clone(), 1);
        let matrix = TypeReference::array(int32, 2);

        assert_eq!(render(&VISUAL_BASIC, &config, &vector), "Integer()");
        assert_eq!(render(&VISUAL_BASIC, &config, &matrix), "Integer(,)");
        assert_eq!(render(&CSHARP, &config, &vector), "int[]");
        assert_eq!(render(&CSHARP, &config, &matrix), "int[,]");
    }

    #[test]
    fn test_parameter_constraints_by_site() {
        let registry = TypeRegistry::new();
        let t = registry.insert(TypeReference::generic_parameter("T", GenericOwner::Method, 0));
        registry.constrain(&t, TypeReference::new("System", "IComparable"));
        registry.constrain(&t, TypeReference::new("System", "IDisposable"));

        let legacy = RenderConfig::legacy();
        let strict = RenderConfig::strict();
        let lower = |config: &RenderConfig, site| {
            TypeNameBuilder::new(&VISUAL_BASIC, config)
                .lower(&t, site, 0)
                .unwrap()
                .to_text(&VISUAL_BASIC)
        };

        let listed = "T As {System.IComparable, System.IDisposable}";
        assert_eq!(lower(&legacy, Site::Declaration), listed);
        assert_eq!(lower(&legacy, Site::Usage), listed);
        assert_eq!(lower(&strict, Site::Declaration), listed);
        assert_eq!(lower(&strict, Site::Usage), "T");

        // where-clause languages never list constraints inline
        let csharp = TypeNameBuilder::new(&CSHARP, &legacy)
            .lower(&t, Site::Declaration, 0)
            .unwrap();
        assert_eq!(csharp.to_text(&CSHARP), "T");
    }

    #[test]
    fn test_lower_constraints() {
        let registry = TypeRegistry::new();
        let t = registry.insert(TypeReference::generic_parameter("T", GenericOwner::Type, 0));
        registry.constrain(&t, TypeReference::new("System", "IDisposable"));

        let config = RenderConfig::default();
        let constraints = TypeNameBuilder::new(&CSHARP, &config)
            .lower_constraints(&t)
            .unwrap();
        assert_eq!(
            constraints,
            vec![TypeName::Named("System.IDisposable".to_string())]
        );

        let plain = TypeReference::primitive(PrimitiveKind::Int32);
        assert!(TypeNameBuilder::new(&CSHARP, &config)
            .lower_constraints(&plain)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_depth_limit() {
        let config = RenderConfig::default().with_max_depth(2);
        let int32: TypeRc = Arc::new(TypeReference::primitive(PrimitiveKind::Int32));
        let inner: TypeRc = Arc::new(TypeReference::generic_instance(
            "System.Collections.Generic",
            "List`1",
            vec![int32],
        ));
        let middle: TypeRc = Arc::new(TypeReference::generic_instance(
            "System.Collections.Generic",
            "List`1",
            vec![inner],
        ));
        let outer = TypeReference::generic_instance(
            "System.Collections.Generic",
            "List`1",
            vec![middle.clone()],
        );

        let builder = TypeNameBuilder::new(&VISUAL_BASIC, &config);
        assert!(builder.lower(&middle, Site::Usage, 0).is_ok());
        assert!(matches!(
            builder.lower(&outer, Site::Usage, 0),
            Err(Error::RenderDepthExceeded(2))
        ));
    }

    #[test]
    fn test_dropped_constraint_is_malformed() {
        let t = TypeReference::generic_parameter("T", GenericOwner::Type, 0);
        {
            let transient: TypeRc = Arc::new(TypeReference::new("System", "IDisposable"));
            t.add_constraint(&transient);
        }

        let config = RenderConfig::default();
        let result = TypeNameBuilder::new(&VISUAL_BASIC, &config).lower(&t, Site::Declaration, 0);
        assert!(matches!(result, Err(Error::Malformed { .. })));
    }
}
