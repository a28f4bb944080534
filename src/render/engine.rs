//! The rendering engine.
//!
//! One [`Renderer`] walks metadata nodes for one [`LanguageDescriptor`]. Every entry point
//! starts from a fresh [`OutputBuffer`], so a renderer can be shared freely between threads
//! and [`Renderer::render_batch`] fans out over `rayon` without any coordination.

use rayon::prelude::*;
use tracing::debug;

use crate::{
    metadata::{
        field::FieldDefinition,
        identity::AssemblyReference,
        method::MethodDefinition,
        node::MetadataNode,
        param::ParameterDefinition,
        typesystem::{
            strip_arity_marker, strip_reference_marker, TypeDefinition, TypeRc, TypeReference,
        },
    },
    render::{
        buffer::OutputBuffer,
        config::RenderConfig,
        language::{ConstraintStyle, ConstructorName, TypePlacement},
        typename::{write_list, Site, TypeName, TypeNameBuilder},
    },
    Error, LanguageDescriptor, Result,
};

/// Renders metadata nodes as declaration text of one target language.
///
/// # Examples
///
/// ```rust
/// use declscope::prelude::*;
///
/// let int32 = TypeReference::primitive(PrimitiveKind::Int32);
/// let add = MethodDefinition::new("Add", int32.clone())
///     .with_parameter("a", int32.clone())
///     .with_parameter("b", int32);
///
/// let vb = Renderer::new(&VISUAL_BASIC);
/// assert_eq!(
///     vb.render_method_signature(&add)?,
///     "Function Add(ByVal a As Integer, ByVal b As Integer) As Integer"
/// );
///
/// let cs = Renderer::new(&CSHARP);
/// assert_eq!(cs.render_method_signature(&add)?, "int Add(int a, int b)");
/// # Ok::<(), declscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'d> {
    descriptor: &'d LanguageDescriptor,
    config: RenderConfig,
}

impl<'d> Renderer<'d> {
    /// Create a renderer with the default configuration
    #[must_use]
    pub fn new(descriptor: &'d LanguageDescriptor) -> Self {
        Self::with_config(descriptor, RenderConfig::default())
    }

    /// Create a renderer with an explicit configuration
    #[must_use]
    pub fn with_config(descriptor: &'d LanguageDescriptor, config: RenderConfig) -> Self {
        Renderer { descriptor, config }
    }

    /// The language table this renderer emits
    #[must_use]
    pub fn descriptor(&self) -> &'d LanguageDescriptor {
        self.descriptor
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render any metadata node.
    ///
    /// Types render as type signatures, methods as signature plus stub body, generic
    /// parameters with their constraints.
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] or [`Error::Malformed`] if a type graph
    /// nested inside the node cannot be rendered.
    pub fn render(&self, node: MetadataNode<'_>) -> Result<String> {
        match node {
            MetadataNode::Type(def) => self.render_type_signature(def),
            MetadataNode::Method(method) => self.render_method(method),
            MetadataNode::Field(field) => self.render_field(field),
            MetadataNode::Parameter(param) => self.render_parameter(param),
            MetadataNode::GenericParameter(param) => self.render_generic_parameter(param),
        }
    }

    /// Render many nodes in parallel. Results are in input order, each one independent of
    /// the others.
    #[must_use]
    pub fn render_batch(&self, nodes: &[MetadataNode<'_>]) -> Vec<Result<String>> {
        debug!(
            language = %self.descriptor.language,
            count = nodes.len(),
            "rendering batch"
        );
        nodes.par_iter().map(|node| self.render(*node)).collect()
    }

    /// Render the signature of a method, e.g. `Shared Sub Reset()` or `static void Reset()`.
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] or [`Error::Malformed`] if a parameter,
    /// return or generic parameter type cannot be rendered.
    pub fn render_method_signature(&self, method: &MethodDefinition) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            method = %method.name,
            "rendering method signature"
        );

        let mut out = OutputBuffer::new();
        self.write_method_signature(method, &mut out)?;
        Ok(out.into_result())
    }

    /// Render a method signature followed by its stub body
    ///
    /// # Errors
    /// Same as [`Renderer::render_method_signature`].
    pub fn render_method(&self, method: &MethodDefinition) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            method = %method.name,
            "rendering method"
        );

        let mut out = OutputBuffer::new();
        self.write_method_signature(method, &mut out)?;
        self.write_method_body(method, &mut out);
        Ok(out.into_result())
    }

    /// Render a field declaration, e.g. `Dim count As Integer` or `int count;`
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] or [`Error::Malformed`] if the field type
    /// cannot be rendered.
    pub fn render_field(&self, field: &FieldDefinition) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            field = %field.name,
            "rendering field"
        );

        let d = self.descriptor;
        let mut out = OutputBuffer::new();
        out.write(if field.is_static {
            d.static_keyword
        } else {
            d.declare_keyword
        });
        self.write_declaration(&field.name, &field.field_type, &mut out)?;
        out.write(d.statement_terminator);
        Ok(out.into_result())
    }

    /// Render the signature of a type definition, e.g. `Dictionary(Of TKey, TValue)`
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] or [`Error::Malformed`] if a generic
    /// parameter constraint cannot be rendered.
    pub fn render_type_signature(&self, def: &TypeDefinition) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            name = %def.name,
            generic_params = def.generic_params.len(),
            "rendering type signature"
        );

        let mut out = OutputBuffer::new();
        if def.generic_params.is_empty() {
            out.write(&def.name);
        } else {
            out.write(strip_arity_marker(&def.name));
            self.write_generic_parameters(&def.generic_params, &mut out)?;
            self.write_where_clauses(&def.generic_params, &mut out)?;
        }
        Ok(out.into_result())
    }

    /// Render a type as it is used in a signature
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] or [`Error::Malformed`] if the type graph
    /// cannot be rendered.
    pub fn render_type_reference(&self, ty: &TypeReference) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            name = %ty.name,
            "rendering type reference"
        );

        let mut out = OutputBuffer::new();
        self.visit_type_reference(ty, Site::Usage, &mut out)?;
        Ok(out.into_result())
    }

    /// Render a single parameter, e.g. `ByRef value As Integer` or `ref int value`
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] or [`Error::Malformed`] if the parameter
    /// type cannot be rendered.
    pub fn render_parameter(&self, param: &ParameterDefinition) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            parameter = %param.name,
            "rendering parameter"
        );

        let mut out = OutputBuffer::new();
        self.visit_parameter(param, &mut out)?;
        Ok(out.into_result())
    }

    /// Render a generic parameter at its declaration site: `T As {IComparable}` or
    /// `T : IComparable`
    ///
    /// # Errors
    /// Returns [`Error::RenderDepthExceeded`] or [`Error::Malformed`] if a constraint
    /// cannot be rendered.
    pub fn render_generic_parameter(&self, param: &TypeReference) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            parameter = %param.name,
            "rendering generic parameter"
        );

        let mut out = OutputBuffer::new();
        self.visit_type_reference(param, Site::Declaration, &mut out)?;
        if let ConstraintStyle::WhereClause { separator, .. } = self.descriptor.constraint_style {
            let constraints = self.builder().lower_constraints(param)?;
            if !constraints.is_empty() {
                out.write(separator);
                self.write_names(&constraints, &mut out);
            }
        }
        Ok(out.into_result())
    }

    /// Statement-level source generation of a method body.
    ///
    /// Only declarations and stub bodies are produced, so this always fails.
    ///
    /// # Errors
    /// Always returns [`Error::UnsupportedOperation`].
    pub fn generate_source_code(
        &self,
        method: &MethodDefinition,
        references: &[AssemblyReference],
    ) -> Result<String> {
        debug!(
            language = %self.descriptor.language,
            method = %method.name,
            references = references.len(),
            "source generation requested"
        );
        Err(Error::UnsupportedOperation("source code generation"))
    }

    fn builder(&self) -> TypeNameBuilder<'_> {
        TypeNameBuilder::new(self.descriptor, &self.config)
    }

    fn visit_type_reference(
        &self,
        ty: &TypeReference,
        site: Site,
        out: &mut OutputBuffer,
    ) -> Result<()> {
        let name = self.builder().lower(ty, site, 0)?;
        name.write_to(self.descriptor, out);
        Ok(())
    }

    fn write_method_signature(
        &self,
        method: &MethodDefinition,
        out: &mut OutputBuffer,
    ) -> Result<()> {
        let d = self.descriptor;
        let is_constructor = method.is_constructor();
        let returns_void = method.returns_void();

        if method.is_static() {
            out.write(d.static_keyword);
        }
        if !is_constructor || d.constructor_kind_keyword {
            out.write(d.method_kind_keyword(returns_void));
        }
        if d.type_placement == TypePlacement::Prefix && !returns_void && !is_constructor {
            self.visit_type_reference(&method.return_type, Site::Usage, out)?;
            out.write(d.as_type_keyword);
        }

        if is_constructor {
            out.write(&self.constructor_name(method));
        } else {
            out.write(&method.name);
        }

        if !method.generic_params.is_empty() {
            self.write_generic_parameters(&method.generic_params, out)?;
        }
        self.visit_parameters(&method.parameters, out)?;

        if d.type_placement == TypePlacement::Suffix && !returns_void {
            out.write(d.as_type_keyword);
            self.visit_type_reference(&method.return_type, Site::Usage, out)?;
        }
        self.write_where_clauses(&method.generic_params, out)
    }

    fn constructor_name(&self, method: &MethodDefinition) -> String {
        match self.descriptor.constructor_name {
            ConstructorName::Keyword(keyword) => keyword.to_string(),
            ConstructorName::DeclaringType => method.declaring_type.as_ref().map_or_else(
                || method.name.clone(),
                |ty| strip_arity_marker(strip_reference_marker(&ty.name)).to_string(),
            ),
        }
    }

    fn write_method_body(&self, method: &MethodDefinition, out: &mut OutputBuffer) {
        let d = self.descriptor;
        let returns_void = method.returns_void();

        out.write_line();
        if !d.body_open.is_empty() {
            out.write(d.body_open);
            out.write_line();
        }
        if !returns_void {
            out.write(d.indent);
            out.write(d.return_keyword);
            out.write(d.default_value);
            out.write(d.statement_terminator);
            out.write_line();
        }
        out.write(d.method_end_marker(returns_void));
        out.write_line();
    }

    /// `name As Type` or `Type name`
    fn write_declaration(
        &self,
        name: &str,
        ty: &TypeReference,
        out: &mut OutputBuffer,
    ) -> Result<()> {
        let d = self.descriptor;
        match d.type_placement {
            TypePlacement::Suffix => {
                out.write(name);
                out.write(d.as_type_keyword);
                self.visit_type_reference(ty, Site::Usage, out)?;
            }
            TypePlacement::Prefix => {
                self.visit_type_reference(ty, Site::Usage, out)?;
                out.write(d.as_type_keyword);
                out.write(name);
            }
        }
        Ok(())
    }

    fn visit_parameter(&self, param: &ParameterDefinition, out: &mut OutputBuffer) -> Result<()> {
        out.write(self.descriptor.parameter_passage_keyword(param.is_by_ref()));
        self.write_declaration(&param.name, &param.parameter_type, out)
    }

    fn visit_parameters(
        &self,
        params: &[ParameterDefinition],
        out: &mut OutputBuffer,
    ) -> Result<()> {
        let d = self.descriptor;
        let multiline = self.config.multiline_parameters && params.len() > 1;

        out.write(d.parameter_brackets.0);
        for (index, param) in params.iter().enumerate() {
            if index > 0 {
                if multiline {
                    out.write(d.list_separator.trim_end());
                    out.write(d.line_continuation);
                    out.write_line();
                    out.write(d.indent);
                } else {
                    out.write(d.list_separator);
                }
            }
            self.visit_parameter(param, out)?;
        }
        out.write(d.parameter_brackets.1);
        Ok(())
    }

    /// Declaration-site generic parameter list; callers skip empty lists
    fn write_generic_parameters(&self, params: &[TypeRc], out: &mut OutputBuffer) -> Result<()> {
        let builder = self.builder();
        let names = params
            .iter()
            .map(|param| builder.lower(param, Site::Declaration, 0))
            .collect::<Result<Vec<TypeName>>>()?;
        write_list(self.descriptor, out, self.descriptor.generic_brackets, &names);
        Ok(())
    }

    fn write_where_clauses(&self, params: &[TypeRc], out: &mut OutputBuffer) -> Result<()> {
        let ConstraintStyle::WhereClause { keyword, separator } = self.descriptor.constraint_style
        else {
            return Ok(());
        };

        let builder = self.builder();
        for param in params {
            let constraints = builder.lower_constraints(param)?;
            if constraints.is_empty() {
                continue;
            }
            out.write(keyword);
            out.write(strip_reference_marker(&param.name));
            out.write(separator);
            self.write_names(&constraints, out);
        }
        Ok(())
    }

    fn write_names(&self, names: &[TypeName], out: &mut OutputBuffer) {
        for (index, name) in names.iter().enumerate() {
            if index > 0 {
                out.write(self.descriptor.list_separator);
            }
            name.write_to(self.descriptor, out);
        }
    }
}
