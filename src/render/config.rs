//! Render configuration
//!
//! The descriptor decides how a language spells things; this configuration decides which of
//! the optional behaviors of the renderer are active. Both are plain values chosen by the
//! caller, there is no configuration file.

/// Options controlling a [`crate::Renderer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderConfig {
    /// Maximum nesting of generic arguments, array elements and constraints (default: 64).
    /// Deeper graphs, including self-referential constraints, fail with
    /// [`crate::Error::RenderDepthExceeded`].
    pub max_depth: usize,

    /// Spell built-in types with the language keyword (`Integer`) instead of their runtime
    /// name (`System.Int32`)
    pub use_aliases: bool,

    /// Prefix non-aliased type names with their namespace
    pub qualify_namespaces: bool,

    /// Also list a generic parameter's constraints where the parameter is merely used (a
    /// parameter or return type), not only where it is declared. Only affects languages with
    /// inline constraints. Enabled by default to match established output, e.g.
    /// `Function Max(Of T As {IComparable})(ByVal a As T As {IComparable}, ...)`; whether usage
    /// sites should carry the constraint list is unresolved.
    pub usage_constraints: bool,

    /// Put every parameter after the first on its own line, joined with the language's line
    /// continuation token
    pub multiline_parameters: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            use_aliases: true,
            qualify_namespaces: true,
            usage_constraints: true,
            multiline_parameters: false,
        }
    }
}

impl RenderConfig {
    /// The established rendering, identical to [`RenderConfig::default`]
    #[must_use]
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Constraints only at declaration sites; self-referential constraints
    /// (`T As {IComparable(Of T)}`) render instead of failing
    #[must_use]
    pub fn strict() -> Self {
        Self {
            usage_constraints: false,
            ..Self::default()
        }
    }

    /// Set the maximum nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable alias resolution of built-in types
    #[must_use]
    pub fn with_aliases(mut self, enabled: bool) -> Self {
        self.use_aliases = enabled;
        self
    }

    /// Enable or disable namespace qualification
    #[must_use]
    pub fn with_namespaces(mut self, enabled: bool) -> Self {
        self.qualify_namespaces = enabled;
        self
    }

    /// Enable or disable constraint lists at usage sites
    #[must_use]
    pub fn with_usage_constraints(mut self, enabled: bool) -> Self {
        self.usage_constraints = enabled;
        self
    }

    /// Enable or disable one-parameter-per-line output
    #[must_use]
    pub fn with_multiline_parameters(mut self, enabled: bool) -> Self {
        self.multiline_parameters = enabled;
        self
    }
}
