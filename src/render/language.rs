//! Per-language lexical tables.
//!
//! A [`LanguageDescriptor`] is pure data: every keyword, bracket pair and separator the
//! renderer emits comes from here, so supporting another language means adding another
//! `static` table, not another traversal. Descriptors are built at compile time and never
//! mutated.
//!
//! # Examples
//!
//! ```rust
//! use declscope::render::{Language, VISUAL_BASIC};
//!
//! assert_eq!(VISUAL_BASIC.resolve_alias("System.Int32"), "Integer");
//! assert_eq!(VISUAL_BASIC.resolve_alias("System.Text.StringBuilder"), "System.Text.StringBuilder");
//!
//! let csharp = "csharp".parse::<Language>().unwrap().descriptor();
//! assert_eq!(csharp.resolve_alias("System.Int32"), "int");
//! ```

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::{metadata::typesystem::PrimitiveKind, Error, Result};

/// Where a language puts a declaration's type relative to its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePlacement {
    /// `Type name` (C-family); the as-type token separates type and name
    Prefix,
    /// `name As Type` (BASIC-family); the as-type token precedes the type
    Suffix,
}

/// How generic parameter constraints are spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintStyle {
    /// Directly after the parameter name: `T As {IComparable, IDisposable}`
    Inline {
        /// Opens the constraint list, including leading whitespace
        open: &'static str,
        /// Closes the constraint list
        close: &'static str,
    },
    /// In a trailing clause per parameter: `where T : IComparable, IDisposable`
    WhereClause {
        /// Introduces a clause, including leading whitespace
        keyword: &'static str,
        /// Separates the parameter name from its constraints
        separator: &'static str,
    },
}

/// What stands in place of a constructor's name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorName {
    /// A fixed keyword (`New`)
    Keyword(&'static str),
    /// The short name of the declaring type (`Widget`)
    DeclaringType,
}

/// The immutable set of lexical tokens and formatting rules of one target language.
///
/// Tokens carry their own surrounding whitespace (`"Shared "`, `" As "`), the renderer
/// concatenates them verbatim.
#[derive(Debug)]
pub struct LanguageDescriptor {
    /// The language this table describes
    pub language: Language,
    /// Static/shared member modifier
    pub static_keyword: &'static str,
    /// Introduces a field declaration
    pub declare_keyword: &'static str,
    /// Method-kind keyword for methods with a return value
    pub function_keyword: &'static str,
    /// Method-kind keyword for methods returning `System.Void`
    pub procedure_keyword: &'static str,
    /// Whether constructors carry a method-kind keyword
    pub constructor_kind_keyword: bool,
    /// Constructor name token
    pub constructor_name: ConstructorName,
    /// Prefix of parameters passed by value
    pub by_value_keyword: &'static str,
    /// Prefix of parameters passed by reference
    pub by_reference_keyword: &'static str,
    /// Joins a declared name with its type
    pub as_type_keyword: &'static str,
    /// Order of name and type in declarations
    pub type_placement: TypePlacement,
    /// Joins namespace and type name
    pub namespace_separator: &'static str,
    /// Opens and closes generic argument and parameter lists
    pub generic_brackets: (&'static str, &'static str),
    /// Constraint syntax
    pub constraint_style: ConstraintStyle,
    /// Opens and closes parameter lists
    pub parameter_brackets: (&'static str, &'static str),
    /// Opens and closes array rank specifiers
    pub array_brackets: (&'static str, &'static str),
    /// Separates list items
    pub list_separator: &'static str,
    /// Ends a line that continues on the next one
    pub line_continuation: &'static str,
    /// Indentation of body statements and continued lines
    pub indent: &'static str,
    /// Statement keyword returning from a method
    pub return_keyword: &'static str,
    /// Literal for the default value of any type
    pub default_value: &'static str,
    /// Ends a statement or field declaration
    pub statement_terminator: &'static str,
    /// Opens a method body (empty if the language has no opening token)
    pub body_open: &'static str,
    /// Ends the body of a procedure
    pub procedure_end: &'static str,
    /// Ends the body of a function
    pub function_end: &'static str,
    /// Keyword spellings of built-in types
    pub aliases: &'static [(PrimitiveKind, &'static str)],
}

impl LanguageDescriptor {
    /// Returns the alias of `fullname` if it names a built-in type this language has a
    /// keyword for, otherwise `fullname` unchanged.
    #[must_use]
    pub fn resolve_alias<'a>(&self, fullname: &'a str) -> &'a str {
        PrimitiveKind::from_fullname(fullname)
            .and_then(|kind| self.alias_of(kind))
            .unwrap_or(fullname)
    }

    /// The alias of a built-in type, if this language has one
    #[must_use]
    pub fn alias_of(&self, kind: PrimitiveKind) -> Option<&'static str> {
        self.aliases
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, alias)| *alias)
    }

    /// By-reference keyword for by-ref parameters, by-value keyword otherwise
    #[must_use]
    pub fn parameter_passage_keyword(&self, is_by_ref: bool) -> &'static str {
        if is_by_ref {
            self.by_reference_keyword
        } else {
            self.by_value_keyword
        }
    }

    /// Procedure keyword for void returns, function keyword otherwise
    #[must_use]
    pub fn method_kind_keyword(&self, is_void_return: bool) -> &'static str {
        if is_void_return {
            self.procedure_keyword
        } else {
            self.function_keyword
        }
    }

    /// Token closing a method body
    #[must_use]
    pub fn method_end_marker(&self, is_void_return: bool) -> &'static str {
        if is_void_return {
            self.procedure_end
        } else {
            self.function_end
        }
    }
}

/// Visual Basic .NET
pub static VISUAL_BASIC: LanguageDescriptor = LanguageDescriptor {
    language: Language::VisualBasic,
    static_keyword: "Shared ",
    declare_keyword: "Dim ",
    function_keyword: "Function ",
    procedure_keyword: "Sub ",
    constructor_kind_keyword: true,
    constructor_name: ConstructorName::Keyword("New"),
    by_value_keyword: "ByVal ",
    by_reference_keyword: "ByRef ",
    as_type_keyword: " As ",
    type_placement: TypePlacement::Suffix,
    namespace_separator: ".",
    generic_brackets: ("(Of ", ")"),
    constraint_style: ConstraintStyle::Inline {
        open: " As {",
        close: "}",
    },
    parameter_brackets: ("(", ")"),
    array_brackets: ("(", ")"),
    list_separator: ", ",
    line_continuation: " _",
    indent: "    ",
    return_keyword: "Return ",
    default_value: "Nothing",
    statement_terminator: "",
    body_open: "",
    procedure_end: "End Sub",
    function_end: "End Function",
    aliases: &[
        (PrimitiveKind::Object, "Object"),
        (PrimitiveKind::Int16, "Short"),
        (PrimitiveKind::Int32, "Integer"),
        (PrimitiveKind::Int64, "Long"),
        (PrimitiveKind::UInt16, "UShort"),
        (PrimitiveKind::UInt32, "UInteger"),
        (PrimitiveKind::UInt64, "ULong"),
        (PrimitiveKind::Boolean, "Boolean"),
        (PrimitiveKind::Char, "Char"),
        (PrimitiveKind::Decimal, "Decimal"),
        (PrimitiveKind::Double, "Double"),
        (PrimitiveKind::Single, "Single"),
        (PrimitiveKind::String, "String"),
        (PrimitiveKind::Byte, "Byte"),
        (PrimitiveKind::SByte, "SByte"),
        (PrimitiveKind::DateTime, "Date"),
    ],
};

/// C#
pub static CSHARP: LanguageDescriptor = LanguageDescriptor {
    language: Language::CSharp,
    static_keyword: "static ",
    declare_keyword: "",
    function_keyword: "",
    procedure_keyword: "void ",
    constructor_kind_keyword: false,
    constructor_name: ConstructorName::DeclaringType,
    by_value_keyword: "",
    by_reference_keyword: "ref ",
    as_type_keyword: " ",
    type_placement: TypePlacement::Prefix,
    namespace_separator: ".",
    generic_brackets: ("<", ">"),
    constraint_style: ConstraintStyle::WhereClause {
        keyword: " where ",
        separator: " : ",
    },
    parameter_brackets: ("(", ")"),
    array_brackets: ("[", "]"),
    list_separator: ", ",
    line_continuation: "",
    indent: "    ",
    return_keyword: "return ",
    default_value: "default",
    statement_terminator: ";",
    body_open: "{",
    procedure_end: "}",
    function_end: "}",
    aliases: &[
        (PrimitiveKind::Object, "object"),
        (PrimitiveKind::Int16, "short"),
        (PrimitiveKind::Int32, "int"),
        (PrimitiveKind::Int64, "long"),
        (PrimitiveKind::UInt16, "ushort"),
        (PrimitiveKind::UInt32, "uint"),
        (PrimitiveKind::UInt64, "ulong"),
        (PrimitiveKind::Boolean, "bool"),
        (PrimitiveKind::Char, "char"),
        (PrimitiveKind::Decimal, "decimal"),
        (PrimitiveKind::Double, "double"),
        (PrimitiveKind::Single, "float"),
        (PrimitiveKind::String, "string"),
        (PrimitiveKind::Byte, "byte"),
        (PrimitiveKind::SByte, "sbyte"),
        (PrimitiveKind::Void, "void"),
    ],
};

/// The target languages a descriptor exists for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    /// Visual Basic .NET
    #[strum(
        to_string = "Visual Basic",
        serialize = "vb",
        serialize = "vbnet",
        serialize = "visualbasic"
    )]
    VisualBasic,
    /// C#
    #[strum(to_string = "C#", serialize = "cs", serialize = "csharp")]
    CSharp,
}

impl Language {
    /// The descriptor table of this language
    #[must_use]
    pub fn descriptor(self) -> &'static LanguageDescriptor {
        match self {
            Language::VisualBasic => &VISUAL_BASIC,
            Language::CSharp => &CSHARP,
        }
    }

    /// Look up a language by one of its names (`vb`, `Visual Basic`, `cs`, `C#`, ...)
    ///
    /// # Errors
    /// Returns [`Error::UnknownLanguage`] if no descriptor is registered under `name`.
    pub fn from_name(name: &str) -> Result<Self> {
        Language::from_str(name.trim()).map_err(|_| Error::UnknownLanguage(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_resolve_alias() {
        assert_eq!(VISUAL_BASIC.resolve_alias("System.Int32"), "Integer");
        assert_eq!(VISUAL_BASIC.resolve_alias("System.Int64"), "Long");
        assert_eq!(VISUAL_BASIC.resolve_alias("System.Single"), "Single");
        assert_eq!(CSHARP.resolve_alias("System.Boolean"), "bool");
        assert_eq!(CSHARP.resolve_alias("System.Void"), "void");
    }

    #[test]
    fn test_resolve_alias_is_total() {
        // primitives without an alias, non-primitives and garbage fall through unchanged
        assert_eq!(VISUAL_BASIC.resolve_alias("System.Void"), "System.Void");
        assert_eq!(VISUAL_BASIC.resolve_alias("System.IntPtr"), "System.IntPtr");
        assert_eq!(CSHARP.resolve_alias("System.DateTime"), "System.DateTime");
        assert_eq!(CSHARP.resolve_alias("MyApp.Widget"), "MyApp.Widget");
        assert_eq!(CSHARP.resolve_alias(""), "");
        assert_eq!(CSHARP.resolve_alias("System.Int32&"), "System.Int32&");
    }

    #[test]
    fn test_alias_tables_have_no_duplicates() {
        for language in Language::iter() {
            let aliases = language.descriptor().aliases;
            for (i, (kind, _)) in aliases.iter().enumerate() {
                assert!(
                    aliases[i + 1..].iter().all(|(other, _)| other != kind),
                    "{language}: {kind} aliased twice"
                );
            }
        }
    }

    #[test]
    fn test_parameter_passage_keyword() {
        assert_eq!(VISUAL_BASIC.parameter_passage_keyword(true), "ByRef ");
        assert_eq!(VISUAL_BASIC.parameter_passage_keyword(false), "ByVal ");
        assert_eq!(CSHARP.parameter_passage_keyword(true), "ref ");
        assert_eq!(CSHARP.parameter_passage_keyword(false), "");
    }

    #[test]
    fn test_method_kind_keyword() {
        assert_eq!(VISUAL_BASIC.method_kind_keyword(true), "Sub ");
        assert_eq!(VISUAL_BASIC.method_kind_keyword(false), "Function ");
        assert_eq!(VISUAL_BASIC.method_end_marker(true), "End Sub");
        assert_eq!(VISUAL_BASIC.method_end_marker(false), "End Function");
        assert_eq!(CSHARP.method_kind_keyword(true), "void ");
        assert_eq!(CSHARP.method_end_marker(false), "}");
    }

    #[test]
    fn test_language_names() {
        assert_eq!(Language::from_name("vb").unwrap(), Language::VisualBasic);
        assert_eq!(Language::from_name("VB").unwrap(), Language::VisualBasic);
        assert_eq!(
            Language::from_name("Visual Basic").unwrap(),
            Language::VisualBasic
        );
        assert_eq!(Language::from_name(" csharp ").unwrap(), Language::CSharp);
        assert_eq!(Language::from_name("C#").unwrap(), Language::CSharp);
        assert!(matches!(
            Language::from_name("cobol"),
            Err(Error::UnknownLanguage(name)) if name == "cobol"
        ));

        assert_eq!(Language::VisualBasic.to_string(), "Visual Basic");
        assert_eq!(Language::CSharp.to_string(), "C#");
    }

    #[test]
    fn test_descriptor_matches_language() {
        for language in Language::iter() {
            assert_eq!(language.descriptor().language, language);
        }
    }
}
