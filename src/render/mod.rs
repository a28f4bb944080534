//! Declaration rendering.
//!
//! This module turns metadata nodes into declaration text. It is split into the data that
//! describes a language and the single traversal that consumes it:
//!
//! - [`language`] - [`LanguageDescriptor`] tables for Visual Basic and C#
//! - [`config`] - [`RenderConfig`], the optional behaviors of a renderer
//! - [`typename`] - Lowering of type references into [`TypeName`] trees and their serialization
//! - [`buffer`] - [`OutputBuffer`], the per-call text accumulator
//! - [`engine`] - [`Renderer`], the traversal itself
//!
//! # Examples
//!
//! ```rust
//! use declscope::metadata::{field::FieldDefinition, typesystem::{PrimitiveKind, TypeReference}};
//! use declscope::render::{Language, Renderer};
//!
//! let field = FieldDefinition::new("count", TypeReference::primitive(PrimitiveKind::Int32));
//! for (name, expected) in [("vb", "Dim count As Integer"), ("c#", "int count;")] {
//!     let renderer = Renderer::new(Language::from_name(name)?.descriptor());
//!     assert_eq!(renderer.render_field(&field)?, expected);
//! }
//! # Ok::<(), declscope::Error>(())
//! ```

pub mod buffer;
pub mod config;
pub mod engine;
pub mod language;
pub mod typename;

pub use buffer::OutputBuffer;
pub use config::RenderConfig;
pub use engine::Renderer;
pub use language::{
    ConstraintStyle, ConstructorName, Language, LanguageDescriptor, TypePlacement, CSHARP,
    VISUAL_BASIC,
};
pub use typename::TypeName;
