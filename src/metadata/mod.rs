//! Read-only .NET metadata model handed to the renderer.
//!
//! The host (an assembly browser, a patching tool, a test) loads an assembly by whatever means
//! it has and describes the members it wants rendered with these types. Nothing in here reads
//! files; the model is a snapshot the renderer borrows for the length of one call.
//!
//! # Key Components
//!
//! - [`typesystem`] - Type references, generic parameters and instantiations, type definitions
//! - [`method`] - Method definitions and their modifier flags
//! - [`field`] / [`param`] - Field and parameter definitions
//! - [`node`] - [`node::MetadataNode`], the tagged union the renderer dispatches on
//! - [`identity`] - Assembly references passed along with source generation requests
//!
//! # Examples
//!
//! ```rust
//! use declscope::metadata::{
//!     field::FieldDefinition,
//!     typesystem::{PrimitiveKind, TypeReference},
//! };
//!
//! let field = FieldDefinition::new("count", TypeReference::primitive(PrimitiveKind::Int32));
//! assert_eq!(field.field_type.fullname(), "System.Int32");
//! ```

/// Field definitions
pub mod field;
/// Assembly references
pub mod identity;
/// Method definitions and flags
pub mod method;
/// Tagged union over all renderable nodes
pub mod node;
/// Parameter definitions
pub mod param;
/// Implementation of the .NET type model
pub mod typesystem;
