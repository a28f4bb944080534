// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # declscope
//!
//! Renders .NET metadata as declaration source text. Given a read-only description of
//! methods, fields, parameters and types (including generic parameters, instantiations and
//! constraints), `declscope` produces method signatures, stub bodies, field declarations and
//! type signatures in the surface syntax of a target language. Visual Basic .NET and C# are
//! built in; a language is a table of tokens, so adding one does not touch the traversal.
//!
//! ## Features
//!
//! - **Data-driven languages** - every keyword, bracket and separator comes from a
//!   [`LanguageDescriptor`]
//! - **Structured type names** - generic instantiations are lowered into a tree before any
//!   text is written, arity (`` `2 ``) and by-ref (`&`) markers never leak into the output
//! - **Bounded recursion** - self-referential constraints fail with
//!   [`Error::RenderDepthExceeded`] instead of overflowing the stack
//! - **Parallel batches** - [`Renderer::render_batch`] renders many nodes with `rayon`
//!
//! ## Quick Start
//!
//! ```rust
//! use declscope::prelude::*;
//!
//! let int32 = TypeReference::primitive(PrimitiveKind::Int32);
//! let add = MethodDefinition::new("Add", int32.clone())
//!     .with_parameter("a", int32.clone())
//!     .with_parameter("b", int32);
//!
//! let renderer = Renderer::new(&VISUAL_BASIC);
//! assert_eq!(
//!     renderer.render_method(&add)?,
//!     "Function Add(ByVal a As Integer, ByVal b As Integer) As Integer\n    Return Nothing\nEnd Function\n"
//! );
//! # Ok::<(), declscope::Error>(())
//! ```
//!
//! ## Logging
//!
//! Entry points and lowering decisions are reported through [`tracing`] spans and events.
//! The crate never installs a subscriber; hook one up in the host to see them.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use declscope::prelude::*;
///
/// let field = FieldDefinition::new("count", TypeReference::primitive(PrimitiveKind::Int32));
/// assert_eq!(Renderer::new(&CSHARP).render_field(&field)?, "int count;");
/// # Ok::<(), declscope::Error>(())
/// ```
pub mod prelude;

/// The read-only metadata model consumed by the renderer
///
/// Methods, fields, parameters, type references and type definitions, plus the
/// [`metadata::node::MetadataNode`] union over them.
pub mod metadata;

/// Language descriptors and the rendering engine
pub mod render;

/// `declscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `declscope` Error type
///
/// # Examples
///
/// ```rust
/// use declscope::{prelude::*, Error};
///
/// let method = MethodDefinition::new("Reset", TypeReference::void());
/// match Renderer::new(&VISUAL_BASIC).generate_source_code(&method, &[]) {
///     Err(Error::UnsupportedOperation(what)) => println!("not supported: {}", what),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub use error::Error;

pub use render::{
    Language, LanguageDescriptor, RenderConfig, Renderer, CSHARP, VISUAL_BASIC,
};
