//! Semantic model of Swift declarations
//!
//! A [`SourceFile`] wraps a parsed tree and exposes its declarations grouped
//! by kind. Each declaration resolves its properties (name, modifiers, types,
//! accessors...) lazily from the syntax tree and remembers the answer.
//!
//! ```ignore
//! let tree = sparrow_parser::parse("struct S { var a, b: Int }").tree;
//! let file = SourceFile::new(tree)?;
//! let variables = file.structures()[0].variables();
//! assert_eq!(variables[0].type_annotation().to_string(), "Int");
//! ```
//!
//! Declarations hold `OnceCell`s and rowan nodes, so they are not `Sync`.
//! Share them within one thread.

pub mod collecting;
pub mod collection;
pub mod config;
pub mod declaration;
pub mod declarations;
pub mod entity;
pub mod error;
pub mod resolver;
pub mod source_file;
pub mod syntax;

pub use collecting::ChildDeclarationCollecting;
pub use collection::DeclarationCollection;
pub use config::SemanticsConfig;
pub use declaration::{Declaration, DeclarationKind, Declared, Generic, Inheriting};
pub use declarations::*;
pub use entity::*;
pub use error::SemanticsError;
pub use resolver::{DeclarationResolver, ScopeContext};
pub use source_file::SourceFile;
