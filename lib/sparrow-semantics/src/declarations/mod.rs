//! One type per declaration kind

mod conditional;
mod enum_case;
mod extension;
mod function;
mod import;
mod nominal;
mod operator;
mod subscript;
mod type_alias;
mod variable;

pub use conditional::{Branch, ConditionalCompilationBlock};
pub use enum_case::EnumCase;
pub use extension::Extension;
pub use function::{Deinitializer, Function, Initializer};
pub use import::Import;
pub use nominal::{Actor, Class, Enumeration, Protocol, Structure};
pub use operator::{Associativity, Fixity, Operator, PrecedenceGroup};
pub use subscript::Subscript;
pub use type_alias::{AssociatedType, TypeAlias};
pub use variable::Variable;
