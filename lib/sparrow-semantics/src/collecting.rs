//! Uniform access to nested declarations

use crate::collection::DeclarationCollection;
use crate::declaration::Declaration;
use crate::declarations::{
    Actor, AssociatedType, Class, ConditionalCompilationBlock, Deinitializer, EnumCase, Enumeration,
    Extension, Function, Import, Initializer, Operator, PrecedenceGroup, Protocol, Structure,
    Subscript, TypeAlias, Variable,
};

/// Implemented by anything that may own a scope of declarations
///
/// Only [`child_declarations`](Self::child_declarations) is required. Every
/// per-kind accessor reads from it and is empty when it is `None`, so callers
/// can ask a type alias for its classes and get nothing back.
pub trait ChildDeclarationCollecting {
    /// The owned collection, `None` when this declaration cannot nest members
    fn child_declarations(&self) -> Option<&DeclarationCollection>;

    fn actors(&self) -> &[Actor] {
        self.child_declarations().map(|c| c.actors()).unwrap_or_default()
    }

    fn associated_types(&self) -> &[AssociatedType] {
        self.child_declarations().map(|c| c.associated_types()).unwrap_or_default()
    }

    fn classes(&self) -> &[Class] {
        self.child_declarations().map(|c| c.classes()).unwrap_or_default()
    }

    fn conditional_compilation_blocks(&self) -> &[ConditionalCompilationBlock] {
        self.child_declarations()
            .map(|c| c.conditional_compilation_blocks())
            .unwrap_or_default()
    }

    fn deinitializers(&self) -> &[Deinitializer] {
        self.child_declarations().map(|c| c.deinitializers()).unwrap_or_default()
    }

    fn enum_cases(&self) -> &[EnumCase] {
        self.child_declarations().map(|c| c.enum_cases()).unwrap_or_default()
    }

    fn enumerations(&self) -> &[Enumeration] {
        self.child_declarations().map(|c| c.enumerations()).unwrap_or_default()
    }

    fn extensions(&self) -> &[Extension] {
        self.child_declarations().map(|c| c.extensions()).unwrap_or_default()
    }

    fn functions(&self) -> &[Function] {
        self.child_declarations().map(|c| c.functions()).unwrap_or_default()
    }

    fn imports(&self) -> &[Import] {
        self.child_declarations().map(|c| c.imports()).unwrap_or_default()
    }

    fn initializers(&self) -> &[Initializer] {
        self.child_declarations().map(|c| c.initializers()).unwrap_or_default()
    }

    fn operators(&self) -> &[Operator] {
        self.child_declarations().map(|c| c.operators()).unwrap_or_default()
    }

    fn precedence_groups(&self) -> &[PrecedenceGroup] {
        self.child_declarations().map(|c| c.precedence_groups()).unwrap_or_default()
    }

    fn protocols(&self) -> &[Protocol] {
        self.child_declarations().map(|c| c.protocols()).unwrap_or_default()
    }

    fn structures(&self) -> &[Structure] {
        self.child_declarations().map(|c| c.structures()).unwrap_or_default()
    }

    fn subscripts(&self) -> &[Subscript] {
        self.child_declarations().map(|c| c.subscripts()).unwrap_or_default()
    }

    fn type_aliases(&self) -> &[TypeAlias] {
        self.child_declarations().map(|c| c.type_aliases()).unwrap_or_default()
    }

    fn variables(&self) -> &[Variable] {
        self.child_declarations().map(|c| c.variables()).unwrap_or_default()
    }

    /// Every child declaration in source order
    fn declarations(&self) -> Vec<Declaration<'_>> {
        self.child_declarations()
            .map(|c| c.iter().collect())
            .unwrap_or_default()
    }
}
