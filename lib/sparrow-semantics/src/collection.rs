//! The declarations directly inside one scope

use sparrow_syntax_tree::SyntaxNode;
use tracing::trace;

use crate::declaration::{Declaration, DeclarationKind};
use crate::declarations::{
    Actor, AssociatedType, Class, ConditionalCompilationBlock, Deinitializer, EnumCase, Enumeration,
    Extension, Function, Import, Initializer, Operator, PrecedenceGroup, Protocol, Structure,
    Subscript, TypeAlias, Variable,
};
use crate::resolver::ScopeContext;

/// Declarations of a file, type body, function body or `#if` branch,
/// grouped by kind
///
/// Each group keeps source order. Only direct children of the scope are
/// collected; nested scopes are reached through their owners.
#[derive(Debug, Default)]
pub struct DeclarationCollection {
    actors: Vec<Actor>,
    associated_types: Vec<AssociatedType>,
    classes: Vec<Class>,
    conditional_compilation_blocks: Vec<ConditionalCompilationBlock>,
    deinitializers: Vec<Deinitializer>,
    enum_cases: Vec<EnumCase>,
    enumerations: Vec<Enumeration>,
    extensions: Vec<Extension>,
    functions: Vec<Function>,
    imports: Vec<Import>,
    initializers: Vec<Initializer>,
    operators: Vec<Operator>,
    precedence_groups: Vec<PrecedenceGroup>,
    protocols: Vec<Protocol>,
    structures: Vec<Structure>,
    subscripts: Vec<Subscript>,
    type_aliases: Vec<TypeAlias>,
    variables: Vec<Variable>,
}

impl DeclarationCollection {
    /// Collect the direct children of `scope`
    ///
    /// Nodes that are not declarations, and kinds disabled in the context's
    /// config, are skipped. A variable declaration contributes one variable
    /// per binding and a case declaration one case per element.
    pub fn collect(scope: &SyntaxNode, context: &ScopeContext) -> Self {
        let mut collection = DeclarationCollection::default();

        for child in scope.children() {
            let Some(kind) = DeclarationKind::from_syntax_kind(child.kind()) else {
                trace!(node = ?child.kind(), "skipping non-declaration member");
                continue;
            };

            if !context.config.is_enabled(kind) {
                trace!(%kind, "skipping disabled declaration kind");
                continue;
            }

            let context = context.clone();
            match kind {
                DeclarationKind::Actor => collection.actors.push(Actor::collected(child, context)),
                DeclarationKind::AssociatedType => collection
                    .associated_types
                    .push(AssociatedType::collected(child, context)),
                DeclarationKind::Class => collection.classes.push(Class::collected(child, context)),
                DeclarationKind::ConditionalCompilationBlock => collection
                    .conditional_compilation_blocks
                    .push(ConditionalCompilationBlock::collected(child, context)),
                DeclarationKind::Deinitializer => collection
                    .deinitializers
                    .push(Deinitializer::collected(child, context)),
                DeclarationKind::EnumCase => collection
                    .enum_cases
                    .extend(EnumCase::collected(&child, &context)),
                DeclarationKind::Enumeration => collection
                    .enumerations
                    .push(Enumeration::collected(child, context)),
                DeclarationKind::Extension => collection
                    .extensions
                    .push(Extension::collected(child, context)),
                DeclarationKind::Function => collection
                    .functions
                    .push(Function::collected(child, context)),
                DeclarationKind::Import => {
                    collection.imports.push(Import::collected(child, context))
                }
                DeclarationKind::Initializer => collection
                    .initializers
                    .push(Initializer::collected(child, context)),
                DeclarationKind::Operator => collection
                    .operators
                    .push(Operator::collected(child, context)),
                DeclarationKind::PrecedenceGroup => collection
                    .precedence_groups
                    .push(PrecedenceGroup::collected(child, context)),
                DeclarationKind::Protocol => collection
                    .protocols
                    .push(Protocol::collected(child, context)),
                DeclarationKind::Structure => collection
                    .structures
                    .push(Structure::collected(child, context)),
                DeclarationKind::Subscript => collection
                    .subscripts
                    .push(Subscript::collected(child, context)),
                DeclarationKind::TypeAlias => collection
                    .type_aliases
                    .push(TypeAlias::collected(child, context)),
                DeclarationKind::Variable => collection
                    .variables
                    .extend(Variable::collected(&child, &context)),
            }
        }

        trace!(
            owner = ?context.owner,
            declarations = collection.len(),
            "collected scope"
        );

        collection
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn associated_types(&self) -> &[AssociatedType] {
        &self.associated_types
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn conditional_compilation_blocks(&self) -> &[ConditionalCompilationBlock] {
        &self.conditional_compilation_blocks
    }

    pub fn deinitializers(&self) -> &[Deinitializer] {
        &self.deinitializers
    }

    pub fn enum_cases(&self) -> &[EnumCase] {
        &self.enum_cases
    }

    pub fn enumerations(&self) -> &[Enumeration] {
        &self.enumerations
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn initializers(&self) -> &[Initializer] {
        &self.initializers
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn precedence_groups(&self) -> &[PrecedenceGroup] {
        &self.precedence_groups
    }

    pub fn protocols(&self) -> &[Protocol] {
        &self.protocols
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn subscripts(&self) -> &[Subscript] {
        &self.subscripts
    }

    pub fn type_aliases(&self) -> &[TypeAlias] {
        &self.type_aliases
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Every declaration in source order, across kinds
    pub fn iter(&self) -> impl Iterator<Item = Declaration<'_>> {
        let mut all: Vec<Declaration<'_>> = Vec::with_capacity(self.len());
        all.extend(self.actors.iter().map(Declaration::Actor));
        all.extend(self.associated_types.iter().map(Declaration::AssociatedType));
        all.extend(self.classes.iter().map(Declaration::Class));
        all.extend(
            self.conditional_compilation_blocks
                .iter()
                .map(Declaration::ConditionalCompilationBlock),
        );
        all.extend(self.deinitializers.iter().map(Declaration::Deinitializer));
        all.extend(self.enum_cases.iter().map(Declaration::EnumCase));
        all.extend(self.enumerations.iter().map(Declaration::Enumeration));
        all.extend(self.extensions.iter().map(Declaration::Extension));
        all.extend(self.functions.iter().map(Declaration::Function));
        all.extend(self.imports.iter().map(Declaration::Import));
        all.extend(self.initializers.iter().map(Declaration::Initializer));
        all.extend(self.operators.iter().map(Declaration::Operator));
        all.extend(self.precedence_groups.iter().map(Declaration::PrecedenceGroup));
        all.extend(self.protocols.iter().map(Declaration::Protocol));
        all.extend(self.structures.iter().map(Declaration::Structure));
        all.extend(self.subscripts.iter().map(Declaration::Subscript));
        all.extend(self.type_aliases.iter().map(Declaration::TypeAlias));
        all.extend(self.variables.iter().map(Declaration::Variable));
        all.sort_by_key(|decl| decl.position());
        all.into_iter()
    }

    /// The first declaration named `name`, in source order
    pub fn find(&self, name: &str) -> Option<Declaration<'_>> {
        self.iter().find(|decl| decl.name() == name)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
            + self.associated_types.len()
            + self.classes.len()
            + self.conditional_compilation_blocks.len()
            + self.deinitializers.len()
            + self.enum_cases.len()
            + self.enumerations.len()
            + self.extensions.len()
            + self.functions.len()
            + self.imports.len()
            + self.initializers.len()
            + self.operators.len()
            + self.precedence_groups.len()
            + self.protocols.len()
            + self.structures.len()
            + self.subscripts.len()
            + self.type_aliases.len()
            + self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
