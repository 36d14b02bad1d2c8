//! Type aliases and protocol associated types

use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared, Generic, Inheriting};
use crate::entity::EntityType;
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{extract_name, find_child};

fn initialized_type(node: &SyntaxNode) -> Option<EntityType> {
    find_child(node, SyntaxKind::TypeInitializer).map(|init| EntityType::from_wrapper(&init))
}

/// A `typealias` declaration
#[derive(Debug)]
pub struct TypeAlias {
    resolver: DeclarationResolver,
    initialized_type: OnceCell<EntityType>,
}

impl TypeAlias {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::TypeAliasDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            initialized_type: OnceCell::new(),
        }
    }

    /// The aliased type
    pub fn initialized_type(&self) -> &EntityType {
        self.initialized_type
            .get_or_init(|| initialized_type(self.syntax()).unwrap_or(EntityType::Empty))
    }
}

impl Declared for TypeAlias {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::TypeAlias
    }

    fn name(&self) -> &str {
        self.resolver
            .name_with(|node| extract_name(node).unwrap_or_default())
    }
}

impl Generic for TypeAlias {}

impl ChildDeclarationCollecting for TypeAlias {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}

/// An `associatedtype` requirement of a protocol
#[derive(Debug)]
pub struct AssociatedType {
    resolver: DeclarationResolver,
    default_type: OnceCell<Option<EntityType>>,
}

impl AssociatedType {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::AssociatedTypeDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            default_type: OnceCell::new(),
        }
    }

    /// The type after `=`, when one is given
    pub fn default_type(&self) -> Option<&EntityType> {
        self.default_type
            .get_or_init(|| initialized_type(self.syntax()))
            .as_ref()
    }
}

impl Declared for AssociatedType {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::AssociatedType
    }

    fn name(&self) -> &str {
        self.resolver
            .name_with(|node| extract_name(node).unwrap_or_default())
    }
}

impl Generic for AssociatedType {}

impl Inheriting for AssociatedType {}

impl ChildDeclarationCollecting for AssociatedType {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}
