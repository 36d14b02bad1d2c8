use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared, Generic};
use crate::entity::{parameters_of, Accessor, EntityType, Parameter};
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::find_child;

/// A `subscript` declaration
#[derive(Debug)]
pub struct Subscript {
    resolver: DeclarationResolver,
    indices: OnceCell<Vec<Parameter>>,
    return_type: OnceCell<EntityType>,
    accessors: OnceCell<Vec<Accessor>>,
}

impl Subscript {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::SubscriptDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            indices: OnceCell::new(),
            return_type: OnceCell::new(),
            accessors: OnceCell::new(),
        }
    }

    /// The parameters between the parentheses
    pub fn indices(&self) -> &[Parameter] {
        self.indices.get_or_init(|| {
            find_child(self.syntax(), SyntaxKind::ParameterClause)
                .map(|clause| parameters_of(&clause))
                .unwrap_or_default()
        })
    }

    pub fn return_type(&self) -> &EntityType {
        self.return_type.get_or_init(|| {
            find_child(self.syntax(), SyntaxKind::ReturnClause)
                .map(|clause| EntityType::from_wrapper(&clause))
                .unwrap_or(EntityType::Empty)
        })
    }

    pub fn accessors(&self) -> &[Accessor] {
        self.accessors.get_or_init(|| Accessor::all(self.syntax()))
    }

    /// Whether the subscript can be assigned through
    pub fn is_writable(&self) -> bool {
        self.accessors().iter().any(|accessor| accessor.kind.is_setter())
    }
}

impl Declared for Subscript {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Subscript
    }

    fn name(&self) -> &str {
        "subscript"
    }
}

impl Generic for Subscript {}

impl ChildDeclarationCollecting for Subscript {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn subscript(source: &str) -> Subscript {
        let tree = parse(source).tree;
        let node = tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::SubscriptDecl)
            .unwrap();
        Subscript::new(node).unwrap()
    }

    #[test]
    fn test_read_write_subscript() {
        let subscript = subscript(
            "struct M { subscript(row: Int, column: Int) -> Double { get { 0 } set { } } }",
        );
        assert_eq!(subscript.name(), "subscript");
        assert_eq!(subscript.indices().len(), 2);
        assert_eq!(subscript.return_type(), &EntityType::Simple("Double".into()));
        assert!(subscript.is_writable());
    }

    #[test]
    fn test_modify_alone_is_not_writable() {
        let subscript =
            subscript("struct M { subscript(i: Int) -> Int { _read { yield 0 } _modify { } } }");
        assert_eq!(subscript.accessors().len(), 2);
        assert!(!subscript.is_writable());
    }

    #[test]
    fn test_read_only_subscript() {
        let subscript = subscript("subscript<T>(key: Key<T>) -> T? { lookup(key) }");
        assert!(!subscript.is_writable());
        assert_eq!(subscript.accessors().len(), 1);
        assert!(subscript.return_type().is_optional());
        assert_eq!(subscript.generic_parameters()[0].name, "T");
    }

    #[test]
    fn test_subscript_owns_no_members() {
        let subscript = subscript("subscript(i: Int) -> Int { get }");
        assert!(subscript.variables().is_empty());
    }
}
