use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared, Generic, Inheriting};
use crate::entity::EntityType;
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{find_type, normalized_text};

/// An `extension` declaration
///
/// Its name is the extended type as written, `Array` or `Foo.Bar`.
#[derive(Debug)]
pub struct Extension {
    resolver: DeclarationResolver,
    extended_type: OnceCell<EntityType>,
}

impl Extension {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::ExtensionDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            extended_type: OnceCell::new(),
        }
    }

    pub fn extended_type(&self) -> &EntityType {
        self.extended_type.get_or_init(|| {
            find_type(self.syntax())
                .map(|ty| EntityType::from_syntax(&ty))
                .unwrap_or(EntityType::Empty)
        })
    }
}

impl Declared for Extension {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Extension
    }

    fn name(&self) -> &str {
        self.resolver.name_with(|node| {
            find_type(node)
                .map(|ty| normalized_text(&ty))
                .unwrap_or_default()
        })
    }
}

/// Extensions have no generic parameters of their own, only requirements
impl Generic for Extension {}

impl Inheriting for Extension {}

impl ChildDeclarationCollecting for Extension {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        self.resolver
            .members(SyntaxKind::MemberBlock, DeclarationKind::Extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Relation;
    use sparrow_parser::parse;

    #[test]
    fn test_constrained_extension() {
        let source = "extension Array: Identifiable where Element == String {\n\
                      var id: String { first ?? \"\" }\n}";
        let tree = parse(source).tree;
        let extension = Extension::new(tree.first_child().unwrap()).unwrap();
        assert_eq!(extension.name(), "Array");
        assert_eq!(extension.extended_type(), &EntityType::Simple("Array".into()));
        assert_eq!(extension.inheritance(), ["Identifiable"]);
        assert_eq!(extension.generic_requirements()[0].relation, Relation::SameType);
        assert!(extension.generic_parameters().is_empty());
        assert_eq!(extension.variables()[0].name(), "id");
    }

    #[test]
    fn test_qualified_name() {
        let tree = parse("extension Foundation.Date {}").tree;
        let extension = Extension::new(tree.first_child().unwrap()).unwrap();
        assert_eq!(extension.name(), "Foundation.Date");
    }
}
