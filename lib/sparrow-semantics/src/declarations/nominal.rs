//! Classes, structures, enumerations, protocols and actors
//!
//! The five nominal kinds share one shape: a name, optional generics and
//! inheritance, and a member block.

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared, Generic, Inheriting};
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::extract_name;

fn named(node: &SyntaxNode) -> String {
    extract_name(node).unwrap_or_default()
}

macro_rules! nominal_declaration {
    ($(#[$meta:meta])* $name:ident, $syntax:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            resolver: DeclarationResolver,
        }

        impl $name {
            pub fn new(node: SyntaxNode) -> Result<Self> {
                DeclarationResolver::checked(node, SyntaxKind::$syntax)
                    .map(|resolver| Self { resolver })
            }

            pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
                Self {
                    resolver: DeclarationResolver::new(node, context),
                }
            }
        }

        impl Declared for $name {
            fn resolver(&self) -> &DeclarationResolver {
                &self.resolver
            }

            fn kind(&self) -> DeclarationKind {
                DeclarationKind::$name
            }

            fn name(&self) -> &str {
                self.resolver.name_with(named)
            }
        }

        impl Generic for $name {}

        impl Inheriting for $name {}

        impl ChildDeclarationCollecting for $name {
            fn child_declarations(&self) -> Option<&DeclarationCollection> {
                self.resolver.members(SyntaxKind::MemberBlock, DeclarationKind::$name)
            }
        }
    };
}

nominal_declaration!(
    /// A `class` declaration
    Class,
    ClassDecl
);

nominal_declaration!(
    /// A `struct` declaration
    Structure,
    StructDecl
);

nominal_declaration!(
    /// An `enum` declaration; its cases are among its child declarations
    Enumeration,
    EnumDecl
);

nominal_declaration!(
    /// A `protocol` declaration
    ///
    /// Primary associated types, `protocol Store<Item>`, are reported as
    /// generic parameters.
    Protocol,
    ProtocolDecl
);

nominal_declaration!(
    /// An `actor` declaration
    Actor,
    ActorDecl
);

impl Class {
    /// The first inherited type, which is the superclass when there is one
    pub fn superclass(&self) -> Option<&str> {
        self.inheritance().first().map(String::as_str)
    }
}

impl Enumeration {
    /// Whether the whole enumeration is `indirect`
    pub fn is_indirect(&self) -> bool {
        self.modifiers().contains("indirect")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::GenericParameter;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn first(source: &str) -> SyntaxNode {
        parse(source).tree.first_child().unwrap()
    }

    #[test]
    fn test_class() {
        let source = "@objc open class View<T>: NSObject, Codable where T: Sendable {}";
        let decl = Class::new(first(source)).unwrap();
        assert_eq!(decl.name(), "View");
        assert_eq!(decl.keyword(), "class");
        assert_eq!(decl.kind(), DeclarationKind::Class);
        assert_eq!(decl.attributes()[0].name, "objc");
        assert!(decl.modifiers().contains("open"));
        assert_eq!(decl.superclass(), Some("NSObject"));
        assert_eq!(decl.generic_requirements().len(), 1);
        assert_eq!(
            decl.generic_parameters(),
            [GenericParameter { name: "T".into(), type_name: None, is_pack: false }]
        );
    }

    #[test]
    fn test_inheritance_with_function_type() {
        let decl = Class::new(first("class C: Box<(Int) throws -> Void>, Sendable {}")).unwrap();
        assert_eq!(decl.inheritance(), ["Box<(Int) throws -> Void>", "Sendable"]);
    }

    #[test]
    fn test_members() {
        let source = "struct S {\n  var a = 1\n  func f() {}\n  struct Inner {}\n}";
        let structure = Structure::new(first(source)).unwrap();
        assert_eq!(structure.variables().len(), 1);
        assert_eq!(structure.functions().len(), 1);
        assert_eq!(structure.structures()[0].name(), "Inner");
        assert!(structure.classes().is_empty());
    }

    #[test]
    fn test_wrong_node() {
        assert!(Class::new(first("struct S {}")).is_err());
    }

    #[test]
    fn test_protocol_primary_associated_types() {
        let source = "protocol Store<Item>: AnyObject { associatedtype Item }";
        let protocol = Protocol::new(first(source)).unwrap();
        assert_eq!(protocol.generic_parameters()[0].name, "Item");
        assert_eq!(protocol.inheritance(), ["AnyObject"]);
        assert_eq!(protocol.associated_types().len(), 1);
    }

    #[test]
    fn test_actor() {
        let actor = Actor::new(first("actor Counter { var value = 0 }")).unwrap();
        assert_eq!(actor.keyword(), "actor");
        assert_eq!(actor.name(), "Counter");
        assert_eq!(actor.variables().len(), 1);
    }

    #[test]
    fn test_indirect_enumeration() {
        let enumeration =
            Enumeration::new(first("indirect enum Tree { case leaf, node(Tree, Tree) }")).unwrap();
        assert!(enumeration.is_indirect());
        assert_eq!(enumeration.enum_cases().len(), 2);
    }
}
