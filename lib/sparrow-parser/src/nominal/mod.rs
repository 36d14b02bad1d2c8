//! Type declarations and extensions
//!
//! ```text
//! ClassDecl | StructDecl | EnumDecl | ProtocolDecl | ActorDecl
//!   AttributeList?
//!   ModifierList?
//!   Class | Struct | Enum | Protocol | Identifier("actor")
//!   Name
//!   GenericParameterClause?
//!   InheritanceClause?
//!   GenericWhereClause?
//!   MemberBlock
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::block::member_block;
use crate::common::{generic_parameter_clause, generic_where_clause, inheritance_clause, name};
use crate::cursor::Cursor;
use crate::event::Checkpoint;
use crate::ty::ty;

pub fn nominal_declaration(p: &mut Cursor, checkpoint: Checkpoint, kind: SyntaxKind) {
    p.start_node_at(checkpoint, kind);
    p.bump(); // keyword
    name(p);
    generic_parameter_clause(p);
    inheritance_clause(p);
    generic_where_clause(p);
    member_block(p);
    p.finish_node();
}

/// `extension Type: Protocols where Requirements { members }`
pub fn extension_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::ExtensionDecl);
    p.bump(); // extension
    ty(p);
    inheritance_clause(p);
    generic_where_clause(p);
    member_block(p);
    p.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::parse_source_file;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;
    use sparrow_syntax_tree::SyntaxKind;

    fn child_kinds(source: &str) -> Vec<SyntaxKind> {
        let result = Parser::parse(source, parse_source_file);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        result.tree.first_child().unwrap().children().map(|n| n.kind()).collect()
    }

    #[test]
    fn test_generic_struct() {
        assert_eq!(
            child_kinds("struct Box<T: Equatable>: Hashable where T: Sendable { var value: T }"),
            vec![
                SyntaxKind::Name,
                SyntaxKind::GenericParameterClause,
                SyntaxKind::InheritanceClause,
                SyntaxKind::GenericWhereClause,
                SyntaxKind::MemberBlock,
            ]
        );
    }

    #[test]
    fn test_protocol_with_primary_associated_type() {
        assert_eq!(
            child_kinds("protocol Store<Item>: AnyObject { associatedtype Item }"),
            vec![
                SyntaxKind::Name,
                SyntaxKind::GenericParameterClause,
                SyntaxKind::InheritanceClause,
                SyntaxKind::MemberBlock,
            ]
        );
    }

    #[test]
    fn test_constrained_extension() {
        assert_eq!(
            child_kinds("extension Array: Identifiable where Element == String {}"),
            vec![
                SyntaxKind::TyPath,
                SyntaxKind::InheritanceClause,
                SyntaxKind::GenericWhereClause,
                SyntaxKind::MemberBlock,
            ]
        );
    }

    #[test]
    fn test_missing_body_is_an_error() {
        let result = Parser::parse("struct Broken", parse_source_file);
        assert_eq!(result.errors.len(), 1);
    }
}
