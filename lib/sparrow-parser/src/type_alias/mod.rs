//! Type aliases and associated types
//!
//! ```text
//! TypeAliasDecl
//!   Typealias Name GenericParameterClause? TypeInitializer GenericWhereClause?
//! AssociatedTypeDecl
//!   Associatedtype Name InheritanceClause? TypeInitializer? GenericWhereClause?
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::common::{generic_parameter_clause, generic_where_clause, inheritance_clause, name};
use crate::cursor::Cursor;
use crate::event::Checkpoint;
use crate::ty::ty;

pub fn type_alias_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::TypeAliasDecl);
    p.bump(); // typealias
    name(p);
    generic_parameter_clause(p);
    if p.at(SyntaxKind::Equals) {
        type_initializer(p);
    } else {
        p.error("expected `=` and the aliased type");
    }
    generic_where_clause(p);
    p.finish_node();
}

pub fn associated_type_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::AssociatedTypeDecl);
    p.bump(); // associatedtype
    name(p);
    inheritance_clause(p);
    if p.at(SyntaxKind::Equals) {
        type_initializer(p);
    }
    generic_where_clause(p);
    p.finish_node();
}

fn type_initializer(p: &mut Cursor) {
    p.start_node(SyntaxKind::TypeInitializer);
    p.bump(); // =
    ty(p);
    p.finish_node();
}
