//! Operator and precedence group declarations
//!
//! ```text
//! OperatorDecl
//!   ModifierList (prefix | infix | postfix)
//!   Operator Name PrecedenceDesignation?
//! PrecedenceGroupDecl
//!   Precedencegroup Name LBrace PrecedenceGroupAttribute* RBrace
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::common::{name, operator_or_identifier_name};
use crate::cursor::Cursor;
use crate::event::Checkpoint;

pub fn operator_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::OperatorDecl);
    p.bump(); // operator
    operator_or_identifier_name(p);

    if p.at(SyntaxKind::Colon) {
        p.start_node(SyntaxKind::PrecedenceDesignation);
        p.bump();
        loop {
            p.expect(SyntaxKind::Identifier, "a precedence group name");
            if !p.eat(SyntaxKind::Comma) {
                break;
            }
        }
        p.finish_node();
    }

    p.finish_node();
}

pub fn precedence_group_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::PrecedenceGroupDecl);
    p.bump(); // precedencegroup
    name(p);

    if p.expect(SyntaxKind::LBrace, "`{`") {
        while !p.at_eof() && !p.at(SyntaxKind::RBrace) {
            if p.at(SyntaxKind::Identifier) && p.nth_at(1, SyntaxKind::Colon) {
                precedence_group_attribute(p);
            } else {
                p.error("expected `higherThan`, `lowerThan`, `associativity` or `assignment`");
                p.bump();
            }
        }
        p.expect(SyntaxKind::RBrace, "`}`");
    }

    p.finish_node();
}

/// `higherThan: A, B`, `associativity: left`, `assignment: true`
fn precedence_group_attribute(p: &mut Cursor) {
    p.start_node(SyntaxKind::PrecedenceGroupAttribute);
    p.bump(); // attribute name
    p.bump(); // :
    if p.at(SyntaxKind::Identifier) || p.at(SyntaxKind::Boolean) {
        p.bump();
        while p.at(SyntaxKind::Comma) && p.nth_at(1, SyntaxKind::Identifier) {
            p.bump();
            p.bump();
        }
    } else {
        p.error("expected a value");
    }
    p.finish_node();
}
