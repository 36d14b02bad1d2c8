//! Enum cases
//!
//! ```text
//! EnumCaseDecl
//!   AttributeList?
//!   ModifierList?      (indirect)
//!   Case
//!   EnumCaseElement
//!     Name
//!     EnumCaseParameterClause?
//!       EnumCaseParameter (Comma EnumCaseParameter)*
//!     Initializer?       (raw value)
//!   (Comma EnumCaseElement)*
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::common::name;
use crate::cursor::Cursor;
use crate::event::Checkpoint;
use crate::expr::{expr, ExprEnd};
use crate::ty::ty;

pub fn enum_case_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::EnumCaseDecl);
    p.bump(); // case

    loop {
        enum_case_element(p);
        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }

    p.finish_node();
}

fn enum_case_element(p: &mut Cursor) {
    p.start_node(SyntaxKind::EnumCaseElement);
    name(p);

    if p.at(SyntaxKind::LParen) {
        p.start_node(SyntaxKind::EnumCaseParameterClause);
        p.bump();
        while !p.at_eof() && !p.at(SyntaxKind::RParen) {
            enum_case_parameter(p);
            if !p.eat(SyntaxKind::Comma) {
                break;
            }
        }
        p.expect(SyntaxKind::RParen, "`)` to close associated values");
        p.finish_node();
    }

    if p.at(SyntaxKind::Equals) {
        p.start_node(SyntaxKind::Initializer);
        p.bump();
        expr(p, ExprEnd::Plain);
        p.finish_node();
    }

    p.finish_node();
}

fn enum_case_parameter(p: &mut Cursor) {
    p.start_node(SyntaxKind::EnumCaseParameter);

    if p.at(SyntaxKind::Identifier) && p.nth_at(1, SyntaxKind::Colon) {
        p.bump();
        p.bump();
    } else if p.at(SyntaxKind::Identifier)
        && p.nth_at(1, SyntaxKind::Identifier)
        && p.nth_at(2, SyntaxKind::Colon)
    {
        p.bump();
        p.bump();
        p.bump();
    }

    ty(p);

    if p.at(SyntaxKind::Equals) {
        p.start_node(SyntaxKind::Initializer);
        p.bump();
        expr(p, ExprEnd::Plain);
        p.finish_node();
    }

    p.finish_node();
}
