//! Functions, initializers, deinitializers and subscripts
//!
//! ```text
//! FunctionDecl
//!   AttributeList?
//!   ModifierList?
//!   Func
//!   Name
//!   GenericParameterClause?
//!   FunctionSignature
//!     ParameterClause
//!       FunctionParameter (Comma FunctionParameter)*
//!     EffectSpecifiers?
//!     ReturnClause?
//!   GenericWhereClause?
//!   CodeBlock?
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::block::code_block;
use crate::common::{
    attribute_list, effect_specifiers, generic_parameter_clause, generic_where_clause,
    operator_or_identifier_name, type_annotation,
};
use crate::cursor::Cursor;
use crate::event::Checkpoint;
use crate::expr::{expr, ExprEnd};
use crate::ty::ty;
use crate::variable::accessor_block;

pub fn function_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::FunctionDecl);
    p.bump(); // func
    operator_or_identifier_name(p);
    generic_parameter_clause(p);
    function_signature(p);
    generic_where_clause(p);
    if p.at(SyntaxKind::LBrace) {
        code_block(p);
    }
    p.finish_node();
}

/// `init`, `init?` and `init!`
pub fn initializer_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::InitializerDecl);
    p.bump(); // init
    if (p.at(SyntaxKind::Question) || p.at(SyntaxKind::Bang)) && p.nth_is_joined(0) {
        p.bump();
    }
    generic_parameter_clause(p);
    function_signature(p);
    generic_where_clause(p);
    if p.at(SyntaxKind::LBrace) {
        code_block(p);
    }
    p.finish_node();
}

pub fn deinitializer_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::DeinitializerDecl);
    p.bump(); // deinit
    if p.at(SyntaxKind::LBrace) {
        code_block(p);
    }
    p.finish_node();
}

/// `subscript(index: Int) -> Element { get set }`
pub fn subscript_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::SubscriptDecl);
    p.bump(); // subscript
    generic_parameter_clause(p);
    parameter_clause(p);
    return_clause(p);
    generic_where_clause(p);
    if p.at(SyntaxKind::LBrace) {
        accessor_block(p);
    }
    p.finish_node();
}

fn function_signature(p: &mut Cursor) {
    p.start_node(SyntaxKind::FunctionSignature);
    parameter_clause(p);
    effect_specifiers(p);
    return_clause(p);
    p.finish_node();
}

fn return_clause(p: &mut Cursor) {
    if !p.at(SyntaxKind::Arrow) {
        return;
    }
    p.start_node(SyntaxKind::ReturnClause);
    p.bump();
    ty(p);
    p.finish_node();
}

pub fn parameter_clause(p: &mut Cursor) {
    p.start_node(SyntaxKind::ParameterClause);
    if p.expect(SyntaxKind::LParen, "`(` to open parameters") {
        while !p.at_eof() && !p.at(SyntaxKind::RParen) {
            parameter(p);
            if !p.eat(SyntaxKind::Comma) {
                break;
            }
        }
        p.expect(SyntaxKind::RParen, "`)` to close parameters");
    }
    p.finish_node();
}

/// Tokens that may spell an argument label or parameter name
fn is_parameter_name(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::Class
            | SyntaxKind::Struct
            | SyntaxKind::Enum
            | SyntaxKind::Protocol
            | SyntaxKind::Extension
            | SyntaxKind::Func
            | SyntaxKind::Import
            | SyntaxKind::Init
            | SyntaxKind::Let
            | SyntaxKind::Var
            | SyntaxKind::Case
            | SyntaxKind::Where
            | SyntaxKind::Is
            | SyntaxKind::As
            | SyntaxKind::Static
            | SyntaxKind::Operator
            | SyntaxKind::Subscript
            | SyntaxKind::Typealias
            | SyntaxKind::Try
            | SyntaxKind::Throws
            | SyntaxKind::Rethrows
    )
}

/// `@attr label name: Type... = default`
fn parameter(p: &mut Cursor) {
    p.start_node(SyntaxKind::FunctionParameter);
    attribute_list(p);

    let mut names = 0;
    while names < 2 && p.current().is_some_and(is_parameter_name) {
        p.bump();
        names += 1;
    }
    if names == 0 {
        p.error("expected a parameter name");
    }

    if p.at(SyntaxKind::Colon) {
        type_annotation(p);
    } else {
        p.error("expected `:` and a parameter type");
    }
    p.eat(SyntaxKind::Ellipsis);

    if p.at(SyntaxKind::Equals) {
        p.start_node(SyntaxKind::Initializer);
        p.bump();
        expr(p, ExprEnd::Plain);
        p.finish_node();
    }

    // Skip anything unparseable up to the next separator
    while !p.at_eof() && !p.at(SyntaxKind::Comma) && !p.at(SyntaxKind::RParen) {
        if p.at(SyntaxKind::LBrace) || p.at(SyntaxKind::RBrace) {
            break;
        }
        p.bump();
    }
    p.finish_node();
}
