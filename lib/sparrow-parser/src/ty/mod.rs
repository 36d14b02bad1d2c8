//! Type syntax
//!
//! ```text
//! type      := prefix* primary postfix* ('&' primary postfix*)*
//! prefix    := attribute | 'inout' | 'some' | 'any'
//! primary   := path | '(' elements ')' effects? ('->' type)? | '[' type (':' type)? ']'
//! postfix   := '?' | '!'
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::common::{attribute_list, at_effect_specifier, effect_specifiers};
use crate::cursor::Cursor;

/// Ownership and isolation words that may prefix a type
const TYPE_SPECIFIERS: &[&str] =
    &["__owned", "__shared", "consuming", "borrowing", "isolated", "sending"];

/// Whether the current token can begin a type
pub fn at_type_start(p: &Cursor) -> bool {
    matches!(
        p.current(),
        Some(
            SyntaxKind::Identifier
                | SyntaxKind::SelfType
                | SyntaxKind::Class
                | SyntaxKind::Protocol
                | SyntaxKind::LParen
                | SyntaxKind::LBracket
                | SyntaxKind::At
                | SyntaxKind::Inout
        )
    )
}

/// Parse a complete type, including compositions
pub fn ty(p: &mut Cursor) {
    let checkpoint = p.checkpoint();

    if at_type_prefix(p) {
        prefixed(p);
        return;
    }

    postfixed(p);

    if p.at(SyntaxKind::Ampersand) {
        p.start_node_at(checkpoint, SyntaxKind::TyComposition);
        while p.eat(SyntaxKind::Ampersand) {
            postfixed(p);
        }
        p.finish_node();
    }
}

fn at_type_prefix(p: &Cursor) -> bool {
    p.at(SyntaxKind::At)
        || p.at(SyntaxKind::Inout)
        || TYPE_SPECIFIERS.iter().any(|word| p.at_contextual(word))
        || ((p.at_contextual("some") || p.at_contextual("any")) && nth_starts_type(p, 1))
}

fn nth_starts_type(p: &Cursor, n: usize) -> bool {
    matches!(
        p.nth(n),
        Some(
            SyntaxKind::Identifier
                | SyntaxKind::SelfType
                | SyntaxKind::LParen
                | SyntaxKind::LBracket
        )
    )
}

fn prefixed(p: &mut Cursor) {
    if p.at_contextual("some") {
        p.start_node(SyntaxKind::TySome);
        p.bump();
        ty(p);
        p.finish_node();
    } else if p.at_contextual("any") {
        p.start_node(SyntaxKind::TyAny);
        p.bump();
        ty(p);
        p.finish_node();
    } else {
        p.start_node(SyntaxKind::TyAttributed);
        attribute_list(p);
        while p.at(SyntaxKind::Inout) || TYPE_SPECIFIERS.iter().any(|word| p.at_contextual(word)) {
            p.bump();
        }
        attribute_list(p);
        ty(p);
        p.finish_node();
    }
}

/// A primary type followed by any `?` and `!` suffixes
fn postfixed(p: &mut Cursor) {
    let checkpoint = p.checkpoint();
    primary(p);

    loop {
        let kind = match p.current() {
            Some(SyntaxKind::Question) if p.nth_is_joined(0) => SyntaxKind::TyOptional,
            Some(SyntaxKind::Bang) if p.nth_is_joined(0) => SyntaxKind::TyImplicitlyUnwrapped,
            _ => break,
        };
        p.start_node_at(checkpoint, kind);
        p.bump();
        p.finish_node();
    }
}

fn primary(p: &mut Cursor) {
    match p.current() {
        Some(SyntaxKind::LParen) => tuple_or_function(p),
        Some(SyntaxKind::LBracket) => collection(p),
        Some(
            SyntaxKind::Identifier
            | SyntaxKind::SelfType
            | SyntaxKind::Class
            | SyntaxKind::Protocol,
        ) => {
            path(p)
        }
        _ => p.error("expected a type"),
    }
}

fn path(p: &mut Cursor) {
    p.start_node(SyntaxKind::TyPath);
    path_segment(p);
    while p.at(SyntaxKind::Dot)
        && matches!(
            p.nth(1),
            Some(SyntaxKind::Identifier | SyntaxKind::SelfType | SyntaxKind::Protocol)
        )
    {
        p.bump();
        path_segment(p);
    }
    p.finish_node();
}

fn path_segment(p: &mut Cursor) {
    p.start_node(SyntaxKind::TyPathSegment);
    p.bump();
    if p.at(SyntaxKind::LAngle) {
        generic_argument_clause(p);
    }
    p.finish_node();
}

/// Parse `<Int, String>`
pub fn generic_argument_clause(p: &mut Cursor) {
    p.start_node(SyntaxKind::GenericArgumentClause);
    p.bump();
    while at_type_start(p) {
        ty(p);
        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }
    p.expect(SyntaxKind::RAngle, "`>` to close generic arguments");
    p.finish_node();
}

fn collection(p: &mut Cursor) {
    let checkpoint = p.checkpoint();
    p.bump(); // [
    ty(p);

    let kind = if p.eat(SyntaxKind::Colon) {
        ty(p);
        SyntaxKind::TyDictionary
    } else {
        SyntaxKind::TyArray
    };

    p.expect(SyntaxKind::RBracket, "`]` to close collection type");
    p.start_node_at(checkpoint, kind);
    p.finish_node();
}

/// Parse `(A, label: B)` and, when followed by effects or `->`, a function type
fn tuple_or_function(p: &mut Cursor) {
    let checkpoint = p.checkpoint();

    p.start_node(SyntaxKind::TyTuple);
    p.bump(); // (
    while !p.at_eof() && !p.at(SyntaxKind::RParen) {
        tuple_element(p);
        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }
    p.expect(SyntaxKind::RParen, "`)` to close tuple type");
    p.finish_node();

    if at_effect_specifier(p) || p.at(SyntaxKind::Arrow) {
        p.start_node_at(checkpoint, SyntaxKind::TyFunction);
        effect_specifiers(p);
        p.expect(SyntaxKind::Arrow, "`->` in function type");
        ty(p);
        p.finish_node();
    }
}

fn tuple_element(p: &mut Cursor) {
    p.start_node(SyntaxKind::TyTupleElement);

    // Labels: `name: T` or `_ name: T`
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

    if at_type_start(p) {
        ty(p);
    } else {
        p.error("expected a type");
        if !p.at(SyntaxKind::Comma) && !p.at(SyntaxKind::RParen) && !p.at_eof() {
            p.bump();
        }
    }
    p.eat(SyntaxKind::Ellipsis);
    p.finish_node();
}
