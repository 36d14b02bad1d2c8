//! Fragments shared by several declaration kinds
//!
//! Attributes, modifiers, names, generic clauses, inheritance clauses and
//! effect specifiers all look the same wherever they appear.

use sparrow_syntax_tree::SyntaxKind;

use crate::cursor::Cursor;
use crate::ty::ty;

/// Contextual words that act as declaration modifiers
const CONTEXTUAL_MODIFIERS: &[&str] = &[
    "open",
    "package",
    "final",
    "override",
    "required",
    "convenience",
    "mutating",
    "nonmutating",
    "lazy",
    "weak",
    "unowned",
    "optional",
    "dynamic",
    "indirect",
    "prefix",
    "infix",
    "postfix",
    "nonisolated",
    "distributed",
    "consuming",
    "borrowing",
    "__consuming",
];

/// Declaration keywords that may follow `class` when it is used as a modifier
const MEMBER_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::Func,
    SyntaxKind::Var,
    SyntaxKind::Let,
    SyntaxKind::Subscript,
    SyntaxKind::Typealias,
    SyntaxKind::Init,
];

/// Whether the `n`th token ahead starts a modifier
pub fn nth_is_modifier(p: &Cursor, n: usize) -> bool {
    match p.nth(n) {
        Some(
            SyntaxKind::Public
            | SyntaxKind::Private
            | SyntaxKind::Fileprivate
            | SyntaxKind::Internal
            | SyntaxKind::Static,
        ) => true,
        Some(SyntaxKind::Class) => {
            p.nth(n + 1).is_some_and(|next| MEMBER_KEYWORDS.contains(&next))
                || nth_is_modifier(p, n + 1)
        }
        Some(SyntaxKind::Identifier) => CONTEXTUAL_MODIFIERS.contains(&p.nth_text(n)),
        _ => false,
    }
}

/// Number of tokens a balanced group starting at `n` spans, if one starts there
pub fn balanced_len(p: &Cursor, n: usize) -> usize {
    let mut depth = 0usize;
    let mut offset = n;
    while let Some(kind) = p.nth(offset) {
        match kind {
            SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => depth += 1,
            SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => {
                depth = depth.saturating_sub(1)
            }
            _ => {}
        }
        offset += 1;
        if depth == 0 {
            break;
        }
    }
    offset - n
}

/// Skip attributes and modifiers starting at `n`, returning the index after them
pub fn skip_attributes_and_modifiers(p: &Cursor, mut n: usize) -> usize {
    loop {
        if p.nth_at(n, SyntaxKind::At) {
            n += 2;
            while p.nth_at(n, SyntaxKind::Dot) && p.nth_at(n + 1, SyntaxKind::Identifier) {
                n += 2;
            }
            if p.nth_at(n, SyntaxKind::LParen) && p.nth_is_joined(n) {
                n += balanced_len(p, n);
            }
        } else if nth_is_modifier(p, n) {
            n += 1;
            if p.nth_at(n, SyntaxKind::LParen) && p.nth_is_joined(n) {
                n += balanced_len(p, n);
            }
        } else {
            return n;
        }
    }
}

/// Parse `@name`, `@name(arguments)` repeatedly into an AttributeList
pub fn attribute_list(p: &mut Cursor) {
    if !p.at(SyntaxKind::At) {
        return;
    }

    p.start_node(SyntaxKind::AttributeList);
    while p.at(SyntaxKind::At) {
        attribute(p);
    }
    p.finish_node();
}

fn attribute(p: &mut Cursor) {
    p.start_node(SyntaxKind::Attribute);
    p.bump(); // @

    p.start_node(SyntaxKind::Name);
    if p.at_eof() {
        p.error("expected attribute name");
    } else {
        p.bump();
        while p.at(SyntaxKind::Dot) && p.nth_at(1, SyntaxKind::Identifier) {
            p.bump();
            p.bump();
        }
    }
    p.finish_node();

    if p.at(SyntaxKind::LParen) && p.nth_is_joined(0) {
        attribute_arguments(p);
    }
    p.finish_node();
}

fn attribute_arguments(p: &mut Cursor) {
    p.start_node(SyntaxKind::AttributeArguments);
    p.bump(); // (

    while !p.at_eof() && !p.at(SyntaxKind::RParen) {
        p.start_node(SyntaxKind::AttributeArgument);
        while let Some(kind) = p.current() {
            match kind {
                SyntaxKind::Comma | SyntaxKind::RParen => break,
                SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => p.bump_balanced(),
                _ => p.bump(),
            }
        }
        p.finish_node();

        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }

    p.expect(SyntaxKind::RParen, "`)` to close attribute arguments");
    p.finish_node();
}

/// Parse modifiers such as `public`, `private(set)` or `class` into a ModifierList
pub fn modifier_list(p: &mut Cursor) {
    if !nth_is_modifier(p, 0) {
        return;
    }

    p.start_node(SyntaxKind::ModifierList);
    while nth_is_modifier(p, 0) {
        p.start_node(SyntaxKind::Modifier);
        p.bump();
        if p.at(SyntaxKind::LParen) && p.nth_is_joined(0) {
            p.start_node(SyntaxKind::ModifierDetail);
            p.bump_balanced();
            p.finish_node();
        }
        p.finish_node();
    }
    p.finish_node();
}

/// Parse a plain identifier name
pub fn name(p: &mut Cursor) {
    p.start_node(SyntaxKind::Name);
    if !p.eat(SyntaxKind::Identifier) {
        p.error("expected a name");
    }
    p.finish_node();
}

pub fn is_operator_token(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::CustomOperator
            | SyntaxKind::LAngle
            | SyntaxKind::RAngle
            | SyntaxKind::Equals
            | SyntaxKind::Bang
            | SyntaxKind::Question
            | SyntaxKind::Ampersand
            | SyntaxKind::Ellipsis
            | SyntaxKind::Dot
    )
}

/// Parse a name that is either an identifier or an operator such as `==` or `<=`
pub fn operator_or_identifier_name(p: &mut Cursor) {
    p.start_node(SyntaxKind::Name);
    if !p.eat(SyntaxKind::Identifier) {
        let mut first = true;
        while p.current().is_some_and(is_operator_token) && (first || p.nth_is_joined(0)) {
            p.bump();
            first = false;
        }
        if first {
            p.error("expected a name or operator");
        }
    }
    p.finish_node();
}

/// Parse `<T, U: Equatable>`
pub fn generic_parameter_clause(p: &mut Cursor) {
    if !p.at(SyntaxKind::LAngle) {
        return;
    }

    p.start_node(SyntaxKind::GenericParameterClause);
    p.bump();

    while p.at(SyntaxKind::Identifier) || p.at(SyntaxKind::At) {
        p.start_node(SyntaxKind::GenericParameter);
        attribute_list(p);
        // Parameter packs: `each T`
        if p.at_contextual("each") && p.nth_at(1, SyntaxKind::Identifier) {
            p.bump();
        }
        name(p);
        if p.at(SyntaxKind::Colon) {
            p.bump();
            ty(p);
        }
        p.eat(SyntaxKind::Ellipsis);
        p.finish_node();

        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }

    p.expect(SyntaxKind::RAngle, "`>` to close generic parameters");
    p.finish_node();
}

/// Parse `where T: Equatable, T.Element == Int`
pub fn generic_where_clause(p: &mut Cursor) {
    if !p.at(SyntaxKind::Where) {
        return;
    }

    p.start_node(SyntaxKind::GenericWhereClause);
    p.bump();

    loop {
        p.start_node(SyntaxKind::GenericRequirement);
        ty(p);
        if p.at(SyntaxKind::Colon) {
            p.bump();
            ty(p);
        } else if p.at(SyntaxKind::CustomOperator) && p.nth_text(0) == "==" {
            p.bump();
            ty(p);
        } else {
            p.error("expected `:` or `==` in generic requirement");
        }
        p.finish_node();

        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }

    p.finish_node();
}

/// Parse `: Base, Protocol`
pub fn inheritance_clause(p: &mut Cursor) {
    if !p.at(SyntaxKind::Colon) {
        return;
    }

    p.start_node(SyntaxKind::InheritanceClause);
    p.bump();

    loop {
        p.start_node(SyntaxKind::InheritedType);
        ty(p);
        p.finish_node();

        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }

    p.finish_node();
}

pub fn at_effect_specifier(p: &Cursor) -> bool {
    p.at(SyntaxKind::Throws)
        || p.at(SyntaxKind::Rethrows)
        || p.at_contextual("async")
        || p.at_contextual("reasync")
}

/// Parse `async`, `throws`, `rethrows` and typed `throws(E)` in any order
pub fn effect_specifiers(p: &mut Cursor) {
    if !at_effect_specifier(p) {
        return;
    }

    p.start_node(SyntaxKind::EffectSpecifiers);
    while at_effect_specifier(p) {
        let throws = p.at(SyntaxKind::Throws);
        p.bump();
        if throws && p.at(SyntaxKind::LParen) && p.nth_is_joined(0) {
            p.bump_balanced();
        }
    }
    p.finish_node();
}

/// Parse `: Type`
pub fn type_annotation(p: &mut Cursor) {
    p.start_node(SyntaxKind::TypeAnnotation);
    p.bump(); // :
    ty(p);
    p.finish_node();
}
