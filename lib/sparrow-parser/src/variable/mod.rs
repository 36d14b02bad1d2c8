//! Variable declarations and accessor blocks
//!
//! ```text
//! VariableDecl
//!   AttributeList?
//!   ModifierList?
//!   Var | Let
//!   PatternBindingList
//!     PatternBinding
//!       IdentifierPattern | TuplePattern
//!       TypeAnnotation?
//!       Initializer?
//!       AccessorBlock?
//!     Comma
//!     PatternBinding
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::block::{code_block, items};
use crate::common::{
    attribute_list, balanced_len, effect_specifiers, modifier_list, type_annotation,
};
use crate::cursor::Cursor;
use crate::event::Checkpoint;
use crate::expr::{expr, ExprEnd};

/// Identifiers that introduce an accessor inside an accessor block
const ACCESSOR_KINDS: &[&str] = &["get", "set", "willSet", "didSet", "_read", "_modify"];

/// Modifiers allowed in front of an accessor
const ACCESSOR_MODIFIERS: &[&str] = &["mutating", "nonmutating", "__consuming"];

pub fn variable_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::VariableDecl);
    p.bump(); // var | let

    p.start_node(SyntaxKind::PatternBindingList);
    loop {
        pattern_binding(p);
        if !p.eat(SyntaxKind::Comma) {
            break;
        }
    }
    p.finish_node();

    p.finish_node();
}

fn pattern_binding(p: &mut Cursor) {
    p.start_node(SyntaxKind::PatternBinding);

    match p.current() {
        Some(SyntaxKind::Identifier) => {
            p.start_node(SyntaxKind::IdentifierPattern);
            p.bump();
            p.finish_node();
        }
        Some(SyntaxKind::LParen) => {
            p.start_node(SyntaxKind::TuplePattern);
            p.bump_balanced();
            p.finish_node();
        }
        _ => p.error("expected a variable name"),
    }

    if p.at(SyntaxKind::Colon) {
        type_annotation(p);
    }

    if p.at(SyntaxKind::Equals) {
        p.start_node(SyntaxKind::Initializer);
        p.bump();
        expr(p, ExprEnd::BeforeAccessors);
        p.finish_node();
    }

    if p.at(SyntaxKind::LBrace) {
        accessor_block(p);
    }

    p.finish_node();
}

/// Whether the `n`th token ahead begins an accessor declaration
fn nth_starts_accessor(p: &Cursor, n: usize) -> bool {
    let mut n = n;
    loop {
        if p.nth_at(n, SyntaxKind::At) {
            n += 2;
            if p.nth_at(n, SyntaxKind::LParen) && p.nth_is_joined(n) {
                n += balanced_len(p, n);
            }
        } else if ACCESSOR_MODIFIERS.iter().any(|word| p.nth_at_contextual(n, word)) {
            n += 1;
        } else {
            break;
        }
    }

    if !ACCESSOR_KINDS.iter().any(|word| p.nth_at_contextual(n, word)) {
        return false;
    }

    match p.nth(n + 1) {
        Some(
            SyntaxKind::LBrace
            | SyntaxKind::RBrace
            | SyntaxKind::LParen
            | SyntaxKind::Throws
            | SyntaxKind::Rethrows
            | SyntaxKind::At,
        ) => true,
        Some(SyntaxKind::Identifier) => {
            p.nth_at_contextual(n + 1, "async") || nth_starts_accessor(p, n + 1)
        }
        _ => false,
    }
}

/// Whether the current `{` opens a block of explicit accessors
pub fn at_accessor_block(p: &Cursor) -> bool {
    p.at(SyntaxKind::LBrace) && nth_starts_accessor(p, 1)
}

/// Parse `{ get set }`, `{ didSet { ... } }` or an implicit getter body
pub fn accessor_block(p: &mut Cursor) {
    p.start_node(SyntaxKind::AccessorBlock);
    let explicit = at_accessor_block(p);
    p.bump(); // {

    if explicit {
        while !p.at_eof() && !p.at(SyntaxKind::RBrace) {
            if nth_starts_accessor(p, 0) {
                accessor_declaration(p);
            } else {
                p.error("expected an accessor");
                p.bump();
            }
        }
    } else {
        items(p, &[SyntaxKind::RBrace]);
    }

    p.expect(SyntaxKind::RBrace, "`}` to close accessors");
    p.finish_node();
}

fn accessor_declaration(p: &mut Cursor) {
    p.start_node(SyntaxKind::AccessorDecl);
    attribute_list(p);
    modifier_list(p);
    p.bump(); // get | set | willSet | didSet | _read | _modify

    if p.at(SyntaxKind::LParen) {
        p.start_node(SyntaxKind::AccessorParameter);
        p.bump();
        p.expect(SyntaxKind::Identifier, "parameter name");
        p.expect(SyntaxKind::RParen, "`)`");
        p.finish_node();
    }

    effect_specifiers(p);

    if p.at(SyntaxKind::LBrace) {
        code_block(p);
    }
    p.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::parse_source_file;
    use crate::parser::Parser;
    use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

    fn parse(source: &str) -> SyntaxNode {
        let result = Parser::parse(source, parse_source_file);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        result.tree
    }

    fn count(tree: &SyntaxNode, kind: SyntaxKind) -> usize {
        tree.descendants().filter(|n| n.kind() == kind).count()
    }

    #[test]
    fn test_binding_list() {
        let tree = parse("var x, y: Int, z = 3");
        assert_eq!(count(&tree, SyntaxKind::VariableDecl), 1);
        assert_eq!(count(&tree, SyntaxKind::PatternBinding), 3);
        assert_eq!(count(&tree, SyntaxKind::TypeAnnotation), 1);
        assert_eq!(count(&tree, SyntaxKind::Initializer), 1);
    }

    #[test]
    fn test_protocol_requirement_accessors() {
        let tree = parse("var x: Int { get set }");
        assert_eq!(count(&tree, SyntaxKind::AccessorDecl), 2);
    }

    #[test]
    fn test_effectful_getter() {
        let tree = parse("var x: Int { get async throws }");
        assert_eq!(count(&tree, SyntaxKind::AccessorDecl), 1);
        assert_eq!(count(&tree, SyntaxKind::EffectSpecifiers), 1);
    }

    #[test]
    fn test_observers_after_initializer() {
        let tree = parse("var x = 0 {\n    willSet(next) { }\n    didSet { print(oldValue) }\n}");
        assert_eq!(count(&tree, SyntaxKind::AccessorDecl), 2);
        assert_eq!(count(&tree, SyntaxKind::AccessorParameter), 1);
    }

    #[test]
    fn test_implicit_getter() {
        let tree = parse("var x: Int { return 42 }");
        assert_eq!(count(&tree, SyntaxKind::AccessorBlock), 1);
        assert_eq!(count(&tree, SyntaxKind::AccessorDecl), 0);
        assert_eq!(count(&tree, SyntaxKind::Statement), 1);
    }

    #[test]
    fn test_mutating_accessor() {
        let tree = parse("var x: Int { get { 1 } nonmutating set { } }");
        assert_eq!(count(&tree, SyntaxKind::AccessorDecl), 2);
    }
}
