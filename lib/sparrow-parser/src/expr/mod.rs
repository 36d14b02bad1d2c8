//! Expressions
//!
//! Declarations only need expressions as text (initial values, default
//! arguments, raw values), so an expression is the run of tokens up to the
//! next depth-zero terminator. Brackets nest, so closures and calls are kept
//! whole.

use sparrow_syntax_tree::SyntaxKind;

use crate::cursor::Cursor;
use crate::variable::at_accessor_block;

/// Where an expression ends, beyond the universal terminators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprEnd {
    /// A `{` that opens `get`/`set`/`willSet`/`didSet` accessors also ends it
    BeforeAccessors,
    /// Only commas, closers and line breaks end it
    Plain,
}

/// Parse an `Expr` node
pub fn expr(p: &mut Cursor, end: ExprEnd) {
    p.start_node(SyntaxKind::Expr);

    let mut depth = 0usize;
    let mut consumed = false;

    while let Some(kind) = p.current() {
        if depth == 0 {
            let terminated = match kind {
                SyntaxKind::Comma
                | SyntaxKind::Semicolon
                | SyntaxKind::RParen
                | SyntaxKind::RBracket
                | SyntaxKind::RBrace
                | SyntaxKind::PoundElseif
                | SyntaxKind::PoundElse
                | SyntaxKind::PoundEndif => true,
                SyntaxKind::LBrace => end == ExprEnd::BeforeAccessors && at_accessor_block(p),
                _ => consumed && p.newline_before() && !continues_line(p),
            };
            if terminated {
                break;
            }
        }

        match kind {
            SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => depth += 1,
            SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => depth -= 1,
            _ => {}
        }
        p.bump();
        consumed = true;
    }

    if !consumed {
        p.error("expected an expression");
    }
    p.finish_node();
}

/// Whether the token after a line break continues the previous line
pub fn continues_line(p: &Cursor) -> bool {
    match p.current() {
        Some(SyntaxKind::Dot | SyntaxKind::CustomOperator | SyntaxKind::Question) => true,
        Some(SyntaxKind::Identifier) => matches!(p.nth_text(0), "else" | "catch"),
        _ => false,
    }
}
