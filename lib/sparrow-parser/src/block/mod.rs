//! Scopes and statements
//!
//! A scope is a run of items: declarations, `#if` blocks and statements.
//! Statements are not analysed; each one becomes a `Statement` node holding
//! its tokens up to the end of the line (or a `;`), with brackets nested.

use sparrow_syntax_tree::SyntaxKind;

use crate::cursor::Cursor;
use crate::declaration::{at_declaration, declaration};
use crate::expr::continues_line;

/// Parse items until EOF or one of `stop` is reached at depth zero
pub fn items(p: &mut Cursor, stop: &[SyntaxKind]) {
    while let Some(kind) = p.current() {
        if stop.contains(&kind) {
            break;
        }
        item(p, stop);
    }
}

fn item(p: &mut Cursor, stop: &[SyntaxKind]) {
    if p.at(SyntaxKind::Semicolon) {
        p.bump();
    } else if at_declaration(p) {
        declaration(p, stop);
    } else {
        statement(p, stop);
    }
}

/// Parse `{ members }` for types, extensions and protocols
pub fn member_block(p: &mut Cursor) {
    p.start_node(SyntaxKind::MemberBlock);
    if p.expect(SyntaxKind::LBrace, "`{`") {
        items(p, &[SyntaxKind::RBrace]);
        p.expect(SyntaxKind::RBrace, "`}` to close the body");
    }
    p.finish_node();
}

/// Parse `{ items }` for function, initializer, deinitializer and accessor bodies
pub fn code_block(p: &mut Cursor) {
    p.start_node(SyntaxKind::CodeBlock);
    p.bump(); // {
    items(p, &[SyntaxKind::RBrace]);
    p.expect(SyntaxKind::RBrace, "`}` to close the block");
    p.finish_node();
}

fn statement(p: &mut Cursor, stop: &[SyntaxKind]) {
    p.start_node(SyntaxKind::Statement);

    // A closer with nothing to close
    if matches!(
        p.current(),
        Some(SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace)
    ) {
        p.error("unexpected closing bracket");
        p.bump();
        p.finish_node();
        return;
    }

    let mut depth = 0usize;
    let mut consumed = false;

    while let Some(kind) = p.current() {
        if depth == 0 {
            if stop.contains(&kind) || kind == SyntaxKind::RBrace {
                break;
            }
            if consumed && p.newline_before() && !continues_line(p) {
                break;
            }
            if kind == SyntaxKind::Semicolon {
                p.bump();
                break;
            }
        }

        match kind {
            SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => depth += 1,
            SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => {
                depth = depth.saturating_sub(1)
            }
            _ => {}
        }
        p.bump();
        consumed = true;
    }

    p.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::parse_source_file;
    use crate::parser::Parser;
    use sparrow_syntax_tree::SyntaxKind;

    #[test]
    fn test_statements_split_on_lines() {
        let result = Parser::parse("print(1)\nprint(2); print(3)", parse_source_file);
        let statements: Vec<_> = result
            .tree
            .children()
            .filter(|n| n.kind() == SyntaxKind::Statement)
            .map(|n| n.text().to_string())
            .collect();
        assert_eq!(statements, vec!["print(1)", "print(2);", "print(3)"]);
    }

    #[test]
    fn test_control_flow_is_one_statement() {
        let source = "if ready {\n    let x = 1\n} else {\n    run()\n}";
        let result = Parser::parse(source, parse_source_file);
        assert_eq!(result.tree.children().count(), 1);
        // Declarations nested in control flow are not members of the scope
        assert_eq!(
            result.tree.descendants().filter(|n| n.kind() == SyntaxKind::VariableDecl).count(),
            0
        );
    }

    #[test]
    fn test_stray_closer_is_reported() {
        let result = Parser::parse("}\nlet x = 1", parse_source_file);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.tree.text().to_string(), "}\nlet x = 1");
    }
}
