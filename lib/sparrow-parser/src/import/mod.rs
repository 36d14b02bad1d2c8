//! Import declarations
//!
//! ```text
//! ImportDecl
//!   AttributeList?
//!   Import
//!   (Typealias | Struct | Class | Enum | Protocol | Let | Var | Func)?
//!   ImportPath
//!     Identifier (Dot Identifier)*
//! ```

use sparrow_syntax_tree::SyntaxKind;

use crate::common::is_operator_token;
use crate::cursor::Cursor;
use crate::event::Checkpoint;

pub fn import_declaration(p: &mut Cursor, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::ImportDecl);
    p.bump(); // import

    if matches!(
        p.current(),
        Some(
            SyntaxKind::Typealias
                | SyntaxKind::Struct
                | SyntaxKind::Class
                | SyntaxKind::Enum
                | SyntaxKind::Protocol
                | SyntaxKind::Let
                | SyntaxKind::Var
                | SyntaxKind::Func
        )
    ) {
        p.bump();
    }

    p.start_node(SyntaxKind::ImportPath);
    if p.eat(SyntaxKind::Identifier) {
        while p.at(SyntaxKind::Dot) && p.nth_is_joined(0) {
            p.bump();
            // A symbol import may end in an operator: `import func Lib.+++`
            if !p.eat(SyntaxKind::Identifier) {
                while p.current().is_some_and(is_operator_token) && p.nth_is_joined(0) {
                    p.bump();
                }
                break;
            }
        }
    } else {
        p.error("expected a module name");
    }
    p.finish_node();

    p.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::parse_source_file;
    use crate::parser::Parser;
    use sparrow_syntax_tree::SyntaxKind;

    #[test]
    fn test_submodule_import() {
        let result = Parser::parse("@testable import struct Kit.Model.User", parse_source_file);
        assert!(result.errors.is_empty());
        let import = result.tree.first_child().unwrap();
        let path = import.children().find(|n| n.kind() == SyntaxKind::ImportPath).unwrap();
        assert_eq!(path.text().to_string(), "Kit.Model.User");
        assert!(import.children_with_tokens().any(|e| e.kind() == SyntaxKind::Struct));
    }
}
