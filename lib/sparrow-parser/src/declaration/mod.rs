//! Declaration dispatch
//!
//! Every declaration starts with optional attributes and modifiers, followed by
//! the keyword that decides its kind. The attributes and modifiers are parsed
//! first and the declaration node is opened around them once the keyword is
//! known.

use sparrow_syntax_tree::SyntaxKind;

use crate::common::{attribute_list, modifier_list, skip_attributes_and_modifiers};
use crate::cursor::Cursor;
use crate::enum_case::enum_case_declaration;
use crate::function::{
    deinitializer_declaration, function_declaration, initializer_declaration, subscript_declaration,
};
use crate::if_config::if_config_declaration;
use crate::import::import_declaration;
use crate::nominal::{extension_declaration, nominal_declaration};
use crate::operator::{operator_declaration, precedence_group_declaration};
use crate::type_alias::{associated_type_declaration, type_alias_declaration};
use crate::variable::variable_declaration;

/// Whether the `n`th token ahead is a declaration keyword
fn nth_is_declaration_keyword(p: &Cursor, n: usize) -> bool {
    match p.nth(n) {
        Some(
            SyntaxKind::Class
            | SyntaxKind::Struct
            | SyntaxKind::Enum
            | SyntaxKind::Protocol
            | SyntaxKind::Extension
            | SyntaxKind::Func
            | SyntaxKind::Init
            | SyntaxKind::Deinit
            | SyntaxKind::Subscript
            | SyntaxKind::Var
            | SyntaxKind::Let
            | SyntaxKind::Typealias
            | SyntaxKind::Associatedtype
            | SyntaxKind::Import
            | SyntaxKind::Operator
            | SyntaxKind::Precedencegroup
            | SyntaxKind::Case
            | SyntaxKind::PoundIf,
        ) => true,
        Some(SyntaxKind::Identifier) => {
            p.nth_at_contextual(n, "actor") && p.nth_at(n + 1, SyntaxKind::Identifier)
        }
        _ => false,
    }
}

/// Whether the current position starts a declaration
pub fn at_declaration(p: &Cursor) -> bool {
    let keyword = skip_attributes_and_modifiers(p, 0);
    nth_is_declaration_keyword(p, keyword)
}

/// Parse one declaration; `stop` is passed through to `#if` blocks
pub fn declaration(p: &mut Cursor, stop: &[SyntaxKind]) {
    let checkpoint = p.checkpoint();
    attribute_list(p);
    modifier_list(p);

    match p.current() {
        Some(SyntaxKind::Class) => nominal_declaration(p, checkpoint, SyntaxKind::ClassDecl),
        Some(SyntaxKind::Struct) => nominal_declaration(p, checkpoint, SyntaxKind::StructDecl),
        Some(SyntaxKind::Enum) => nominal_declaration(p, checkpoint, SyntaxKind::EnumDecl),
        Some(SyntaxKind::Protocol) => nominal_declaration(p, checkpoint, SyntaxKind::ProtocolDecl),
        Some(SyntaxKind::Identifier) if p.at_contextual("actor") => {
            nominal_declaration(p, checkpoint, SyntaxKind::ActorDecl)
        }
        Some(SyntaxKind::Extension) => extension_declaration(p, checkpoint),
        Some(SyntaxKind::Func) => function_declaration(p, checkpoint),
        Some(SyntaxKind::Init) => initializer_declaration(p, checkpoint),
        Some(SyntaxKind::Deinit) => deinitializer_declaration(p, checkpoint),
        Some(SyntaxKind::Subscript) => subscript_declaration(p, checkpoint),
        Some(SyntaxKind::Var | SyntaxKind::Let) => variable_declaration(p, checkpoint),
        Some(SyntaxKind::Typealias) => type_alias_declaration(p, checkpoint),
        Some(SyntaxKind::Associatedtype) => associated_type_declaration(p, checkpoint),
        Some(SyntaxKind::Import) => import_declaration(p, checkpoint),
        Some(SyntaxKind::Operator) => operator_declaration(p, checkpoint),
        Some(SyntaxKind::Precedencegroup) => precedence_group_declaration(p, checkpoint),
        Some(SyntaxKind::Case) => enum_case_declaration(p, checkpoint),
        Some(SyntaxKind::PoundIf) => if_config_declaration(p, checkpoint, stop),
        _ => {
            p.start_node_at(checkpoint, SyntaxKind::Error);
            p.error("expected a declaration");
            if !p.at_eof() {
                p.bump();
            }
            p.finish_node();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_source_file;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;
    use sparrow_syntax_tree::SyntaxKind;

    fn top_level_kinds(source: &str) -> Vec<SyntaxKind> {
        let result = Parser::parse(source, parse_source_file);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        result.tree.children().map(|n| n.kind()).collect()
    }

    #[test]
    fn test_every_declaration_keyword() {
        let source = r#"
import Foundation
class A {}
struct B {}
enum C {}
protocol D {}
actor E {}
extension F {}
func g() {}
var h = 1
let i = 2
typealias J = Int
infix operator <=> : ComparisonPrecedence
precedencegroup K {}
#if DEBUG
#endif
"#;
        assert_eq!(
            top_level_kinds(source),
            vec![
                SyntaxKind::ImportDecl,
                SyntaxKind::ClassDecl,
                SyntaxKind::StructDecl,
                SyntaxKind::EnumDecl,
                SyntaxKind::ProtocolDecl,
                SyntaxKind::ActorDecl,
                SyntaxKind::ExtensionDecl,
                SyntaxKind::FunctionDecl,
                SyntaxKind::VariableDecl,
                SyntaxKind::VariableDecl,
                SyntaxKind::TypeAliasDecl,
                SyntaxKind::OperatorDecl,
                SyntaxKind::PrecedenceGroupDecl,
                SyntaxKind::IfConfigDecl,
            ]
        );
    }

    #[test]
    fn test_attributes_and_modifiers_belong_to_the_declaration() {
        let result = Parser::parse(
            "@available(iOS 13, *)\n@MainActor\npublic final class A {}",
            parse_source_file,
        );
        let class = result.tree.first_child().unwrap();
        assert_eq!(class.kind(), SyntaxKind::ClassDecl);
        let children: Vec<_> = class.children().map(|n| n.kind()).collect();
        assert_eq!(
            children,
            vec![
                SyntaxKind::AttributeList,
                SyntaxKind::ModifierList,
                SyntaxKind::Name,
                SyntaxKind::MemberBlock,
            ]
        );
    }

    #[test]
    fn test_class_as_modifier() {
        let result =
            Parser::parse("class Foo { class var shared: Foo { Foo() } }", parse_source_file);
        assert!(result.errors.is_empty());
        let variable = result
            .tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::VariableDecl)
            .unwrap();
        assert_eq!(variable.first_child().unwrap().kind(), SyntaxKind::ModifierList);
    }

    #[test]
    fn test_actor_needs_a_name() {
        // `actor` on its own is an ordinary identifier
        assert_eq!(top_level_kinds("actor.run()"), vec![SyntaxKind::Statement]);
    }

    #[test]
    fn test_lossless_round_trip() {
        let source = "/// Docs\n@objc public class A: NSObject { // trailing\n    var x = 1 }\n";
        let result = Parser::parse(source, parse_source_file);
        assert_eq!(result.tree.text().to_string(), source);
    }
}
