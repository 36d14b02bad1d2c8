//! Syntax node helper functions
//!
//! Utilities for reading information out of syntax nodes. None of them fail:
//! a missing child or token yields `None` or an empty string.

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Find a child node with the specified kind
pub fn find_child(syntax: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    syntax.children().find(|n| n.kind() == kind)
}

/// All child nodes with the specified kind, in source order
pub fn children_of_kind(syntax: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxNode> {
    syntax.children().filter(move |n| n.kind() == kind)
}

/// Find a direct child token with the specified kind
pub fn find_token(syntax: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    syntax
        .children_with_tokens()
        .filter_map(|elem| elem.into_token())
        .find(|tok| tok.kind() == kind)
}

/// Direct child tokens that are not whitespace or comments
pub fn significant_tokens(syntax: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    syntax
        .children_with_tokens()
        .filter_map(|elem| elem.into_token())
        .filter(|tok| !tok.kind().is_trivia())
}

/// The first direct child token of a declaration, which is its keyword
///
/// Attributes and modifiers are child nodes, so they never match.
pub fn keyword_token(syntax: &SyntaxNode) -> Option<SyntaxToken> {
    significant_tokens(syntax).next()
}

/// The first child node that is a type
pub fn find_type(syntax: &SyntaxNode) -> Option<SyntaxNode> {
    syntax.children().find(|n| is_type(n.kind()))
}

pub fn is_type(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TyPath
            | SyntaxKind::TyOptional
            | SyntaxKind::TyImplicitlyUnwrapped
            | SyntaxKind::TyArray
            | SyntaxKind::TyDictionary
            | SyntaxKind::TyTuple
            | SyntaxKind::TyFunction
            | SyntaxKind::TyComposition
            | SyntaxKind::TySome
            | SyntaxKind::TyAny
            | SyntaxKind::TyAttributed
    )
}

/// Tokens that read as words and need a space between them
fn is_word(kind: SyntaxKind) -> bool {
    !matches!(
        kind,
        SyntaxKind::LParen
            | SyntaxKind::RParen
            | SyntaxKind::LBrace
            | SyntaxKind::RBrace
            | SyntaxKind::LBracket
            | SyntaxKind::RBracket
            | SyntaxKind::LAngle
            | SyntaxKind::RAngle
            | SyntaxKind::Semicolon
            | SyntaxKind::Comma
            | SyntaxKind::Dot
            | SyntaxKind::Ellipsis
            | SyntaxKind::Colon
            | SyntaxKind::Equals
            | SyntaxKind::Arrow
            | SyntaxKind::Question
            | SyntaxKind::Bang
            | SyntaxKind::Ampersand
            | SyntaxKind::At
            | SyntaxKind::Hash
            | SyntaxKind::Backslash
            | SyntaxKind::CustomOperator
    )
}

fn needs_space(previous: SyntaxKind, next: SyntaxKind) -> bool {
    (is_word(previous) && is_word(next))
        || (previous == SyntaxKind::RParen && is_word(next))
        || matches!(previous, SyntaxKind::Comma | SyntaxKind::Colon)
        || matches!(previous, SyntaxKind::Ampersand | SyntaxKind::Arrow)
        || matches!(next, SyntaxKind::Ampersand | SyntaxKind::Arrow)
}

/// Text of a node with trivia removed and spacing normalized
///
/// `[ String :Int ]` and `[String: Int]` both read `[String: Int]`;
/// `some  View` reads `some View`.
pub fn normalized_text(syntax: &SyntaxNode) -> String {
    let mut text = String::new();
    let mut previous: Option<SyntaxKind> = None;

    for token in syntax
        .descendants_with_tokens()
        .filter_map(|elem| elem.into_token())
        .filter(|tok| !tok.kind().is_trivia())
    {
        if previous.is_some_and(|previous| needs_space(previous, token.kind())) {
            text.push(' ');
        }
        text.push_str(token.text());
        previous = Some(token.kind());
    }

    text
}

/// Source text of a node without leading or trailing trivia
pub fn trimmed_text(syntax: &SyntaxNode) -> String {
    syntax.text().to_string().trim().to_string()
}

/// Strip the backticks from an escaped identifier such as `` `default` ``
pub fn unescape_identifier(text: &str) -> &str {
    text.strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
        .unwrap_or(text)
}

/// Text of the `Name` child, with backticks removed
pub fn extract_name(syntax: &SyntaxNode) -> Option<String> {
    let name = find_child(syntax, SyntaxKind::Name)?;
    let text = normalized_text(&name);
    if text.is_empty() {
        return None;
    }
    Some(unescape_identifier(&text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparrow_parser::parse;

    fn first_of_kind(source: &str, kind: SyntaxKind) -> SyntaxNode {
        parse(source)
            .tree
            .descendants()
            .find(|n| n.kind() == kind)
            .unwrap()
    }

    #[test]
    fn test_normalized_text_collapses_trivia() {
        let ty = first_of_kind("var x: [ String :Int /* c */ ]", SyntaxKind::TyDictionary);
        assert_eq!(normalized_text(&ty), "[String: Int]");
    }

    #[test]
    fn test_normalized_text_keeps_word_spacing() {
        let ty = first_of_kind("func f() -> some   Collection<Int> {}", SyntaxKind::TySome);
        assert_eq!(normalized_text(&ty), "some Collection<Int>");
    }

    #[test]
    fn test_normalized_function_type() {
        let ty = first_of_kind("var f: (Int,String)async throws->Void", SyntaxKind::TyFunction);
        assert_eq!(normalized_text(&ty), "(Int, String) async throws -> Void");
    }

    #[test]
    fn test_extract_name_unescapes() {
        let decl = first_of_kind("func `default`() {}", SyntaxKind::FunctionDecl);
        assert_eq!(extract_name(&decl).as_deref(), Some("default"));
    }

    #[test]
    fn test_keyword_token_skips_attributes_and_modifiers() {
        let decl = first_of_kind("@objc public final class A {}", SyntaxKind::ClassDecl);
        assert_eq!(keyword_token(&decl).map(|t| t.text().to_string()).as_deref(), Some("class"));
    }
}
