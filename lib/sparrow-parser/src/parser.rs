//! High-level parser API
//!
//! [`Parser::parse`] runs a grammar entry point against an event sink, pulls
//! the errors out of the event stream and builds the syntax tree.
//!
//! # Example
//!
//! ```
//! use sparrow_parser::{parse_source_file, Parser};
//!
//! let result = Parser::parse("struct Point { var x, y: Double }", parse_source_file);
//!
//! assert!(result.errors.is_empty());
//! assert_eq!(result.tree.children().count(), 1);
//! ```

use sparrow_lexer::Span;
use sparrow_reporting::{Diagnostic, IntoDiagnostic, Label};
use sparrow_syntax_tree::SyntaxNode;

use crate::event::{Event, EventSink, TreeBuilder};

/// A parse error with a message and optional span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Option<Span>,
}

impl IntoDiagnostic for ParseError {
    fn into_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let diagnostic = Diagnostic::error().with_message(&self.message);
        match &self.span {
            Some(span) => diagnostic.with_labels(vec![Label::primary(file_id, span.clone())]),
            None => diagnostic,
        }
    }
}

/// The result of parsing: a complete tree plus any errors found on the way
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub tree: SyntaxNode,
    pub errors: Vec<ParseError>,
}

/// High-level parser that provides a convenient API for parsing
pub struct Parser;

impl Parser {
    /// Parse `source` with `parse_fn` (usually [`crate::parse_source_file`])
    pub fn parse<F>(source: &str, parse_fn: F) -> ParseResult
    where
        F: FnOnce(&str, &mut EventSink),
    {
        let mut sink = EventSink::new();
        parse_fn(source, &mut sink);

        let errors: Vec<ParseError> = sink
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Error { message, span } => Some(ParseError {
                    message: message.clone(),
                    span: span.clone(),
                }),
                _ => None,
            })
            .collect();

        tracing::debug!(bytes = source.len(), errors = errors.len(), "parsed source");

        let tree = TreeBuilder::new(source, sink.into_events()).build();

        ParseResult { tree, errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source_file;
    use sparrow_reporting::DiagnosticContext;
    use sparrow_syntax_tree::SyntaxKind;

    #[test]
    fn test_parser_with_valid_source() {
        let result = Parser::parse("import Foundation", parse_source_file);

        assert!(result.errors.is_empty(), "Should have no errors");
        assert_eq!(result.tree.kind(), SyntaxKind::SourceFile);
    }

    #[test]
    fn test_parser_with_multiple_declarations() {
        let source = "import Foundation\npublic class A {}\npublic class B {}";
        let result = Parser::parse(source, parse_source_file);

        assert!(result.errors.is_empty());
        assert_eq!(result.tree.children().count(), 3);
    }

    #[test]
    fn test_tree_survives_errors() {
        let source = "class 123 {}\nstruct Fine {}";
        let result = Parser::parse(source, parse_source_file);

        assert!(!result.errors.is_empty());
        assert_eq!(result.tree.kind(), SyntaxKind::SourceFile);
        assert_eq!(result.tree.text().to_string(), source);
        assert!(result.tree.children().any(|n| n.kind() == SyntaxKind::StructDecl));
    }

    #[test]
    fn test_error_spans_present() {
        let result = Parser::parse("struct", parse_source_file);

        assert!(!result.errors.is_empty());
        assert!(result.errors.iter().all(|e| e.span.is_some()));
    }

    #[test]
    fn test_errors_render_as_diagnostics() {
        let source = "typealias Broken";
        let result = Parser::parse(source, parse_source_file);

        let mut diagnostics = DiagnosticContext::new();
        let file = diagnostics.add_file("broken.swift", source);
        for error in &result.errors {
            diagnostics.report(error, file);
        }

        assert!(diagnostics.has_errors());
        assert!(diagnostics.render().unwrap().contains("expected `=`"));
    }
}
