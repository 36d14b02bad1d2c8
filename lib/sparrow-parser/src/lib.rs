//! Sparrow Parser
//!
//! An error-tolerant, lossless parser for the declaration structure of Swift
//! source files. Grammar functions emit events into an [`event::EventSink`];
//! [`Parser`] turns those events into a `rowan` tree from `sparrow-syntax-tree`
//! and collects the errors.
//!
//! Only declarations are parsed in detail. Statements and expressions are kept
//! as flat token runs, which is all the semantic layer reads from them.
//!
//! # Example
//!
//! ```
//! use sparrow_parser::parse;
//! use sparrow_syntax_tree::SyntaxKind;
//!
//! let result = parse("var x, y: Int");
//! let variable = result.tree.first_child().unwrap();
//! assert_eq!(variable.kind(), SyntaxKind::VariableDecl);
//! ```

pub mod event;
pub mod parser;

mod block;
mod common;
mod cursor;
mod declaration;
mod enum_case;
mod expr;
mod function;
mod if_config;
mod import;
mod nominal;
mod operator;
mod ty;
mod type_alias;
mod variable;

use sparrow_syntax_tree::SyntaxKind;

use crate::block::items;
use crate::cursor::Cursor;
use crate::event::EventSink;

// Re-export Parser API
pub use parser::{ParseError, ParseResult, Parser};

/// Parse a whole file into a `SourceFile` node
pub fn parse_source_file(source: &str, sink: &mut EventSink) {
    // Opened on the sink directly so leading trivia lands inside the root
    sink.start_node(SyntaxKind::SourceFile);
    {
        let mut p = Cursor::new(source, sink);
        items(&mut p, &[]);
        p.flush_remaining();
    }
    sink.finish_node();
}

/// Parse a whole file
pub fn parse(source: &str) -> ParseResult {
    Parser::parse(source, parse_source_file)
}
