//! Errors raised when a resolver is built over the wrong node

use sparrow_reporting::{Diagnostic, IntoDiagnostic, Label};
use sparrow_syntax_tree::{SyntaxKind, TextRange};
use thiserror::Error;

/// Error when constructing a declaration from a syntax node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticsError {
    /// The node is not the kind of declaration being constructed
    #[error("expected {expected:?}, found {found:?}")]
    UnexpectedNode {
        expected: SyntaxKind,
        found: SyntaxKind,
        range: TextRange,
    },
    /// A binding or case element that does not sit inside its declaration
    #[error("{found:?} is not inside a {expected:?}")]
    Detached {
        expected: SyntaxKind,
        found: SyntaxKind,
        range: TextRange,
    },
}

impl SemanticsError {
    pub fn range(&self) -> TextRange {
        match self {
            SemanticsError::UnexpectedNode { range, .. } => *range,
            SemanticsError::Detached { range, .. } => *range,
        }
    }
}

impl IntoDiagnostic for SemanticsError {
    fn into_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let range = self.range();
        let span = usize::from(range.start())..usize::from(range.end());

        let label = match self {
            SemanticsError::UnexpectedNode { expected, .. } => {
                format!("this is not a {:?}", expected)
            }
            SemanticsError::Detached { expected, .. } => {
                format!("no enclosing {:?}", expected)
            }
        };

        Diagnostic::error()
            .with_message(self.to_string())
            .with_labels(vec![Label::primary(file_id, span).with_message(label)])
    }
}

pub type Result<T> = std::result::Result<T, SemanticsError>;
