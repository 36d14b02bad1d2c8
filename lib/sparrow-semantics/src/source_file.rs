use std::rc::Rc;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};
use tracing::debug;

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::config::SemanticsConfig;
use crate::error::{Result, SemanticsError};
use crate::resolver::ScopeContext;

/// The top-level declarations of one parsed file
///
/// File-level declarations are collected up front. Nested scopes are
/// collected when first asked for.
#[derive(Debug)]
pub struct SourceFile {
    node: SyntaxNode,
    declarations: DeclarationCollection,
}

impl SourceFile {
    /// Collect the declarations of a `SourceFile` root with the default config
    pub fn new(root: SyntaxNode) -> Result<Self> {
        Self::with_config(root, SemanticsConfig::default())
    }

    pub fn with_config(root: SyntaxNode, config: SemanticsConfig) -> Result<Self> {
        if root.kind() != SyntaxKind::SourceFile {
            return Err(SemanticsError::UnexpectedNode {
                expected: SyntaxKind::SourceFile,
                found: root.kind(),
                range: root.text_range(),
            });
        }

        let context = ScopeContext::new(None, Rc::new(config));
        let declarations = DeclarationCollection::collect(&root, &context);
        debug!(declarations = declarations.len(), "collected source file");

        Ok(Self {
            node: root,
            declarations,
        })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }
}

impl ChildDeclarationCollecting for SourceFile {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        Some(&self.declarations)
    }
}
