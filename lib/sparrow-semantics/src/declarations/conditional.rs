//! `#if` / `#elseif` / `#else` blocks
//!
//! Each branch is its own scope. Declarations inside a branch are not
//! members of the enclosing scope; they are reached through the block's
//! branches.

use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared};
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{children_of_kind, find_child, keyword_token, normalized_text};

/// One clause of a conditional compilation block
#[derive(Debug)]
pub struct Branch {
    clause: SyntaxNode,
    context: ScopeContext,
    declarations: OnceCell<DeclarationCollection>,
}

impl Branch {
    fn new(clause: SyntaxNode, context: ScopeContext) -> Self {
        Self {
            clause,
            context,
            declarations: OnceCell::new(),
        }
    }

    /// `#if`, `#elseif` or `#else`
    pub fn keyword(&self) -> String {
        keyword_token(&self.clause)
            .map(|tok| tok.text().to_string())
            .unwrap_or_default()
    }

    /// The condition as written, `None` for `#else`
    pub fn condition(&self) -> Option<String> {
        find_child(&self.clause, SyntaxKind::IfConfigCondition)
            .map(|condition| normalized_text(&condition))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.clause
    }
}

impl ChildDeclarationCollecting for Branch {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        Some(
            self.declarations
                .get_or_init(|| DeclarationCollection::collect(&self.clause, &self.context)),
        )
    }
}

/// A conditional compilation block
///
/// Its name is the condition of the first branch.
#[derive(Debug)]
pub struct ConditionalCompilationBlock {
    resolver: DeclarationResolver,
    branches: OnceCell<Vec<Branch>>,
}

impl ConditionalCompilationBlock {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::IfConfigDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            branches: OnceCell::new(),
        }
    }

    /// The clauses in source order
    ///
    /// Branches keep the enclosing scope's owner, so a property inside `#if`
    /// in a protocol is still a protocol member.
    pub fn branches(&self) -> &[Branch] {
        self.branches.get_or_init(|| {
            children_of_kind(self.syntax(), SyntaxKind::IfConfigClause)
                .map(|clause| Branch::new(clause, self.resolver.context().clone()))
                .collect()
        })
    }
}

impl Declared for ConditionalCompilationBlock {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::ConditionalCompilationBlock
    }

    // `#endif` is the only token directly under the block
    fn keyword(&self) -> &str {
        "#if"
    }

    fn name(&self) -> &str {
        self.resolver.name_with(|node| {
            find_child(node, SyntaxKind::IfConfigClause)
                .and_then(|clause| find_child(&clause, SyntaxKind::IfConfigCondition))
                .map(|condition| normalized_text(&condition))
                .unwrap_or_default()
        })
    }
}

impl ChildDeclarationCollecting for ConditionalCompilationBlock {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::Variable;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn block(source: &str) -> ConditionalCompilationBlock {
        let tree = parse(source).tree;
        let node = tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::IfConfigDecl)
            .unwrap();
        ConditionalCompilationBlock::new(node).unwrap()
    }

    #[test]
    fn test_branches() {
        let block = block(
            "#if os(iOS)\nimport UIKit\n#elseif os(macOS)\nimport AppKit\n\
             #else\nlet fallback = true\n#endif",
        );
        assert_eq!(block.name(), "os(iOS)");
        assert_eq!(block.keyword(), "#if");

        let branches = block.branches();
        assert_eq!(branches.len(), 3);
        assert_eq!(branches[0].keyword(), "#if");
        assert_eq!(branches[1].condition().as_deref(), Some("os(macOS)"));
        assert_eq!(branches[2].keyword(), "#else");
        assert_eq!(branches[2].condition(), None);

        assert_eq!(branches[0].imports()[0].name(), "UIKit");
        assert_eq!(branches[1].imports()[0].name(), "AppKit");
        assert_eq!(branches[2].variables()[0].name(), "fallback");
    }

    #[test]
    fn test_branch_keeps_protocol_owner() {
        let block = block("protocol P {\n#if DEBUG\n  var x: Int { get }\n#endif\n}");
        let variable: &Variable = &block.branches()[0].variables()[0];
        assert!(variable.in_protocol());
        assert!(!variable.has_setter());
    }

    #[test]
    fn test_block_itself_has_no_children() {
        let block = block("#if DEBUG\nfunc log() {}\n#endif");
        assert!(block.functions().is_empty());
        assert_eq!(block.branches()[0].functions().len(), 1);
    }
}
