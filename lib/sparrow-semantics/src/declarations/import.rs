use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared};
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{find_child, normalized_text, significant_tokens};

/// An `import` declaration
///
/// The name is the whole dotted path, `Foundation` or `Kit.Model.User`.
#[derive(Debug)]
pub struct Import {
    resolver: DeclarationResolver,
    path_components: OnceCell<Vec<String>>,
    import_kind: OnceCell<Option<String>>,
}

impl Import {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::ImportDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            path_components: OnceCell::new(),
            import_kind: OnceCell::new(),
        }
    }

    /// The symbol kind of a symbol import, `struct` in `import struct Kit.User`
    pub fn import_kind(&self) -> Option<&str> {
        self.import_kind
            .get_or_init(|| {
                significant_tokens(self.syntax())
                    .nth(1)
                    .map(|tok| tok.text().to_string())
            })
            .as_deref()
    }

    pub fn path_components(&self) -> &[String] {
        self.path_components.get_or_init(|| {
            self.name()
                .split('.')
                .filter(|component| !component.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Whether a submodule rather than a whole module or a symbol is imported
    pub fn is_submodule(&self) -> bool {
        self.import_kind().is_none() && self.path_components().len() > 1
    }

    pub fn is_testable(&self) -> bool {
        self.attributes().iter().any(|attr| attr.name == "testable")
    }
}

impl Declared for Import {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Import
    }

    fn name(&self) -> &str {
        self.resolver.name_with(|node| {
            find_child(node, SyntaxKind::ImportPath)
                .map(|path| normalized_text(&path))
                .unwrap_or_default()
        })
    }
}

impl ChildDeclarationCollecting for Import {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn import(source: &str) -> Import {
        Import::new(parse(source).tree.first_child().unwrap()).unwrap()
    }

    #[test]
    fn test_module_import() {
        let import = import("import Foundation");
        assert_eq!(import.name(), "Foundation");
        assert_eq!(import.keyword(), "import");
        assert_eq!(import.import_kind(), None);
        assert!(!import.is_submodule());
    }

    #[test]
    fn test_symbol_import() {
        let import = import("@testable import struct Kit.Model.User");
        assert_eq!(import.name(), "Kit.Model.User");
        assert_eq!(import.import_kind(), Some("struct"));
        assert_eq!(import.path_components(), ["Kit", "Model", "User"]);
        assert!(!import.is_submodule());
        assert!(import.is_testable());
    }

    #[test]
    fn test_submodule_import() {
        let import = import("import UIKit.UIGestureRecognizerSubclass");
        assert!(import.is_submodule());
    }
}
