//! Functions, initializers and deinitializers
//!
//! All three may own a body. Declarations directly inside the body (local
//! functions, local types, local variables) are collected lazily, unless the
//! config skips function bodies.

use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared, Generic};
use crate::entity::FunctionSignature;
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{extract_name, find_child, find_token};

fn body(resolver: &DeclarationResolver, owner: DeclarationKind) -> Option<&DeclarationCollection> {
    if resolver.context().config.skip_function_bodies {
        return None;
    }
    resolver.members(SyntaxKind::CodeBlock, owner)
}

/// A `func` declaration, including operator implementations
#[derive(Debug)]
pub struct Function {
    resolver: DeclarationResolver,
    signature: OnceCell<FunctionSignature>,
}

impl Function {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::FunctionDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            signature: OnceCell::new(),
        }
    }

    pub fn signature(&self) -> &FunctionSignature {
        self.signature
            .get_or_init(|| FunctionSignature::of(self.syntax()))
    }

    /// Whether this implements an operator, `static func == (...)`
    pub fn is_operator(&self) -> bool {
        self.name()
            .chars()
            .next()
            .is_some_and(|c| !(c.is_alphabetic() || c == '_' || c == '`'))
    }

    pub fn is_static(&self) -> bool {
        self.modifiers().contains("static") || self.modifiers().contains("class")
    }

    /// Protocol requirements have no body
    pub fn has_body(&self) -> bool {
        find_child(self.syntax(), SyntaxKind::CodeBlock).is_some()
    }
}

impl Declared for Function {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Function
    }

    fn name(&self) -> &str {
        self.resolver
            .name_with(|node| extract_name(node).unwrap_or_default())
    }
}

impl Generic for Function {}

impl ChildDeclarationCollecting for Function {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        body(&self.resolver, DeclarationKind::Function)
    }
}

/// An `init`, `init?` or `init!` declaration
#[derive(Debug)]
pub struct Initializer {
    resolver: DeclarationResolver,
    signature: OnceCell<FunctionSignature>,
}

impl Initializer {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::InitializerDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            signature: OnceCell::new(),
        }
    }

    pub fn signature(&self) -> &FunctionSignature {
        self.signature
            .get_or_init(|| FunctionSignature::of(self.syntax()))
    }

    /// Failable initializers, `init?` and `init!`
    pub fn is_optional(&self) -> bool {
        find_token(self.syntax(), SyntaxKind::Question).is_some()
            || find_token(self.syntax(), SyntaxKind::Bang).is_some()
    }

    pub fn is_convenience(&self) -> bool {
        self.modifiers().contains("convenience")
    }

    pub fn is_required(&self) -> bool {
        self.modifiers().contains("required")
    }
}

impl Declared for Initializer {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Initializer
    }

    fn name(&self) -> &str {
        "init"
    }
}

impl Generic for Initializer {}

impl ChildDeclarationCollecting for Initializer {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        body(&self.resolver, DeclarationKind::Initializer)
    }
}

/// A `deinit` declaration
#[derive(Debug)]
pub struct Deinitializer {
    resolver: DeclarationResolver,
}

impl Deinitializer {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::DeinitializerDecl)
            .map(|resolver| Self { resolver })
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self {
            resolver: DeclarationResolver::new(node, context),
        }
    }
}

impl Declared for Deinitializer {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Deinitializer
    }

    fn name(&self) -> &str {
        "deinit"
    }
}

impl ChildDeclarationCollecting for Deinitializer {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        body(&self.resolver, DeclarationKind::Deinitializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SemanticsConfig;
    use crate::entity::{EntityType, Throwing};
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;
    use std::rc::Rc;

    fn first(source: &str) -> SyntaxNode {
        parse(source).tree.first_child().unwrap()
    }

    #[test]
    fn test_function() {
        let function = Function::new(first(
            "public func load<T: Decodable>(from url: URL) async throws -> T {}",
        ))
        .unwrap();
        assert_eq!(function.name(), "load");
        assert_eq!(function.keyword(), "func");
        assert_eq!(function.generic_parameters()[0].name, "T");
        let signature = function.signature();
        assert_eq!(signature.input.len(), 1);
        assert!(signature.effects.is_async);
        assert_eq!(signature.effects.throwing, Some(Throwing::Throws));
        assert_eq!(signature.output, Some(EntityType::Simple("T".into())));
        assert!(!function.is_operator());
        assert!(function.has_body());
    }

    #[test]
    fn test_operator_function() {
        let function =
            Function::new(first("static func == (lhs: Self, rhs: Self) -> Bool { true }")).unwrap();
        assert_eq!(function.name(), "==");
        assert!(function.is_operator());
        assert!(function.is_static());
    }

    #[test]
    fn test_local_declarations() {
        let source = "func outer() {\n  let x = 1\n  func inner() {}\n  print(x)\n}";
        let function = Function::new(first(source)).unwrap();
        assert_eq!(function.variables().len(), 1);
        assert_eq!(function.functions()[0].name(), "inner");
    }

    #[test]
    fn test_skipped_bodies() {
        let tree = parse("func outer() {\n  func inner() {}\n}").tree;
        let config = Rc::new(SemanticsConfig::new().with_function_bodies_skipped());
        let function =
            Function::collected(tree.first_child().unwrap(), ScopeContext::new(None, config));
        assert!(function.child_declarations().is_none());
        assert!(function.functions().is_empty());
    }

    #[test]
    fn test_requirement_without_body() {
        let function = Function::new(first("func draw()")).unwrap();
        assert!(!function.has_body());
        assert!(function.child_declarations().is_none());
    }

    #[test]
    fn test_initializers() {
        let init = Initializer::new(first("convenience init?(name: String) {}")).unwrap();
        assert_eq!(init.name(), "init");
        assert_eq!(init.keyword(), "init");
        assert!(init.is_optional());
        assert!(init.is_convenience());
        assert_eq!(init.signature().input[0].name(), Some("name"));

        let plain = Initializer::new(first("init() {}")).unwrap();
        assert!(!plain.is_optional());
    }

    #[test]
    fn test_deinitializer() {
        let deinit = Deinitializer::new(first("deinit { let x = 1 }")).unwrap();
        assert_eq!(deinit.name(), "deinit");
        assert_eq!(deinit.variables().len(), 1);
    }
}
