//! Variables and constants
//!
//! One `var` or `let` statement may bind several names: `var a, b: Int, c`.
//! Each binding becomes its own [`Variable`]. They share the statement's
//! keyword, modifiers and attributes, and a binding without a type annotation
//! borrows one from its siblings.

use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode, TextSize};
use tracing::{debug, trace};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared};
use crate::entity::{Accessor, AccessorKind, EntityType};
use crate::error::{Result, SemanticsError};
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{
    children_of_kind, find_child, normalized_text, trimmed_text, unescape_identifier,
};

/// One binding of a `var` or `let` statement
#[derive(Debug)]
pub struct Variable {
    /// Resolver over the whole `VariableDecl`
    resolver: DeclarationResolver,
    binding: SyntaxNode,
    /// The `PatternBindingList` holding this binding and its siblings
    siblings: SyntaxNode,
    name: OnceCell<String>,
    type_annotation: OnceCell<EntityType>,
    initial_value: OnceCell<Option<String>>,
    accessors: OnceCell<Vec<Accessor>>,
    has_setter: OnceCell<bool>,
}

impl Variable {
    /// Build a variable from one `PatternBinding` node
    pub fn new(binding: SyntaxNode) -> Result<Self> {
        if binding.kind() != SyntaxKind::PatternBinding {
            return Err(SemanticsError::UnexpectedNode {
                expected: SyntaxKind::PatternBinding,
                found: binding.kind(),
                range: binding.text_range(),
            });
        }

        let detached = |expected| SemanticsError::Detached {
            expected,
            found: SyntaxKind::PatternBinding,
            range: binding.text_range(),
        };

        let siblings = binding
            .parent()
            .filter(|parent| parent.kind() == SyntaxKind::PatternBindingList)
            .ok_or_else(|| detached(SyntaxKind::PatternBindingList))?;
        let declaration = siblings
            .parent()
            .filter(|parent| parent.kind() == SyntaxKind::VariableDecl)
            .ok_or_else(|| detached(SyntaxKind::VariableDecl))?;

        let context = ScopeContext::for_node(&declaration);
        Ok(Self::with_siblings(declaration, siblings, binding, context))
    }

    /// Build one variable per binding of a `VariableDecl` node
    pub fn from_declaration(declaration: SyntaxNode) -> Result<Vec<Self>> {
        if declaration.kind() != SyntaxKind::VariableDecl {
            return Err(SemanticsError::UnexpectedNode {
                expected: SyntaxKind::VariableDecl,
                found: declaration.kind(),
                range: declaration.text_range(),
            });
        }
        let context = ScopeContext::for_node(&declaration);
        Ok(Self::collected(&declaration, &context))
    }

    pub(crate) fn collected(declaration: &SyntaxNode, context: &ScopeContext) -> Vec<Self> {
        let Some(siblings) = find_child(declaration, SyntaxKind::PatternBindingList) else {
            trace!("variable declaration without bindings");
            return Vec::new();
        };

        children_of_kind(&siblings, SyntaxKind::PatternBinding)
            .map(|binding| {
                Self::with_siblings(declaration.clone(), siblings.clone(), binding, context.clone())
            })
            .collect()
    }

    fn with_siblings(
        declaration: SyntaxNode,
        siblings: SyntaxNode,
        binding: SyntaxNode,
        context: ScopeContext,
    ) -> Self {
        Self {
            resolver: DeclarationResolver::new(declaration, context),
            binding,
            siblings,
            name: OnceCell::new(),
            type_annotation: OnceCell::new(),
            initial_value: OnceCell::new(),
            accessors: OnceCell::new(),
            has_setter: OnceCell::new(),
        }
    }

    /// The `PatternBinding` node of this variable
    pub fn binding(&self) -> &SyntaxNode {
        &self.binding
    }

    /// The declared type, or the first annotated sibling's type
    ///
    /// `var a, b: Int, c` gives all three bindings `Int`. A statement without
    /// any annotation gives [`EntityType::Empty`].
    pub fn type_annotation(&self) -> &EntityType {
        self.type_annotation.get_or_init(|| {
            if let Some(annotation) = find_child(&self.binding, SyntaxKind::TypeAnnotation) {
                return EntityType::from_wrapper(&annotation);
            }

            let sibling = children_of_kind(&self.siblings, SyntaxKind::PatternBinding)
                .find_map(|sibling| find_child(&sibling, SyntaxKind::TypeAnnotation));

            match sibling {
                Some(annotation) => {
                    let ty = EntityType::from_wrapper(&annotation);
                    trace!(variable = self.name(), ty = %ty, "type inferred from sibling binding");
                    ty
                }
                None => {
                    trace!(variable = self.name(), "no annotated binding in statement");
                    EntityType::Empty
                }
            }
        })
    }

    /// The initial value expression, as written
    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value
            .get_or_init(|| {
                find_child(&self.binding, SyntaxKind::Initializer)
                    .and_then(|init| find_child(&init, SyntaxKind::Expr))
                    .map(|expr| trimmed_text(&expr))
            })
            .as_deref()
    }

    pub fn is_optional(&self) -> bool {
        self.type_annotation().is_optional()
    }

    pub fn accessors(&self) -> &[Accessor] {
        self.accessors.get_or_init(|| Accessor::all(&self.binding))
    }

    /// Whether the variable is a member of a protocol
    pub fn in_protocol(&self) -> bool {
        self.resolver.context().owner == Some(DeclarationKind::Protocol)
    }

    /// Whether the variable computes its value rather than storing it
    pub fn is_computed(&self) -> bool {
        self.accessors()
            .iter()
            .any(|accessor| matches!(accessor.kind, AccessorKind::Get | AccessorKind::Read))
    }

    /// Whether the variable may be assigned from outside
    ///
    /// The first matching rule decides:
    /// 1. a getter marked `async` or `throws` means no setter
    /// 2. a `set`, `willSet` or `didSet` accessor means a setter
    /// 3. `let` means no setter
    /// 4. a modifier restricted to `set`, such as `private(set)`, means no setter
    /// 5. otherwise a `var` has a setter unless it is a protocol member
    ///
    /// Rule 5 gives `var x: Int { get }` outside a protocol a setter.
    pub fn has_setter(&self) -> bool {
        *self.has_setter.get_or_init(|| self.resolve_setter())
    }

    fn resolve_setter(&self) -> bool {
        let accessors = self.accessors();

        if accessors
            .iter()
            .any(|accessor| accessor.kind == AccessorKind::Get && accessor.effects.is_effectful())
        {
            debug!(variable = self.name(), "effectful getter, no setter");
            return false;
        }

        if accessors.iter().any(|accessor| accessor.kind.is_setter()) {
            debug!(variable = self.name(), "explicit setter or observer");
            return true;
        }

        let mutable = self.keyword() == "var";
        if !mutable {
            debug!(variable = self.name(), "immutable binding, no setter");
            return false;
        }

        if self.modifiers().any_with_detail("set") {
            debug!(variable = self.name(), "setter restricted by modifier");
            return false;
        }

        let in_protocol = self.in_protocol();
        debug!(variable = self.name(), in_protocol, "setter decided by keyword");
        !in_protocol
    }
}

impl Declared for Variable {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Variable
    }

    fn name(&self) -> &str {
        self.name.get_or_init(|| {
            self.binding
                .children()
                .find(|n| {
                    matches!(n.kind(), SyntaxKind::IdentifierPattern | SyntaxKind::TuplePattern)
                })
                .map(|pattern| unescape_identifier(&normalized_text(&pattern)).to_string())
                .unwrap_or_default()
        })
    }

    fn position(&self) -> TextSize {
        self.binding.text_range().start()
    }
}

impl ChildDeclarationCollecting for Variable {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn variables(source: &str) -> Vec<Variable> {
        let tree = parse(source).tree;
        let declaration = tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::VariableDecl)
            .unwrap();
        Variable::from_declaration(declaration).unwrap()
    }

    fn single(source: &str) -> Variable {
        variables(source).remove(0)
    }

    fn int() -> EntityType {
        EntityType::Simple("Int".into())
    }

    #[test]
    fn test_one_variable_per_binding() {
        let vars = variables("var a = 1, b = 2");
        let names: Vec<_> = vars.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(vars.iter().all(|v| v.keyword() == "var"));
    }

    #[test]
    fn test_sibling_type_inference() {
        let vars = variables("var a, b: Int, c");
        let types: Vec<_> = vars.iter().map(|v| v.type_annotation().clone()).collect();
        assert_eq!(types, vec![int(), int(), int()]);
    }

    #[test]
    fn test_inference_does_not_depend_on_query_order() {
        let vars = variables("var x, y: String");
        // Ask the last binding first
        assert_eq!(vars[1].type_annotation(), &EntityType::Simple("String".into()));
        assert_eq!(vars[0].type_annotation(), &EntityType::Simple("String".into()));
    }

    #[test]
    fn test_no_annotation_anywhere() {
        let vars = variables("var a = 1, b = 2");
        assert!(vars.iter().all(|v| v.type_annotation().is_empty()));
    }

    #[test]
    fn test_first_annotated_sibling_wins() {
        let vars = variables("var a: Int = 1, b, c: String");
        assert_eq!(vars[1].type_annotation(), &int());
        assert_eq!(vars[2].type_annotation(), &EntityType::Simple("String".into()));
    }

    #[test]
    fn test_initial_value_and_optional() {
        let variable = single("var delegate: Delegate? = nil");
        assert_eq!(variable.initial_value(), Some("nil"));
        assert!(variable.is_optional());
        assert_eq!(single("let x = 1").initial_value(), Some("1"));
        assert_eq!(single("var y: Int").initial_value(), None);
    }

    #[test]
    fn test_tuple_pattern_name() {
        assert_eq!(single("let (a, b) = pair").name(), "(a, b)");
    }

    #[test]
    fn test_new_from_binding() {
        let tree = parse("struct S { var a, b: Int }").tree;
        let binding = tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::PatternBinding)
            .unwrap();
        let variable = Variable::new(binding).unwrap();
        assert_eq!(variable.name(), "a");
        assert_eq!(variable.type_annotation(), &int());
    }

    #[test]
    fn test_new_rejects_other_nodes() {
        let tree = parse("var a = 1").tree;
        let declaration = tree.first_child().unwrap();
        assert!(matches!(
            Variable::new(declaration),
            Err(SemanticsError::UnexpectedNode { .. })
        ));
    }

    #[test]
    fn test_setter_truth_table() {
        assert!(!single("let x: Int").has_setter());
        assert!(single("var x: Int").has_setter());
        assert!(!single("var x: Int { get throws }").has_setter());
        assert!(single("var x: Int { get set }").has_setter());
        assert!(single("var x: Int { didSet { } }").has_setter());
        assert!(!single("private(set) var x: Int").has_setter());
        assert!(!single("protocol P { var x: Int { get } }").has_setter());
    }

    #[test]
    fn test_plain_getter_outside_protocol_has_setter() {
        assert!(single("var x: Int { get }").has_setter());
        assert!(single("var x: Int { 42 }").has_setter());
    }

    #[test]
    fn test_effectful_getter_beats_explicit_setter() {
        assert!(!single("var x: Int { get async { 1 } set { } }").has_setter());
    }

    #[test]
    fn test_observer_beats_let() {
        // Not valid Swift, but the accessor rule is checked first
        assert!(single("let x: Int { willSet { } }").has_setter());
    }

    #[test]
    fn test_is_computed() {
        assert!(!single("var x = 1").is_computed());
        assert!(!single("var x = 0 { didSet { } }").is_computed());
        assert!(single("var x: Int { 4 }").is_computed());
        assert!(single("var x: Int { get { 1 } set { } }").is_computed());
        assert!(single("var x: Int { _read { yield value } }").is_computed());
    }

    #[test]
    fn test_modify_does_not_give_a_setter() {
        let variable = single("protocol P { var x: Int { _read _modify } }");
        assert!(!variable.has_setter());
    }

    #[test]
    fn test_protocol_requirement_with_set() {
        let variable = single("protocol P { var x: Int { get set } }");
        assert!(variable.in_protocol());
        assert!(variable.has_setter());
    }

    #[test]
    fn test_restricted_setter_in_type() {
        let variable = single("struct S { public internal(set) var count = 0 }");
        assert!(!variable.has_setter());
        assert!(!variable.in_protocol());
    }
}
