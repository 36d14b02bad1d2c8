use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode, TextSize};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared};
use crate::entity::{parameters_of, Parameter};
use crate::error::{Result, SemanticsError};
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{children_of_kind, extract_name, find_child, trimmed_text};

/// One element of a `case` declaration
///
/// `case north, south` declares two cases sharing the `case` keyword and
/// its attributes and modifiers.
#[derive(Debug)]
pub struct EnumCase {
    /// Resolver over the whole `EnumCaseDecl`
    resolver: DeclarationResolver,
    element: SyntaxNode,
    name: OnceCell<String>,
    associated_values: OnceCell<Vec<Parameter>>,
    raw_value: OnceCell<Option<String>>,
}

impl EnumCase {
    /// Build a case from one `EnumCaseElement` node
    pub fn new(element: SyntaxNode) -> Result<Self> {
        if element.kind() != SyntaxKind::EnumCaseElement {
            return Err(SemanticsError::UnexpectedNode {
                expected: SyntaxKind::EnumCaseElement,
                found: element.kind(),
                range: element.text_range(),
            });
        }

        let declaration = element
            .parent()
            .filter(|parent| parent.kind() == SyntaxKind::EnumCaseDecl)
            .ok_or_else(|| SemanticsError::Detached {
                expected: SyntaxKind::EnumCaseDecl,
                found: SyntaxKind::EnumCaseElement,
                range: element.text_range(),
            })?;

        let context = ScopeContext::for_node(&declaration);
        Ok(Self::with_element(declaration, element, context))
    }

    pub(crate) fn collected(declaration: &SyntaxNode, context: &ScopeContext) -> Vec<Self> {
        children_of_kind(declaration, SyntaxKind::EnumCaseElement)
            .map(|element| Self::with_element(declaration.clone(), element, context.clone()))
            .collect()
    }

    fn with_element(declaration: SyntaxNode, element: SyntaxNode, context: ScopeContext) -> Self {
        Self {
            resolver: DeclarationResolver::new(declaration, context),
            element,
            name: OnceCell::new(),
            associated_values: OnceCell::new(),
            raw_value: OnceCell::new(),
        }
    }

    pub fn element(&self) -> &SyntaxNode {
        &self.element
    }

    /// The payload of `case circle(radius: Double)`
    pub fn associated_values(&self) -> &[Parameter] {
        self.associated_values.get_or_init(|| {
            find_child(&self.element, SyntaxKind::EnumCaseParameterClause)
                .map(|clause| parameters_of(&clause))
                .unwrap_or_default()
        })
    }

    /// The literal after `=`, as written
    pub fn raw_value(&self) -> Option<&str> {
        self.raw_value
            .get_or_init(|| {
                find_child(&self.element, SyntaxKind::Initializer)
                    .and_then(|init| find_child(&init, SyntaxKind::Expr))
                    .map(|expr| trimmed_text(&expr))
            })
            .as_deref()
    }

    pub fn is_indirect(&self) -> bool {
        self.modifiers().contains("indirect")
    }
}

impl Declared for EnumCase {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::EnumCase
    }

    fn name(&self) -> &str {
        self.name
            .get_or_init(|| extract_name(&self.element).unwrap_or_default())
    }

    fn position(&self) -> TextSize {
        self.element.text_range().start()
    }
}

impl ChildDeclarationCollecting for EnumCase {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}
