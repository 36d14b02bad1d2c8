//! Shared lazy state behind every declaration
//!
//! A [`DeclarationResolver`] wraps one declaration node and computes each
//! common property the first time it is asked for. Later calls return the
//! stored value without touching the tree again.

use std::cell::OnceCell;
use std::rc::Rc;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collection::DeclarationCollection;
use crate::config::SemanticsConfig;
use crate::declaration::DeclarationKind;
use crate::entity::{Attribute, GenericParameter, GenericRequirement, Modifiers};
use crate::error::{Result, SemanticsError};
use crate::syntax::{children_of_kind, find_child, keyword_token, normalized_text};

/// Where a declaration sits
#[derive(Debug, Clone, Default)]
pub struct ScopeContext {
    /// Kind of the declaration owning the enclosing scope; `None` at file level
    pub owner: Option<DeclarationKind>,
    pub config: Rc<SemanticsConfig>,
}

impl ScopeContext {
    pub fn new(owner: Option<DeclarationKind>, config: Rc<SemanticsConfig>) -> Self {
        Self { owner, config }
    }

    /// Context for the members of a declaration of kind `owner`
    pub fn nested(&self, owner: DeclarationKind) -> Self {
        Self {
            owner: Some(owner),
            config: Rc::clone(&self.config),
        }
    }

    /// Work out the owner of a declaration node by walking up the tree
    ///
    /// Used when a declaration is built directly from a node rather than
    /// through a collection.
    pub fn for_node(node: &SyntaxNode) -> Self {
        let owner = node
            .ancestors()
            .skip(1)
            .filter(|ancestor| {
                !matches!(
                    ancestor.kind(),
                    SyntaxKind::MemberBlock
                        | SyntaxKind::CodeBlock
                        | SyntaxKind::IfConfigClause
                        | SyntaxKind::IfConfigDecl
                        | SyntaxKind::PatternBindingList
                        | SyntaxKind::VariableDecl
                        | SyntaxKind::EnumCaseDecl
                )
            })
            .map(|ancestor| DeclarationKind::from_syntax_kind(ancestor.kind()))
            .next()
            .flatten();

        Self {
            owner,
            config: Rc::default(),
        }
    }
}

/// Memoized properties common to all declaration kinds
#[derive(Debug)]
pub struct DeclarationResolver {
    node: SyntaxNode,
    context: ScopeContext,
    name: OnceCell<String>,
    keyword: OnceCell<String>,
    modifiers: OnceCell<Modifiers>,
    attributes: OnceCell<Vec<Attribute>>,
    generic_parameters: OnceCell<Vec<GenericParameter>>,
    generic_requirements: OnceCell<Vec<GenericRequirement>>,
    inheritance: OnceCell<Vec<String>>,
    members: OnceCell<Option<DeclarationCollection>>,
}

impl DeclarationResolver {
    pub fn new(node: SyntaxNode, context: ScopeContext) -> Self {
        Self {
            node,
            context,
            name: OnceCell::new(),
            keyword: OnceCell::new(),
            modifiers: OnceCell::new(),
            attributes: OnceCell::new(),
            generic_parameters: OnceCell::new(),
            generic_requirements: OnceCell::new(),
            inheritance: OnceCell::new(),
            members: OnceCell::new(),
        }
    }

    /// Check the node kind before building a resolver over it
    pub fn checked(node: SyntaxNode, expected: SyntaxKind) -> Result<Self> {
        if node.kind() != expected {
            return Err(SemanticsError::UnexpectedNode {
                expected,
                found: node.kind(),
                range: node.text_range(),
            });
        }
        let context = ScopeContext::for_node(&node);
        Ok(Self::new(node, context))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn context(&self) -> &ScopeContext {
        &self.context
    }

    /// The name, computed by `resolve` on first access
    pub fn name_with(&self, resolve: impl FnOnce(&SyntaxNode) -> String) -> &str {
        self.name.get_or_init(|| resolve(&self.node))
    }

    /// The first token of the declaration after attributes and modifiers
    pub fn keyword(&self) -> &str {
        self.keyword.get_or_init(|| {
            keyword_token(&self.node)
                .map(|tok| tok.text().to_string())
                .unwrap_or_default()
        })
    }

    pub fn modifiers(&self) -> &Modifiers {
        self.modifiers.get_or_init(|| Modifiers::of(&self.node))
    }

    pub fn attributes(&self) -> &[Attribute] {
        self.attributes.get_or_init(|| Attribute::all(&self.node))
    }

    pub fn generic_parameters(&self) -> &[GenericParameter] {
        self.generic_parameters
            .get_or_init(|| GenericParameter::all(&self.node))
    }

    pub fn generic_requirements(&self) -> &[GenericRequirement] {
        self.generic_requirements
            .get_or_init(|| GenericRequirement::all(&self.node))
    }

    /// Inherited types as written, `[NSObject, Codable]`
    pub fn inheritance(&self) -> &[String] {
        self.inheritance.get_or_init(|| {
            find_child(&self.node, SyntaxKind::InheritanceClause)
                .map(|clause| {
                    children_of_kind(&clause, SyntaxKind::InheritedType)
                        .map(|inherited| normalized_text(&inherited))
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    /// The collection of the scope child of kind `scope`, built on first access
    ///
    /// `owner` is the kind recorded as the owner of everything collected.
    pub fn members(
        &self,
        scope: SyntaxKind,
        owner: DeclarationKind,
    ) -> Option<&DeclarationCollection> {
        self.members
            .get_or_init(|| {
                let block = find_child(&self.node, scope)?;
                Some(DeclarationCollection::collect(&block, &self.context.nested(owner)))
            })
            .as_ref()
    }
}
