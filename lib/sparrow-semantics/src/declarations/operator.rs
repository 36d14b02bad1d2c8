//! Operator and precedence group declarations

use std::cell::OnceCell;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declaration::{DeclarationKind, Declared};
use crate::error::Result;
use crate::resolver::{DeclarationResolver, ScopeContext};
use crate::syntax::{
    children_of_kind, extract_name, find_child, normalized_text, significant_tokens,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

/// An `operator` declaration, `infix operator <=> : ComparisonPrecedence`
#[derive(Debug)]
pub struct Operator {
    resolver: DeclarationResolver,
}

impl Operator {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::OperatorDecl)
            .map(|resolver| Self { resolver })
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self {
            resolver: DeclarationResolver::new(node, context),
        }
    }

    /// From the `prefix`, `infix` or `postfix` modifier; infix when none is given
    pub fn fixity(&self) -> Fixity {
        let modifiers = self.modifiers();
        if modifiers.contains("prefix") {
            Fixity::Prefix
        } else if modifiers.contains("postfix") {
            Fixity::Postfix
        } else {
            Fixity::Infix
        }
    }

    /// The precedence group named after the colon
    pub fn precedence_group(&self) -> Option<String> {
        find_child(self.syntax(), SyntaxKind::PrecedenceDesignation).and_then(|designation| {
            significant_tokens(&designation)
                .find(|tok| tok.kind() == SyntaxKind::Identifier)
                .map(|tok| tok.text().to_string())
        })
    }
}

impl Declared for Operator {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Operator
    }

    fn name(&self) -> &str {
        self.resolver
            .name_with(|node| extract_name(node).unwrap_or_default())
    }
}

impl ChildDeclarationCollecting for Operator {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// The body of a `precedencegroup`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PrecedenceAttributes {
    higher_than: Vec<String>,
    lower_than: Vec<String>,
    associativity: Option<Associativity>,
    assignment: bool,
}

impl PrecedenceAttributes {
    fn from_syntax(syntax: &SyntaxNode) -> Self {
        let mut attributes = PrecedenceAttributes::default();

        for node in children_of_kind(syntax, SyntaxKind::PrecedenceGroupAttribute) {
            let mut tokens = significant_tokens(&node);
            let Some(label) = tokens.next() else {
                continue;
            };
            let values: Vec<String> = tokens
                .filter(|tok| !matches!(tok.kind(), SyntaxKind::Colon | SyntaxKind::Comma))
                .map(|tok| tok.text().to_string())
                .collect();

            match label.text() {
                "higherThan" => attributes.higher_than = values,
                "lowerThan" => attributes.lower_than = values,
                "associativity" => {
                    attributes.associativity = match values.first().map(String::as_str) {
                        Some("left") => Some(Associativity::Left),
                        Some("right") => Some(Associativity::Right),
                        Some("none") => Some(Associativity::None),
                        _ => None,
                    }
                }
                "assignment" => attributes.assignment = values.first().is_some_and(|v| v == "true"),
                other => tracing::trace!(attribute = other, "unknown precedence group attribute"),
            }
        }

        attributes
    }
}

/// A `precedencegroup` declaration
#[derive(Debug)]
pub struct PrecedenceGroup {
    resolver: DeclarationResolver,
    attributes: OnceCell<PrecedenceAttributes>,
}

impl PrecedenceGroup {
    pub fn new(node: SyntaxNode) -> Result<Self> {
        DeclarationResolver::checked(node, SyntaxKind::PrecedenceGroupDecl).map(Self::from_resolver)
    }

    pub(crate) fn collected(node: SyntaxNode, context: ScopeContext) -> Self {
        Self::from_resolver(DeclarationResolver::new(node, context))
    }

    fn from_resolver(resolver: DeclarationResolver) -> Self {
        Self {
            resolver,
            attributes: OnceCell::new(),
        }
    }

    fn group(&self) -> &PrecedenceAttributes {
        self.attributes
            .get_or_init(|| PrecedenceAttributes::from_syntax(self.syntax()))
    }

    pub fn higher_than(&self) -> &[String] {
        &self.group().higher_than
    }

    pub fn lower_than(&self) -> &[String] {
        &self.group().lower_than
    }

    pub fn associativity(&self) -> Option<Associativity> {
        self.group().associativity
    }

    pub fn assignment(&self) -> bool {
        self.group().assignment
    }
}

impl Declared for PrecedenceGroup {
    fn resolver(&self) -> &DeclarationResolver {
        &self.resolver
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::PrecedenceGroup
    }

    fn name(&self) -> &str {
        self.resolver.name_with(|node| {
            find_child(node, SyntaxKind::Name)
                .map(|name| normalized_text(&name))
                .unwrap_or_default()
        })
    }
}

impl ChildDeclarationCollecting for PrecedenceGroup {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn first(source: &str) -> SyntaxNode {
        parse(source).tree.first_child().unwrap()
    }

    #[test]
    fn test_infix_operator() {
        let op = Operator::new(first("infix operator <=> : ComparisonPrecedence")).unwrap();
        assert_eq!(op.name(), "<=>");
        assert_eq!(op.keyword(), "operator");
        assert_eq!(op.fixity(), Fixity::Infix);
        assert_eq!(op.precedence_group().as_deref(), Some("ComparisonPrecedence"));
    }

    #[test]
    fn test_postfix_operator() {
        let op = Operator::new(first("postfix operator +++")).unwrap();
        assert_eq!(op.fixity(), Fixity::Postfix);
        assert_eq!(op.precedence_group(), None);
    }

    #[test]
    fn test_precedence_group() {
        let group = PrecedenceGroup::new(first(
            "precedencegroup Exponent {
  higherThan: MultiplicationPrecedence, AdditionPrecedence
  associativity: right
  assignment: true
}",
        ))
        .unwrap();
        assert_eq!(group.name(), "Exponent");
        assert_eq!(group.higher_than(), ["MultiplicationPrecedence", "AdditionPrecedence"]);
        assert!(group.lower_than().is_empty());
        assert_eq!(group.associativity(), Some(Associativity::Right));
        assert!(group.assignment());
    }
}
