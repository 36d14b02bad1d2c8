//! Generic parameters and where clause requirements

use std::fmt;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::syntax::{children_of_kind, extract_name, find_child, find_token, normalized_text};

/// A generic parameter, `T` or `T: Equatable`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericParameter {
    pub name: String,
    /// The constraint after the colon, as written
    pub type_name: Option<String>,
    /// `each T` parameter packs
    pub is_pack: bool,
}

impl GenericParameter {
    pub fn from_syntax(syntax: &SyntaxNode) -> Self {
        let name = extract_name(syntax).unwrap_or_default();
        let type_name = crate::syntax::find_type(syntax).map(|ty| normalized_text(&ty));
        let is_pack = crate::syntax::significant_tokens(syntax).any(|tok| tok.text() == "each");

        GenericParameter {
            name,
            type_name,
            is_pack,
        }
    }

    /// Generic parameters of a declaration, in source order
    pub fn all(declaration: &SyntaxNode) -> Vec<GenericParameter> {
        find_child(declaration, SyntaxKind::GenericParameterClause)
            .map(|clause| {
                children_of_kind(&clause, SyntaxKind::GenericParameter)
                    .map(|param| GenericParameter::from_syntax(&param))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for GenericParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pack {
            write!(f, "each ")?;
        }
        match &self.type_name {
            Some(constraint) => write!(f, "{}: {}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}

/// How the two sides of a requirement relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `T: Protocol`
    Conformance,
    /// `T.Element == Int`
    SameType,
}

/// One requirement of a `where` clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericRequirement {
    pub left: String,
    pub relation: Relation,
    pub right: String,
}

impl GenericRequirement {
    pub fn from_syntax(syntax: &SyntaxNode) -> Self {
        let mut types = syntax.children().filter(|n| crate::syntax::is_type(n.kind()));
        let left = types.next().map(|n| normalized_text(&n)).unwrap_or_default();
        let right = types.next().map(|n| normalized_text(&n)).unwrap_or_default();

        let relation = if find_token(syntax, SyntaxKind::Colon).is_some() {
            Relation::Conformance
        } else {
            Relation::SameType
        };

        GenericRequirement {
            left,
            relation,
            right,
        }
    }

    /// Requirements of a declaration's `where` clause, in source order
    pub fn all(declaration: &SyntaxNode) -> Vec<GenericRequirement> {
        find_child(declaration, SyntaxKind::GenericWhereClause)
            .map(|clause| {
                children_of_kind(&clause, SyntaxKind::GenericRequirement)
                    .map(|req| GenericRequirement::from_syntax(&req))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for GenericRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.relation {
            Relation::Conformance => write!(f, "{}: {}", self.left, self.right),
            Relation::SameType => write!(f, "{} == {}", self.left, self.right),
        }
    }
}
