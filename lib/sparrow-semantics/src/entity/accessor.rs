//! Property and subscript accessors

use std::fmt;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::syntax::{children_of_kind, find_child, keyword_token, significant_tokens};

use super::attribute::Attribute;
use super::effects::EffectSpecifiers;
use super::modifier::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
    WillSet,
    DidSet,
    Read,
    Modify,
}

impl AccessorKind {
    pub fn from_keyword(keyword: &str) -> Option<AccessorKind> {
        match keyword {
            "get" => Some(AccessorKind::Get),
            "set" => Some(AccessorKind::Set),
            "willSet" => Some(AccessorKind::WillSet),
            "didSet" => Some(AccessorKind::DidSet),
            "_read" => Some(AccessorKind::Read),
            "_modify" => Some(AccessorKind::Modify),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::WillSet => "willSet",
            AccessorKind::DidSet => "didSet",
            AccessorKind::Read => "_read",
            AccessorKind::Modify => "_modify",
        }
    }

    /// Whether this accessor gives its owner a setter: `set` or an observer
    ///
    /// `_modify` yields storage in place and does not count.
    pub fn is_setter(self) -> bool {
        matches!(self, AccessorKind::Set | AccessorKind::WillSet | AccessorKind::DidSet)
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One accessor of a property or subscript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub attributes: Vec<Attribute>,
    /// `mutating`, `nonmutating` or `__consuming`
    pub modifier: Option<String>,
    pub effects: EffectSpecifiers,
    /// The renamed value of `set(newName)` or `willSet(next)`
    pub parameter: Option<String>,
    pub has_body: bool,
}

impl Accessor {
    /// A getter written as a bare body, `var x: Int { 42 }`
    pub fn implicit_getter() -> Accessor {
        Accessor {
            kind: AccessorKind::Get,
            attributes: Vec::new(),
            modifier: None,
            effects: EffectSpecifiers::default(),
            parameter: None,
            has_body: true,
        }
    }

    /// Read an `AccessorDecl` node
    pub fn from_syntax(syntax: &SyntaxNode) -> Option<Accessor> {
        let kind = keyword_token(syntax).and_then(|tok| AccessorKind::from_keyword(tok.text()))?;

        let modifier = Modifiers::of(syntax).names().next().map(str::to_string);

        let parameter = find_child(syntax, SyntaxKind::AccessorParameter).and_then(|param| {
            significant_tokens(&param)
                .find(|tok| tok.kind() == SyntaxKind::Identifier)
                .map(|tok| tok.text().to_string())
        });

        Some(Accessor {
            kind,
            attributes: Attribute::all(syntax),
            modifier,
            effects: EffectSpecifiers::of(syntax),
            parameter,
            has_body: find_child(syntax, SyntaxKind::CodeBlock).is_some(),
        })
    }

    /// Accessors of the `AccessorBlock` under a binding or subscript
    ///
    /// A block without explicit accessors is an implicit getter. No block at
    /// all means no accessors.
    pub fn all(owner: &SyntaxNode) -> Vec<Accessor> {
        let Some(block) = find_child(owner, SyntaxKind::AccessorBlock) else {
            return Vec::new();
        };

        let explicit: Vec<SyntaxNode> =
            children_of_kind(&block, SyntaxKind::AccessorDecl).collect();
        if explicit.is_empty() {
            return vec![Accessor::implicit_getter()];
        }

        explicit.iter().filter_map(Accessor::from_syntax).collect()
    }
}
