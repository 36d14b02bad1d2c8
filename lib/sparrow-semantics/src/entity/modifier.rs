use std::fmt;

use indexmap::IndexMap;
use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::syntax::{children_of_kind, find_child, normalized_text, significant_tokens};

/// A declaration modifier such as `public`, `static` or `private(set)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub name: String,
    /// The text inside the parentheses, `set` for `private(set)`
    pub detail: Option<String>,
}

impl Modifier {
    pub fn from_syntax(syntax: &SyntaxNode) -> Self {
        let name = significant_tokens(syntax)
            .next()
            .map(|tok| tok.text().to_string())
            .unwrap_or_default();

        let detail = find_child(syntax, SyntaxKind::ModifierDetail).map(|detail| {
            let text = normalized_text(&detail);
            text.trim_start_matches('(')
                .trim_end_matches(')')
                .trim()
                .to_string()
        });

        Modifier { name, detail }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}({})", self.name, detail),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Modifiers of a declaration keyed by name, in source order
///
/// `public private(set) var` maps `public` to no detail and `private` to
/// `set`. A repeated name keeps its first position and its last detail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(IndexMap<String, Option<String>>);

impl Modifiers {
    /// Modifiers attached to a declaration
    pub fn of(declaration: &SyntaxNode) -> Self {
        let mut modifiers = IndexMap::new();
        if let Some(list) = find_child(declaration, SyntaxKind::ModifierList) {
            for node in children_of_kind(&list, SyntaxKind::Modifier) {
                let modifier = Modifier::from_syntax(&node);
                modifiers.insert(modifier.name, modifier.detail);
            }
        }
        Modifiers(modifiers)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The detail of a modifier; `None` when absent or written without one
    pub fn detail(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|detail| detail.as_deref())
    }

    /// Whether any modifier carries `detail`, as `private(set)` carries `set`
    pub fn any_with_detail(&self, detail: &str) -> bool {
        self.0.values().any(|d| d.as_deref() == Some(detail))
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().map(|(name, detail)| Modifier {
            name: name.clone(),
            detail: detail.clone(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn modifiers(source: &str) -> Modifiers {
        let tree = parse(source).tree;
        Modifiers::of(&tree.first_child().unwrap())
    }

    #[test]
    fn test_order_is_kept() {
        let mods = modifiers("public static final func f() {}");
        assert_eq!(mods.names().collect::<Vec<_>>(), vec!["public", "static", "final"]);
    }

    #[test]
    fn test_detail() {
        let mods = modifiers("public private( set ) var x = 1");
        assert_eq!(mods.detail("private"), Some("set"));
        assert_eq!(mods.detail("public"), None);
        assert!(mods.contains("public"));
        assert!(mods.any_with_detail("set"));
    }

    #[test]
    fn test_display() {
        let mods = modifiers("fileprivate(set) var x = 1");
        let rendered: Vec<_> = mods.iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, vec!["fileprivate(set)"]);
    }

    #[test]
    fn test_none() {
        assert!(modifiers("var x = 1").is_empty());
    }
}
