use std::fmt;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::syntax::{children_of_kind, find_child, normalized_text};

/// One argument inside an attribute's parentheses
///
/// `@available(iOS, introduced: 13)` has the arguments `iOS` and
/// `introduced: 13`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeArgument {
    pub label: Option<String>,
    pub value: String,
}

/// An attribute such as `@objc`, `@MainActor` or `@available(iOS 13, *)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// The name without the `@`
    pub name: String,
    pub arguments: Vec<AttributeArgument>,
}

impl Attribute {
    pub fn from_syntax(syntax: &SyntaxNode) -> Self {
        let name = find_child(syntax, SyntaxKind::Name)
            .map(|n| normalized_text(&n))
            .unwrap_or_default();

        let arguments = find_child(syntax, SyntaxKind::AttributeArguments)
            .map(|args| {
                children_of_kind(&args, SyntaxKind::AttributeArgument)
                    .map(|arg| argument(&arg))
                    .collect()
            })
            .unwrap_or_default();

        Attribute { name, arguments }
    }

    /// Attributes attached to a declaration, in source order
    pub fn all(declaration: &SyntaxNode) -> Vec<Attribute> {
        find_child(declaration, SyntaxKind::AttributeList)
            .map(|list| {
                children_of_kind(&list, SyntaxKind::Attribute)
                    .map(|attr| Attribute::from_syntax(&attr))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn argument(syntax: &SyntaxNode) -> AttributeArgument {
    let text = normalized_text(syntax);

    // `label: value`, but not `Foo.bar` or a bare `*`
    let mut tokens = crate::syntax::significant_tokens(syntax);
    let labeled = matches!(
        (tokens.next().map(|t| t.kind()), tokens.next().map(|t| t.kind())),
        (Some(SyntaxKind::Identifier), Some(SyntaxKind::Colon))
    );

    match text.split_once(':') {
        Some((label, value)) if labeled => AttributeArgument {
            label: Some(label.trim().to_string()),
            value: value.trim().to_string(),
        },
        _ => AttributeArgument {
            label: None,
            value: text,
        },
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if self.arguments.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match &argument.label {
                Some(label) => write!(f, "{}: {}", label, argument.value)?,
                None => write!(f, "{}", argument.value)?,
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn attributes(source: &str) -> Vec<Attribute> {
        let tree = parse(source).tree;
        let decl = tree.first_child().unwrap();
        Attribute::all(&decl)
    }

    #[test]
    fn test_bare_attributes() {
        let attrs = attributes("@objc @MainActor final class A {}");
        let names: Vec<_> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["objc", "MainActor"]);
        assert!(attrs.iter().all(|a| a.arguments.is_empty()));
    }

    #[test]
    fn test_arguments() {
        let attrs = attributes("@available(iOS, introduced: 13.0, *) func f() {}");
        assert_eq!(
            attrs[0].arguments,
            vec![
                AttributeArgument { label: None, value: "iOS".into() },
                AttributeArgument { label: Some("introduced".into()), value: "13.0".into() },
                AttributeArgument { label: None, value: "*".into() },
            ]
        );
        assert_eq!(attrs[0].to_string(), "@available(iOS, introduced: 13.0, *)");
    }

    #[test]
    fn test_no_attributes() {
        assert!(attributes("struct S {}").is_empty());
    }
}
