//! Function parameters and signatures

use std::fmt;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::syntax::{
    children_of_kind, find_child, find_token, find_type, significant_tokens, trimmed_text,
    unescape_identifier,
};

use super::attribute::Attribute;
use super::effects::EffectSpecifiers;
use super::entity_type::EntityType;

/// A parameter of a function, initializer, subscript or enum case
///
/// Parameters have up to two names:
/// - `x: Int` -> first_name="x", second_name=None
/// - `with x: Int` -> first_name="with", second_name="x"
/// - `_ x: Int` -> first_name="_", second_name="x"
///
/// Enum case associated values may have no name at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub attributes: Vec<Attribute>,
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub type_annotation: EntityType,
    pub is_inout: bool,
    pub is_variadic: bool,
    /// The default argument expression, as text
    pub default_argument: Option<String>,
}

impl Parameter {
    /// Read a `FunctionParameter` or `EnumCaseParameter` node
    pub fn from_syntax(syntax: &SyntaxNode) -> Self {
        let mut names = significant_tokens(syntax)
            .take_while(|tok| tok.kind() != SyntaxKind::Colon)
            .filter(|tok| tok.kind() != SyntaxKind::Ellipsis)
            .map(|tok| unescape_identifier(tok.text()).to_string());
        let first_name = names.next();
        let second_name = names.next();

        // Function parameters wrap the type in an annotation; case parameters don't
        let ty = find_child(syntax, SyntaxKind::TypeAnnotation)
            .and_then(|annotation| find_type(&annotation))
            .or_else(|| find_type(syntax));

        let type_annotation = ty
            .as_ref()
            .map(EntityType::from_syntax)
            .unwrap_or(EntityType::Empty);

        let is_inout = ty
            .as_ref()
            .is_some_and(|ty| {
                ty.kind() == SyntaxKind::TyAttributed && find_token(ty, SyntaxKind::Inout).is_some()
            });

        let is_variadic = find_token(syntax, SyntaxKind::Ellipsis).is_some();

        let default_argument = find_child(syntax, SyntaxKind::Initializer)
            .and_then(|init| find_child(&init, SyntaxKind::Expr))
            .map(|expr| trimmed_text(&expr));

        Parameter {
            attributes: Attribute::all(syntax),
            first_name,
            second_name,
            type_annotation,
            is_inout,
            is_variadic,
            default_argument,
        }
    }

    /// The label callers write, `None` for `_`
    pub fn label(&self) -> Option<&str> {
        self.first_name.as_deref().filter(|name| *name != "_")
    }

    /// The name used inside the body
    pub fn name(&self) -> Option<&str> {
        self.second_name
            .as_deref()
            .or(self.first_name.as_deref())
            .filter(|name| *name != "_")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.first_name, &self.second_name) {
            (Some(first), Some(second)) => write!(f, "{} {}: ", first, second)?,
            (Some(first), None) => write!(f, "{}: ", first)?,
            _ => {}
        }
        if self.is_inout {
            write!(f, "inout ")?;
        }
        write!(f, "{}", self.type_annotation)?;
        if self.is_variadic {
            write!(f, "...")?;
        }
        if let Some(default) = &self.default_argument {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// Parameters of a `ParameterClause` or `EnumCaseParameterClause`
pub fn parameters_of(clause: &SyntaxNode) -> Vec<Parameter> {
    clause
        .children()
        .filter(|n| {
            matches!(n.kind(), SyntaxKind::FunctionParameter | SyntaxKind::EnumCaseParameter)
        })
        .map(|param| Parameter::from_syntax(&param))
        .collect()
}

/// Parameters, effects and result type of a function or initializer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionSignature {
    pub input: Vec<Parameter>,
    pub effects: EffectSpecifiers,
    /// `None` when there is no `->` clause
    pub output: Option<EntityType>,
}

impl FunctionSignature {
    /// Read the `FunctionSignature` child of a declaration
    pub fn of(declaration: &SyntaxNode) -> Self {
        find_child(declaration, SyntaxKind::FunctionSignature)
            .map(|signature| FunctionSignature::from_syntax(&signature))
            .unwrap_or_default()
    }

    pub fn from_syntax(syntax: &SyntaxNode) -> Self {
        let input = children_of_kind(syntax, SyntaxKind::ParameterClause)
            .next()
            .map(|clause| parameters_of(&clause))
            .unwrap_or_default();
        let output = find_child(syntax, SyntaxKind::ReturnClause)
            .map(|clause| EntityType::from_wrapper(&clause));

        FunctionSignature {
            input,
            effects: EffectSpecifiers::of(syntax),
            output,
        }
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.input.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")?;
        if self.effects.is_async {
            write!(f, " async")?;
        }
        match self.effects.throwing {
            Some(super::effects::Throwing::Throws) => write!(f, " throws")?,
            Some(super::effects::Throwing::Rethrows) => write!(f, " rethrows")?,
            None => {}
        }
        if let Some(output) = &self.output {
            write!(f, " -> {}", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sparrow_parser::parse;

    fn signature(source: &str) -> FunctionSignature {
        let tree = parse(source).tree;
        FunctionSignature::of(&tree.first_child().unwrap())
    }

    #[test]
    fn test_labels_and_names() {
        let sig = signature("func move(from start: Int, _ end: Int, count: Int) {}");
        let labels: Vec<_> = sig.input.iter().map(|p| p.label()).collect();
        let names: Vec<_> = sig.input.iter().map(|p| p.name()).collect();
        assert_eq!(labels, vec![Some("from"), None, Some("count")]);
        assert_eq!(names, vec![Some("start"), Some("end"), Some("count")]);
    }

    #[test]
    fn test_variadic_inout_and_default() {
        let sig = signature("func f(values: Int..., into buffer: inout [Int], limit: Int = 10) {}");
        assert!(sig.input[0].is_variadic);
        assert!(sig.input[1].is_inout);
        assert_eq!(sig.input[1].type_annotation.to_string(), "[Int]");
        assert_eq!(sig.input[2].default_argument.as_deref(), Some("10"));
    }

    #[test]
    fn test_display() {
        let sig = signature("func f(_ x: Int, label y: String? = nil) async throws -> [Int] {}");
        assert_eq!(sig.to_string(), "(_ x: Int, label y: String? = nil) async throws -> [Int]");
    }

    #[test]
    fn test_no_return_clause() {
        assert_eq!(signature("func f() {}").output, None);
    }
}
