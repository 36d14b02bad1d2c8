use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::syntax::significant_tokens;

/// How a function, closure type or accessor propagates errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Throwing {
    Throws,
    Rethrows,
}

/// The `async` and `throws` words after a parameter list or accessor keyword
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EffectSpecifiers {
    /// `async` or `reasync`
    pub is_async: bool,
    pub throwing: Option<Throwing>,
    /// The error type of a typed throw, `throws(ParseError)`
    pub thrown_type: Option<String>,
}

impl EffectSpecifiers {
    /// Read an `EffectSpecifiers` node
    pub fn from_syntax(syntax: &SyntaxNode) -> Self {
        let mut effects = EffectSpecifiers::default();
        let mut after_throws = false;
        let mut thrown = String::new();
        let mut depth = 0usize;

        for token in significant_tokens(syntax) {
            match token.kind() {
                SyntaxKind::Throws => {
                    effects.throwing = Some(Throwing::Throws);
                    after_throws = true;
                    continue;
                }
                SyntaxKind::Rethrows => effects.throwing = Some(Throwing::Rethrows),
                SyntaxKind::LParen if after_throws => {
                    depth += 1;
                    if depth == 1 {
                        continue;
                    }
                }
                SyntaxKind::RParen if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        effects.thrown_type = Some(std::mem::take(&mut thrown));
                        after_throws = false;
                        continue;
                    }
                }
                SyntaxKind::Identifier if depth == 0 => {
                    if matches!(token.text(), "async" | "reasync") {
                        effects.is_async = true;
                    }
                }
                _ => {}
            }

            if depth > 0 {
                thrown.push_str(token.text());
            } else {
                after_throws = false;
            }
        }

        effects
    }

    /// Read the `EffectSpecifiers` child of a signature, accessor or function type
    pub fn of(parent: &SyntaxNode) -> Self {
        crate::syntax::find_child(parent, SyntaxKind::EffectSpecifiers)
            .map(|node| EffectSpecifiers::from_syntax(&node))
            .unwrap_or_default()
    }

    pub fn is_throwing(&self) -> bool {
        self.throwing.is_some()
    }

    /// Whether any effect at all is present
    pub fn is_effectful(&self) -> bool {
        self.is_async || self.is_throwing()
    }
}
