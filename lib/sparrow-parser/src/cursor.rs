//! Token cursor used by every grammar function
//!
//! The cursor hides trivia from the grammar: lookahead (`nth`, `at`) only sees
//! significant tokens, while `bump` flushes any whitespace and comments that
//! precede the token into the current node first. Leading trivia is flushed
//! before a node is opened, so nodes always begin at a significant token.

use sparrow_lexer::{lex, Span};
use sparrow_syntax_tree::SyntaxKind;

use crate::event::{Checkpoint, EventSink};

pub struct Cursor<'src, 'sink> {
    source: &'src str,
    tokens: Vec<(SyntaxKind, Span)>,
    /// Indexes into `tokens` of every non-trivia token
    significant: Vec<usize>,
    /// Index into `significant` of the current token
    position: usize,
    /// Number of tokens already handed to the sink
    emitted: usize,
    sink: &'sink mut EventSink,
}

impl<'src, 'sink> Cursor<'src, 'sink> {
    /// Lex `source` and position the cursor at its first significant token.
    ///
    /// Lexer failures become `Error` tokens so the tree stays lossless.
    pub fn new(source: &'src str, sink: &'sink mut EventSink) -> Self {
        let tokens: Vec<(SyntaxKind, Span)> = lex(source)
            .map(|token| match token {
                Ok(spanned) => (SyntaxKind::from(spanned.value), spanned.span),
                Err(spanned) => (SyntaxKind::Error, spanned.span),
            })
            .collect();

        let significant = tokens
            .iter()
            .enumerate()
            .filter(|(_, (kind, _))| !kind.is_trivia())
            .map(|(index, _)| index)
            .collect();

        Self {
            source,
            tokens,
            significant,
            position: 0,
            emitted: 0,
            sink,
        }
    }

    // ===== Lookahead =====

    /// Kind of the `n`th significant token ahead, `None` past the end
    pub fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.significant
            .get(self.position + n)
            .map(|&index| self.tokens[index].0)
    }

    pub fn current(&self) -> Option<SyntaxKind> {
        self.nth(0)
    }

    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == Some(kind)
    }

    pub fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.nth(n) == Some(kind)
    }

    pub fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        self.current().is_some_and(|kind| kinds.contains(&kind))
    }

    pub fn at_eof(&self) -> bool {
        self.current().is_none()
    }

    /// Source text of the `n`th significant token ahead
    pub fn nth_text(&self, n: usize) -> &'src str {
        self.significant
            .get(self.position + n)
            .and_then(|&index| self.source.get(self.tokens[index].1.clone()))
            .unwrap_or_default()
    }

    /// Whether the `n`th token ahead is an identifier spelled `word`
    pub fn nth_at_contextual(&self, n: usize, word: &str) -> bool {
        self.nth_at(n, SyntaxKind::Identifier) && self.nth_text(n) == word
    }

    pub fn at_contextual(&self, word: &str) -> bool {
        self.nth_at_contextual(0, word)
    }

    /// Whether the `n`th token ahead directly follows the one before it,
    /// with no trivia in between
    pub fn nth_is_joined(&self, n: usize) -> bool {
        let at = self.position + n;
        if at == 0 {
            return false;
        }
        match (self.significant.get(at - 1), self.significant.get(at)) {
            (Some(&previous), Some(&index)) => previous + 1 == index,
            _ => false,
        }
    }

    /// Whether a line break separates the current token from the previous one
    pub fn newline_before(&self) -> bool {
        let end = self
            .significant
            .get(self.position)
            .copied()
            .unwrap_or(self.tokens.len());
        let start = match self.position.checked_sub(1) {
            Some(previous) => self.significant[previous] + 1,
            None => 0,
        };

        self.tokens[start..end]
            .iter()
            .any(|(_, span)| self.source[span.clone()].contains('\n'))
    }

    // ===== Consumption =====

    /// Add the current token (and the trivia before it) to the current node
    pub fn bump(&mut self) {
        self.flush_trivia();
        if let Some(&index) = self.significant.get(self.position) {
            let (kind, span) = self.tokens[index].clone();
            self.sink.add_token(kind, span);
            self.emitted = index + 1;
            self.position += 1;
        }
    }

    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or record an error naming what was expected
    pub fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {what}"));
            false
        }
    }

    /// Consume an opening bracket and everything up to its matching closer
    pub fn bump_balanced(&mut self) {
        let mut depth = 0usize;
        while let Some(kind) = self.current() {
            match kind {
                SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => depth += 1,
                SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            self.bump();
            if depth == 0 {
                return;
            }
        }
    }

    // ===== Nodes =====

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.sink.start_node(kind);
    }

    pub fn finish_node(&mut self) {
        self.sink.finish_node();
    }

    pub fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.sink.checkpoint()
    }

    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.sink.start_node_at(checkpoint, kind);
    }

    /// Record an error at the current token
    pub fn error(&mut self, message: impl Into<String>) {
        let span = self
            .significant
            .get(self.position)
            .map(|&index| self.tokens[index].1.clone())
            .or_else(|| Some(self.source.len()..self.source.len()));
        self.sink.error(message, span);
    }

    /// Emit every remaining token, significant or not
    pub fn flush_remaining(&mut self) {
        while self.emitted < self.tokens.len() {
            let (kind, span) = self.tokens[self.emitted].clone();
            self.sink.add_token(kind, span);
            self.emitted += 1;
        }
        self.position = self.significant.len();
    }

    fn flush_trivia(&mut self) {
        let target = self
            .significant
            .get(self.position)
            .copied()
            .unwrap_or(self.tokens.len());
        while self.emitted < target {
            let (kind, span) = self.tokens[self.emitted].clone();
            self.sink.add_token(kind, span);
            self.emitted += 1;
        }
    }
}
