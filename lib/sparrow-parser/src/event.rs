//! Event-based parsing infrastructure
//!
//! Grammar functions never build trees directly. They emit events into an
//! [`EventSink`], and a [`TreeBuilder`] replays those events over the source
//! text to produce the final rowan tree.
//!
//! # Architecture
//!
//! 1. Grammar functions emit events (StartNode, AddToken, FinishNode, Error)
//! 2. The sink keeps them in order; a checkpoint is simply an index into it
//! 3. `TreeBuilder` consumes the events and the source to build the tree
//!
//! Wrapping an already-emitted prefix in a new node (attributes before a
//! declaration keyword, `Int` before a postfix `?`) inserts a `StartNode` at
//! the checkpoint recorded before the prefix.

use sparrow_lexer::Span;
use sparrow_syntax_tree::{GreenNodeBuilder, SyntaxKind, SyntaxNode};

/// Events emitted during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start a new syntax node
    StartNode(SyntaxKind),
    /// Add a token to the current node
    AddToken(SyntaxKind, Span),
    /// Finish the current syntax node
    FinishNode,
    /// A parse error occurred
    Error { message: String, span: Option<Span> },
}

/// Position in the event stream where a node may later be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Collects events during parsing
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Vec<Event>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new syntax node
    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.events.push(Event::StartNode(kind));
    }

    /// Add a token to the current node
    pub fn add_token(&mut self, kind: SyntaxKind, span: Span) {
        self.events.push(Event::AddToken(kind, span));
    }

    /// Finish the current syntax node
    pub fn finish_node(&mut self) {
        self.events.push(Event::FinishNode);
    }

    /// Record a parse error
    pub fn error(&mut self, message: impl Into<String>, span: Option<Span>) {
        self.events.push(Event::Error {
            message: message.into(),
            span,
        });
    }

    /// Remember the current position so a node can be opened there later
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.events.len())
    }

    /// Open a node at `checkpoint`, wrapping every event emitted since
    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        let index = checkpoint.0.min(self.events.len());
        self.events.insert(index, Event::StartNode(kind));
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// Builds a syntax tree from events and source text
pub struct TreeBuilder<'src> {
    source: &'src str,
    events: Vec<Event>,
}

impl<'src> TreeBuilder<'src> {
    pub fn new(source: &'src str, events: Vec<Event>) -> Self {
        Self { source, events }
    }

    /// Build the syntax tree from events
    pub fn build(self) -> SyntaxNode {
        let mut builder = GreenNodeBuilder::new();

        for event in &self.events {
            match event {
                Event::StartNode(kind) => builder.start_node((*kind).into()),
                Event::AddToken(kind, span) => {
                    let text = self.source.get(span.clone()).unwrap_or_default();
                    builder.token((*kind).into(), text);
                }
                Event::FinishNode => builder.finish_node(),
                // Errors are extracted from the event list separately
                Event::Error { .. } => {}
            }
        }

        SyntaxNode::new_root(builder.finish())
    }
}
