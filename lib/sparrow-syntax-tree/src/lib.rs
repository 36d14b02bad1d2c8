//! Sparrow Syntax Tree
//!
//! This crate defines the syntax tree representation for Swift declarations
//! using the `rowan` library for a lossless, resilient syntax tree implementation.
//!
//! # Overview
//!
//! The syntax tree uses `rowan`, which provides:
//! - **Lossless**: Preserves all source text including whitespace and comments
//! - **Immutable**: Syntax trees are immutable and never written back to
//! - **Cheap navigation**: Parent, sibling and child links on every node
//!
//! The tree is the input boundary of the semantic layer: every declaration
//! kind has a fixed node shape (see the node kind docs below), and resolvers
//! only ever read from it.
//!
//! # Example
//!
//! ```
//! use sparrow_syntax_tree::{GreenNodeBuilder, SyntaxKind, SyntaxNode};
//!
//! let mut builder = GreenNodeBuilder::new();
//! builder.start_node(SyntaxKind::Name.into());
//! builder.token(SyntaxKind::Identifier.into(), "Main");
//! builder.finish_node();
//!
//! let green = builder.finish();
//! let syntax = SyntaxNode::new_root(green);
//!
//! assert_eq!(syntax.kind(), SyntaxKind::Name);
//! ```

use rowan::Language;
use sparrow_lexer::Token;

// Re-export for use by parsers
pub use rowan::{GreenNodeBuilder, TextRange, TextSize};

macro_rules! syntax_kinds {
    ($($(#[$meta:meta])* $kind:ident,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            $($(#[$meta])* $kind,)*
        }

        impl SyntaxKind {
            /// Every kind, indexed by its raw value
            const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$kind,)*];
        }
    };
}

syntax_kinds! {
    // ===== Scopes =====
    /// Root of a parsed file; its items are the top-level scope
    SourceFile,
    /// `{ ... }` body of a type, extension or protocol
    MemberBlock,
    /// `{ ... }` body of a function, initializer or deinitializer
    CodeBlock,
    /// Any item that is not a declaration (expressions, control flow)
    Statement,

    // ===== Shared fragments =====
    AttributeList,
    /// `@name` followed by an optional `AttributeArguments`
    Attribute,
    AttributeArguments,
    AttributeArgument,
    ModifierList,
    /// Modifier keyword or contextual identifier with an optional `ModifierDetail`
    Modifier,
    /// Parenthesized detail such as the `(set)` in `private(set)`
    ModifierDetail,
    /// Identifier (or operator tokens) naming a declaration
    Name,
    GenericParameterClause,
    /// `Name` with an optional `: Type` constraint
    GenericParameter,
    GenericWhereClause,
    /// `Type : Type` or `Type == Type`
    GenericRequirement,
    GenericArgumentClause,
    InheritanceClause,
    InheritedType,
    /// `: Type`
    TypeAnnotation,
    /// `= Type` on a type alias or associated type
    TypeInitializer,
    /// `= Expr` on a binding, parameter or enum case
    Initializer,
    /// Expression tokens kept verbatim
    Expr,

    // ===== Declarations =====
    ClassDecl,
    StructDecl,
    EnumDecl,
    ProtocolDecl,
    ActorDecl,
    ExtensionDecl,
    FunctionDecl,
    InitializerDecl,
    DeinitializerDecl,
    SubscriptDecl,
    VariableDecl,
    TypeAliasDecl,
    AssociatedTypeDecl,
    ImportDecl,
    OperatorDecl,
    PrecedenceGroupDecl,
    EnumCaseDecl,
    IfConfigDecl,

    // ===== Variable parts =====
    /// Comma-separated bindings sharing one `var`/`let`
    PatternBindingList,
    /// Pattern, `TypeAnnotation?`, `Initializer?`, `AccessorBlock?`
    PatternBinding,
    IdentifierPattern,
    TuplePattern,
    AccessorBlock,
    /// `get`/`set`/`willSet`/`didSet`/`_read`/`_modify` with its body
    AccessorDecl,
    /// `(newName)` after `set`, `willSet` or `didSet`
    AccessorParameter,
    /// `async`, `throws` and `rethrows` in source order
    EffectSpecifiers,

    // ===== Function parts =====
    FunctionSignature,
    ParameterClause,
    FunctionParameter,
    ReturnClause,

    // ===== Other declaration parts =====
    ImportPath,
    /// `: GroupName` after an operator name
    PrecedenceDesignation,
    /// `higherThan: A`, `associativity: left`, `assignment: true`
    PrecedenceGroupAttribute,
    /// One case name with optional associated values and raw value
    EnumCaseElement,
    EnumCaseParameterClause,
    EnumCaseParameter,
    /// `#if`/`#elseif`/`#else` branch with its items
    IfConfigClause,
    IfConfigCondition,

    // ===== Types =====
    TyPath,
    TyPathSegment,
    TyOptional,
    TyImplicitlyUnwrapped,
    TyArray,
    TyDictionary,
    TyTuple,
    TyTupleElement,
    TyFunction,
    TyComposition,
    TySome,
    TyAny,
    /// Type prefixed by attributes (`@escaping`) and/or `inout`
    TyAttributed,

    // ===== Tokens (Terminals) =====
    // Literals
    Identifier,
    String,
    Integer,
    Float,
    Boolean,
    Nil,

    // Declaration keywords
    Associatedtype,
    Case,
    Class,
    Deinit,
    Enum,
    Extension,
    Fileprivate,
    Func,
    Import,
    Init,
    Inout,
    Internal,
    Let,
    Operator,
    Precedencegroup,
    Private,
    Protocol,
    Public,
    Static,
    Struct,
    Subscript,
    Typealias,
    Var,

    // Other keywords
    As,
    Is,
    Rethrows,
    SelfValue,
    SelfType,
    Throws,
    Try,
    Where,

    // Compiler directives
    PoundIf,
    PoundElseif,
    PoundElse,
    PoundEndif,

    // Braces
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LAngle,
    RAngle,

    // Punctuation
    Semicolon,
    Comma,
    Dot,
    Ellipsis,
    Colon,
    Equals,
    Arrow,
    Question,
    Bang,
    Ampersand,
    At,
    Hash,
    Backslash,
    CustomOperator,

    // Trivia (whitespace and comments)
    Whitespace,
    LineComment,
    BlockComment,

    // Special
    Error,
}

impl SyntaxKind {
    /// Whitespace or comment
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Whitespace | SyntaxKind::LineComment | SyntaxKind::BlockComment
        )
    }

    /// Node kinds that introduce a declaration
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDecl
                | SyntaxKind::StructDecl
                | SyntaxKind::EnumDecl
                | SyntaxKind::ProtocolDecl
                | SyntaxKind::ActorDecl
                | SyntaxKind::ExtensionDecl
                | SyntaxKind::FunctionDecl
                | SyntaxKind::InitializerDecl
                | SyntaxKind::DeinitializerDecl
                | SyntaxKind::SubscriptDecl
                | SyntaxKind::VariableDecl
                | SyntaxKind::TypeAliasDecl
                | SyntaxKind::AssociatedTypeDecl
                | SyntaxKind::ImportDecl
                | SyntaxKind::OperatorDecl
                | SyntaxKind::PrecedenceGroupDecl
                | SyntaxKind::EnumCaseDecl
                | SyntaxKind::IfConfigDecl
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<Token> for SyntaxKind {
    fn from(token: Token) -> Self {
        match token {
            // Trivia
            Token::Whitespace => SyntaxKind::Whitespace,
            Token::LineComment => SyntaxKind::LineComment,
            Token::BlockComment => SyntaxKind::BlockComment,
            // Literals
            Token::Identifier => SyntaxKind::Identifier,
            Token::String => SyntaxKind::String,
            Token::Integer => SyntaxKind::Integer,
            Token::Float => SyntaxKind::Float,
            Token::Boolean => SyntaxKind::Boolean,
            Token::Nil => SyntaxKind::Nil,
            // Declaration keywords
            Token::Associatedtype => SyntaxKind::Associatedtype,
            Token::Case => SyntaxKind::Case,
            Token::Class => SyntaxKind::Class,
            Token::Deinit => SyntaxKind::Deinit,
            Token::Enum => SyntaxKind::Enum,
            Token::Extension => SyntaxKind::Extension,
            Token::Fileprivate => SyntaxKind::Fileprivate,
            Token::Func => SyntaxKind::Func,
            Token::Import => SyntaxKind::Import,
            Token::Init => SyntaxKind::Init,
            Token::Inout => SyntaxKind::Inout,
            Token::Internal => SyntaxKind::Internal,
            Token::Let => SyntaxKind::Let,
            Token::Operator => SyntaxKind::Operator,
            Token::Precedencegroup => SyntaxKind::Precedencegroup,
            Token::Private => SyntaxKind::Private,
            Token::Protocol => SyntaxKind::Protocol,
            Token::Public => SyntaxKind::Public,
            Token::Static => SyntaxKind::Static,
            Token::Struct => SyntaxKind::Struct,
            Token::Subscript => SyntaxKind::Subscript,
            Token::Typealias => SyntaxKind::Typealias,
            Token::Var => SyntaxKind::Var,
            // Other keywords
            Token::As => SyntaxKind::As,
            Token::Is => SyntaxKind::Is,
            Token::Rethrows => SyntaxKind::Rethrows,
            Token::SelfValue => SyntaxKind::SelfValue,
            Token::SelfType => SyntaxKind::SelfType,
            Token::Throws => SyntaxKind::Throws,
            Token::Try => SyntaxKind::Try,
            Token::Where => SyntaxKind::Where,
            // Compiler directives
            Token::PoundIf => SyntaxKind::PoundIf,
            Token::PoundElseif => SyntaxKind::PoundElseif,
            Token::PoundElse => SyntaxKind::PoundElse,
            Token::PoundEndif => SyntaxKind::PoundEndif,
            // Braces
            Token::LParen => SyntaxKind::LParen,
            Token::RParen => SyntaxKind::RParen,
            Token::LBrace => SyntaxKind::LBrace,
            Token::RBrace => SyntaxKind::RBrace,
            Token::LBracket => SyntaxKind::LBracket,
            Token::RBracket => SyntaxKind::RBracket,
            Token::LAngle => SyntaxKind::LAngle,
            Token::RAngle => SyntaxKind::RAngle,
            // Punctuation
            Token::Semicolon => SyntaxKind::Semicolon,
            Token::Comma => SyntaxKind::Comma,
            Token::Dot => SyntaxKind::Dot,
            Token::Ellipsis => SyntaxKind::Ellipsis,
            Token::Colon => SyntaxKind::Colon,
            Token::Equals => SyntaxKind::Equals,
            Token::Arrow => SyntaxKind::Arrow,
            Token::Question => SyntaxKind::Question,
            Token::Bang => SyntaxKind::Bang,
            Token::Ampersand => SyntaxKind::Ampersand,
            Token::At => SyntaxKind::At,
            Token::Hash => SyntaxKind::Hash,
            Token::Backslash => SyntaxKind::Backslash,
            Token::CustomOperator => SyntaxKind::CustomOperator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SwiftLanguage;

impl Language for SwiftLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::ALL
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<SwiftLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SwiftLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SwiftLanguage>;
