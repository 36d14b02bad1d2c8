//! Sparrow Lexer
//!
//! Tokenizes the declaration surface of Swift source text with `logos`.
//! Trivia (whitespace and comments) is emitted as ordinary tokens so the
//! parser can build a lossless tree; nothing in the source is dropped.
//!
//! Contextual words such as `get`, `set`, `actor`, `mutating` or `some` lex as
//! [`Token::Identifier`]; the parser decides what they mean from position.

use logos::Logos;
use unicode_xid::UnicodeXID;

pub type Span = std::ops::Range<usize>;

/// A value paired with the byte range it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }
}

/// Check if a string is a valid Unicode identifier
fn is_valid_identifier(lex: &mut logos::Lexer<Token>) -> bool {
    let mut chars = lex.slice().chars();

    match chars.next() {
        Some(first) if first.is_xid_start() || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_xid_continue())
}

/// Parse nested block comments and return the full comment as a token
fn parse_block_comment(lex: &mut logos::Lexer<Token>) -> bool {
    let remainder = lex.remainder();
    let mut depth = 1;
    let mut chars = remainder.chars();
    let mut offset = 0;

    while let Some(c) = chars.next() {
        offset += c.len_utf8();

        if c == '/' && chars.clone().next() == Some('*') {
            chars.next();
            offset += 1;
            depth += 1;
        } else if c == '*' && chars.clone().next() == Some('/') {
            chars.next();
            offset += 1;
            depth -= 1;
            if depth == 0 {
                lex.bump(offset);
                return true;
            }
        }
    }

    // Unclosed comment - bump to end
    lex.bump(offset);
    true
}

/// Consume a `"""` string up to and including its closing delimiter
fn parse_multiline_string(lex: &mut logos::Lexer<Token>) -> bool {
    let remainder = lex.remainder();
    let mut escaped = false;

    for (index, c) in remainder.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' if remainder[index..].starts_with("\"\"\"") => {
                lex.bump(index + 3);
                return true;
            }
            _ => {}
        }
    }

    // Unterminated - bump to end
    lex.bump(remainder.len());
    true
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // ===== Trivia =====
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", parse_block_comment)]
    BlockComment,

    // ===== Literals =====
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", is_valid_identifier)]
    #[regex(r"`[^`\n]+`")]
    #[regex(r"\$[\p{L}\p{N}_]+")]
    Identifier,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[token("\"\"\"", parse_multiline_string)]
    String,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0x[0-9a-fA-F_]+")]
    #[regex(r"0o[0-7_]+")]
    #[regex(r"0b[01_]+")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    Float,

    #[token("true")]
    #[token("false")]
    Boolean,

    #[token("nil")]
    Nil,

    // ===== Declaration Keywords =====
    #[token("associatedtype")]
    Associatedtype,

    #[token("case")]
    Case,

    #[token("class")]
    Class,

    #[token("deinit")]
    Deinit,

    #[token("enum")]
    Enum,

    #[token("extension")]
    Extension,

    #[token("fileprivate")]
    Fileprivate,

    #[token("func")]
    Func,

    #[token("import")]
    Import,

    #[token("init")]
    Init,

    #[token("inout")]
    Inout,

    #[token("internal")]
    Internal,

    #[token("let")]
    Let,

    #[token("operator")]
    Operator,

    #[token("precedencegroup")]
    Precedencegroup,

    #[token("private")]
    Private,

    #[token("protocol")]
    Protocol,

    #[token("public")]
    Public,

    #[token("static")]
    Static,

    #[token("struct")]
    Struct,

    #[token("subscript")]
    Subscript,

    #[token("typealias")]
    Typealias,

    #[token("var")]
    Var,

    // ===== Other Keywords =====
    #[token("as")]
    As,

    #[token("is")]
    Is,

    #[token("rethrows")]
    Rethrows,

    #[token("self")]
    SelfValue,

    #[token("Self")]
    SelfType,

    #[token("throws")]
    Throws,

    #[token("try")]
    Try,

    #[token("where")]
    Where,

    // ===== Compiler Directives =====
    #[token("#if")]
    PoundIf,

    #[token("#elseif")]
    PoundElseif,

    #[token("#else")]
    PoundElse,

    #[token("#endif")]
    PoundEndif,

    // ===== Braces =====
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    // ===== Punctuation =====
    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("...")]
    Ellipsis,

    #[token(":")]
    Colon,

    #[token("=", priority = 3)]
    Equals,

    #[token("->")]
    Arrow,

    #[token("?", priority = 3)]
    Question,

    #[token("!", priority = 3)]
    Bang,

    #[token("&", priority = 3)]
    Ampersand,

    #[token("@")]
    At,

    #[token("#")]
    Hash,

    #[token("\\")]
    Backslash,

    // ===== Operators =====
    // `<` and `>` never join an operator run so nested generic arguments
    // like `Array<Array<Int>>` close one bracket at a time.
    #[regex(r"[=\-+!*%&|^~?]+")]
    #[token("/")]
    #[token("/=")]
    #[token("..<")]
    CustomOperator,
}

impl Token {
    /// Whitespace and comments
    pub fn is_trivia(self) -> bool {
        matches!(self, Token::Whitespace | Token::LineComment | Token::BlockComment)
    }
}

pub type SpannedToken = Spanned<Token>;

/// Lex source code and return an iterator of tokens with their spans
pub fn lex(source: &str) -> impl Iterator<Item = Result<SpannedToken, Spanned<()>>> + '_ {
    Token::lexer(source).spanned().map(|(token, span)| {
        token
            .map(|t| Spanned::new(t, span.clone()))
            .map_err(|_| Spanned::new((), span))
    })
}
