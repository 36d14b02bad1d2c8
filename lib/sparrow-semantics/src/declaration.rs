//! Declaration kinds and the capabilities they share

use std::fmt;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode, TextSize};

use crate::collecting::ChildDeclarationCollecting;
use crate::collection::DeclarationCollection;
use crate::declarations::{
    Actor, AssociatedType, Class, ConditionalCompilationBlock, Deinitializer, EnumCase, Enumeration,
    Extension, Function, Import, Initializer, Operator, PrecedenceGroup, Protocol, Structure,
    Subscript, TypeAlias, Variable,
};
use crate::entity::{Attribute, GenericParameter, GenericRequirement, Modifiers};
use crate::resolver::DeclarationResolver;

/// The closed set of declaration kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeclarationKind {
    Actor,
    AssociatedType,
    Class,
    ConditionalCompilationBlock,
    Deinitializer,
    EnumCase,
    Enumeration,
    Extension,
    Function,
    Import,
    Initializer,
    Operator,
    PrecedenceGroup,
    Protocol,
    Structure,
    Subscript,
    TypeAlias,
    Variable,
}

impl DeclarationKind {
    /// The kind a declaration node produces, `None` for anything else
    pub fn from_syntax_kind(kind: SyntaxKind) -> Option<DeclarationKind> {
        let kind = match kind {
            SyntaxKind::ActorDecl => DeclarationKind::Actor,
            SyntaxKind::AssociatedTypeDecl => DeclarationKind::AssociatedType,
            SyntaxKind::ClassDecl => DeclarationKind::Class,
            SyntaxKind::IfConfigDecl => DeclarationKind::ConditionalCompilationBlock,
            SyntaxKind::DeinitializerDecl => DeclarationKind::Deinitializer,
            SyntaxKind::EnumCaseDecl => DeclarationKind::EnumCase,
            SyntaxKind::EnumDecl => DeclarationKind::Enumeration,
            SyntaxKind::ExtensionDecl => DeclarationKind::Extension,
            SyntaxKind::FunctionDecl => DeclarationKind::Function,
            SyntaxKind::ImportDecl => DeclarationKind::Import,
            SyntaxKind::InitializerDecl => DeclarationKind::Initializer,
            SyntaxKind::OperatorDecl => DeclarationKind::Operator,
            SyntaxKind::PrecedenceGroupDecl => DeclarationKind::PrecedenceGroup,
            SyntaxKind::ProtocolDecl => DeclarationKind::Protocol,
            SyntaxKind::StructDecl => DeclarationKind::Structure,
            SyntaxKind::SubscriptDecl => DeclarationKind::Subscript,
            SyntaxKind::TypeAliasDecl => DeclarationKind::TypeAlias,
            SyntaxKind::VariableDecl => DeclarationKind::Variable,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Actor => "actor",
            DeclarationKind::AssociatedType => "associated type",
            DeclarationKind::Class => "class",
            DeclarationKind::ConditionalCompilationBlock => "conditional compilation block",
            DeclarationKind::Deinitializer => "deinitializer",
            DeclarationKind::EnumCase => "enum case",
            DeclarationKind::Enumeration => "enumeration",
            DeclarationKind::Extension => "extension",
            DeclarationKind::Function => "function",
            DeclarationKind::Import => "import",
            DeclarationKind::Initializer => "initializer",
            DeclarationKind::Operator => "operator",
            DeclarationKind::PrecedenceGroup => "precedence group",
            DeclarationKind::Protocol => "protocol",
            DeclarationKind::Structure => "structure",
            DeclarationKind::Subscript => "subscript",
            DeclarationKind::TypeAlias => "type alias",
            DeclarationKind::Variable => "variable",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties every declaration has
pub trait Declared {
    fn resolver(&self) -> &DeclarationResolver;

    fn kind(&self) -> DeclarationKind;

    fn name(&self) -> &str;

    /// The introducing keyword, `class`, `func`, `let`, `case`, `#if`...
    fn keyword(&self) -> &str {
        self.resolver().keyword()
    }

    fn modifiers(&self) -> &Modifiers {
        self.resolver().modifiers()
    }

    fn attributes(&self) -> &[Attribute] {
        self.resolver().attributes()
    }

    /// The declaration node
    fn syntax(&self) -> &SyntaxNode {
        self.resolver().syntax()
    }

    /// Where the declaration starts, used to order mixed-kind listings
    fn position(&self) -> TextSize {
        self.syntax().text_range().start()
    }
}

/// Declarations that may have generic parameters and a `where` clause
pub trait Generic: Declared {
    fn generic_parameters(&self) -> &[GenericParameter] {
        self.resolver().generic_parameters()
    }

    fn generic_requirements(&self) -> &[GenericRequirement] {
        self.resolver().generic_requirements()
    }
}

/// Declarations with an inheritance clause
pub trait Inheriting: Declared {
    fn inheritance(&self) -> &[String] {
        self.resolver().inheritance()
    }
}

/// A borrowed declaration of any kind
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Actor(&'a Actor),
    AssociatedType(&'a AssociatedType),
    Class(&'a Class),
    ConditionalCompilationBlock(&'a ConditionalCompilationBlock),
    Deinitializer(&'a Deinitializer),
    EnumCase(&'a EnumCase),
    Enumeration(&'a Enumeration),
    Extension(&'a Extension),
    Function(&'a Function),
    Import(&'a Import),
    Initializer(&'a Initializer),
    Operator(&'a Operator),
    PrecedenceGroup(&'a PrecedenceGroup),
    Protocol(&'a Protocol),
    Structure(&'a Structure),
    Subscript(&'a Subscript),
    TypeAlias(&'a TypeAlias),
    Variable(&'a Variable),
}

impl<'a> Declaration<'a> {
    pub fn as_declared(self) -> &'a dyn Declared {
        match self {
            Declaration::Actor(d) => d,
            Declaration::AssociatedType(d) => d,
            Declaration::Class(d) => d,
            Declaration::ConditionalCompilationBlock(d) => d,
            Declaration::Deinitializer(d) => d,
            Declaration::EnumCase(d) => d,
            Declaration::Enumeration(d) => d,
            Declaration::Extension(d) => d,
            Declaration::Function(d) => d,
            Declaration::Import(d) => d,
            Declaration::Initializer(d) => d,
            Declaration::Operator(d) => d,
            Declaration::PrecedenceGroup(d) => d,
            Declaration::Protocol(d) => d,
            Declaration::Structure(d) => d,
            Declaration::Subscript(d) => d,
            Declaration::TypeAlias(d) => d,
            Declaration::Variable(d) => d,
        }
    }

    pub fn kind(self) -> DeclarationKind {
        self.as_declared().kind()
    }

    pub fn name(self) -> &'a str {
        self.as_declared().name()
    }

    pub fn position(self) -> TextSize {
        self.as_declared().position()
    }

    /// The nested collection, for kinds that own one
    pub fn members(self) -> Option<&'a DeclarationCollection> {
        match self {
            Declaration::Actor(d) => d.child_declarations(),
            Declaration::AssociatedType(d) => d.child_declarations(),
            Declaration::Class(d) => d.child_declarations(),
            Declaration::ConditionalCompilationBlock(d) => d.child_declarations(),
            Declaration::Deinitializer(d) => d.child_declarations(),
            Declaration::EnumCase(d) => d.child_declarations(),
            Declaration::Enumeration(d) => d.child_declarations(),
            Declaration::Extension(d) => d.child_declarations(),
            Declaration::Function(d) => d.child_declarations(),
            Declaration::Import(d) => d.child_declarations(),
            Declaration::Initializer(d) => d.child_declarations(),
            Declaration::Operator(d) => d.child_declarations(),
            Declaration::PrecedenceGroup(d) => d.child_declarations(),
            Declaration::Protocol(d) => d.child_declarations(),
            Declaration::Structure(d) => d.child_declarations(),
            Declaration::Subscript(d) => d.child_declarations(),
            Declaration::TypeAlias(d) => d.child_declarations(),
            Declaration::Variable(d) => d.child_declarations(),
        }
    }

    pub fn as_variable(self) -> Option<&'a Variable> {
        match self {
            Declaration::Variable(variable) => Some(variable),
            _ => None,
        }
    }
}

impl ChildDeclarationCollecting for Declaration<'_> {
    fn child_declarations(&self) -> Option<&DeclarationCollection> {
        self.members()
    }
}
