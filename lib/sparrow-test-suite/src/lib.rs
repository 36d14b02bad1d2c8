//! Sparrow Test Suite
//!
//! A fluent test API for checking what the semantic layer makes of Swift
//! source.
//!
//! # Example
//!
//! ```
//! use sparrow_test_suite::*;
//!
//! Test::new("struct Point { var x, y: Double }")
//!     .expect(Parses)
//!     .expect(Decl::new("Point.y").is(Kind::Variable).has(Fact::Type("Double")));
//! ```
//!
//! # Declaration Paths
//!
//! Declarations can be found by simple name or by dot-separated path:
//!
//! ```
//! use sparrow_test_suite::*;
//!
//! // Simple name lookup (finds first match anywhere in the file)
//! Decl::new("Inner");
//!
//! // Path-based lookup (finds Outer, then Inner within it)
//! Decl::new("Outer.Inner");
//! ```
//!
//! A declaration whose own name contains dots, such as `extension
//! Foundation.Date` or `import struct Kit.User`, is matched by its full name
//! first. Declarations inside `#if` branches are found through the block that
//! holds them.

use sparrow_parser::parse;
use sparrow_reporting::DiagnosticContext;
use sparrow_semantics::{
    AccessorKind, ChildDeclarationCollecting, Declaration, Generic, Inheriting, SourceFile,
};

// Re-export commonly used types
pub use sparrow_semantics::{Associativity, DeclarationKind as Kind, Fixity, SemanticsConfig};
pub use sparrow_semantics::AccessorKind as Accessor;

/// Test context containing the analysis results
pub struct TestContext {
    pub source_file: SourceFile,
    pub diagnostics: DiagnosticContext,
    pub has_errors: bool,
}

/// A test case run against the parser and the semantic layer
pub struct Test {
    source: String,
    config: SemanticsConfig,
    context: Option<TestContext>,
}

impl Test {
    /// Create a new test from a single source string
    pub fn new(source: &str) -> Self {
        Test {
            source: source.to_string(),
            config: SemanticsConfig::default(),
            context: None,
        }
    }

    /// Analyse with a non-default configuration
    pub fn with_config(source: &str, config: SemanticsConfig) -> Self {
        Test {
            source: source.to_string(),
            config,
            context: None,
        }
    }

    /// Parse and analyse the source, once
    fn analyse(&mut self) -> &TestContext {
        let source = &self.source;
        let config = &self.config;

        self.context.get_or_insert_with(|| {
            let mut diagnostics = DiagnosticContext::new();
            let file_id = diagnostics.add_file("test.swift", source.clone());

            let result = parse(source);
            for error in &result.errors {
                diagnostics.report(error, file_id);
            }

            let source_file = match SourceFile::with_config(result.tree, config.clone()) {
                Ok(file) => file,
                Err(error) => panic!("Parser did not produce a source file: {}", error),
            };

            let has_errors = diagnostics.has_errors();
            TestContext {
                source_file,
                diagnostics,
                has_errors,
            }
        })
    }

    /// Apply an expectation to this test
    pub fn expect<E: Expectable>(mut self, expectation: E) -> Self {
        let ctx = self.analyse();
        if let Err(e) = expectation.check(ctx) {
            if !ctx.diagnostics.is_empty() {
                eprintln!("\n--- Parser Diagnostics ---");
                ctx.diagnostics.emit().ok();
            }
            panic!("Expectation failed: {}", e);
        }
        self
    }
}

/// Trait for test expectations
pub trait Expectable {
    fn check(&self, ctx: &TestContext) -> Result<(), String>;
}

/// Expects the source to parse without errors
pub struct Parses;

impl Expectable for Parses {
    fn check(&self, ctx: &TestContext) -> Result<(), String> {
        if ctx.has_errors {
            Err(format!(
                "Expected the source to parse cleanly, but got {} error(s)",
                ctx.diagnostics.len()
            ))
        } else {
            Ok(())
        }
    }
}

/// Expects a parse error containing a specific message
pub struct HasError(pub &'static str);

impl Expectable for HasError {
    fn check(&self, ctx: &TestContext) -> Result<(), String> {
        if !ctx.has_errors {
            return Err("Expected a parse error, but the source parsed cleanly".to_string());
        }

        let has_matching_error = ctx
            .diagnostics
            .diagnostics()
            .iter()
            .any(|diag| diag.message.contains(self.0));

        if has_matching_error {
            Ok(())
        } else {
            let actual_errors: Vec<_> = ctx
                .diagnostics
                .diagnostics()
                .iter()
                .map(|d| d.message.as_str())
                .collect();
            Err(format!(
                "Expected an error containing '{}', but got: {:?}",
                self.0, actual_errors
            ))
        }
    }
}

/// Expects exactly N parse errors
pub struct HasErrorCount(pub usize);

impl Expectable for HasErrorCount {
    fn check(&self, ctx: &TestContext) -> Result<(), String> {
        let actual = ctx.diagnostics.len();
        if actual == self.0 {
            Ok(())
        } else {
            Err(format!("Expected {} error(s), but got {}", self.0, actual))
        }
    }
}

/// Expects the file's top-level declarations to have these names, in order
pub struct TopLevel(pub Vec<&'static str>);

impl Expectable for TopLevel {
    fn check(&self, ctx: &TestContext) -> Result<(), String> {
        let declarations = ctx.source_file.declarations();
        let actual: Vec<&str> = declarations.iter().map(|d| d.name()).collect();
        if actual == self.0 {
            Ok(())
        } else {
            Err(format!(
                "Expected top-level declarations {:?}, but got {:?}",
                self.0, actual
            ))
        }
    }
}

/// Declaration expectation with chainable fact checks
///
/// - `Decl::new("Foo")` - finds the first declaration named "Foo" anywhere
/// - `Decl::new("Outer.Inner")` - finds "Inner" within "Outer"
pub struct Decl {
    path: String,
    kind: Option<Kind>,
    facts: Vec<Fact>,
    negated_facts: Vec<Fact>,
}

impl Decl {
    pub fn new(path: &str) -> Self {
        Decl {
            path: path.to_string(),
            kind: None,
            facts: Vec::new(),
            negated_facts: Vec::new(),
        }
    }

    /// Assert the declaration is of a specific kind
    pub fn is(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Assert the declaration has a specific fact
    pub fn has(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }

    /// Assert the declaration does NOT have a specific fact
    pub fn not(mut self, fact: Fact) -> Self {
        self.negated_facts.push(fact);
        self
    }

    /// Find a declaration by path
    fn find<'a>(&self, top_level: Vec<Declaration<'a>>) -> Option<Declaration<'a>> {
        // Imports and extensions may carry dots in their own name
        if let Some(exact) = find_by_name(top_level.clone(), &self.path) {
            return Some(exact);
        }

        let mut segments = self.path.split('.');
        let first = segments.next()?;

        // The first segment may be anywhere, the rest must be nested
        let mut current = find_by_name(top_level, first)?;
        for segment in segments {
            current = find_by_name(children(current), segment)?;
        }
        Some(current)
    }
}

/// Declarations nested directly under `decl`, including those in `#if` branches
fn children(decl: Declaration<'_>) -> Vec<Declaration<'_>> {
    let mut children: Vec<_> = decl
        .members()
        .map(|members| members.iter().collect())
        .unwrap_or_default();

    if let Declaration::ConditionalCompilationBlock(block) = decl {
        for branch in block.branches() {
            children.extend(branch.declarations());
        }
    }

    children
}

/// Depth-first search for a declaration named `name`
fn find_by_name<'a>(declarations: Vec<Declaration<'a>>, name: &str) -> Option<Declaration<'a>> {
    for decl in declarations {
        if decl.name() == name {
            return Some(decl);
        }
        if let Some(found) = find_by_name(children(decl), name) {
            return Some(found);
        }
    }
    None
}

impl Expectable for Decl {
    fn check(&self, ctx: &TestContext) -> Result<(), String> {
        let decl = self
            .find(ctx.source_file.declarations())
            .ok_or_else(|| format!("Declaration '{}' not found", self.path))?;

        if let Some(expected_kind) = self.kind {
            let actual_kind = decl.kind();
            if actual_kind != expected_kind {
                return Err(format!(
                    "Declaration '{}' has kind {:?}, expected {:?}",
                    self.path, actual_kind, expected_kind
                ));
            }
        }

        for fact in &self.facts {
            fact.check_declaration(&self.path, decl, false)?;
        }

        for fact in &self.negated_facts {
            fact.check_declaration(&self.path, decl, true)?;
        }

        Ok(())
    }
}

/// Facts are properties that declarations can have
#[derive(Debug, Clone)]
pub enum Fact {
    /// The introducing keyword
    Keyword(&'static str),
    /// A modifier with this name is present
    Modifier(&'static str),
    /// A modifier carries this detail, `Modifier("private")` with `"set"`
    ModifierDetail(&'static str, &'static str),
    /// An attribute with this name is present
    Attribute(&'static str),
    GenericParameterCount(usize),
    GenericRequirementCount(usize),
    /// This type appears in the inheritance clause
    Inherits(&'static str),
    /// The rendered type of a variable, alias, subscript, extension or associated type
    Type(&'static str),
    /// The rendered return type of a function or subscript
    ReturnType(&'static str),
    InitialValue(&'static str),
    IsOptional(bool),
    HasSetter(bool),
    /// A getter computes the value instead of storage holding it
    IsComputed(bool),
    InProtocol(bool),
    /// A subscript can be assigned through
    IsWritable(bool),
    HasAccessor(Accessor),
    AccessorCount(usize),
    ParameterCount(usize),
    /// Parameter labels in order, `_` for unlabeled
    ParameterLabels(Vec<&'static str>),
    IsAsync(bool),
    IsThrowing(bool),
    HasBody(bool),
    /// Number of declarations nested directly inside
    ChildCount(usize),
    /// Names of the declarations nested directly inside, in order
    Children(Vec<&'static str>),
    RawValue(&'static str),
    ImportKind(&'static str),
    Fixity(Fixity),
    PrecedenceGroup(&'static str),
    Associativity(Associativity),
    BranchCount(usize),
}

impl Fact {
    fn check_declaration(
        &self,
        path: &str,
        decl: Declaration<'_>,
        negated: bool,
    ) -> Result<(), String> {
        let result = self.check_declaration_inner(path, decl);

        if negated {
            match result {
                Ok(()) => Err(format!(
                    "Declaration '{}' should NOT have {:?}, but it does",
                    path, self
                )),
                Err(_) => Ok(()),
            }
        } else {
            result
        }
    }

    fn check_declaration_inner(&self, path: &str, decl: Declaration<'_>) -> Result<(), String> {
        let declared = decl.as_declared();

        match self {
            Fact::Keyword(expected) => expect_eq(path, "keyword", declared.keyword(), *expected),
            Fact::Modifier(name) => {
                if declared.modifiers().contains(name) {
                    Ok(())
                } else {
                    Err(format!(
                        "Declaration '{}' has no '{}' modifier, modifiers are {:?}",
                        path,
                        name,
                        declared.modifiers().names().collect::<Vec<_>>()
                    ))
                }
            }
            Fact::ModifierDetail(name, detail) => {
                let actual = declared.modifiers().detail(name).unwrap_or("");
                expect_eq(path, "modifier detail", actual, *detail)
            }
            Fact::Attribute(name) => {
                if declared.attributes().iter().any(|attr| attr.name == *name) {
                    Ok(())
                } else {
                    Err(format!("Declaration '{}' has no '@{}' attribute", path, name))
                }
            }
            Fact::GenericParameterCount(expected) => {
                let actual = generic(decl)
                    .map(|g| g.generic_parameters().len())
                    .ok_or_else(|| unsupported(path, self))?;
                expect_eq(path, "generic parameter count", actual, *expected)
            }
            Fact::GenericRequirementCount(expected) => {
                let actual = generic(decl)
                    .map(|g| g.generic_requirements().len())
                    .ok_or_else(|| unsupported(path, self))?;
                expect_eq(path, "generic requirement count", actual, *expected)
            }
            Fact::Inherits(expected) => {
                let inheritance = inheriting(decl).ok_or_else(|| unsupported(path, self))?;
                if inheritance.iter().any(|ty| ty == expected) {
                    Ok(())
                } else {
                    Err(format!(
                        "Declaration '{}' does not inherit '{}', inheritance is {:?}",
                        path, expected, inheritance
                    ))
                }
            }
            Fact::Type(expected) => {
                let actual = match decl {
                    Declaration::Variable(v) => v.type_annotation().to_string(),
                    Declaration::TypeAlias(a) => a.initialized_type().to_string(),
                    Declaration::AssociatedType(a) => {
                        a.default_type().map(|ty| ty.to_string()).unwrap_or_default()
                    }
                    Declaration::Subscript(s) => s.return_type().to_string(),
                    Declaration::Extension(e) => e.extended_type().to_string(),
                    _ => return Err(unsupported(path, self)),
                };
                expect_eq(path, "type", actual.as_str(), *expected)
            }
            Fact::ReturnType(expected) => {
                let actual = match decl {
                    Declaration::Function(f) => f
                        .signature()
                        .output
                        .as_ref()
                        .map(|ty| ty.to_string())
                        .unwrap_or_default(),
                    Declaration::Subscript(s) => s.return_type().to_string(),
                    _ => return Err(unsupported(path, self)),
                };
                expect_eq(path, "return type", actual.as_str(), *expected)
            }
            Fact::InitialValue(expected) => match decl {
                Declaration::Variable(v) => {
                    expect_eq(path, "initial value", v.initial_value().unwrap_or(""), *expected)
                }
                _ => Err(unsupported(path, self)),
            },
            Fact::IsOptional(expected) => {
                let actual = match decl {
                    Declaration::Variable(v) => v.is_optional(),
                    Declaration::Initializer(i) => i.is_optional(),
                    Declaration::Subscript(s) => s.return_type().is_optional(),
                    _ => return Err(unsupported(path, self)),
                };
                expect_eq(path, "optionality", actual, *expected)
            }
            Fact::HasSetter(expected) => match decl {
                Declaration::Variable(v) => {
                    expect_eq(path, "has-setter", v.has_setter(), *expected)
                }
                _ => Err(unsupported(path, self)),
            },
            Fact::IsComputed(expected) => match decl {
                Declaration::Variable(v) => expect_eq(path, "computed", v.is_computed(), *expected),
                _ => Err(unsupported(path, self)),
            },
            Fact::IsWritable(expected) => match decl {
                Declaration::Subscript(s) => {
                    expect_eq(path, "writable", s.is_writable(), *expected)
                }
                _ => Err(unsupported(path, self)),
            },
            Fact::InProtocol(expected) => match decl {
                Declaration::Variable(v) => {
                    expect_eq(path, "in-protocol", v.in_protocol(), *expected)
                }
                _ => Err(unsupported(path, self)),
            },
            Fact::HasAccessor(kind) => {
                let accessors = accessor_kinds(decl).ok_or_else(|| unsupported(path, self))?;
                if accessors.contains(kind) {
                    Ok(())
                } else {
                    Err(format!(
                        "Declaration '{}' has no {} accessor, accessors are {:?}",
                        path, kind, accessors
                    ))
                }
            }
            Fact::AccessorCount(expected) => {
                let accessors = accessor_kinds(decl).ok_or_else(|| unsupported(path, self))?;
                expect_eq(path, "accessor count", accessors.len(), *expected)
            }
            Fact::ParameterCount(expected) => {
                let labels = parameter_labels(decl).ok_or_else(|| unsupported(path, self))?;
                expect_eq(path, "parameter count", labels.len(), *expected)
            }
            Fact::ParameterLabels(expected) => {
                let labels = parameter_labels(decl).ok_or_else(|| unsupported(path, self))?;
                let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
                expect_eq(path, "parameter labels", labels, expected.clone())
            }
            Fact::IsAsync(expected) => {
                let actual = match decl {
                    Declaration::Function(f) => f.signature().effects.is_async,
                    Declaration::Initializer(i) => i.signature().effects.is_async,
                    _ => return Err(unsupported(path, self)),
                };
                expect_eq(path, "async", actual, *expected)
            }
            Fact::IsThrowing(expected) => {
                let actual = match decl {
                    Declaration::Function(f) => f.signature().effects.is_throwing(),
                    Declaration::Initializer(i) => i.signature().effects.is_throwing(),
                    _ => return Err(unsupported(path, self)),
                };
                expect_eq(path, "throwing", actual, *expected)
            }
            Fact::HasBody(expected) => match decl {
                Declaration::Function(f) => expect_eq(path, "has-body", f.has_body(), *expected),
                _ => Err(unsupported(path, self)),
            },
            Fact::ChildCount(expected) => {
                expect_eq(path, "child count", children(decl).len(), *expected)
            }
            Fact::Children(expected) => {
                let names: Vec<&str> = children(decl).iter().map(|d| d.name()).collect();
                expect_eq(path, "children", names, expected.clone())
            }
            Fact::RawValue(expected) => match decl {
                Declaration::EnumCase(c) => {
                    expect_eq(path, "raw value", c.raw_value().unwrap_or(""), *expected)
                }
                _ => Err(unsupported(path, self)),
            },
            Fact::ImportKind(expected) => match decl {
                Declaration::Import(i) => {
                    expect_eq(path, "import kind", i.import_kind().unwrap_or(""), *expected)
                }
                _ => Err(unsupported(path, self)),
            },
            Fact::Fixity(expected) => match decl {
                Declaration::Operator(o) => expect_eq(path, "fixity", o.fixity(), *expected),
                _ => Err(unsupported(path, self)),
            },
            Fact::PrecedenceGroup(expected) => match decl {
                Declaration::Operator(o) => expect_eq(
                    path,
                    "precedence group",
                    o.precedence_group().unwrap_or_default().as_str(),
                    *expected,
                ),
                _ => Err(unsupported(path, self)),
            },
            Fact::Associativity(expected) => match decl {
                Declaration::PrecedenceGroup(g) => {
                    expect_eq(path, "associativity", g.associativity(), Some(*expected))
                }
                _ => Err(unsupported(path, self)),
            },
            Fact::BranchCount(expected) => match decl {
                Declaration::ConditionalCompilationBlock(b) => {
                    expect_eq(path, "branch count", b.branches().len(), *expected)
                }
                _ => Err(unsupported(path, self)),
            },
        }
    }
}

fn expect_eq<T: PartialEq + std::fmt::Debug>(
    path: &str,
    what: &str,
    actual: T,
    expected: T,
) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!(
            "Declaration '{}' has {} {:?}, expected {:?}",
            path, what, actual, expected
        ))
    }
}

fn unsupported(path: &str, fact: &Fact) -> String {
    format!("{:?} does not apply to declaration '{}'", fact, path)
}

fn generic(decl: Declaration<'_>) -> Option<&dyn Generic> {
    let generic: &dyn Generic = match decl {
        Declaration::Actor(d) => d,
        Declaration::AssociatedType(d) => d,
        Declaration::Class(d) => d,
        Declaration::Enumeration(d) => d,
        Declaration::Extension(d) => d,
        Declaration::Function(d) => d,
        Declaration::Initializer(d) => d,
        Declaration::Protocol(d) => d,
        Declaration::Structure(d) => d,
        Declaration::Subscript(d) => d,
        Declaration::TypeAlias(d) => d,
        _ => return None,
    };
    Some(generic)
}

fn inheriting(decl: Declaration<'_>) -> Option<&[String]> {
    let inheriting: &dyn Inheriting = match decl {
        Declaration::Actor(d) => d,
        Declaration::AssociatedType(d) => d,
        Declaration::Class(d) => d,
        Declaration::Enumeration(d) => d,
        Declaration::Extension(d) => d,
        Declaration::Protocol(d) => d,
        Declaration::Structure(d) => d,
        _ => return None,
    };
    Some(inheriting.inheritance())
}

fn accessor_kinds(decl: Declaration<'_>) -> Option<Vec<AccessorKind>> {
    let accessors = match decl {
        Declaration::Variable(v) => v.accessors(),
        Declaration::Subscript(s) => s.accessors(),
        _ => return None,
    };
    Some(accessors.iter().map(|a| a.kind).collect())
}

fn parameter_labels(decl: Declaration<'_>) -> Option<Vec<String>> {
    let parameters = match decl {
        Declaration::Function(f) => f.signature().input.as_slice(),
        Declaration::Initializer(i) => i.signature().input.as_slice(),
        Declaration::Subscript(s) => s.indices(),
        Declaration::EnumCase(c) => c.associated_values(),
        _ => return None,
    };
    Some(
        parameters
            .iter()
            .map(|p| p.label().unwrap_or("_").to_string())
            .collect(),
    )
}
