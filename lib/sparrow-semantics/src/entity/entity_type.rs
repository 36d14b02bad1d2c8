//! Resolved types
//!
//! Type syntax is classified into a small set of shapes. Sugared and generic
//! spellings land on the same variant: `Int?` and `Optional<Int>` are both
//! `Optional(Simple("Int"))`, `[String]` and `Array<String>` are both
//! `Array(Simple("String"))`.

use std::fmt;

use sparrow_syntax_tree::{SyntaxKind, SyntaxNode};

use crate::syntax::{children_of_kind, find_child, find_token, find_type, normalized_text};

use super::effects::EffectSpecifiers;

/// The type of a variable, parameter, return clause or alias
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// No type could be determined
    Empty,
    /// A named type kept as written, such as `Int`, `Box<T>` or `some View`
    Simple(String),
    Optional(Box<EntityType>),
    Array(Box<EntityType>),
    Set(Box<EntityType>),
    Dictionary {
        key: Box<EntityType>,
        value: Box<EntityType>,
    },
    Tuple(Vec<EntityType>),
    Closure {
        inputs: Vec<EntityType>,
        is_async: bool,
        is_throwing: bool,
        is_escaping: bool,
        output: Box<EntityType>,
    },
    Result {
        success: Box<EntityType>,
        failure: Box<EntityType>,
    },
    Void,
}

impl EntityType {
    /// Resolve the type written under a `TypeAnnotation`, `ReturnClause` or
    /// similar wrapper
    pub fn from_wrapper(wrapper: &SyntaxNode) -> EntityType {
        find_type(wrapper)
            .map(|ty| EntityType::from_syntax(&ty))
            .unwrap_or(EntityType::Empty)
    }

    /// Resolve a type node
    pub fn from_syntax(ty: &SyntaxNode) -> EntityType {
        match ty.kind() {
            SyntaxKind::TyPath => from_path(ty),
            SyntaxKind::TyOptional | SyntaxKind::TyImplicitlyUnwrapped => {
                EntityType::Optional(Box::new(inner(ty)))
            }
            SyntaxKind::TyArray => EntityType::Array(Box::new(inner(ty))),
            SyntaxKind::TyDictionary => {
                let mut types = ty.children().filter(|n| crate::syntax::is_type(n.kind()));
                let key = types.next().map(|n| EntityType::from_syntax(&n));
                let value = types.next().map(|n| EntityType::from_syntax(&n));
                EntityType::Dictionary {
                    key: Box::new(key.unwrap_or(EntityType::Empty)),
                    value: Box::new(value.unwrap_or(EntityType::Empty)),
                }
            }
            SyntaxKind::TyTuple => from_tuple(ty),
            SyntaxKind::TyFunction => from_function(ty),
            SyntaxKind::TyAttributed => from_attributed(ty),
            SyntaxKind::TySome | SyntaxKind::TyAny | SyntaxKind::TyComposition => {
                EntityType::Simple(normalized_text(ty))
            }
            _ => EntityType::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, EntityType::Empty)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, EntityType::Optional(_))
    }

    /// The wrapped type of an optional, or the type itself
    pub fn unwrapped(&self) -> &EntityType {
        match self {
            EntityType::Optional(wrapped) => wrapped,
            other => other,
        }
    }
}

fn inner(ty: &SyntaxNode) -> EntityType {
    find_type(ty)
        .map(|n| EntityType::from_syntax(&n))
        .unwrap_or(EntityType::Empty)
}

fn generic_arguments(segment: &SyntaxNode) -> Vec<EntityType> {
    find_child(segment, SyntaxKind::GenericArgumentClause)
        .map(|clause| {
            clause
                .children()
                .filter(|n| crate::syntax::is_type(n.kind()))
                .map(|n| EntityType::from_syntax(&n))
                .collect()
        })
        .unwrap_or_default()
}

fn from_path(ty: &SyntaxNode) -> EntityType {
    let segments: Vec<SyntaxNode> = children_of_kind(ty, SyntaxKind::TyPathSegment).collect();

    // Standard library spellings, optionally qualified with `Swift.`
    let segment = match segments.as_slice() {
        [only] => only,
        [module, last] if segment_name(module) == "Swift" => last,
        _ => return EntityType::Simple(normalized_text(ty)),
    };

    let name = segment_name(segment);
    let mut arguments = generic_arguments(segment).into_iter();

    match (name.as_str(), arguments.len()) {
        ("Optional", 1) => {
            EntityType::Optional(Box::new(arguments.next().unwrap_or(EntityType::Empty)))
        }
        ("Array", 1) => EntityType::Array(Box::new(arguments.next().unwrap_or(EntityType::Empty))),
        ("Set", 1) => EntityType::Set(Box::new(arguments.next().unwrap_or(EntityType::Empty))),
        ("Dictionary", 2) => EntityType::Dictionary {
            key: Box::new(arguments.next().unwrap_or(EntityType::Empty)),
            value: Box::new(arguments.next().unwrap_or(EntityType::Empty)),
        },
        ("Result", 2) => EntityType::Result {
            success: Box::new(arguments.next().unwrap_or(EntityType::Empty)),
            failure: Box::new(arguments.next().unwrap_or(EntityType::Empty)),
        },
        ("Void", 0) => EntityType::Void,
        _ => EntityType::Simple(normalized_text(ty)),
    }
}

fn segment_name(segment: &SyntaxNode) -> String {
    crate::syntax::significant_tokens(segment)
        .next()
        .map(|tok| tok.text().to_string())
        .unwrap_or_default()
}

fn tuple_elements(tuple: &SyntaxNode) -> Vec<EntityType> {
    children_of_kind(tuple, SyntaxKind::TyTupleElement)
        .map(|element| {
            let ty = inner(&element);
            // Variadic closure inputs read as arrays
            if find_token(&element, SyntaxKind::Ellipsis).is_some() {
                EntityType::Array(Box::new(ty))
            } else {
                ty
            }
        })
        .collect()
}

fn from_tuple(ty: &SyntaxNode) -> EntityType {
    let elements: Vec<SyntaxNode> = children_of_kind(ty, SyntaxKind::TyTupleElement).collect();

    match elements.as_slice() {
        [] => EntityType::Void,
        // `(Int)` is just `Int`, but `(x: Int)` stays labeled
        [single] if find_token(single, SyntaxKind::Colon).is_none() => inner(single),
        _ => EntityType::Tuple(tuple_elements(ty)),
    }
}

fn from_function(ty: &SyntaxNode) -> EntityType {
    let inputs = find_child(ty, SyntaxKind::TyTuple)
        .map(|tuple| tuple_elements(&tuple))
        .unwrap_or_default();
    let effects = find_child(ty, SyntaxKind::EffectSpecifiers)
        .map(|node| EffectSpecifiers::from_syntax(&node))
        .unwrap_or_default();

    // The output is the type after the arrow
    let output = ty
        .children()
        .filter(|n| crate::syntax::is_type(n.kind()))
        .nth(1)
        .map(|n| EntityType::from_syntax(&n))
        .unwrap_or(EntityType::Empty);

    EntityType::Closure {
        inputs,
        is_async: effects.is_async,
        is_throwing: effects.is_throwing(),
        is_escaping: false,
        output: Box::new(output),
    }
}

fn from_attributed(ty: &SyntaxNode) -> EntityType {
    let escaping = ty
        .children()
        .filter(|n| n.kind() == SyntaxKind::AttributeList)
        .flat_map(|list| list.children())
        .filter_map(|attribute| find_child(&attribute, SyntaxKind::Name))
        .any(|name| normalized_text(&name) == "escaping");

    match inner(ty) {
        EntityType::Closure {
            inputs,
            is_async,
            is_throwing,
            output,
            ..
        } => EntityType::Closure {
            inputs,
            is_async,
            is_throwing,
            is_escaping: escaping,
            output,
        },
        other => other,
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[EntityType]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", ty)?;
    }
    Ok(())
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Empty => Ok(()),
            EntityType::Simple(name) => write!(f, "{}", name),
            EntityType::Optional(wrapped) => match wrapped.as_ref() {
                EntityType::Closure { .. } => write!(f, "({})?", wrapped),
                _ => write!(f, "{}?", wrapped),
            },
            EntityType::Array(element) => write!(f, "[{}]", element),
            EntityType::Set(element) => write!(f, "Set<{}>", element),
            EntityType::Dictionary { key, value } => write!(f, "[{}: {}]", key, value),
            EntityType::Tuple(elements) => {
                write!(f, "(")?;
                write_list(f, elements)?;
                write!(f, ")")
            }
            EntityType::Closure {
                inputs,
                is_async,
                is_throwing,
                is_escaping,
                output,
            } => {
                if *is_escaping {
                    write!(f, "@escaping ")?;
                }
                write!(f, "(")?;
                write_list(f, inputs)?;
                write!(f, ")")?;
                if *is_async {
                    write!(f, " async")?;
                }
                if *is_throwing {
                    write!(f, " throws")?;
                }
                write!(f, " -> {}", output)
            }
            EntityType::Result { success, failure } => {
                write!(f, "Result<{}, {}>", success, failure)
            }
            EntityType::Void => write!(f, "Void"),
        }
    }
}
