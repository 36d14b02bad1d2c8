//! Leaf values extracted from declarations
//!
//! These are plain data with no laziness of their own. The declaration types
//! memoize them.

mod accessor;
mod attribute;
mod effects;
mod entity_type;
mod generics;
mod modifier;
mod parameter;

pub use accessor::{Accessor, AccessorKind};
pub use attribute::{Attribute, AttributeArgument};
pub use effects::{EffectSpecifiers, Throwing};
pub use entity_type::EntityType;
pub use generics::{GenericParameter, GenericRequirement, Relation};
pub use modifier::{Modifier, Modifiers};
pub use parameter::{parameters_of, FunctionSignature, Parameter};
