//! Configuration for declaration collection

use std::collections::HashSet;

use crate::declaration::DeclarationKind;

/// Controls which declarations are collected
///
/// Every kind is collected by default. A configuration is shared by a source
/// file and every nested scope resolved from it.
#[derive(Debug, Clone, Default)]
pub struct SemanticsConfig {
    /// If true, function, initializer and deinitializer bodies own no declarations
    pub skip_function_bodies: bool,
    /// Kinds that are left out of every collection
    disabled_kinds: HashSet<DeclarationKind>,
}

impl SemanticsConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave a declaration kind out of every collection
    pub fn disable(&mut self, kind: DeclarationKind) {
        self.disabled_kinds.insert(kind);
    }

    /// Check if a declaration kind is collected
    pub fn is_enabled(&self, kind: DeclarationKind) -> bool {
        !self.disabled_kinds.contains(&kind)
    }

    /// Stop collecting declarations inside function bodies
    pub fn with_function_bodies_skipped(mut self) -> Self {
        self.skip_function_bodies = true;
        self
    }
}
