//! Syntax tree navigation helpers

mod helpers;

pub use helpers::*;
