//! Definition model.
//!
//! One concrete kind per declaration category, all owned by the
//! [`crate::tree::MetabaseTree`] arena:
//!
//! - [`Type`] / [`Argument`] — resolved `(tag, value, encoding)` triples
//! - [`DefinitionBase`] — fields every declaration carries
//! - [`Definition`] — closed set of declaration kinds
//! - [`InterfaceDefinition`] — classes, protocols and categories with their
//!   [`MethodDefinition`]s and [`Property`]s

mod definition;
mod interface;
mod types;


pub use definition::{
    BlockDefinition, Definition, DefinitionBase, DefinitionKind, EnumDefinition,
    FunctionDefinition, RecordDefinition, RecordKind, TypeDefinition, VarDefinition,
};
pub use interface::{InterfaceDefinition, InterfaceKind, MethodDefinition, Property};
pub use types::{Argument, Type};
