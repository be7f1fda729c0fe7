//! Front-end input model.
//!
//! The declaration tree is produced by an external libclang dumper and handed
//! to the generator as a serialized document. This module mirrors the cursor
//! and type information the generator reads from it:
//!
//! - [`Node`] — one cursor (declaration, member, reference or attribute)
//! - [`AstType`] — a type as reported by the front-end
//! - [`TranslationUnit`] — the root, with JSON/YAML loading

mod load;
mod node;
mod types;


pub use load::{InputFormat, TranslationUnit};
pub use node::{
    Availability, CursorKind, Node, PlatformAvailability, PlatformRecord, PropertyAttribute,
    RawVersion,
};
pub use types::{AstType, TypeKind};
