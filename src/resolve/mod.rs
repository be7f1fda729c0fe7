//! Type resolution.
//!
//! - [`TypeResolver`] turns front-end types into model [`Type`]s at visit time
//! - [`DeferredResolver`] patches unresolved tags and encodings once the
//!   whole tree is known
//!
//! [`Type`]: crate::model::Type

mod deferred;
mod types;


pub use deferred::DeferredResolver;
pub use types::{TypeResolver, block_type};
