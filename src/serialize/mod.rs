//! Metabase document output.
//!
//! - [`entries`] — serialized shape of each definition kind
//! - [`Metadata`] — run information (`api-version`, SDK, dependencies, timestamp)
//! - [`Metabase`] — the whole document, with JSON emission
//! - [`Emitter`] — builds the document from a completed tree, applying
//!   deferred resolution and skipping excluded definitions

mod document;
mod emit;
pub mod entries;
mod metadata;


pub use document::Metabase;
pub use emit::Emitter;
pub use metadata::{API_VERSION, Metadata, TIMESTAMP_FORMAT, platform_from_sdk};
