//! Definition registry (the metabase tree).
//!
//! Definitions live in an arena addressed by [`DefId`]; each category keeps a
//! name-keyed index into it. Registering a second definition under a taken
//! name replaces the first (last write wins) and hands the previous id back
//! so the caller can report it.

mod registry;


pub use registry::{DefId, MetabaseTree};
