//! Declaration tree walker.
//!
//! Depth-first dispatch over cursor kinds, building definitions into a
//! [`MetabaseTree`]:
//!
//! - `context` — per-run walk state (current location, pending anonymous
//!   record, anonymous enum counter)
//! - `visit` — top-level dispatch and per-declaration builders
//! - `members` — member-level dispatch (parameters, fields, methods,
//!   properties)
//! - `blocks` — block type discovery
//! - `complete` — post-traversal category folding and dependency tracking

mod blocks;
mod complete;
mod context;
mod members;
mod visit;


use crate::ast::TranslationUnit;
use crate::config::GeneratorConfig;
use crate::diagnostics::DiagnosticSink;
use crate::tree::MetabaseTree;

pub use visit::AstWalker;

/// Walk a translation unit into a completed tree.
pub fn walk(
    unit: &TranslationUnit,
    config: &GeneratorConfig,
    sink: &mut dyn DiagnosticSink,
) -> MetabaseTree {
    AstWalker::new(config, sink).walk(unit)
}
