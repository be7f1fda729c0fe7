//! # objc-metabase
//!
//! Metabase generator for Objective-C and C declarations: walks a
//! declaration tree produced by a libclang front-end and emits a versioned
//! JSON description of every declaration and its runtime type encoding.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate  → One-call entry point
//!   ↓
//! serialize → Document shapes, deferred resolution on emit, JSON output
//!   ↓
//! walker    → Declaration dispatch, block discovery, completion
//!   ↓
//! filter    → Availability gate, framework/location policy
//!   ↓
//! resolve   → Visit-time type resolution, deferred cross-references
//!   ↓
//! tree      → Definition arena and name-keyed registries
//!   ↓
//! model     → Definitions, types, arguments
//!   ↓
//! encoding  → Encoding tables and synthesis
//!   ↓
//! ast       → Front-end input model and loading
//!   ↓
//! base      → Primitives (Version, SourceLocation, spelling helpers)
//! ```
//!
//! ## Example
//!
//! ```
//! use metabase::ast::{AstType, CursorKind, Node, TranslationUnit, TypeKind};
//! use metabase::config::GeneratorConfig;
//! use metabase::diagnostics::Diagnostic;
//!
//! let var = Node::new(CursorKind::VarDecl, "kAnswer")
//!     .with_location("/work/App.h", 3)
//!     .with_type(AstType::new(TypeKind::Int, "int").with_encoding("i"));
//! let root = Node::new(CursorKind::TranslationUnit, "App.h").with_child(var);
//! let unit = TranslationUnit::new(root).unwrap();
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let metabase = metabase::generate(&unit, &GeneratorConfig::default(), &mut diagnostics);
//! assert_eq!(metabase.vars["kAnswer"].encoding, "i");
//! ```

// ============================================================================
// MODULES (dependency order: base → ast → encoding → model → tree → resolve
//          → filter → walker → serialize)
// ============================================================================

/// Foundation types: Version, SourceLocation, spelling helpers
pub mod base;

/// Front-end input model: cursors, types, loading
pub mod ast;

/// Generator options and filter policy
pub mod config;

/// Fatal errors
pub mod error;

/// Non-fatal diagnostics and sinks
pub mod diagnostics;

/// Encoding tables and synthesis
pub mod encoding;

/// Definition model
pub mod model;

/// Definition arena and registries
pub mod tree;

/// Type resolution, visit-time and deferred
pub mod resolve;

/// Availability and location filtering
pub mod filter;

/// Declaration tree walker
pub mod walker;

/// Document shapes and JSON output
pub mod serialize;

mod generate;

pub use config::{FilterPolicy, GeneratorConfig};
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{MetabaseError, Result};
pub use generate::{generate, generate_at, generate_file};
pub use serialize::Metabase;
pub use tree::MetabaseTree;
