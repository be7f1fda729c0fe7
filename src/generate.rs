//! One-call generation: declaration tree in, metabase document out.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::ast::TranslationUnit;
use crate::config::GeneratorConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::serialize::{Emitter, Metabase};
use crate::walker;

/// Walk `unit` and emit its metabase, stamped with the current time.
pub fn generate(
    unit: &TranslationUnit,
    config: &GeneratorConfig,
    sink: &mut dyn DiagnosticSink,
) -> Metabase {
    generate_at(unit, config, sink, Utc::now())
}

/// [`generate`] with an explicit `generated` timestamp.
pub fn generate_at(
    unit: &TranslationUnit,
    config: &GeneratorConfig,
    sink: &mut dyn DiagnosticSink,
    generated: DateTime<Utc>,
) -> Metabase {
    let tree = walker::walk(unit, config, sink);
    Emitter::new(&tree, config, sink).emit(generated)
}

/// Load a JSON or YAML declaration tree from `path` and generate from it.
///
/// Unreadable or unparseable input is the only error.
pub fn generate_file(
    path: impl AsRef<Path>,
    config: &GeneratorConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<Metabase> {
    let path = path.as_ref();
    let unit = TranslationUnit::load(path)?;
    tracing::debug!(path = %path.display(), "loaded declaration tree");
    Ok(generate(&unit, config, sink))
}
