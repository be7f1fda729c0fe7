//! Diagnostics — non-fatal problems found while walking the tree.
//!
//! Unsupported cursors, unresolvable encodings and name collisions never stop
//! a run. They are reported as [`Diagnostic`] values to a caller-supplied
//! [`DiagnosticSink`], so separate runs stay isolated.

use std::fmt;

use crate::base::SourceLocation;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Info,
}

/// A diagnostic message with optional location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Diagnostic code (e.g., "W0002").
    pub code: &'static str,
    /// The diagnostic message.
    pub message: String,
    /// Declaration being walked when the diagnostic was raised.
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new informational diagnostic.
    pub fn info(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code,
            message: message.into(),
            location: None,
        }
    }

    /// Attach the location of the declaration being walked.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        if !location.is_unknown() {
            self.location = Some(location);
        }
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes.
///
/// - **W0001-W0099**: Warnings (skipped cursors, unresolved types)
/// - **I0001-I0099**: Informational (registry policy decisions)
pub mod codes {
    /// Cursor kind not handled inside a declaration.
    pub const UNSUPPORTED_MEMBER: &str = "W0001";
    /// Type encoding could not be derived.
    pub const UNRESOLVED_ENCODING: &str = "W0002";
    /// Typedef reference could not be resolved to a root type.
    pub const UNHANDLED_TYPEDEF: &str = "W0003";
    /// Encoding synthesis hit its depth bound or a type cycle.
    pub const ENCODING_RECURSION: &str = "W0004";

    /// A definition replaced an earlier one with the same name.
    pub const DEFINITION_OVERWRITTEN: &str = "I0001";
}

// ============================================================================
// DIAGNOSTIC SINKS
// ============================================================================

/// Receives diagnostics raised during a run.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let location = diagnostic
            .location
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(
                code = diagnostic.code,
                location = %location,
                "{}",
                diagnostic.message
            ),
            Severity::Info => tracing::info!(
                code = diagnostic.code,
                location = %location,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Drops every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
