//! Foundation types for the metabase generator.
//!
//! This module provides the small building blocks every other layer uses:
//! - [`Version`] - Normalized `major.minor.subminor` introduced-in versions
//! - [`SourceLocation`] - File/line of a declaration
//! - [`text`] - Spelling cleanup, camel-casing, template stripping
//! - [`spelling`] - Logos lexer over type spellings (block signatures)
//!
//! This module has NO dependencies on other metabase modules.

mod location;
pub mod spelling;
pub mod text;
mod version;

pub use location::SourceLocation;
pub use version::Version;
