//! Encoding tests
//!
//! - Primitive table and pointer/array synthesis
//! - Record encodings against a walked tree

pub mod tests_records;
pub mod tests_synthesis;
