//! End-to-end generator tests
//!
//! - Registry invariants (underscore names, anonymous records, blocks)
//! - Availability and framework filtering
//! - Document output, determinism and file loading

pub mod tests_filtering;
pub mod tests_loading;
pub mod tests_output;
pub mod tests_registry;
